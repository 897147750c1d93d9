use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::pipeline::{aggregate, present};
use crate::state::AppState;
use crate::types::activity::Provider;
use crate::types::stats::StatsReport;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/stats/:batch_id", get(stats))
}

#[derive(Debug, Deserialize)]
struct StatsQuery {
    year: Option<i32>,
}

#[derive(Debug, Serialize)]
struct StatsResponse {
    batch_id: String,
    provider: Provider,
    report: StatsReport,
    dashboard: present::Dashboard,
}

async fn stats(
    State(state): State<AppState>,
    Path(batch_id): Path<String>,
    Query(query): Query<StatsQuery>,
) -> Result<Json<StatsResponse>, AppError> {
    let batch = state
        .get(&batch_id)
        .ok_or_else(|| AppError::NotFound(batch_id.clone()))?;

    let year = query.year.unwrap_or_else(|| Local::now().year());
    let report = aggregate::aggregate(&batch.records, year);
    let dashboard = present::present(&report);

    tracing::debug!(
        "Aggregated batch {} for {} ({} records, {} months)",
        batch_id,
        year,
        batch.records.len(),
        report.months.len()
    );

    Ok(Json(StatsResponse {
        batch_id,
        provider: batch.provider,
        report,
        dashboard,
    }))
}
