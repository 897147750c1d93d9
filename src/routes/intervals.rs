use axum::{extract::State, routing::post, Json, Router};
use chrono::{Local, NaiveDate};
use serde_json::Value;

use crate::config::IntervalsConfig;
use crate::error::{AppError, SourceError};
use crate::pipeline::normalize;
use crate::routes::activities::{store_batch, IngestResponse};
use crate::state::AppState;
use crate::types::activity::ProviderPayload;

const PROVIDER: &str = "Intervals.icu";

pub fn router() -> Router<AppState> {
    Router::new().route("/api/intervals/sync", post(sync))
}

async fn sync(State(state): State<AppState>) -> Result<Json<IngestResponse>, AppError> {
    let today = Local::now().date_naive();
    let activities = fetch_activities(&state.config().intervals, today).await?;

    tracing::info!("Fetched {} activities from {}", activities.len(), PROVIDER);

    let batch = normalize::normalize(&ProviderPayload::Intervals(activities));
    Ok(Json(store_batch(&state, batch)))
}

/// Full activity history from `oldest` through `newest`.
pub async fn fetch_activities(
    config: &IntervalsConfig,
    newest: NaiveDate,
) -> Result<Vec<Value>, SourceError> {
    let athlete_id = config
        .athlete_id
        .as_deref()
        .ok_or(SourceError::MissingCredentials("INTERVALS_ATHLETE_ID"))?;
    let api_key = config
        .api_key
        .as_deref()
        .ok_or(SourceError::MissingCredentials("INTERVALS_API_KEY"))?;

    let url = format!(
        "{}/api/v1/athlete/{}/activities",
        config.base_url.trim_end_matches('/'),
        athlete_id
    );
    let newest = newest.format("%Y-%m-%d").to_string();

    let client = reqwest::Client::new();
    let response = client
        .get(&url)
        .basic_auth("API_KEY", Some(api_key))
        .query(&[("oldest", config.oldest.as_str()), ("newest", newest.as_str())])
        .send()
        .await
        .map_err(|err| SourceError::Request {
            provider: PROVIDER,
            message: err.to_string(),
        })?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(SourceError::Status {
            provider: PROVIDER,
            status: status.as_u16(),
            body,
        });
    }

    response
        .json::<Vec<Value>>()
        .await
        .map_err(|err| SourceError::InvalidResponse {
            provider: PROVIDER,
            message: err.to_string(),
        })
}
