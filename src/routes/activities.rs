use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::Serialize;
use uuid::Uuid;

use crate::pipeline::normalize::{self, NormalizedBatch, SkippedItem};
use crate::state::{AppState, StoredBatch};
use crate::types::activity::{Provider, ProviderPayload};

pub fn router() -> Router<AppState> {
    Router::new().route("/api/activities", post(ingest))
}

#[derive(Debug, Serialize)]
pub struct IngestResponse {
    batch_id: String,
    provider: Provider,
    accepted: usize,
    skipped: Vec<SkippedItem>,
}

async fn ingest(
    State(state): State<AppState>,
    Json(payload): Json<ProviderPayload>,
) -> Json<IngestResponse> {
    let batch = normalize::normalize(&payload);
    Json(store_batch(&state, batch))
}

/// Stores a freshly normalized refresh under a new batch id.
pub(crate) fn store_batch(state: &AppState, batch: NormalizedBatch) -> IngestResponse {
    let batch_id = Uuid::new_v4().to_string();
    let accepted = batch.records.len();

    tracing::info!(
        "Stored {} batch {} ({} accepted, {} skipped)",
        batch.provider.display_name(),
        batch_id,
        accepted,
        batch.skipped.len()
    );

    state.insert(
        batch_id.clone(),
        StoredBatch {
            provider: batch.provider,
            records: Arc::new(batch.records),
        },
    );

    IngestResponse {
        batch_id,
        provider: batch.provider,
        accepted,
        skipped: batch.skipped,
    }
}
