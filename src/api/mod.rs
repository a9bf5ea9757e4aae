//! Batch ingress — the HTTP surface standing in for the queue trigger.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::dispatch::processor::BatchProcessor;
use crate::models::outcome::BatchSummary;
use crate::models::queue::QueueBatch;

/// Shared application state passed to handlers.
pub struct AppState {
    pub processor: BatchProcessor,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health endpoints (no auth)
        .route("/healthz", get(|| async { "ok" }))
        .route("/readyz", get(|| async { "ok" }))
        .route("/v1/batches", post(ingest_batch))
        .with_state(state)
}

/// Accepts one queue-event envelope and runs it through the processor.
///
/// Always answers 200 for a well-formed envelope: per-message failures
/// surface only in the summary and in logs, never as a batch failure. A
/// malformed envelope is the trigger's fault, not a message's, and is the
/// one case that gets a 4xx (axum's JSON rejection).
async fn ingest_batch(
    State(state): State<Arc<AppState>>,
    Json(batch): Json<QueueBatch>,
) -> Json<BatchSummary> {
    let summary = state.processor.process(&batch).await;
    Json(summary)
}
