use chrono::Utc;
use tracing::{debug, info, warn};

use crate::dispatch::forwarder::Forwarder;
use crate::dispatch::policy::should_forward;
use crate::models::outcome::{BatchSummary, DispatchOutcome};
use crate::models::queue::QueueBatch;
use crate::models::record::ApprovalRecord;

/// Runs one batch through decode → policy → forward, in arrival order.
///
/// Messages are independent: a failure at any stage is logged with the
/// message id and counted, and never stops the rest of the batch. The
/// batch as a whole always reports success to the invoker; callers
/// inspect the returned summary to see what actually happened.
pub struct BatchProcessor {
    forwarder: Forwarder,
}

impl BatchProcessor {
    pub fn new(forwarder: Forwarder) -> Self {
        Self { forwarder }
    }

    pub async fn process(&self, batch: &QueueBatch) -> BatchSummary {
        let mut summary = BatchSummary {
            received: batch.records.len(),
            ..Default::default()
        };

        for message in &batch.records {
            let record = match ApprovalRecord::decode(message.body.as_bytes()) {
                Ok(record) => record,
                Err(e) => {
                    warn!(
                        message_id = %message.message_id,
                        stage = "decode",
                        error = %e,
                        "failed to decode message body"
                    );
                    summary.record(DispatchOutcome::DecodeFailed);
                    continue;
                }
            };

            if !should_forward(&record) {
                debug!(
                    message_id = %message.message_id,
                    record_id = %record.id,
                    status = %record.status,
                    "status not approved, skipping"
                );
                summary.record(DispatchOutcome::Skipped);
                continue;
            }

            match self.forwarder.forward(&record).await {
                Ok(()) => {
                    info!(
                        message_id = %message.message_id,
                        record_id = %record.id,
                        action = %record.action,
                        "forwarded to destination"
                    );
                    summary.record(DispatchOutcome::ForwardedOk);
                }
                Err(e) => {
                    warn!(
                        message_id = %message.message_id,
                        record_id = %record.id,
                        stage = "forward",
                        error = %e,
                        "failed to forward record"
                    );
                    summary.record(DispatchOutcome::ForwardFailed(e.to_string()));
                }
            }
        }

        summary.completed_at = Utc::now();
        summary
    }
}
