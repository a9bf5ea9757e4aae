use chrono::{DateTime, Utc};
use serde::Serialize;

/// Terminal state of one message. Exists for the summary and for logs;
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "outcome", content = "detail")]
pub enum DispatchOutcome {
    /// Body did not decode into an approval record.
    DecodeFailed,
    /// Status was not `"approved"`; nothing was sent.
    Skipped,
    ForwardedOk,
    /// Forwarding failed; carries the error detail for the caller.
    ForwardFailed(String),
}

/// Aggregate result of one batch, returned to the invoker.
///
/// Per-message failures never fail the batch; they only show up here and
/// in the logs. Callers and tests assert on these counts instead of
/// capturing log output.
#[derive(Debug, Default, Serialize)]
pub struct BatchSummary {
    pub received: usize,
    pub decode_failed: usize,
    pub skipped: usize,
    pub forwarded: usize,
    pub forward_failed: usize,
    /// Per-message outcomes in arrival order.
    pub outcomes: Vec<DispatchOutcome>,
    pub completed_at: DateTime<Utc>,
}

impl BatchSummary {
    pub fn record(&mut self, outcome: DispatchOutcome) {
        match outcome {
            DispatchOutcome::DecodeFailed => self.decode_failed += 1,
            DispatchOutcome::Skipped => self.skipped += 1,
            DispatchOutcome::ForwardedOk => self.forwarded += 1,
            DispatchOutcome::ForwardFailed(_) => self.forward_failed += 1,
        }
        self.outcomes.push(outcome);
    }
}
