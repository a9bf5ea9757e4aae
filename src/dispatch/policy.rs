use crate::models::record::ApprovalRecord;

/// Status literal that triggers forwarding. Compared case-sensitively.
const STATUS_APPROVED: &str = "approved";

/// The status gate: forwarding happens only for approved records. Every
/// other value, including empty or unknown statuses, means "do not
/// forward" and is not an error.
pub fn should_forward(record: &ApprovalRecord) -> bool {
    record.status == STATUS_APPROVED
}
