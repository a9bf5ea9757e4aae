//! The per-batch processing core: status gate, downstream forwarding,
//! and the batch loop that isolates per-message failures.

pub mod forwarder;
pub mod policy;
pub mod processor;
