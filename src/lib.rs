//! Approval event relay — library crate for integration testing.
//!
//! Re-exports modules needed by integration tests in `tests/`.

pub mod api;
pub mod config;
pub mod dispatch;
pub mod errors;
pub mod models;
