use thiserror::Error;

/// A message body that does not parse into the expected approval shape.
///
/// Never fatal to the batch: the processor logs it and moves on to the
/// next message.
#[derive(Debug, Error)]
#[error("malformed message body: {0}")]
pub struct DecodeError(#[from] serde_json::Error);

/// An action value outside the closed POST/DELETE set.
#[derive(Debug, Error)]
#[error("unknown action: {0}")]
pub struct UnknownAction(pub String);

/// Everything that can go wrong forwarding one record downstream.
#[derive(Debug, Error)]
pub enum ForwardError {
    /// Destination endpoint unset or invalid. Checked before any I/O.
    #[error("destination endpoint is not configured")]
    Configuration,

    #[error(transparent)]
    UnknownAction(#[from] UnknownAction),

    /// Network-level failure: refused connection, DNS, timeout.
    #[error("request to destination failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Destination answered with anything other than 200. The response
    /// body is not inspected.
    #[error("unexpected status code: {status}")]
    UnexpectedStatus { status: reqwest::StatusCode },
}
