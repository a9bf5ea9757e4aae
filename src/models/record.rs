use serde::Deserialize;
use std::str::FromStr;

use crate::errors::{DecodeError, UnknownAction};

/// One decoded approval event.
///
/// Immutable once decoded. `data` is carried through but never transmitted
/// downstream; forwarded requests have an empty body.
#[derive(Debug, Clone, Deserialize)]
pub struct ApprovalRecord {
    #[serde(default)]
    pub id: String,
    /// Approval state. Only the literal `"approved"` triggers forwarding.
    #[serde(default)]
    pub status: String,
    /// Requested HTTP verb intent, `"POST"` or `"DELETE"`.
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub data: SubjectData,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubjectData {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl ApprovalRecord {
    /// Decode a raw message body. Unknown extra fields are ignored;
    /// missing fields default to empty strings.
    pub fn decode(body: &[u8]) -> Result<Self, DecodeError> {
        Ok(serde_json::from_slice(body)?)
    }
}

/// The HTTP verb a record requests. Closed set: anything outside it is
/// rejected before any network I/O.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Post,
    Delete,
}

impl Action {
    pub fn method(self) -> reqwest::Method {
        match self {
            Action::Post => reqwest::Method::POST,
            Action::Delete => reqwest::Method::DELETE,
        }
    }
}

impl FromStr for Action {
    type Err = UnknownAction;

    // Case-sensitive on purpose: the upstream contract sends the verb
    // uppercased, and a loose match would let typos through.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "POST" => Ok(Action::Post),
            "DELETE" => Ok(Action::Delete),
            other => Err(UnknownAction(other.to_string())),
        }
    }
}
