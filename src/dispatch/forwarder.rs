use std::time::Duration;

use reqwest::StatusCode;
use url::Url;

use crate::config::Config;
use crate::errors::ForwardError;
use crate::models::record::{Action, ApprovalRecord};

/// Issues the downstream call for one approved record.
///
/// Holds the shared HTTP client and the resolved destination endpoint;
/// both are fixed for the process lifetime and carry no per-message
/// state. No retries happen here: redelivery belongs to the queue's
/// redrive policy, not to the relay.
#[derive(Clone)]
pub struct Forwarder {
    client: reqwest::Client,
    endpoint: Option<Url>,
}

impl Forwarder {
    pub fn new(endpoint: Option<&str>, timeout: Duration) -> Self {
        let endpoint = endpoint.and_then(|raw| match Url::parse(raw) {
            Ok(url) => Some(url),
            Err(e) => {
                tracing::warn!(
                    endpoint = raw,
                    error = %e,
                    "destination endpoint is not a valid URL, forwarding disabled"
                );
                None
            }
        });

        Self {
            client: reqwest::Client::builder()
                .use_rustls_tls()
                .timeout(timeout)
                .connect_timeout(Duration::from_secs(5))
                .build()
                .expect("failed to build forwarder HTTP client"),
            endpoint,
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(
            cfg.endpoint_url.as_deref(),
            Duration::from_secs(cfg.http_timeout_secs),
        )
    }

    /// Send exactly one empty-bodied request for `record`.
    ///
    /// The action is parsed and the endpoint resolved before any network
    /// I/O, so an unknown action or a missing endpoint costs zero calls.
    /// Only HTTP 200 counts as success; every other code fails with the
    /// observed status and the response body is left unread.
    pub async fn forward(&self, record: &ApprovalRecord) -> Result<(), ForwardError> {
        let action: Action = record.action.parse()?;
        let endpoint = self.endpoint.as_ref().ok_or(ForwardError::Configuration)?;

        let resp = self
            .client
            .request(action.method(), endpoint.clone())
            .send()
            .await?;

        match resp.status() {
            StatusCode::OK => Ok(()),
            status => Err(ForwardError::UnexpectedStatus { status }),
        }
    }
}
