use std::time::Duration;
use thiserror::Error;
use ureq::Agent;

use super::event::Event;

/// Value sent in the Content-Type header. It names the JSON `data` field, not
/// the form encoding of the body; the API expects it this way.
pub const CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// The request could not be completed at the transport level
#[derive(Debug, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

impl From<ureq::Error> for TransportError {
    fn from(err: ureq::Error) -> Self {
        Self(err.to_string())
    }
}

/// Everything needed to send one publish request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundRequest {
    pub url: String,
    pub authorization: String,
    pub content_type: &'static str,
    pub body: String,
}

impl OutboundRequest {
    pub fn for_event(url: String, api_key: &str, event: &Event<'_>) -> Self {
        Self {
            url,
            authorization: api_key.to_string(),
            content_type: CONTENT_TYPE,
            body: event.form_body(),
        }
    }
}

/// Sends a POST and hands back the raw response bytes, whatever the HTTP status
#[cfg_attr(test, mockall::automock)]
pub trait Transport: Send + Sync {
    fn post(&self, request: &OutboundRequest) -> Result<Vec<u8>, TransportError>;
}

/// Blocking HTTP transport backed by a shared `ureq::Agent`
#[derive(Debug, Clone)]
pub struct HttpTransport {
    agent: Agent,
}

impl HttpTransport {
    pub fn new() -> Self {
        let config = Agent::config_builder().http_status_as_error(false).build();
        Self {
            agent: Agent::new_with_config(config),
        }
    }

    /// Bound the whole call (connect, send, receive) by `timeout`
    pub fn with_timeout(timeout: Duration) -> Self {
        let config = Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(timeout))
            .build();
        Self {
            agent: Agent::new_with_config(config),
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for HttpTransport {
    fn post(&self, request: &OutboundRequest) -> Result<Vec<u8>, TransportError> {
        log::debug!("POST {} ({} bytes)", request.url, request.body.len());

        let mut response = self
            .agent
            .post(&request.url)
            .header("Authorization", &request.authorization)
            .header("Content-Type", request.content_type)
            .send(request.body.as_bytes())?;

        log::debug!("{} responded with status {}", request.url, response.status());

        // Decoding is left to the caller; only I/O failures are transport errors
        let body = response.body_mut().read_to_vec()?;
        Ok(body)
    }
}
