use serde::Serialize;
use std::fmt;
use std::sync::Arc;

use super::event::Event;
use super::transport::{HttpTransport, OutboundRequest, Transport};
use super::{DEFAULT_BASE_URI, EVENTS_ENDPOINT};
use crate::config::{API_KEY_ENV, resolve_api_key};
use crate::error::{Error, Result, SERVICE_UNAVAILABLE, UNPROCESSABLE_RESPONSE};
use crate::logger::{Logger, StdoutLogger};

const LOG_PREFIX: &str = "[EVENTIFY_PRO]";

/// How `publish` surfaces failures
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorMode {
    /// Failures are logged and `publish` returns `Ok(false)`
    #[default]
    Swallow,
    /// Failures are logged and returned as `Err`
    Raise,
}

/// Publishes events to the EventifyPro API.
///
/// ```no_run
/// let client = eventify::Client::new(Some("personal_api_key"))?;
/// client.publish("OrderPosted", &serde_json::json!({"order_id": 10, "amount": 3000}))?;
/// # Ok::<(), eventify::Error>(())
/// ```
#[derive(Clone)]
pub struct Client {
    api_key: String,
    base_uri: String,
    error_mode: ErrorMode,
    log_successes: bool,
    logger: Arc<dyn Logger>,
    transport: Arc<dyn Transport>,
}

impl Client {
    /// Client with default settings; `None` reads EVENTIFY_PRO_API_KEY
    pub fn new(api_key: Option<&str>) -> Result<Self> {
        let mut builder = Self::builder();
        if let Some(key) = api_key {
            builder = builder.api_key(key);
        }
        builder.build()
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    pub fn error_mode(&self) -> ErrorMode {
        self.error_mode
    }

    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Publish one event.
    ///
    /// Returns `Ok(true)` once the API accepted the event. On failure the
    /// outcome depends on the [`ErrorMode`]: `Ok(false)` when swallowing,
    /// the classified error when raising.
    pub fn publish<T: Serialize + ?Sized>(&self, event_type: &str, data: &T) -> Result<bool> {
        let outcome = match Event::new(event_type, data) {
            Ok(event) => {
                let result = self.send(&event);
                self.log_outcome(&event, result.as_ref().err());
                result
            }
            Err(e) => {
                self.log_outcome(&format!("{{type: {}}}", event_type), Some(&e));
                Err(e)
            }
        };

        match outcome {
            Ok(()) => Ok(true),
            Err(e) => match self.error_mode {
                ErrorMode::Swallow => Ok(false),
                ErrorMode::Raise => Err(e),
            },
        }
    }

    fn send(&self, event: &Event<'_>) -> Result<()> {
        let url = format!("{}/{}", self.base_uri, EVENTS_ENDPOINT);
        let request = OutboundRequest::for_event(url, &self.api_key, event);

        let body = self.transport.post(&request).map_err(|e| {
            log::debug!("Transport failure publishing {}: {}", event.event_type, e);
            Error::ServiceUnavailable(SERVICE_UNAVAILABLE.to_string())
        })?;

        classify_response(&body)
    }

    fn log_outcome(&self, params: &dyn fmt::Display, error: Option<&Error>) {
        let message = match error {
            Some(e) => format!("{} #publish call returned error: {}\nParams: {}", LOG_PREFIX, e.message(), params),
            None if self.log_successes => format!("{} #publish call succeeded\nParams: {}", LOG_PREFIX, params),
            None => return,
        };
        self.logger.info(&message);
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("api_key", &crate::config::redact(&self.api_key))
            .field("base_uri", &self.base_uri)
            .field("error_mode", &self.error_mode)
            .field("log_successes", &self.log_successes)
            .finish_non_exhaustive()
    }
}

/// Turn a response body into the publish outcome
fn classify_response(body: &[u8]) -> Result<()> {
    let envelope: serde_json::Value = serde_json::from_slice(body).map_err(|e| {
        log::debug!("Unparseable response body: {}", e);
        Error::Publish(UNPROCESSABLE_RESPONSE.to_string())
    })?;

    let Some(fields) = envelope.as_object() else {
        return Err(Error::Publish(UNPROCESSABLE_RESPONSE.to_string()));
    };

    // Any present value other than null or "" is an API error; non-strings are reported as JSON text
    match fields.get("error_message") {
        None | Some(serde_json::Value::Null) => Ok(()),
        Some(serde_json::Value::String(message)) if message.is_empty() => Ok(()),
        Some(serde_json::Value::String(message)) => Err(Error::Publish(message.clone())),
        Some(other) => Err(Error::Publish(other.to_string())),
    }
}

/// Builder for [`Client`]
#[derive(Default)]
pub struct ClientBuilder {
    api_key: Option<String>,
    base_uri: Option<String>,
    error_mode: ErrorMode,
    log_successes: Option<bool>,
    logger: Option<Arc<dyn Logger>>,
    transport: Option<Arc<dyn Transport>>,
}

impl ClientBuilder {
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn raise_errors(mut self, raise: bool) -> Self {
        self.error_mode = if raise { ErrorMode::Raise } else { ErrorMode::Swallow };
        self
    }

    pub fn error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    pub fn logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Also log successful publishes (default), or only failures
    pub fn log_successes(mut self, enabled: bool) -> Self {
        self.log_successes = Some(enabled);
        self
    }

    pub fn base_uri(mut self, base_uri: impl Into<String>) -> Self {
        self.base_uri = Some(base_uri.into());
        self
    }

    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Resolve the credential and build the client; fails without an API key
    pub fn build(self) -> Result<Client> {
        let api_key = resolve_api_key(self.api_key, std::env::var(API_KEY_ENV).ok())?;

        let base_uri = self
            .base_uri
            .unwrap_or_else(|| DEFAULT_BASE_URI.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Client {
            api_key,
            base_uri,
            error_mode: self.error_mode,
            log_successes: self.log_successes.unwrap_or(true),
            logger: self.logger.unwrap_or_else(|| Arc::new(StdoutLogger) as Arc<dyn Logger>),
            transport: self
                .transport
                .unwrap_or_else(|| Arc::new(HttpTransport::new()) as Arc<dyn Transport>),
        })
    }
}
