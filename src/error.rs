//! Error taxonomy for the EventifyPro client

use thiserror::Error;

pub const MISSING_API_KEY: &str = "Please provide api_key param or set EVENTIFY_PRO_API_KEY environment variable";
pub const UNPROCESSABLE_RESPONSE: &str = "Could not process response from EventifyPro";
pub const SERVICE_UNAVAILABLE: &str = "EventifyPro is currently unavailable";

/// Errors surfaced by the client
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The client cannot be used as configured (missing credential)
    #[error("{0}")]
    Configuration(String),

    /// The API rejected the event, or its response could not be understood
    #[error("{0}")]
    Publish(String),

    /// The request never completed (timeout, refused connection, DNS failure, ...)
    #[error("{0}")]
    ServiceUnavailable(String),
}

impl Error {
    /// The message carried by the error, without any prefix
    pub fn message(&self) -> &str {
        match self {
            Error::Configuration(msg) | Error::Publish(msg) | Error::ServiceUnavailable(msg) => msg,
        }
    }

    /// Whether retrying the same call later could succeed
    pub fn is_transient(&self) -> bool {
        matches!(self, Error::ServiceUnavailable(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_error_displays_message_verbatim() {
        let err = Error::Publish("Invalid API key".to_string());
        assert_eq!(err.to_string(), "Invalid API key");
        assert_eq!(err.message(), "Invalid API key");
    }

    #[test]
    fn test_only_service_unavailable_is_transient() {
        assert!(Error::ServiceUnavailable(SERVICE_UNAVAILABLE.to_string()).is_transient());
        assert!(!Error::Publish(UNPROCESSABLE_RESPONSE.to_string()).is_transient());
        assert!(!Error::Configuration(MISSING_API_KEY.to_string()).is_transient());
    }
}
