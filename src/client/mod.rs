//! EventifyPro API client
//!
//! Publishing one event is a single POST to `<base_uri>/events`:
//! - [`Event`] - the serialized event and its form body
//! - [`Transport`] - sends the request, [`HttpTransport`] does it over `ureq`
//! - [`Client`] - classifies the response and applies the raise/swallow policy

pub mod event;
pub mod publisher;
pub mod transport;

pub use event::Event;
pub use publisher::{Client, ClientBuilder, ErrorMode};
pub use transport::{HttpTransport, OutboundRequest, Transport, TransportError};

/// Production API root
pub const DEFAULT_BASE_URI: &str = "http://api.eventify.pro/v1";

/// Path of the publish endpoint, relative to the base URI
pub const EVENTS_ENDPOINT: &str = "events";
