//! Client for publishing events to the EventifyPro API
//!
//! ```no_run
//! use eventify::Client;
//!
//! let client = Client::builder().api_key("personal_api_key").raise_errors(true).build()?;
//! client.publish("OrderPosted", &serde_json::json!({"order_id": 10, "amount": 3000}))?;
//! # Ok::<(), eventify::Error>(())
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod logger;

pub use client::{Client, ClientBuilder, ErrorMode, Event, HttpTransport, OutboundRequest, Transport, TransportError};
pub use error::{Error, Result};
pub use logger::{LogFacadeLogger, Logger, StdoutLogger};
