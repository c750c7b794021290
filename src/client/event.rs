use serde::Serialize;
use std::fmt;

use crate::error::{Error, Result};

/// A single event, with its payload already serialized to JSON
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event<'a> {
    pub event_type: &'a str,
    pub data: String,
}

impl<'a> Event<'a> {
    pub fn new<T: Serialize + ?Sized>(event_type: &'a str, data: &T) -> Result<Self> {
        let data = serde_json::to_string(data).map_err(|e| Error::Publish(format!("Could not serialize event data: {}", e)))?;
        Ok(Self { event_type, data })
    }

    /// `type=<type>&data=<json>`, form-urlencoded
    pub fn form_body(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .append_pair("type", self.event_type)
            .append_pair("data", &self.data)
            .finish()
    }
}

impl fmt::Display for Event<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{type: {}, data: {}}}", self.event_type, self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_event_serializes_data() {
        let event = Event::new("OrderPosted", &serde_json::json!({"order_id": 10})).unwrap();
        assert_eq!(event.event_type, "OrderPosted");
        assert_eq!(event.data, r#"{"order_id":10}"#);
    }

    #[test]
    fn test_form_body_encodes_json_field() {
        let event = Event::new("ProfileCreated", &serde_json::json!({"name": "John Doe"})).unwrap();
        assert_eq!(
            event.form_body(),
            "type=ProfileCreated&data=%7B%22name%22%3A%22John+Doe%22%7D"
        );

        let decoded: HashMap<String, String> = form_urlencoded::parse(event.form_body().as_bytes())
            .into_owned()
            .collect();
        assert_eq!(decoded["type"], "ProfileCreated");
        assert_eq!(decoded["data"], r#"{"name":"John Doe"}"#);
    }

    #[test]
    fn test_unserializable_data_is_publish_error() {
        let mut data = HashMap::new();
        data.insert((1, 2), "tuple keys are not valid JSON object keys");

        let err = Event::new("Broken", &data).unwrap_err();
        assert!(matches!(err, Error::Publish(_)));
        assert!(err.message().starts_with("Could not serialize event data"));
    }

    #[test]
    fn test_display_for_log_params() {
        let event = Event::new("OrderPosted", &serde_json::json!({"amount": 3000})).unwrap();
        assert_eq!(event.to_string(), r#"{type: OrderPosted, data: {"amount":3000}}"#);
    }
}
