//! WebSocket message types: envelope, commands, and events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Top-level WebSocket message envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WsMessage {
    /// Client-provided ID for requests; server-generated for events.
    pub id: String,
    /// Message type discriminator.
    #[serde(rename = "type")]
    pub msg_type: WsMessageType,
    /// ISO-8601 timestamp.
    pub timestamp: DateTime<Utc>,
    /// Variant-specific payload.
    pub payload: serde_json::Value,
}

impl WsMessage {
    /// Builds a server-originated message answering request `id`.
    #[must_use]
    pub fn reply(id: String, msg_type: WsMessageType, payload: serde_json::Value) -> Self {
        Self {
            id,
            msg_type,
            timestamp: Utc::now(),
            payload,
        }
    }

    /// Builds an error message with a numeric code.
    #[must_use]
    pub fn error(id: String, code: u32, message: &str) -> Self {
        Self::reply(
            id,
            WsMessageType::Error,
            serde_json::json!({ "code": code, "message": message }),
        )
    }
}

/// Discriminator for WebSocket message types.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WsMessageType {
    /// Client → Server command.
    Command,
    /// Server → Client response to a command.
    Response,
    /// Server → Client broadcast event.
    Event,
    /// Server → Client error.
    Error,
}

/// Commands that a client can send in the payload of a `command` message.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum WsCommand {
    /// Subscribe to events for specific warehouses. `"*"` means all.
    Subscribe {
        /// Warehouse names.
        warehouses: Vec<String>,
    },
    /// Unsubscribe from events for specific warehouses.
    Unsubscribe {
        /// Warehouse names.
        warehouses: Vec<String>,
    },
    /// Fetch the current state of one warehouse.
    GetState {
        /// Warehouse name.
        warehouse: String,
    },
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn subscribe_command_parses() {
        let payload = serde_json::json!({
            "command": "subscribe",
            "warehouses": ["Main", "*"],
        });
        let Ok(WsCommand::Subscribe { warehouses }) = serde_json::from_value(payload) else {
            panic!("expected subscribe");
        };
        assert_eq!(warehouses, vec!["Main", "*"]);
    }

    #[test]
    fn get_state_command_parses() {
        let payload = serde_json::json!({ "command": "get_state", "warehouse": "Main" });
        let Ok(WsCommand::GetState { warehouse }) = serde_json::from_value(payload) else {
            panic!("expected get_state");
        };
        assert_eq!(warehouse, "Main");
    }

    #[test]
    fn unknown_command_fails() {
        let payload = serde_json::json!({ "command": "drain" });
        assert!(serde_json::from_value::<WsCommand>(payload).is_err());
    }

    #[test]
    fn envelope_type_is_renamed() {
        let msg = WsMessage::error("abc".to_string(), 400, "bad");
        let json = serde_json::to_value(&msg).unwrap_or_default();
        assert_eq!(json["type"], "error");
        assert_eq!(json["payload"]["code"], 400);
    }
}
