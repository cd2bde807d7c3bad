//! Messages crossing the transport boundary
//!
//! Outbound intents are pushed to the host channel as `(event, payload)`
//! pairs; inbound pushes are decoded and checked here before they reach the
//! controller.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ProtocolError;
use crate::race::GameState;
use crate::settings::Settings;

/// Which input produced a scoring press
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "lowercase")]
pub enum ScoreIntent {
    /// Physical key, as reported by the browser
    Keyboard { key: String, code: String },
    Touch,
}

/// Client to server
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outbound {
    /// Sent once at mount so the server starts pushing snapshots
    Ready,
    ScorePoint(ScoreIntent),
}

impl Outbound {
    /// Wire event name under the given settings
    pub fn event_name<'a>(&self, settings: &'a Settings) -> &'a str {
        match self {
            Outbound::Ready => &settings.ready_event,
            Outbound::ScorePoint(_) => &settings.score_event,
        }
    }

    pub fn payload(&self) -> Value {
        match self {
            Outbound::Ready => Value::Object(Default::default()),
            // Plain data enum; conversion to a Value cannot fail.
            Outbound::ScorePoint(intent) => serde_json::to_value(intent).unwrap_or(Value::Null),
        }
    }
}

/// Server to client
#[derive(Debug, Clone, PartialEq)]
pub enum Inbound {
    GameUpdated(GameState),
}

impl Inbound {
    /// Decode an already-parsed push
    pub fn decode(event: &str, payload: Value, settings: &Settings) -> Result<Self, ProtocolError> {
        if event != settings.update_event {
            return Err(ProtocolError::UnknownEvent(event.to_string()));
        }

        // Some hosts wrap the snapshot as {"game": {...}}.
        let payload = match payload {
            Value::Object(mut map) if map.len() == 1 && map.contains_key("game") => {
                map.remove("game").unwrap_or(Value::Null)
            }
            other => other,
        };

        serde_json::from_value(payload)
            .map(Inbound::GameUpdated)
            .map_err(|source| ProtocolError::InvalidPayload {
                event: event.to_string(),
                source,
            })
    }

    /// Decode a push whose payload is still JSON text
    pub fn decode_str(event: &str, payload: &str, settings: &Settings) -> Result<Self, ProtocolError> {
        let value: Value = serde_json::from_str(payload)?;
        Self::decode(event, value, settings)
    }
}

/// Host-provided channel to the server
pub trait Transport {
    fn push(&mut self, event: &str, payload: Value);
}
