//! Error types

/// A render pass could not run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The host surface has no 2D drawing context
    NoContext,
}

impl std::error::Error for RenderError {}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::NoContext => write!(f, "Surface has no 2D drawing context"),
        }
    }
}

/// An inbound message was rejected at the transport boundary
#[derive(Debug)]
pub enum ProtocolError {
    /// Payload text was not JSON
    Json(serde_json::Error),
    /// Event name is not one this track listens for
    UnknownEvent(String),
    /// Payload was JSON but not the expected shape
    InvalidPayload { event: String, source: serde_json::Error },
}

impl std::error::Error for ProtocolError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProtocolError::Json(e) => Some(e),
            ProtocolError::InvalidPayload { source, .. } => Some(source),
            ProtocolError::UnknownEvent(_) => None,
        }
    }
}

impl std::fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProtocolError::Json(e) => write!(f, "Inbound payload is not valid JSON: {}", e),
            ProtocolError::UnknownEvent(name) => write!(f, "Unknown inbound event '{}'", name),
            ProtocolError::InvalidPayload { event, source } => {
                write!(f, "Invalid payload for '{}': {}", event, source)
            }
        }
    }
}

impl From<serde_json::Error> for ProtocolError {
    fn from(e: serde_json::Error) -> Self {
        ProtocolError::Json(e)
    }
}
