use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for traversal dispatch and transport
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum GremlinError {
    /// Neither an explicit nor a configured send handler was available.
    #[error("No send handler provided and none configured")]
    NoSendHandler,

    #[error("Transport: {0}")]
    Transport(String),

    #[error("Serialization: {0}")]
    Serialization(String),

    // Catch-all for handler errors like anyhow
    #[error("Other: {0}")]
    Other(String),
}

impl From<anyhow::Error> for GremlinError {
    fn from(err: anyhow::Error) -> Self {
        GremlinError::Other(err.to_string())
    }
}

impl From<reqwest::Error> for GremlinError {
    fn from(err: reqwest::Error) -> Self {
        GremlinError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for GremlinError {
    fn from(err: serde_json::Error) -> Self {
        GremlinError::Serialization(err.to_string())
    }
}
