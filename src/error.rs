use crate::tools::ToolId;
use thiserror::Error;

/// The one failure a generation call can produce.
///
/// Carries whatever message the underlying service reported. Display prints
/// that message and nothing else so callers can show it as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct GenerationError {
    message: String,
}

impl GenerationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<reqwest::Error> for GenerationError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            GenerationError::new(format!("Request timeout: {}", err))
        } else {
            GenerationError::new(format!("Network error: {}", err))
        }
    }
}

impl From<serde_json::Error> for GenerationError {
    fn from(err: serde_json::Error) -> Self {
        GenerationError::new(format!("Malformed response: {}", err))
    }
}

#[derive(Debug, Error)]
pub enum CreatorError {
    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Input for '{actual}' cannot be used with tool '{expected}'")]
    ToolMismatch { expected: ToolId, actual: ToolId },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CreatorError>;
