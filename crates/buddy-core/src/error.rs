//! Error Types

use thiserror::Error;

/// Result type alias for conversation operations
pub type Result<T> = std::result::Result<T, BuddyError>;

/// Conversation error types
#[derive(Error, Debug)]
pub enum BuddyError {
    /// Reading input or writing a reply failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),

    /// Message used after the session already ended
    #[error("Session error: {0}")]
    Session(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BuddyError {
    /// Convert to a user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            Self::Io(_) => "I lost the connection to your terminal.".into(),
            Self::Config(msg) => format!("I'm not configured correctly: {msg}"),
            Self::Session(_) => "This conversation has already ended.".into(),
            Self::Json(_) => "An unexpected error occurred.".into(),
        }
    }
}
