//! Error types for the Vigil agent

use thiserror::Error;

/// Result type alias for agent operations
pub type Result<T> = std::result::Result<T, AgentError>;

/// Errors that can occur when building or running the agent
#[derive(Debug, Error)]
pub enum AgentError {
    /// Configuration is missing or invalid
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Database operation failed
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Could not reach the database within the configured retry budget
    #[error("Connection failed after {attempts} attempt(s): {source}")]
    ConnectExhausted {
        /// Number of attempts made before giving up
        attempts: u32,
        /// Last error returned by the database
        source: sqlx::Error,
    },
}

impl AgentError {
    /// Creates a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Check if this error is a connectivity failure
    pub fn is_connect_failure(&self) -> bool {
        matches!(self, Self::ConnectExhausted { .. })
    }
}
