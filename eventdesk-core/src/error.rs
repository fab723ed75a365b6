//! Error types for eventdesk.

use thiserror::Error;

use crate::event::EventId;
use crate::validate::ValidationReport;

/// Errors that can occur in eventdesk operations.
#[derive(Error, Debug)]
pub enum EventDeskError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Event not found: {0}")]
    NotFound(EventId),

    #[error("Invalid event: {0}")]
    Validation(ValidationReport),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<reqwest::Error> for EventDeskError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            EventDeskError::Serialization(err.to_string())
        } else {
            EventDeskError::Transport(err.to_string())
        }
    }
}

/// Result type alias for eventdesk operations.
pub type EventDeskResult<T> = Result<T, EventDeskError>;
