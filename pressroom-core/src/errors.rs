use thiserror::Error;

/// Errors surfaced by the validation workspace.
///
/// Rule failures are never errors; they are plain-text messages pushed
/// onto the caller-owned [`crate::models::PublishErrors`]. This type
/// covers collaborator and configuration failures only.
#[derive(Debug, Error)]
pub enum PressroomError {
    #[error("{service} store error: {message}")]
    Store { service: String, message: String },

    #[error("invalid settings: {reason}")]
    InvalidConfig { reason: String },
}

impl PressroomError {
    /// Shorthand for a collaborator failure.
    pub fn store(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Store {
            service: service.into(),
            message: message.into(),
        }
    }
}

pub type PressroomResult<T> = Result<T, PressroomError>;
