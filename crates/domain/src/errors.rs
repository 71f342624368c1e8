//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for PostPilot
///
/// The remote collection does not distinguish error kinds, so "not found"
/// responses surface as [`PostPilotError::Fetch`] with the response body as
/// diagnostic text.
#[derive(Error, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum PostPilotError {
    /// A required field was missing or invalid before any network call.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Transport failure or non-success response from the remote collection.
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// Configuration could not be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Token storage or session problem.
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Unexpected internal failure.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for PostPilot operations
pub type Result<T> = std::result::Result<T, PostPilotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_serialize_with_tagged_representation() {
        let err = PostPilotError::Validation("content is required".into());
        let json = serde_json::to_value(&err).expect("serializes");
        assert_eq!(json["type"], "Validation");
        assert_eq!(json["message"], "content is required");
    }

    #[test]
    fn display_includes_diagnostic_text() {
        let err = PostPilotError::Fetch("status 500: boom".into());
        assert_eq!(err.to_string(), "Fetch error: status 500: boom");
    }
}
