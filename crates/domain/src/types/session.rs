//! Session types
//!
//! The session is an explicit injected value with a well-defined lifecycle
//! (created at login, dropped at logout). There is no module-level session
//! singleton; everything that needs identity or a token receives a
//! `Session` through its constructor.

use serde::{Deserialize, Serialize};

/// Authenticated session for one user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Identity of the signed-in user.
    pub user_id: String,
    /// Bearer token for the remote collection, when one was issued.
    ///
    /// Requests proceed unauthenticated when absent; the token is always
    /// attached when present.
    pub access_token: Option<String>,
}

impl Session {
    /// Create a session for `user_id` with no token.
    pub fn anonymous(user_id: impl Into<String>) -> Self {
        Self { user_id: user_id.into(), access_token: None }
    }

    /// Create a session with a bearer token.
    pub fn with_token(user_id: impl Into<String>, token: impl Into<String>) -> Self {
        Self { user_id: user_id.into(), access_token: Some(token.into()) }
    }
}
