//! Bearer-token providers
//!
//! The client attaches a bearer token whenever one is available and sends
//! the request unauthenticated otherwise. Historically some call sites
//! attached the stored `auth_token` and others did not; the provider seam
//! normalizes that to always-when-available.

use async_trait::async_trait;
use keyring::Entry;
use postpilot_domain::constants::TOKEN_ACCOUNT_NAME;
use postpilot_domain::{PostPilotError, Result, Session};
use tracing::debug;

/// Trait for providing access tokens
///
/// This trait allows dependency injection and testing with mock providers.
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    /// Get the current bearer token, or `None` when the user has none.
    async fn access_token(&self) -> Result<Option<String>>;
}

/// Token provider backed by the injected session.
///
/// The session carries the token issued at login; no storage lookup is
/// performed per request.
pub struct SessionTokenProvider {
    token: Option<String>,
}

impl SessionTokenProvider {
    /// Capture the token from a session.
    pub fn new(session: &Session) -> Self {
        Self { token: session.access_token.clone() }
    }
}

#[async_trait]
impl AccessTokenProvider for SessionTokenProvider {
    async fn access_token(&self) -> Result<Option<String>> {
        Ok(self.token.clone())
    }
}

/// Token provider reading the persisted `auth_token` from the OS keychain.
pub struct StoredTokenProvider {
    service_name: String,
}

impl StoredTokenProvider {
    /// Create a provider for the given keychain service name
    /// (e.g. `"PostPilot"`).
    pub fn new(service_name: impl Into<String>) -> Self {
        Self { service_name: service_name.into() }
    }
}

#[async_trait]
impl AccessTokenProvider for StoredTokenProvider {
    async fn access_token(&self) -> Result<Option<String>> {
        let entry = Entry::new(&self.service_name, TOKEN_ACCOUNT_NAME)
            .map_err(|err| PostPilotError::Auth(format!("keychain entry unavailable: {err}")))?;

        match entry.get_password() {
            Ok(token) => Ok(Some(token)),
            Err(keyring::Error::NoEntry) => {
                debug!(service = %self.service_name, "no stored auth token");
                Ok(None)
            }
            Err(err) => Err(PostPilotError::Auth(format!("keychain read failed: {err}"))),
        }
    }
}

/// Fixed-token provider for tests.
pub struct StaticTokenProvider {
    token: Option<String>,
}

impl StaticTokenProvider {
    /// Always yields `token`.
    pub fn new(token: impl Into<String>) -> Self {
        Self { token: Some(token.into()) }
    }

    /// Never yields a token.
    pub fn none() -> Self {
        Self { token: None }
    }
}

#[async_trait]
impl AccessTokenProvider for StaticTokenProvider {
    async fn access_token(&self) -> Result<Option<String>> {
        Ok(self.token.clone())
    }
}
