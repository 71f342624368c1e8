//! Configuration structures
//!
//! Plain data; loading lives in the infra layer.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_API_TIMEOUT_SECS, NOTIFICATION_IDLE_POLL_SECS, NOTIFICATION_LEAD_SECS,
};

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Remote collection settings.
    pub api: ApiConfig,
    /// Notification scheduler settings.
    #[serde(default)]
    pub notifications: NotificationConfig,
}

/// Settings for the remote scheduled-posts collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL, e.g. `https://api.example.com`.
    pub base_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Settings for the notification scheduler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// How far ahead of `scheduled_at` a post counts as due.
    #[serde(default = "default_lead_secs")]
    pub lead_secs: u64,
    /// Re-poll interval when nothing is upcoming.
    #[serde(default = "default_idle_poll_secs")]
    pub idle_poll_secs: u64,
    /// Whether the scheduler runs at all.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            lead_secs: NOTIFICATION_LEAD_SECS,
            idle_poll_secs: NOTIFICATION_IDLE_POLL_SECS,
            enabled: true,
        }
    }
}

const fn default_timeout_secs() -> u64 {
    DEFAULT_API_TIMEOUT_SECS
}

const fn default_lead_secs() -> u64 {
    NOTIFICATION_LEAD_SECS
}

const fn default_idle_poll_secs() -> u64 {
    NOTIFICATION_IDLE_POLL_SECS
}

const fn default_enabled() -> bool {
    true
}
