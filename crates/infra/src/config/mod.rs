//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `POSTPILOT_API_BASE_URL`: Base URL of the remote collection (required)
//! - `POSTPILOT_API_TIMEOUT_SECS`: Request timeout in seconds
//! - `POSTPILOT_NOTIFY_LEAD_SECS`: Notification lead window in seconds
//! - `POSTPILOT_NOTIFY_IDLE_POLL_SECS`: Idle re-poll interval in seconds
//! - `POSTPILOT_NOTIFY_ENABLED`: Whether notifications run (true/false)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./postpilot.toml` or `./postpilot.json` (current working directory)
//! 2. `./config.toml` or `./config.json` (current working directory)

use std::path::{Path, PathBuf};

use postpilot_domain::constants::{
    DEFAULT_API_TIMEOUT_SECS, NOTIFICATION_IDLE_POLL_SECS, NOTIFICATION_LEAD_SECS,
};
use postpilot_domain::{ApiConfig, Config, NotificationConfig, PostPilotError, Result};

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If the required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `PostPilotError::Config` if configuration cannot be loaded
/// from either source, the file format is invalid, or required fields
/// are missing.
pub fn load() -> Result<Config> {
    // Pick up a local .env when present; absence is not an error.
    let _ = dotenvy::dotenv();

    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// `POSTPILOT_API_BASE_URL` must be present; everything else has a
/// default.
///
/// # Errors
/// Returns `PostPilotError::Config` if the base URL is missing or any
/// present variable has an invalid value.
pub fn load_from_env() -> Result<Config> {
    let base_url = env_var("POSTPILOT_API_BASE_URL")?;
    let timeout_secs = env_u64("POSTPILOT_API_TIMEOUT_SECS", DEFAULT_API_TIMEOUT_SECS)?;
    let lead_secs = env_u64("POSTPILOT_NOTIFY_LEAD_SECS", NOTIFICATION_LEAD_SECS)?;
    let idle_poll_secs = env_u64("POSTPILOT_NOTIFY_IDLE_POLL_SECS", NOTIFICATION_IDLE_POLL_SECS)?;
    let enabled = env_bool("POSTPILOT_NOTIFY_ENABLED", true);

    Ok(Config {
        api: ApiConfig { base_url, timeout_secs },
        notifications: NotificationConfig { lead_secs, idle_poll_secs, enabled },
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `PostPilotError::Config` if the file is missing, unreadable
/// or malformed.
pub fn load_from_file(path: Option<&Path>) -> Result<Config> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => probe_config_paths().ok_or_else(|| {
            PostPilotError::Config("no configuration file found in probed locations".into())
        })?,
    };

    let contents = std::fs::read_to_string(&path).map_err(|err| {
        PostPilotError::Config(format!("failed to read {}: {err}", path.display()))
    })?;

    let config = match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => toml::from_str(&contents).map_err(|err| {
            PostPilotError::Config(format!("invalid TOML in {}: {err}", path.display()))
        })?,
        Some("json") => serde_json::from_str(&contents).map_err(|err| {
            PostPilotError::Config(format!("invalid JSON in {}: {err}", path.display()))
        })?,
        _ => {
            return Err(PostPilotError::Config(format!(
                "unsupported config format: {}",
                path.display()
            )))
        }
    };

    tracing::info!(path = %path.display(), "Configuration loaded from file");
    Ok(config)
}

fn probe_config_paths() -> Option<PathBuf> {
    const CANDIDATES: [&str; 4] =
        ["postpilot.toml", "postpilot.json", "config.toml", "config.json"];

    CANDIDATES.iter().map(PathBuf::from).find(|candidate| candidate.exists())
}

fn env_var(name: &str) -> Result<String> {
    std::env::var(name)
        .map_err(|_| PostPilotError::Config(format!("missing environment variable: {name}")))
}

fn env_u64(name: &str, default: u64) -> Result<u64> {
    match std::env::var(name) {
        Ok(value) => value
            .parse::<u64>()
            .map_err(|err| PostPilotError::Config(format!("invalid value for {name}: {err}"))),
        Err(_) => Ok(default),
    }
}

fn env_bool(name: &str, default: bool) -> bool {
    std::env::var(name).map(|value| value.eq_ignore_ascii_case("true")).unwrap_or(default)
}
