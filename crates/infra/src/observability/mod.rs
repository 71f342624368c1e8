//! Observability initialisation
//!
//! One-shot tracing setup for binaries and long-lived test harnesses.
//! Library code never installs a subscriber; it only emits events.

use postpilot_domain::{PostPilotError, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// The filter is taken from `RUST_LOG` when set, falling back to
/// `default_directive` (e.g. `"postpilot=info"`).
///
/// # Errors
/// Returns `PostPilotError::Internal` when a subscriber is already
/// installed or the directive does not parse.
pub fn init_tracing(default_directive: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive))
        .map_err(|err| PostPilotError::Internal(format!("invalid log directive: {err}")))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .try_init()
        .map_err(|err| PostPilotError::Internal(format!("tracing init failed: {err}")))
}
