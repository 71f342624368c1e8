//! Structured logging helpers for command wrappers

use std::time::Duration;

use postpilot_domain::PostPilotError;
use tracing::{info, warn};

/// Log the outcome of a command execution with structured fields.
///
/// # Parameters
/// * `command` - Logical command identifier (e.g. `"posts::list_scheduled_posts"`).
/// * `elapsed` - Duration the command execution took.
/// * `success` - Whether the command completed successfully.
///
/// The helper keeps the command wrappers concise and the log shape
/// consistent. Callers must avoid forwarding sensitive values in
/// `command`.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, success: bool) {
    let duration_ms = elapsed.as_millis() as u64;

    if success {
        info!(command, duration_ms, "command_execution_success");
    } else {
        warn!(command, duration_ms, "command_execution_failure");
    }
}

/// Log a command failure with its stable error label.
///
/// Dashboards group on `error_type`, so the label must stay coarse; the
/// full error text rides along for humans.
#[inline]
pub fn log_command_error(command: &str, error: &PostPilotError) {
    warn!(command, error_type = error_label(error), error = %error, "command_execution_error");
}

/// Convert a `PostPilotError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &PostPilotError) -> &'static str {
    match error {
        PostPilotError::Validation(_) => "validation",
        PostPilotError::Fetch(_) => "fetch",
        PostPilotError::Config(_) => "config",
        PostPilotError::Auth(_) => "auth",
        PostPilotError::Internal(_) => "internal",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_stable() {
        assert_eq!(error_label(&PostPilotError::Validation("x".into())), "validation");
        assert_eq!(error_label(&PostPilotError::Fetch("x".into())), "fetch");
        assert_eq!(error_label(&PostPilotError::Internal("x".into())), "internal");
    }
}
