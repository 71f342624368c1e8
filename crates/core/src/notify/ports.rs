//! Port interfaces for notification delivery

use async_trait::async_trait;
use postpilot_domain::{Result, ScheduledPost};

/// Trait for the platform notification primitive
///
/// The scheduler emits one notification per due post through this trait.
/// Implementations decide how the warning reaches the user (desktop
/// notification, tracing event in headless builds, test recorder).
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Emit a notification for a post whose publish instant is imminent.
    async fn notify(&self, post: &ScheduledPost) -> Result<()>;
}
