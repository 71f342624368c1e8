//! Notifier implementations

use async_trait::async_trait;
use postpilot_core::Notifier;
use postpilot_domain::{truncate_title, Result, ScheduledPost};
use tracing::info;

/// Headless notifier that emits structured tracing events.
///
/// Embedding shells replace this with a platform notification primitive;
/// headless deployments and tests keep it as-is.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl LogNotifier {
    /// Create a notifier.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, post: &ScheduledPost) -> Result<()> {
        info!(
            post_id = %post.id,
            scheduled_at = %post.scheduled_at,
            platform = post.platform.as_deref().unwrap_or("unspecified"),
            title = %truncate_title(&post.content),
            "scheduled post is about to publish"
        );
        Ok(())
    }
}
