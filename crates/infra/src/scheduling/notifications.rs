//! Notification scheduler
//!
//! Warns the user shortly before a scheduled post publishes. Each pass
//! queries the remote collection directly (not the client-side mirror) so
//! the warning reflects server truth, then sleeps until the wakeup
//! computed from the next known publish instant. Fixed-interval polling
//! would miss a post that lands between two ticks; the computed wakeup
//! cannot.
//!
//! All errors inside the background task are logged and swallowed: this
//! is a convenience feature and must never disrupt the caller. An
//! in-memory notified-id set keeps a post from being announced twice
//! within one process lifetime; it is not persisted across restarts.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use postpilot_core::{due_within, next_wakeup, Notifier, ScheduledPostsApi};
use postpilot_domain::{NotificationConfig, ScheduledPost};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument, warn};

use super::error::{SchedulerError, SchedulerResult};

/// Type alias for task handle to avoid complexity warnings
type TaskHandle = Arc<Mutex<Option<JoinHandle<()>>>>;

/// Configuration for the notification scheduler
#[derive(Debug, Clone)]
pub struct NotificationSchedulerConfig {
    /// How far ahead of `scheduled_at` a post counts as due.
    pub lead: Duration,
    /// Re-poll interval when nothing is upcoming.
    pub idle_poll: Duration,
    /// Timeout for awaiting the background task on stop.
    pub stop_timeout: Duration,
}

impl Default for NotificationSchedulerConfig {
    fn default() -> Self {
        Self {
            lead: Duration::from_secs(60),
            idle_poll: Duration::from_secs(60),
            stop_timeout: Duration::from_secs(5),
        }
    }
}

impl From<&NotificationConfig> for NotificationSchedulerConfig {
    fn from(config: &NotificationConfig) -> Self {
        Self {
            lead: Duration::from_secs(config.lead_secs),
            idle_poll: Duration::from_secs(config.idle_poll_secs),
            ..Self::default()
        }
    }
}

/// Scheduler that announces posts about to publish.
pub struct NotificationScheduler {
    api: Arc<dyn ScheduledPostsApi>,
    notifier: Arc<dyn Notifier>,
    user_id: String,
    config: NotificationSchedulerConfig,
    cancellation_token: CancellationToken,
    task_handle: TaskHandle,
}

impl NotificationScheduler {
    /// Create a scheduler for one user.
    pub fn new(
        api: Arc<dyn ScheduledPostsApi>,
        notifier: Arc<dyn Notifier>,
        user_id: impl Into<String>,
        config: NotificationSchedulerConfig,
    ) -> Self {
        Self {
            api,
            notifier,
            user_id: user_id.into(),
            config,
            cancellation_token: CancellationToken::new(),
            task_handle: Arc::new(Mutex::new(None)),
        }
    }

    /// Start the scheduler.
    ///
    /// Spawns the background task that queries, notifies and sleeps.
    ///
    /// # Errors
    /// Returns [`SchedulerError::AlreadyRunning`] when started twice.
    #[instrument(skip(self))]
    pub async fn start(&mut self) -> SchedulerResult<()> {
        if self.is_running().await {
            return Err(SchedulerError::AlreadyRunning);
        }

        info!(user_id = %self.user_id, "Starting notification scheduler");

        // Create a new cancellation token (supports restart after stop)
        self.cancellation_token = CancellationToken::new();

        let api = Arc::clone(&self.api);
        let notifier = Arc::clone(&self.notifier);
        let user_id = self.user_id.clone();
        let config = self.config.clone();
        let cancel = self.cancellation_token.clone();

        let handle = tokio::spawn(async move {
            Self::notify_loop(api, notifier, user_id, config, cancel).await;
        });

        *self.task_handle.lock().await = Some(handle);

        info!("Notification scheduler started");
        Ok(())
    }

    /// Stop the scheduler gracefully.
    ///
    /// Cancels the background task and awaits completion.
    ///
    /// # Errors
    /// Returns [`SchedulerError::NotRunning`] when no task is active and
    /// [`SchedulerError::Timeout`] when the task does not wind down in
    /// time.
    #[instrument(skip(self))]
    pub async fn stop(&mut self) -> SchedulerResult<()> {
        if !self.is_running().await {
            return Err(SchedulerError::NotRunning);
        }

        info!("Stopping notification scheduler");

        self.cancellation_token.cancel();

        if let Some(handle) = self.task_handle.lock().await.take() {
            match tokio::time::timeout(self.config.stop_timeout, handle).await {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    warn!(error = %e, "Notification task panicked");
                    return Err(SchedulerError::TaskJoinFailed(e.to_string()));
                }
                Err(_) => {
                    warn!("Notification task did not complete within timeout");
                    return Err(SchedulerError::Timeout {
                        seconds: self.config.stop_timeout.as_secs(),
                    });
                }
            }
        }

        info!("Notification scheduler stopped");
        Ok(())
    }

    /// Check if the scheduler is running.
    pub async fn is_running(&self) -> bool {
        self.task_handle.lock().await.is_some()
    }

    /// Background loop: query, announce due posts, sleep until the next
    /// wakeup.
    async fn notify_loop(
        api: Arc<dyn ScheduledPostsApi>,
        notifier: Arc<dyn Notifier>,
        user_id: String,
        config: NotificationSchedulerConfig,
        cancel: CancellationToken,
    ) {
        let lead = chrono::Duration::from_std(config.lead).unwrap_or(chrono::Duration::seconds(60));
        let mut announced: HashSet<String> = HashSet::new();

        loop {
            if cancel.is_cancelled() {
                debug!("Notification loop cancelled");
                break;
            }

            let sleep_for = match api.list(&user_id).await {
                Ok(posts) => {
                    let now = Utc::now();
                    let mut delivery_failed = false;

                    for post in due_within(&posts, now, lead) {
                        if announced.contains(&post.id) {
                            continue;
                        }
                        match notifier.notify(&post).await {
                            Ok(()) => {
                                announced.insert(post.id.clone());
                            }
                            Err(err) => {
                                delivery_failed = true;
                                warn!(post_id = %post.id, error = %err, "notification delivery failed");
                            }
                        }
                    }

                    // Forget ids that left the collection so the set cannot
                    // grow without bound.
                    announced.retain(|id| posts.iter().any(|post| &post.id == id));

                    // Announced posts no longer drive the wakeup. They sit
                    // inside the lead window until they publish, so keeping
                    // them in the computation would pin the wakeup to `now`
                    // and re-query the collection at the sleep floor for the
                    // rest of the window.
                    let pending: Vec<ScheduledPost> = posts
                        .into_iter()
                        .filter(|post| !announced.contains(&post.id))
                        .collect();

                    if delivery_failed {
                        // Failed deliveries stay pending; retry on the idle
                        // cadence instead of hammering the notifier.
                        config.idle_poll
                    } else {
                        match next_wakeup(&pending, now, lead) {
                            Some(at) => {
                                let until = (at - now).to_std().unwrap_or(Duration::ZERO);
                                until.max(Duration::from_millis(250)).min(config.idle_poll)
                            }
                            None => config.idle_poll,
                        }
                    }
                }
                Err(err) => {
                    // Background convenience feature: never escalate.
                    warn!(user_id = %user_id, error = %err, "notification query failed");
                    config.idle_poll
                }
            };

            tokio::select! {
                () = cancel.cancelled() => {
                    debug!("Notification loop cancelled during sleep");
                    break;
                }
                () = tokio::time::sleep(sleep_for) => {}
            }
        }
    }
}

impl Drop for NotificationScheduler {
    fn drop(&mut self) {
        self.cancellation_token.cancel();
    }
}
