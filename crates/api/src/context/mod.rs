//! Application context
//!
//! The context is built once at app start (after login) and shut down at
//! logout. It owns the session, the scheduled-post store and the optional
//! notification scheduler; commands borrow it and renderers never touch
//! the adapters directly.

use std::sync::Arc;

use postpilot_core::{Notifier, ScheduledPostStore, ScheduledPostsApi};
use postpilot_domain::{Config, Result, Session};
use postpilot_infra::{
    NotificationScheduler, NotificationSchedulerConfig, ScheduledPostsClient, SessionTokenProvider,
};
use tokio::sync::Mutex;
use tracing::{info, warn};

/// Shared application context for one signed-in session.
pub struct AppContext {
    /// The injected session; immutable for the context's lifetime.
    pub session: Session,
    /// The single source of truth for this user's scheduled posts.
    pub store: Arc<ScheduledPostStore>,
    notifications: Mutex<Option<NotificationScheduler>>,
}

impl AppContext {
    /// Build the context and start the notification scheduler when
    /// enabled.
    ///
    /// # Errors
    /// Returns a `Config` error for an invalid base URL and a
    /// `Validation` error for a session without a user id.
    pub async fn init(
        config: &Config,
        session: Session,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Arc<Self>> {
        let tokens = Arc::new(SessionTokenProvider::new(&session));
        let client: Arc<dyn ScheduledPostsApi> =
            Arc::new(ScheduledPostsClient::new(&config.api, tokens)?);
        let store =
            Arc::new(ScheduledPostStore::new(Arc::clone(&client), session.user_id.clone())?);

        let notifications = if config.notifications.enabled {
            let mut scheduler = NotificationScheduler::new(
                client,
                notifier,
                session.user_id.clone(),
                NotificationSchedulerConfig::from(&config.notifications),
            );
            if let Err(err) = scheduler.start().await {
                // The app is usable without the background warnings.
                warn!(error = %err, "notification scheduler failed to start");
            }
            Some(scheduler)
        } else {
            None
        };

        info!(user_id = %session.user_id, "application context initialised");
        Ok(Arc::new(Self { session, store, notifications: Mutex::new(notifications) }))
    }

    /// Dispose the context at logout.
    ///
    /// Stops the notification scheduler; the store and its mirror are
    /// dropped with the context.
    pub async fn shutdown(&self) {
        if let Some(mut scheduler) = self.notifications.lock().await.take() {
            if scheduler.is_running().await {
                if let Err(err) = scheduler.stop().await {
                    warn!(error = %err, "notification scheduler failed to stop cleanly");
                }
            }
        }
        info!(user_id = %self.session.user_id, "application context shut down");
    }
}
