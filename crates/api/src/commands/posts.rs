//! Scheduled-post commands
//!
//! The contract every calendar renderer consumes. Entries carry the typed
//! domain post inside a tagged union, so a renderer reads domain fields
//! directly instead of casting an untyped `resource` attachment.

use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use postpilot_domain::{
    truncate_title, NewScheduledPost, Result, ScheduledPost, ScheduledPostPatch,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::utils::logging::{log_command_error, log_command_execution};
use crate::AppContext;

/// One entry on a calendar surface.
///
/// Tagged by `kind` so future entry types (campaign milestones, holidays)
/// extend the union without breaking renderers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum CalendarEntry {
    /// A scheduled post rendered as a calendar event.
    #[serde(rename_all = "camelCase")]
    ScheduledPost {
        /// Stable identifier, equal to the post id.
        id: String,
        /// Short label for the event chip.
        title: String,
        /// Event start instant.
        start: DateTime<Utc>,
        /// The full typed post for detail views and edit modals.
        post: ScheduledPost,
    },
}

impl From<ScheduledPost> for CalendarEntry {
    fn from(post: ScheduledPost) -> Self {
        Self::ScheduledPost {
            id: post.id.clone(),
            title: truncate_title(&post.content),
            start: post.scheduled_at,
            post,
        }
    }
}

/// Creation form payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostInput {
    /// Text body; must be non-empty.
    pub content: String,
    /// Publish instant.
    pub scheduled_at: DateTime<Utc>,
    /// Optional platform label.
    pub platform: Option<String>,
    /// Optional attached media reference.
    pub image_url: Option<String>,
}

/// Edit-modal payload; unset fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostInput {
    /// Replacement text body.
    pub content: Option<String>,
    /// Replacement publish instant.
    pub scheduled_at: Option<DateTime<Utc>>,
    /// Replacement platform label.
    pub platform: Option<String>,
    /// Replacement media reference.
    pub image_url: Option<String>,
}

impl From<UpdatePostInput> for ScheduledPostPatch {
    fn from(input: UpdatePostInput) -> Self {
        Self {
            content: input.content,
            scheduled_at: input.scheduled_at,
            platform: input.platform,
            image_url: input.image_url,
        }
    }
}

/// Refresh the mirror and return every entry for the session user.
///
/// # Errors
/// Returns `Fetch` when the remote collection cannot be reached; the
/// prior mirror stays intact in that case.
pub async fn list_scheduled_posts(ctx: &Arc<AppContext>) -> Result<Vec<CalendarEntry>> {
    let command_name = "posts::list_scheduled_posts";
    let start = Instant::now();

    let result = ctx.store.refresh().await;
    if let Err(err) = &result {
        log_command_error(command_name, err);
    }
    log_command_execution(command_name, start.elapsed(), result.is_ok());

    result.map(|posts| posts.into_iter().map(CalendarEntry::from).collect())
}

/// Persist a new post from the creation form.
///
/// # Errors
/// Returns `Validation` before any network call when the content is
/// empty, and `Fetch` on remote rejection.
pub async fn create_scheduled_post(
    ctx: &Arc<AppContext>,
    input: CreatePostInput,
) -> Result<CalendarEntry> {
    let command_name = "posts::create_scheduled_post";
    let start = Instant::now();

    let payload = NewScheduledPost {
        user_id: ctx.session.user_id.clone(),
        content: input.content,
        scheduled_at: input.scheduled_at,
        platform: input.platform,
        image_url: input.image_url,
    };

    info!(command = command_name, scheduled_at = %payload.scheduled_at, "Creating scheduled post");
    let result = ctx.store.create(&payload).await;
    if let Err(err) = &result {
        log_command_error(command_name, err);
    }
    log_command_execution(command_name, start.elapsed(), result.is_ok());

    result.map(CalendarEntry::from)
}

/// Apply an edit-modal update to an existing post.
///
/// # Errors
/// Returns `Validation` for an empty patch and `Fetch` on remote
/// failure.
pub async fn update_scheduled_post(
    ctx: &Arc<AppContext>,
    id: &str,
    input: UpdatePostInput,
) -> Result<()> {
    let command_name = "posts::update_scheduled_post";
    let start = Instant::now();

    let result = ctx.store.update(id, &ScheduledPostPatch::from(input)).await;
    if let Err(err) = &result {
        log_command_error(command_name, err);
    }
    log_command_execution(command_name, start.elapsed(), result.is_ok());

    result
}

/// Move a post to a new slot (drag-and-drop path).
///
/// # Errors
/// Same contract as [`update_scheduled_post`].
pub async fn reschedule_post(
    ctx: &Arc<AppContext>,
    id: &str,
    scheduled_at: DateTime<Utc>,
) -> Result<()> {
    let command_name = "posts::reschedule_post";
    let start = Instant::now();

    info!(command = command_name, id, %scheduled_at, "Rescheduling post");
    let result = ctx.store.reschedule(id, scheduled_at).await;
    if let Err(err) = &result {
        log_command_error(command_name, err);
    }
    log_command_execution(command_name, start.elapsed(), result.is_ok());

    result
}

/// Delete a post.
///
/// Confirmation dialogs belong to the UI layer; this command deletes
/// unconditionally.
///
/// # Errors
/// Returns `Fetch` on remote failure, including ids already removed.
pub async fn delete_scheduled_post(ctx: &Arc<AppContext>, id: &str) -> Result<()> {
    let command_name = "posts::delete_scheduled_post";
    let start = Instant::now();

    let result = ctx.store.remove(id).await;
    if let Err(err) = &result {
        log_command_error(command_name, err);
    }
    log_command_execution(command_name, start.elapsed(), result.is_ok());

    result
}
