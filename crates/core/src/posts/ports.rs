//! Port interfaces for scheduled-post operations

use async_trait::async_trait;
use postpilot_domain::{NewScheduledPost, Result, ScheduledPost, ScheduledPostPatch};

/// Trait for the remote scheduled-posts collection
///
/// Implemented by the HTTP adapter in the infra layer and by in-memory
/// fakes in tests. The collection is user-scoped; callers are expected to
/// be authenticated for the identity they query.
#[async_trait]
pub trait ScheduledPostsApi: Send + Sync {
    /// Fetch the full unordered set of posts owned by `user_id`.
    ///
    /// No pagination and no date-range filtering; renderers filter
    /// client-side.
    async fn list(&self, user_id: &str) -> Result<Vec<ScheduledPost>>;

    /// Persist a new post and return the server-assigned record.
    async fn create(&self, post: &NewScheduledPost) -> Result<ScheduledPost>;

    /// Apply a partial update to an existing post.
    ///
    /// Last write wins; there is no optimistic-concurrency token.
    async fn update(&self, id: &str, patch: &ScheduledPostPatch) -> Result<()>;

    /// Delete a post. Deleting an id that no longer exists surfaces the
    /// remote failure rather than succeeding silently.
    async fn remove(&self, id: &str) -> Result<()>;
}
