//! Scheduled-post store - core business logic
//!
//! The store maintains an eventually-consistent local mirror of the remote
//! scheduled-posts collection for one user, and applies create / update /
//! delete operations against the remote collection, refreshing the mirror
//! after each successful mutation.
//!
//! Mutations are not optimistic: nothing is inserted locally before the
//! server confirms, and every successful mutation is followed by a full
//! `list` refresh. Calls are not serialized against each other; two
//! concurrent updates to the same post race and the last write to arrive
//! at the server wins.

use std::sync::Arc;

use parking_lot::RwLock;
use postpilot_domain::{
    NewScheduledPost, PostPilotError, Result, ScheduledPost, ScheduledPostPatch,
};
use tracing::{debug, warn};

use super::ports::ScheduledPostsApi;

/// Client-side mirror of one user's remote scheduled-posts collection.
///
/// The store is the exclusive owner of the in-memory list; renderers hold
/// only [`snapshot`](Self::snapshot) copies plus callbacks into the store.
pub struct ScheduledPostStore {
    api: Arc<dyn ScheduledPostsApi>,
    user_id: String,
    mirror: RwLock<Vec<ScheduledPost>>,
}

impl ScheduledPostStore {
    /// Create a store bound to `user_id`.
    ///
    /// # Errors
    /// Returns `PostPilotError::Validation` when `user_id` is empty.
    pub fn new(api: Arc<dyn ScheduledPostsApi>, user_id: impl Into<String>) -> Result<Self> {
        let user_id = user_id.into();
        if user_id.trim().is_empty() {
            return Err(PostPilotError::Validation("user_id is required".into()));
        }
        Ok(Self { api, user_id, mirror: RwLock::new(Vec::new()) })
    }

    /// The user this store mirrors.
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Read-only copy of the mirror for renderers.
    ///
    /// May be stale until the next [`refresh`](Self::refresh); there is no
    /// push invalidation.
    pub fn snapshot(&self) -> Vec<ScheduledPost> {
        self.mirror.read().clone()
    }

    /// Re-fetch the remote collection and replace the mirror wholesale.
    ///
    /// On failure the prior mirror is left unchanged (no partial
    /// overwrite). Posts owned by other users are dropped before the
    /// mirror is replaced, so a misbehaving backend can never leak
    /// cross-tenant rows into a renderer.
    ///
    /// # Errors
    /// Returns `PostPilotError::Fetch` on transport failure or a
    /// non-success response.
    pub async fn refresh(&self) -> Result<Vec<ScheduledPost>> {
        let posts = self.api.list(&self.user_id).await?;

        let owned: Vec<ScheduledPost> =
            posts.into_iter().filter(|post| post.user_id == self.user_id).collect();

        debug!(user_id = %self.user_id, count = owned.len(), "refreshed scheduled-post mirror");
        *self.mirror.write() = owned.clone();
        Ok(owned)
    }

    /// Create a post and bring the mirror up to date.
    ///
    /// Returns the server-assigned record. No optimistic local insert is
    /// attempted since server-side id assignment is authoritative.
    ///
    /// # Errors
    /// Returns `PostPilotError::Validation` when preconditions are unmet
    /// (never reaches the network) and `PostPilotError::Fetch` on remote
    /// rejection.
    pub async fn create(&self, post: &NewScheduledPost) -> Result<ScheduledPost> {
        post.validate()?;
        if post.user_id != self.user_id {
            return Err(PostPilotError::Validation(format!(
                "post owner {} does not match store owner {}",
                post.user_id, self.user_id
            )));
        }

        let created = self.api.create(post).await?;
        self.refresh_after_mutation("create").await;
        Ok(created)
    }

    /// Apply a partial update to an existing post.
    ///
    /// Serves both triggers: full edit via modal (any field) and
    /// drag-and-drop reschedule (only `scheduled_at`).
    ///
    /// # Errors
    /// Returns `PostPilotError::Validation` for an empty id or empty
    /// patch; remote failures (including ids that no longer exist)
    /// surface as `PostPilotError::Fetch`.
    pub async fn update(&self, id: &str, patch: &ScheduledPostPatch) -> Result<()> {
        if id.trim().is_empty() {
            return Err(PostPilotError::Validation("post id is required".into()));
        }
        if patch.is_empty() {
            return Err(PostPilotError::Validation("patch must set at least one field".into()));
        }

        self.api.update(id, patch).await?;
        self.refresh_after_mutation("update").await;
        Ok(())
    }

    /// Move a post to a new publish instant (drag-and-drop path).
    ///
    /// # Errors
    /// Same contract as [`update`](Self::update).
    pub async fn reschedule(
        &self,
        id: &str,
        scheduled_at: chrono::DateTime<chrono::Utc>,
    ) -> Result<()> {
        self.update(id, &ScheduledPostPatch::reschedule(scheduled_at)).await
    }

    /// Delete a post and bring the mirror up to date.
    ///
    /// No confirmation step is enforced here; that belongs to the UI
    /// layer.
    ///
    /// # Errors
    /// Returns `PostPilotError::Validation` for an empty id and
    /// `PostPilotError::Fetch` on remote failure, including deleting an
    /// already-removed id.
    pub async fn remove(&self, id: &str) -> Result<()> {
        if id.trim().is_empty() {
            return Err(PostPilotError::Validation("post id is required".into()));
        }

        self.api.remove(id).await?;
        self.refresh_after_mutation("remove").await;
        Ok(())
    }

    /// Refresh after a successful mutation.
    ///
    /// The mutation already succeeded, so a refresh failure only leaves
    /// the mirror at its last-known-good value; it is logged rather than
    /// turned into a caller-visible error.
    async fn refresh_after_mutation(&self, operation: &str) {
        if let Err(err) = self.refresh().await {
            warn!(operation, error = %err, "mirror refresh after mutation failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use chrono::{DateTime, TimeZone, Utc};
    use parking_lot::Mutex;
    use postpilot_domain::PostStatus;

    use super::*;

    /// In-memory stand-in for the remote collection.
    struct InMemoryApi {
        rows: Mutex<Vec<ScheduledPost>>,
        next_id: AtomicUsize,
        calls: AtomicUsize,
        fail_list: Mutex<bool>,
    }

    impl InMemoryApi {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                rows: Mutex::new(Vec::new()),
                next_id: AtomicUsize::new(1),
                calls: AtomicUsize::new(0),
                fail_list: Mutex::new(false),
            })
        }

        fn seed(self: &Arc<Self>, post: ScheduledPost) {
            self.rows.lock().push(post);
        }

        fn set_fail_list(&self, fail: bool) {
            *self.fail_list.lock() = fail;
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ScheduledPostsApi for InMemoryApi {
        async fn list(&self, user_id: &str) -> Result<Vec<ScheduledPost>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if *self.fail_list.lock() {
                return Err(PostPilotError::Fetch("status 500: unavailable".into()));
            }
            Ok(self.rows.lock().iter().filter(|p| p.user_id == user_id).cloned().collect())
        }

        async fn create(&self, post: &NewScheduledPost) -> Result<ScheduledPost> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let id = self.next_id.fetch_add(1, Ordering::SeqCst);
            let created = ScheduledPost {
                id: format!("post-{id}"),
                user_id: post.user_id.clone(),
                content: post.content.clone(),
                image_url: post.image_url.clone(),
                scheduled_at: post.scheduled_at,
                status: PostStatus::Scheduled,
                platform: post.platform.clone(),
            };
            self.rows.lock().push(created.clone());
            Ok(created)
        }

        async fn update(&self, id: &str, patch: &ScheduledPostPatch) -> Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let mut rows = self.rows.lock();
            let Some(row) = rows.iter_mut().find(|p| p.id == id) else {
                return Err(PostPilotError::Fetch("status 404: no such post".into()));
            };
            if let Some(content) = &patch.content {
                row.content = content.clone();
            }
            if let Some(at) = patch.scheduled_at {
                row.scheduled_at = at;
            }
            if let Some(platform) = &patch.platform {
                row.platform = Some(platform.clone());
            }
            if let Some(image_url) = &patch.image_url {
                row.image_url = Some(image_url.clone());
            }
            Ok(())
        }

        async fn remove(&self, id: &str) -> Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let mut rows = self.rows.lock();
            let before = rows.len();
            rows.retain(|p| p.id != id);
            if rows.len() == before {
                return Err(PostPilotError::Fetch("status 404: no such post".into()));
            }
            Ok(())
        }
    }

    fn instant(raw: &str) -> DateTime<Utc> {
        raw.parse().expect("valid RFC 3339 instant")
    }

    fn new_post(user_id: &str, content: &str, at: &str) -> NewScheduledPost {
        NewScheduledPost {
            user_id: user_id.into(),
            content: content.into(),
            scheduled_at: instant(at),
            platform: None,
            image_url: None,
        }
    }

    fn store_for(api: &Arc<InMemoryApi>, user_id: &str) -> ScheduledPostStore {
        ScheduledPostStore::new(Arc::clone(api) as Arc<dyn ScheduledPostsApi>, user_id)
            .expect("store")
    }

    #[test]
    fn empty_user_id_is_rejected() {
        let api = InMemoryApi::new();
        let result = ScheduledPostStore::new(api as Arc<dyn ScheduledPostsApi>, "  ");
        assert!(matches!(result, Err(PostPilotError::Validation(_))));
    }

    #[tokio::test]
    async fn create_then_list_contains_post_exactly_once() {
        let api = InMemoryApi::new();
        let store = store_for(&api, "user-1");

        let created = store
            .create(&new_post("user-1", "Launch announcement", "2024-06-01T10:00:00Z"))
            .await
            .expect("create succeeds");

        let posts = store.refresh().await.expect("list succeeds");
        let matches: Vec<_> = posts.iter().filter(|p| p.id == created.id).collect();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].content, "Launch announcement");
    }

    #[tokio::test]
    async fn create_validation_failure_never_reaches_network() {
        let api = InMemoryApi::new();
        let store = store_for(&api, "user-1");

        let err = store
            .create(&new_post("user-1", "   ", "2024-06-01T10:00:00Z"))
            .await
            .expect_err("empty content rejected");

        assert!(matches!(err, PostPilotError::Validation(_)));
        assert_eq!(api.call_count(), 0);
    }

    #[tokio::test]
    async fn create_rejects_foreign_owner() {
        let api = InMemoryApi::new();
        let store = store_for(&api, "user-1");

        let err = store
            .create(&new_post("user-2", "hello", "2024-06-01T10:00:00Z"))
            .await
            .expect_err("foreign owner rejected");
        assert!(matches!(err, PostPilotError::Validation(_)));
        assert_eq!(api.call_count(), 0);
    }

    #[tokio::test]
    async fn create_then_reschedule_keeps_single_post_with_new_instant() {
        let api = InMemoryApi::new();
        let store = store_for(&api, "user-1");

        let created = store
            .create(&new_post("user-1", "Launch announcement", "2024-06-01T10:00:00Z"))
            .await
            .expect("create succeeds");

        store
            .reschedule(&created.id, instant("2024-06-02T10:00:00Z"))
            .await
            .expect("reschedule succeeds");

        let posts = store.refresh().await.expect("list succeeds");
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].content, "Launch announcement");
        assert_eq!(posts[0].scheduled_at, instant("2024-06-02T10:00:00Z"));
    }

    #[tokio::test]
    async fn update_changes_only_patched_fields() {
        let api = InMemoryApi::new();
        let store = store_for(&api, "user-1");

        let mut payload = new_post("user-1", "original", "2024-06-01T10:00:00Z");
        payload.platform = Some("LinkedIn".into());
        let created = store.create(&payload).await.expect("create succeeds");

        store
            .update(&created.id, &ScheduledPostPatch::reschedule(instant("2024-06-03T08:00:00Z")))
            .await
            .expect("update succeeds");

        let posts = store.refresh().await.expect("list succeeds");
        assert_eq!(posts[0].scheduled_at, instant("2024-06-03T08:00:00Z"));
        assert_eq!(posts[0].content, "original");
        assert_eq!(posts[0].platform.as_deref(), Some("LinkedIn"));
    }

    #[tokio::test]
    async fn empty_patch_is_rejected_locally() {
        let api = InMemoryApi::new();
        let store = store_for(&api, "user-1");

        let err = store
            .update("post-1", &ScheduledPostPatch::default())
            .await
            .expect_err("empty patch rejected");
        assert!(matches!(err, PostPilotError::Validation(_)));
        assert_eq!(api.call_count(), 0);
    }

    #[tokio::test]
    async fn remove_then_list_excludes_post() {
        let api = InMemoryApi::new();
        let store = store_for(&api, "user-1");

        let created = store
            .create(&new_post("user-1", "bye", "2024-06-01T10:00:00Z"))
            .await
            .expect("create succeeds");

        store.remove(&created.id).await.expect("remove succeeds");
        let posts = store.refresh().await.expect("list succeeds");
        assert!(posts.iter().all(|p| p.id != created.id));
    }

    #[tokio::test]
    async fn removing_an_already_removed_post_fails() {
        let api = InMemoryApi::new();
        let store = store_for(&api, "user-1");

        let created = store
            .create(&new_post("user-1", "bye", "2024-06-01T10:00:00Z"))
            .await
            .expect("create succeeds");

        store.remove(&created.id).await.expect("first remove succeeds");
        let err = store.remove(&created.id).await.expect_err("second remove fails");
        assert!(matches!(err, PostPilotError::Fetch(_)));
    }

    #[tokio::test]
    async fn list_failure_preserves_prior_mirror() {
        let api = InMemoryApi::new();
        let store = store_for(&api, "user-1");

        store
            .create(&new_post("user-1", "keep me", "2024-06-01T10:00:00Z"))
            .await
            .expect("create succeeds");
        assert_eq!(store.snapshot().len(), 1);

        api.set_fail_list(true);
        let err = store.refresh().await.expect_err("list fails");
        assert!(matches!(err, PostPilotError::Fetch(_)));
        assert_eq!(store.snapshot().len(), 1, "mirror untouched after failed refresh");
    }

    #[tokio::test]
    async fn cross_tenant_rows_never_enter_the_mirror() {
        let api = InMemoryApi::new();
        api.seed(ScheduledPost {
            id: "foreign-1".into(),
            user_id: "user-2".into(),
            content: "not yours".into(),
            image_url: None,
            scheduled_at: Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).single().expect("timestamp"),
            status: PostStatus::Scheduled,
            platform: None,
        });
        let store = store_for(&api, "user-1");

        let posts = store.refresh().await.expect("list succeeds");
        assert!(posts.is_empty());
        assert!(store.snapshot().is_empty());
    }

    #[tokio::test]
    async fn snapshot_is_stale_until_refresh() {
        let api = InMemoryApi::new();
        let store = store_for(&api, "user-1");

        store
            .create(&new_post("user-1", "hello", "2024-06-01T10:00:00Z"))
            .await
            .expect("create succeeds");
        let before = store.snapshot();
        assert_eq!(before.len(), 1);

        // A second client deletes the row behind this store's back.
        api.rows.lock().clear();
        assert_eq!(store.snapshot().len(), 1, "stale view allowed until next refresh");

        store.refresh().await.expect("list succeeds");
        assert!(store.snapshot().is_empty());
    }

    #[tokio::test]
    async fn instant_round_trips_through_create_and_list() {
        let api = InMemoryApi::new();
        let store = store_for(&api, "user-1");

        let created = store
            .create(&new_post("user-1", "round trip", "2024-03-15T09:30:00.000Z"))
            .await
            .expect("create succeeds");

        let posts = store.refresh().await.expect("list succeeds");
        let listed = posts.iter().find(|p| p.id == created.id).expect("post listed");
        assert_eq!(listed.scheduled_at, instant("2024-03-15T09:30:00Z"));
    }
}
