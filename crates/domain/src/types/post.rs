//! Scheduled post types
//!
//! A scheduled post is a unit of content with a publish timestamp, owned by
//! one user. Renderers receive these types serialized camelCase; the wire
//! boundary to the remote collection uses its own snake_case DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{PostPilotError, Result};

/// Lifecycle status of a scheduled post.
///
/// Only `scheduled` is actively set by client code paths. `published` is
/// kept for wire compatibility; whether a backend publisher job flips it
/// after `scheduled_at` passes is unresolved upstream, so nothing here
/// assumes either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    /// Being composed, not yet persisted remotely.
    Draft,
    /// Persisted with a publish timestamp (future or past).
    Scheduled,
    /// Reserved; no client code path sets this.
    Published,
}

/// A scheduled post as known to the remote collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledPost {
    /// Server-assigned opaque identifier, unique per user-scoped collection.
    pub id: String,
    /// Owning user.
    pub user_id: String,
    /// Text body.
    pub content: String,
    /// Optional attached media reference.
    pub image_url: Option<String>,
    /// Absolute publish instant.
    pub scheduled_at: DateTime<Utc>,
    /// Lifecycle status.
    pub status: PostStatus,
    /// Optional free-form platform label (LinkedIn, Instagram, ...).
    pub platform: Option<String>,
}

/// Payload for creating a new scheduled post.
///
/// The server assigns the persisted `id`; no client-side identifier is sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewScheduledPost {
    /// Owning user.
    pub user_id: String,
    /// Text body; must be non-empty.
    pub content: String,
    /// Absolute publish instant.
    pub scheduled_at: DateTime<Utc>,
    /// Optional free-form platform label.
    pub platform: Option<String>,
    /// Optional attached media reference.
    pub image_url: Option<String>,
}

impl NewScheduledPost {
    /// Check the client-side preconditions before any network call.
    ///
    /// # Errors
    /// Returns `PostPilotError::Validation` when `user_id` or `content` is
    /// empty. `scheduled_at` is typed and therefore always a valid instant.
    pub fn validate(&self) -> Result<()> {
        if self.user_id.trim().is_empty() {
            return Err(PostPilotError::Validation("user_id is required".into()));
        }
        if self.content.trim().is_empty() {
            return Err(PostPilotError::Validation("content is required".into()));
        }
        Ok(())
    }
}

/// Partial update for an existing scheduled post.
///
/// Used by both the full-edit path (any field) and the drag-and-drop
/// reschedule path (only `scheduled_at`). Absent fields are left unchanged
/// remotely; there is no way to clear a field to null through this type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledPostPatch {
    /// Replacement text body.
    pub content: Option<String>,
    /// Replacement publish instant.
    pub scheduled_at: Option<DateTime<Utc>>,
    /// Replacement platform label.
    pub platform: Option<String>,
    /// Replacement media reference.
    pub image_url: Option<String>,
}

impl ScheduledPostPatch {
    /// Patch carrying only a new publish instant (drag-and-drop reschedule).
    pub fn reschedule(scheduled_at: DateTime<Utc>) -> Self {
        Self { scheduled_at: Some(scheduled_at), ..Self::default() }
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.content.is_none()
            && self.scheduled_at.is_none()
            && self.platform.is_none()
            && self.image_url.is_none()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn new_post() -> NewScheduledPost {
        NewScheduledPost {
            user_id: "user-1".into(),
            content: "Launch announcement".into(),
            scheduled_at: Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).single().expect("timestamp"),
            platform: Some("LinkedIn".into()),
            image_url: None,
        }
    }

    #[test]
    fn validate_accepts_complete_payload() {
        assert!(new_post().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_content() {
        let mut post = new_post();
        post.content = "   ".into();
        let err = post.validate().expect_err("empty content rejected");
        assert!(matches!(err, PostPilotError::Validation(_)));
    }

    #[test]
    fn validate_rejects_empty_user_id() {
        let mut post = new_post();
        post.user_id = String::new();
        assert!(post.validate().is_err());
    }

    #[test]
    fn patch_reschedule_sets_only_scheduled_at() {
        let at = Utc.with_ymd_and_hms(2024, 6, 2, 10, 0, 0).single().expect("timestamp");
        let patch = ScheduledPostPatch::reschedule(at);
        assert_eq!(patch.scheduled_at, Some(at));
        assert!(patch.content.is_none());
        assert!(patch.platform.is_none());
        assert!(!patch.is_empty());
    }

    #[test]
    fn default_patch_is_empty() {
        assert!(ScheduledPostPatch::default().is_empty());
    }

    #[test]
    fn renderer_boundary_uses_camel_case() {
        let post = ScheduledPost {
            id: "p1".into(),
            user_id: "user-1".into(),
            content: "hello".into(),
            image_url: None,
            scheduled_at: Utc.with_ymd_and_hms(2024, 3, 15, 9, 30, 0).single().expect("timestamp"),
            status: PostStatus::Scheduled,
            platform: None,
        };
        let json = serde_json::to_value(&post).expect("serializes");
        assert!(json.get("userId").is_some());
        assert!(json.get("scheduledAt").is_some());
        assert_eq!(json["status"], "scheduled");
    }

    #[test]
    fn instant_round_trips_through_json() {
        let at = Utc.with_ymd_and_hms(2024, 3, 15, 9, 30, 0).single().expect("timestamp");
        let post = ScheduledPost {
            id: "p1".into(),
            user_id: "user-1".into(),
            content: "hello".into(),
            image_url: None,
            scheduled_at: at,
            status: PostStatus::Scheduled,
            platform: None,
        };
        let json = serde_json::to_string(&post).expect("serializes");
        let back: ScheduledPost = serde_json::from_str(&json).expect("deserializes");
        assert_eq!(back.scheduled_at, at);
    }
}
