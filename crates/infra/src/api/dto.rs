//! Wire DTOs for the remote collection
//!
//! The remote collection speaks snake_case JSON (`scheduled_at`,
//! `image_url`, `user_id`); the in-memory model serializes camelCase for
//! renderers. These DTOs are the mapping layer between the two.

use chrono::{DateTime, Utc};
use postpilot_domain::{NewScheduledPost, PostStatus, ScheduledPost, ScheduledPostPatch};
use serde::{Deserialize, Serialize};

/// One scheduled post as the remote collection serializes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduledPostDto {
    pub id: String,
    pub user_id: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub scheduled_at: DateTime<Utc>,
    pub status: PostStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
}

impl From<ScheduledPostDto> for ScheduledPost {
    fn from(dto: ScheduledPostDto) -> Self {
        Self {
            id: dto.id,
            user_id: dto.user_id,
            content: dto.content,
            image_url: dto.image_url,
            scheduled_at: dto.scheduled_at,
            status: dto.status,
            platform: dto.platform,
        }
    }
}

/// Response envelope of the list endpoint.
#[derive(Debug, Deserialize)]
pub struct ListResponse {
    pub items: Vec<ScheduledPostDto>,
}

/// Body of the create endpoint.
#[derive(Debug, Serialize)]
pub struct CreatePostRequest {
    pub user_id: String,
    pub content: String,
    pub scheduled_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub status: PostStatus,
}

impl From<&NewScheduledPost> for CreatePostRequest {
    fn from(post: &NewScheduledPost) -> Self {
        Self {
            user_id: post.user_id.clone(),
            content: post.content.clone(),
            scheduled_at: post.scheduled_at,
            platform: post.platform.clone(),
            image_url: post.image_url.clone(),
            status: PostStatus::Scheduled,
        }
    }
}

/// Body of the patch endpoint; absent fields are left unchanged remotely.
#[derive(Debug, Serialize)]
pub struct UpdatePostRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl From<&ScheduledPostPatch> for UpdatePostRequest {
    fn from(patch: &ScheduledPostPatch) -> Self {
        Self {
            content: patch.content.clone(),
            scheduled_at: patch.scheduled_at,
            platform: patch.platform.clone(),
            image_url: patch.image_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use postpilot_domain::ScheduledPostPatch;

    use super::*;

    #[test]
    fn dto_parses_snake_case_wire_format() {
        let json = r#"{
            "id": "p1",
            "user_id": "user-1",
            "content": "hello",
            "image_url": "https://cdn.example.com/a.png",
            "scheduled_at": "2024-03-15T09:30:00Z",
            "status": "scheduled",
            "platform": "LinkedIn"
        }"#;
        let dto: ScheduledPostDto = serde_json::from_str(json).expect("parses");
        let post: ScheduledPost = dto.into();
        assert_eq!(post.user_id, "user-1");
        assert_eq!(
            post.scheduled_at,
            Utc.with_ymd_and_hms(2024, 3, 15, 9, 30, 0).single().expect("timestamp")
        );
        assert_eq!(post.status, PostStatus::Scheduled);
    }

    #[test]
    fn reschedule_patch_serializes_only_scheduled_at() {
        let at = Utc.with_ymd_and_hms(2024, 6, 2, 10, 0, 0).single().expect("timestamp");
        let body = UpdatePostRequest::from(&ScheduledPostPatch::reschedule(at));
        let json = serde_json::to_value(&body).expect("serializes");
        assert!(json.get("scheduled_at").is_some());
        assert!(json.get("content").is_none());
        assert!(json.get("platform").is_none());
    }

    #[test]
    fn create_request_uses_snake_case_and_scheduled_status() {
        let post = NewScheduledPost {
            user_id: "user-1".into(),
            content: "hello".into(),
            scheduled_at: Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).single().expect("timestamp"),
            platform: None,
            image_url: None,
        };
        let json = serde_json::to_value(CreatePostRequest::from(&post)).expect("serializes");
        assert!(json.get("user_id").is_some());
        assert!(json.get("userId").is_none());
        assert_eq!(json["status"], "scheduled");
    }
}
