//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Notification configuration
pub const NOTIFICATION_LEAD_SECS: u64 = 60;
pub const NOTIFICATION_IDLE_POLL_SECS: u64 = 60;

// Remote collection defaults
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 30;
pub const SCHEDULED_POSTS_PATH: &str = "/api/scheduled-posts";

// Calendar entry labels
pub const MAX_TITLE_LENGTH: usize = 50;
pub const TITLE_TRUNCATE_SUFFIX: &str = "...";

// Token storage
pub const TOKEN_ACCOUNT_NAME: &str = "auth_token";
