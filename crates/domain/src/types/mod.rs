//! Domain data types

pub mod post;
pub mod session;

pub use post::{NewScheduledPost, PostStatus, ScheduledPost, ScheduledPostPatch};
pub use session::Session;
