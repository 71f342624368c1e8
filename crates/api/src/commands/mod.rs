//! Renderer-facing commands

pub mod posts;

pub use posts::{
    create_scheduled_post, delete_scheduled_post, list_scheduled_posts, reschedule_post,
    update_scheduled_post, CalendarEntry, CreatePostInput, UpdatePostInput,
};
