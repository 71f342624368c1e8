//! # PostPilot Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The scheduled-post store (the client-side mirror of the remote
//!   collection)
//! - Port/adapter interfaces (traits)
//! - Notification window computation
//!
//! ## Architecture Principles
//! - Only depends on `postpilot-domain`
//! - No HTTP or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod notify;
pub mod posts;

// Re-export specific items to avoid ambiguity
pub use notify::ports::Notifier;
pub use notify::window::{due_within, next_wakeup};
pub use posts::ports::ScheduledPostsApi;
pub use posts::store::ScheduledPostStore;
