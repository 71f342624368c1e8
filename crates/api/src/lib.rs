//! # PostPilot API
//!
//! Renderer-facing command layer.
//!
//! All calendar views (drag-and-drop grid, month grid, day picker) are
//! interchangeable consumers of the commands in this crate: they read
//! [`commands::CalendarEntry`] values and call back into the commands for
//! every mutation. The [`AppContext`] owns the session, the store and the
//! optional notification scheduler, with an explicit init-on-start /
//! shutdown-on-logout lifecycle.

pub mod commands;
pub mod context;
pub mod utils;

pub use context::AppContext;
