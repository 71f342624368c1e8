//! # PostPilot Infra
//!
//! Infrastructure adapters for PostPilot.
//!
//! This crate contains:
//! - The HTTP adapter for the remote scheduled-posts collection
//! - Bearer-token storage behind the `AccessTokenProvider` seam
//! - Configuration loading (env-first, file fallback)
//! - The notification scheduler and its headless notifier
//! - Observability initialisation
//!
//! ## Architecture
//! - Implements the port traits defined in `postpilot-core`
//! - All HTTP, secret-storage and timer code lives here

pub mod api;
pub mod config;
pub mod notify;
pub mod observability;
pub mod scheduling;

pub use api::auth::{
    AccessTokenProvider, SessionTokenProvider, StaticTokenProvider, StoredTokenProvider,
};
pub use api::client::ScheduledPostsClient;
pub use notify::LogNotifier;
pub use scheduling::{NotificationScheduler, NotificationSchedulerConfig, SchedulerError};
