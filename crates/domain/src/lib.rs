//! # PostPilot Domain
//!
//! Business domain types and models for PostPilot.
//!
//! This crate contains:
//! - Domain data types (ScheduledPost, Session, etc.)
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants and small utilities
//!
//! ## Architecture
//! - No dependencies on other PostPilot crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
// Re-export title helper used by calendar entry builders
pub use utils::title::truncate_title;
