//! Background scheduling
//!
//! Lifecycle-managed background tasks. Join handles are tracked,
//! cancellation is explicit, and stop paths are bounded by timeouts.

pub mod error;
pub mod notifications;

pub use error::{SchedulerError, SchedulerResult};
pub use notifications::{NotificationScheduler, NotificationSchedulerConfig};
