//! Scheduled-post store and its ports

pub mod ports;
pub mod store;
