//! Shared helpers for command wrappers

pub mod logging;
