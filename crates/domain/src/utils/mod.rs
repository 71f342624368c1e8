//! Small domain utilities

pub mod title;
