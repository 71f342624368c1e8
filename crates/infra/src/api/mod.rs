//! Remote collection adapter
//!
//! HTTP/JSON client for the scheduled-posts collection, plus the
//! authentication seam and the snake_case wire DTOs.

pub mod auth;
pub mod client;
pub mod dto;
