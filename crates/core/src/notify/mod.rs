//! Notification window computation and ports

pub mod ports;
pub mod window;
