//! Data models
//!
//! Employee records are owned by the backend; the client only holds
//! transient copies for display and form pre-fill.

pub mod employee;

// Re-exports
pub use employee::*;
