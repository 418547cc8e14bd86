//! Shared types for the roster client
//!
//! Wire DTOs for the roster backend, the uniform response envelope,
//! form-field coercion and the pure render models used by every view.
//! Nothing in this crate performs I/O.

pub mod client;
pub mod form;
pub mod models;
pub mod render;
pub mod response;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use client::{LoginData, LoginRequest};
pub use form::EmployeeForm;
pub use models::{Employee, EmployeeUpdate, NewEmployee};
pub use response::{ApiResponse, SUCCESS_CODE};
