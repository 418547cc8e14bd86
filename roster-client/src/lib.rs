//! Roster Client - session-guarded HTTP client for the roster backend
//!
//! Every screen of the roster tool follows the same pattern: check the
//! stored session, send one JSON request, interpret the `{code, message, data}`
//! envelope and update view state or navigate. This crate implements that
//! pattern once ([`PageContext`]) and builds the five views on top of it.

pub mod config;
pub mod error;
pub mod guard;
pub mod http;
pub mod interpret;
pub mod navigation;
pub mod page;
pub mod session;
pub mod storage;
pub mod views;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use guard::{Access, GuardError, ViewPolicy};
pub use http::{Endpoint, HttpClient, NetworkHttpClient};
pub use interpret::{Feedback, FeedbackKind, Outcome, RequestState};
pub use navigation::{Navigator, TracingNavigator, View};
pub use page::PageContext;
pub use session::Session;
pub use storage::{FileStore, MemoryStore, SessionStore};
pub use views::{AddView, IndexView, ListView, LoginView, UpdateView};

// Re-export shared types for convenience
pub use shared::{ApiResponse, Employee, EmployeeForm, EmployeeUpdate, LoginData, NewEmployee};
