//! View controllers
//!
//! One struct per page. Each holds the page's state (what a front-end
//! renders) and exposes the page's actions as async methods.

pub mod add;
pub mod index;
pub mod list;
pub mod login;
pub mod update;

pub use add::AddView;
pub use index::IndexView;
pub use list::ListView;
pub use login::LoginView;
pub use update::UpdateView;
