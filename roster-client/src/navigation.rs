//! Views and the navigation capability

use crate::guard::{Access, ViewPolicy};

/// The five pages of the roster tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Login,
    /// Default view after login
    Index,
    List,
    Add,
    Update,
}

impl View {
    /// Page document backing this view
    pub fn page(&self) -> &'static str {
        match self {
            Self::Login => "login.html",
            Self::Index => "index.html",
            Self::List => "list.html",
            Self::Add => "add.html",
            Self::Update => "update.html",
        }
    }

    /// Guard applied on entry
    pub fn policy(&self) -> ViewPolicy {
        match self {
            Self::Login => ViewPolicy::public(),
            // index redirects without an alert
            Self::Index => ViewPolicy::session().silent(),
            Self::List | Self::Update => ViewPolicy::session(),
            Self::Add => ViewPolicy::root(),
        }
    }

    pub fn requires_root(&self) -> bool {
        self.policy().access == Access::Root
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.page())
    }
}

/// Page-level side effects a host environment provides
pub trait Navigator: Send + Sync {
    /// Leave the current view
    fn navigate(&self, view: View);
    /// Blocking user notification
    fn alert(&self, message: &str);
}

/// Navigator for headless use: only logs
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNavigator;

impl Navigator for TracingNavigator {
    fn navigate(&self, view: View) {
        tracing::info!(view = %view, "Navigate");
    }

    fn alert(&self, message: &str) {
        tracing::warn!(message = %message, "Alert");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policies() {
        assert_eq!(View::Login.policy().access, Access::Public);
        assert!(!View::Index.policy().announce);
        assert!(View::List.policy().announce);
        assert!(View::Add.requires_root());
        assert!(!View::Update.requires_root());
    }
}
