//! Session guard
//!
//! Runs before a view's main logic. Failure is never recoverable in place:
//! the caller alerts (if the policy says so) and redirects.
//!
//! The root check is a client-side gate only; the backend applies its own
//! check to `POST /employee/add` and answers 403 on its own terms.

use thiserror::Error;

use crate::navigation::View;
use crate::session::Session;
use crate::storage::SessionStore;

/// What a view requires of the stored session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// No session needed (login)
    Public,
    /// Any logged-in user
    Session,
    /// Logged in with student id 1
    Root,
}

/// Guard configuration for one view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewPolicy {
    pub access: Access,
    /// Alert before redirecting on a missing session
    pub announce: bool,
}

impl ViewPolicy {
    pub fn public() -> Self {
        Self {
            access: Access::Public,
            announce: false,
        }
    }

    pub fn session() -> Self {
        Self {
            access: Access::Session,
            announce: true,
        }
    }

    pub fn root() -> Self {
        Self {
            access: Access::Root,
            announce: true,
        }
    }

    /// Redirect without alerting
    pub fn silent(mut self) -> Self {
        self.announce = false;
        self
    }
}

/// Why a guard refused entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GuardError {
    #[error("Please log in first")]
    AuthRequired,

    #[error("Insufficient privilege: only the root user (student id 1) can add employees")]
    AuthForbidden,
}

impl GuardError {
    /// Where the user is sent
    pub fn redirect_to(&self) -> View {
        match self {
            Self::AuthRequired => View::Login,
            Self::AuthForbidden => View::Index,
        }
    }

    /// Whether an alert precedes the redirect under `policy`
    pub fn alerts(&self, policy: &ViewPolicy) -> bool {
        match self {
            Self::AuthRequired => policy.announce,
            Self::AuthForbidden => true,
        }
    }
}

/// Check the stored session against `policy`.
///
/// `Access::Public` always passes with whatever session is stored (possibly
/// none). An unreadable store counts as no session.
pub fn check(store: &dyn SessionStore, policy: ViewPolicy) -> Result<Option<Session>, GuardError> {
    let session = match Session::load(store) {
        Ok(session) => session,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read session, treating as logged out");
            None
        }
    };

    match policy.access {
        Access::Public => Ok(session),
        Access::Session => session.map(Some).ok_or(GuardError::AuthRequired),
        Access::Root => {
            let session = session.ok_or(GuardError::AuthRequired)?;
            if !session.is_root() {
                return Err(GuardError::AuthForbidden);
            }
            Ok(Some(session))
        }
    }
}

/// [`check`] for views that need a session
pub fn require(store: &dyn SessionStore, policy: ViewPolicy) -> Result<Session, GuardError> {
    check(store, policy)?.ok_or(GuardError::AuthRequired)
}
