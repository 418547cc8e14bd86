//! Index (default) view

use crate::{HttpClient, PageContext, Session, View};

pub struct IndexView<H: HttpClient> {
    ctx: PageContext<H>,
    session: Option<Session>,
}

impl<H: HttpClient> IndexView<H> {
    pub fn new(ctx: PageContext<H>) -> Self {
        Self { ctx, session: None }
    }

    /// Guard entry. Returns `false` if the view redirected.
    pub fn enter(&mut self) -> bool {
        self.session = self.ctx.enter(View::Index.policy());
        self.session.is_some()
    }

    pub fn username(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.username.as_str())
    }

    /// Clear the stored session and return to login
    pub fn logout(&mut self) {
        if let Err(e) = Session::clear(self.ctx.store.as_ref()) {
            tracing::warn!(error = %e, "Failed to clear session");
        }
        if let Some(session) = self.session.take() {
            tracing::info!(username = %session.username, "Logged out");
        }
        self.ctx.navigate(View::Login);
    }
}
