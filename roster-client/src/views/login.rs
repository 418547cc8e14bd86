//! Login view

use shared::{LoginData, LoginRequest};

use crate::interpret::{NETWORK_ERROR_TEXT, Outcome};
use crate::{Endpoint, HttpClient, PageContext, RequestState, Session, View};

/// Shown when the backend rejects a login without a message
pub const LOGIN_FAILED_TEXT: &str = "Login failed, please try again";

pub struct LoginView<H: HttpClient> {
    ctx: PageContext<H>,
    state: RequestState,
    error: Option<String>,
}

impl<H: HttpClient> LoginView<H> {
    pub fn new(ctx: PageContext<H>) -> Self {
        Self {
            ctx,
            state: RequestState::Idle,
            error: None,
        }
    }

    pub fn state(&self) -> RequestState {
        self.state
    }

    /// Inline error text, if the last attempt failed
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// POST /login; on success store the session and go to the index view.
    pub async fn submit(&mut self, username: &str, password: &str) {
        self.error = None;
        self.state = RequestState::Loading;

        let req = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let outcome: Outcome<LoginData> = self.ctx.call(Endpoint::Login, Some(&req)).await;

        match outcome {
            Outcome::Success {
                data: Some(data), ..
            } => {
                let session = Session::from(data);
                if let Err(e) = session.save(self.ctx.store.as_ref()) {
                    tracing::error!(error = %e, "Failed to persist session");
                    self.fail(NETWORK_ERROR_TEXT.to_string());
                    return;
                }
                tracing::info!(username = %session.username, "Logged in");
                self.state = RequestState::Success;
                self.ctx.navigate(View::Index);
            }
            Outcome::Success { data: None, .. } => {
                tracing::error!("Login succeeded without user data");
                self.fail(NETWORK_ERROR_TEXT.to_string());
            }
            Outcome::Failure { .. } | Outcome::Transport { .. } => {
                let feedback = outcome.feedback_or(LOGIN_FAILED_TEXT);
                self.fail(feedback.text);
            }
        }
    }

    fn fail(&mut self, text: String) {
        self.error = Some(text);
        self.state = RequestState::Error;
    }
}
