//! Response interpretation
//!
//! Collapses a request result into one of three outcomes. Transport
//! failures are logged with full detail and reduced to a generic message,
//! so a view never has to look at a [`ClientError`].

use shared::ApiResponse;

use crate::{ClientError, ClientResult};

/// Shown for any network or decoding failure
pub const NETWORK_ERROR_TEXT: &str = "Network error, please check that the server is running";

/// Interpreted result of one backend call
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// `code == 200`
    Success { message: String, data: Option<T> },
    /// Any other code; `message` is the server's text
    Failure { code: i32, message: String },
    /// Connection failure or undecodable body
    Transport { message: String },
}

impl<T> Outcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Success { message, .. }
            | Self::Failure { message, .. }
            | Self::Transport { message } => message,
        }
    }

    /// Payload of a successful call
    pub fn into_data(self) -> Option<T> {
        match self {
            Self::Success { data, .. } => data,
            _ => None,
        }
    }

    /// Terminal request state for this outcome
    pub fn state(&self) -> RequestState {
        if self.is_success() {
            RequestState::Success
        } else {
            RequestState::Error
        }
    }

    /// Inline message for this outcome
    pub fn feedback(&self) -> Feedback {
        match self {
            Self::Success { message, .. } => Feedback::success(message.clone()),
            Self::Failure { message, .. } | Self::Transport { message } => {
                Feedback::error(message.clone())
            }
        }
    }

    /// Like [`Outcome::feedback`], with `fallback` replacing an empty server message
    pub fn feedback_or(&self, fallback: &str) -> Feedback {
        let mut feedback = self.feedback();
        if feedback.text.is_empty() {
            feedback.text = fallback.to_string();
        }
        feedback
    }
}

/// Interpret a request result. `context` names the operation in logs.
pub fn interpret<T>(context: &str, result: ClientResult<ApiResponse<T>>) -> Outcome<T> {
    match result {
        Ok(resp) if resp.is_success() => Outcome::Success {
            message: resp.message,
            data: resp.data,
        },
        Ok(resp) => {
            tracing::info!(context, code = resp.code, message = %resp.message, "Request rejected");
            Outcome::Failure {
                code: resp.code,
                message: resp.message,
            }
        }
        Err(e) => transport_failure(context, &e),
    }
}

/// Log `error` and produce the generic transport outcome
pub fn transport_failure<T>(context: &str, error: &ClientError) -> Outcome<T> {
    tracing::error!(context, error = %error, "Request failed");
    Outcome::Transport {
        message: NETWORK_ERROR_TEXT.to_string(),
    }
}

/// Per-view request state: `Idle → Loading → {Success, Error}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Success,
    Error,
}

/// Inline message area of a form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub text: String,
}

impl Feedback {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: FeedbackKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: FeedbackKind::Error,
            text: text.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == FeedbackKind::Error
    }
}
