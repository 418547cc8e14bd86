//! Update-employee view

use serde::de::IgnoredAny;
use shared::render::SelectOption;
use shared::util::parse_int;
use shared::{Employee, EmployeeForm};
use tokio::task::JoinHandle;

use crate::interpret::Outcome;
use crate::{Endpoint, Feedback, HttpClient, PageContext, RequestState, View};

pub const LIST_LOAD_FAILED_TEXT: &str =
    "Failed to load employee list, please check that the server is running";
pub const FETCH_FAILED_TEXT: &str = "Failed to fetch employee";
pub const FETCH_TRANSPORT_FAILED_TEXT: &str =
    "Failed to fetch employee, please check that the server is running";

pub struct UpdateView<H: HttpClient> {
    ctx: PageContext<H>,
    username: Option<String>,
    options: Vec<SelectOption>,
    /// Bound form fields
    pub form: EmployeeForm,
    form_visible: bool,
    feedback: Option<Feedback>,
    state: RequestState,
    pending_redirect: Option<JoinHandle<()>>,
}

impl<H: HttpClient> UpdateView<H> {
    pub fn new(ctx: PageContext<H>) -> Self {
        Self {
            ctx,
            username: None,
            options: vec![SelectOption::prompt()],
            form: EmployeeForm::default(),
            form_visible: false,
            feedback: None,
            state: RequestState::Idle,
            pending_redirect: None,
        }
    }

    /// Guard entry and fill the employee select. Returns `false` if the
    /// view redirected.
    pub async fn enter(&mut self) -> bool {
        let Some((session, outcome)) = self
            .ctx
            .guarded::<Vec<Employee>, (), _>(View::Update.policy(), Endpoint::Employees, |_| None)
            .await
        else {
            return false;
        };
        self.username = Some(session.username);
        self.apply_options(outcome);
        true
    }

    /// Append one option per employee to the select
    pub async fn load_options(&mut self) {
        let outcome = self.ctx.fetch(Endpoint::Employees).await;
        self.apply_options(outcome);
    }

    fn apply_options(&mut self, outcome: Outcome<Vec<Employee>>) {
        match outcome {
            Outcome::Success {
                data: Some(employees),
                ..
            } if !employees.is_empty() => {
                self.options.extend(employees.iter().map(SelectOption::from));
            }
            Outcome::Success { .. } | Outcome::Failure { .. } => {
                self.options = vec![SelectOption::no_data()];
            }
            Outcome::Transport { .. } => self.ctx.navigator.alert(LIST_LOAD_FAILED_TEXT),
        }
    }

    /// React to a select change. An empty value hides the form; otherwise
    /// the employee is fetched and pre-filled.
    pub async fn select(&mut self, value: &str) {
        let Some(id) = parse_int(value) else {
            self.form_visible = false;
            return;
        };

        match self.ctx.fetch::<Employee>(Endpoint::Employee(id)).await {
            Outcome::Success {
                data: Some(emp), ..
            } => {
                self.form = EmployeeForm::from_employee(&emp);
                self.form_visible = true;
                self.feedback = None;
            }
            Outcome::Success { data: None, .. } | Outcome::Transport { .. } => {
                self.ctx.navigator.alert(FETCH_TRANSPORT_FAILED_TEXT);
            }
            Outcome::Failure { .. } => self.ctx.navigator.alert(FETCH_FAILED_TEXT),
        }
    }

    /// POST /update with the form as-is.
    ///
    /// Not debounced: each call sends its own request.
    pub async fn submit(&mut self) {
        self.feedback = None;
        self.state = RequestState::Loading;

        let body = self.form.to_update();
        let outcome: Outcome<IgnoredAny> = self.ctx.call(Endpoint::Update, Some(&body)).await;

        self.state = outcome.state();
        self.feedback = Some(outcome.feedback());
        if outcome.is_success() {
            tracing::info!(id = ?body.id, "Employee updated");
            // the redirect timer runs from the update reply, not the reload
            self.pending_redirect = Some(self.ctx.navigate_after(View::List));
            self.options = vec![SelectOption::prompt()];
            self.load_options().await;
        }
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn form_visible(&self) -> bool {
        self.form_visible
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    pub fn state(&self) -> RequestState {
        self.state
    }

    /// Handle of the delayed navigation scheduled by the last success
    pub fn take_pending_redirect(&mut self) -> Option<JoinHandle<()>> {
        self.pending_redirect.take()
    }
}
