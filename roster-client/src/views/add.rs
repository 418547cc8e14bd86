//! Add-employee view (root only)

use shared::EmployeeForm;
use shared::response::CreatedId;
use tokio::task::JoinHandle;

use crate::{Endpoint, Feedback, HttpClient, PageContext, RequestState, Session, View};

pub struct AddView<H: HttpClient> {
    ctx: PageContext<H>,
    session: Option<Session>,
    /// Bound form fields
    pub form: EmployeeForm,
    feedback: Option<Feedback>,
    state: RequestState,
    pending_redirect: Option<JoinHandle<()>>,
}

impl<H: HttpClient> AddView<H> {
    pub fn new(ctx: PageContext<H>) -> Self {
        Self {
            ctx,
            session: None,
            form: EmployeeForm::default(),
            feedback: None,
            state: RequestState::Idle,
            pending_redirect: None,
        }
    }

    /// Guard entry (session + root). Returns `false` if the view redirected
    /// and no form should be rendered.
    pub fn enter(&mut self) -> bool {
        self.session = self.ctx.enter(View::Add.policy());
        self.session.is_some()
    }

    /// Whether the form is rendered
    pub fn form_visible(&self) -> bool {
        self.session.is_some()
    }

    /// POST /employee/add with the session's student id.
    ///
    /// Not debounced: each call sends its own request.
    pub async fn submit(&mut self) {
        self.feedback = None;
        self.state = RequestState::Loading;

        let form = self.form.clone();
        let Some((session, outcome)) = self
            .ctx
            .guarded::<CreatedId, _, _>(View::Add.policy(), Endpoint::AddEmployee, |s| {
                Some(form.to_new_employee(s.student_id))
            })
            .await
        else {
            self.session = None;
            self.state = RequestState::Idle;
            return;
        };
        self.session = Some(session);

        self.state = outcome.state();
        self.feedback = Some(outcome.feedback());
        if outcome.is_success() {
            let id = outcome.into_data().map(|created| created.id);
            tracing::info!(?id, name = %form.name, "Employee added");
            self.form.reset();
            self.pending_redirect = Some(self.ctx.navigate_after(View::List));
        }
    }

    pub fn username(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.username.as_str())
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
