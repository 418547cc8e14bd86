//! Employee list view

use shared::Employee;
use shared::render::TableBody;

use crate::interpret::Outcome;
use crate::{Endpoint, HttpClient, PageContext, RequestState, View};

pub struct ListView<H: HttpClient> {
    ctx: PageContext<H>,
    username: Option<String>,
    table: TableBody,
    state: RequestState,
}

impl<H: HttpClient> ListView<H> {
    pub fn new(ctx: PageContext<H>) -> Self {
        Self {
            ctx,
            username: None,
            table: TableBody::Rows(Vec::new()),
            state: RequestState::Idle,
        }
    }

    /// Guard entry and load the table. Returns `false` if the view redirected.
    pub async fn load(&mut self) -> bool {
        self.state = RequestState::Loading;
        let Some((session, outcome)) = self
            .ctx
            .guarded::<Vec<Employee>, (), _>(View::List.policy(), Endpoint::Employees, |_| None)
            .await
        else {
            self.state = RequestState::Idle;
            return false;
        };
        self.username = Some(session.username);
        self.apply(outcome);
        true
    }

    /// Fetch the list again without re-running the guard
    pub async fn reload(&mut self) {
        self.state = RequestState::Loading;
        let outcome = self.ctx.fetch(Endpoint::Employees).await;
        self.apply(outcome);
    }

    fn apply(&mut self, outcome: Outcome<Vec<Employee>>) {
        self.state = outcome.state();
        self.table = match outcome {
            Outcome::Success {
                data: Some(employees),
                ..
            } => TableBody::from_employees(&employees),
            Outcome::Success { data: None, .. } => {
                tracing::error!("Employee list succeeded without data");
                self.state = RequestState::Error;
                TableBody::load_failed()
            }
            // a rejected list still renders as "no data"
            Outcome::Failure { .. } => TableBody::no_data(),
            Outcome::Transport { .. } => TableBody::load_failed(),
        };
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn table(&self) -> &TableBody {
        &self.table
    }

    pub fn state(&self) -> RequestState {
        self.state
    }
}
