//! Page context: the guard + fetch + interpret sequence every view shares.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::task::JoinHandle;

use crate::guard::{self, ViewPolicy};
use crate::interpret::{Outcome, interpret};
use crate::{
    ClientConfig, ClientResult, Endpoint, HttpClient, Navigator, NetworkHttpClient, Session,
    SessionStore, View,
};

/// Capabilities injected into every view
pub struct PageContext<H: HttpClient = NetworkHttpClient> {
    pub http: Arc<H>,
    pub store: Arc<dyn SessionStore>,
    pub navigator: Arc<dyn Navigator>,
    pub config: Arc<ClientConfig>,
}

impl<H: HttpClient> Clone for PageContext<H> {
    fn clone(&self) -> Self {
        Self {
            http: Arc::clone(&self.http),
            store: Arc::clone(&self.store),
            navigator: Arc::clone(&self.navigator),
            config: Arc::clone(&self.config),
        }
    }
}

impl PageContext<NetworkHttpClient> {
    /// Network client built from `config`
    pub fn connect(
        config: ClientConfig,
        store: Arc<dyn SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> ClientResult<Self> {
        let http = NetworkHttpClient::new(&config)?;
        Ok(Self::new(http, store, navigator, config))
    }
}

impl<H: HttpClient> PageContext<H> {
    pub fn new(
        http: H,
        store: Arc<dyn SessionStore>,
        navigator: Arc<dyn Navigator>,
        config: ClientConfig,
    ) -> Self {
        Self {
            http: Arc::new(http),
            store,
            navigator,
            config: Arc::new(config),
        }
    }

    /// Run the entry guard for `policy`.
    ///
    /// On refusal the user is alerted (per policy), redirected, and `None`
    /// is returned; the caller must stop.
    pub fn enter(&self, policy: ViewPolicy) -> Option<Session> {
        match guard::require(self.store.as_ref(), policy) {
            Ok(session) => Some(session),
            Err(e) => {
                tracing::info!(reason = %e, redirect = %e.redirect_to(), "Guard refused entry");
                if e.alerts(&policy) {
                    self.navigator.alert(&e.to_string());
                }
                self.navigator.navigate(e.redirect_to());
                None
            }
        }
    }

    /// Send one request and interpret the envelope. No guard.
    pub async fn call<T, B>(&self, endpoint: Endpoint, body: Option<&B>) -> Outcome<T>
    where
        T: DeserializeOwned,
        B: Serialize + Sync,
    {
        let result = self.http.request::<T, B>(endpoint, body).await;
        interpret(&endpoint.path(), result)
    }

    /// [`PageContext::call`] for GET endpoints
    pub async fn fetch<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Outcome<T> {
        self.call::<T, ()>(endpoint, None).await
    }

    /// Guard, build the body from the session, call, interpret.
    ///
    /// Returns `None` without touching the network when the guard redirects.
    pub async fn guarded<T, B, F>(
        &self,
        policy: ViewPolicy,
        endpoint: Endpoint,
        build: F,
    ) -> Option<(Session, Outcome<T>)>
    where
        T: DeserializeOwned,
        B: Serialize + Sync,
        F: FnOnce(&Session) -> Option<B>,
    {
        let session = self.enter(policy)?;
        let body = build(&session);
        let outcome = self.call(endpoint, body.as_ref()).await;
        Some((session, outcome))
    }

    /// Navigate immediately
    pub fn navigate(&self, view: View) {
        self.navigator.navigate(view);
    }

    /// Navigate once after the configured delay
    pub fn navigate_after(&self, view: View) -> JoinHandle<()> {
        let navigator = Arc::clone(&self.navigator);
        let delay = self.config.redirect_delay();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            navigator.navigate(view);
        })
    }
}
