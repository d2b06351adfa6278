//! Authenticator capability consumed by the login form.
//!
//! SYSTEM CONTEXT
//! ==============
//! The form never talks to the network directly. It is handed an
//! `Authenticator` at construction; `SessionAuthenticator` is the browser
//! implementation, backed by the shared `AuthState` context and a `LoginCall`
//! (the REST `login` call unless another one is supplied).

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::future::Future;

use leptos::prelude::*;

use super::api::{self, LoginError};
use super::types::{Credentials, SubmitOutcome, User};
use crate::state::auth::AuthState;

/// Something that can turn credentials into a login outcome.
pub trait Authenticator {
    /// Attempt a login. Resolves once; never retried by the caller.
    fn authenticate(&self, credentials: &Credentials) -> impl Future<Output = SubmitOutcome>;

    /// Whether an attempt is currently in flight.
    fn is_loading(&self) -> bool;
}

/// The request that actually checks credentials.
pub trait LoginCall {
    fn login(&self, endpoint: &str, credentials: &Credentials) -> impl Future<Output = Result<Option<User>, LoginError>>;
}

/// `LoginCall` over the REST endpoint.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpLogin;

impl LoginCall for HttpLogin {
    async fn login(&self, endpoint: &str, credentials: &Credentials) -> Result<Option<User>, LoginError> {
        api::login(endpoint, credentials).await
    }
}

/// Authenticator that drives the app-wide `AuthState` context.
#[derive(Clone)]
pub struct SessionAuthenticator<C = HttpLogin> {
    auth: RwSignal<AuthState>,
    endpoint: String,
    call: C,
}

impl SessionAuthenticator {
    #[must_use]
    pub fn new(auth: RwSignal<AuthState>, endpoint: impl Into<String>) -> Self {
        Self::with_call(auth, endpoint, HttpLogin)
    }
}

impl<C: LoginCall> SessionAuthenticator<C> {
    pub fn with_call(auth: RwSignal<AuthState>, endpoint: impl Into<String>, call: C) -> Self {
        Self { auth, endpoint: endpoint.into(), call }
    }
}

impl<C: LoginCall> Authenticator for SessionAuthenticator<C> {
    async fn authenticate(&self, credentials: &Credentials) -> SubmitOutcome {
        self.auth.update(AuthState::begin_login);
        log::debug!("login request for {}", credentials.email);

        let result = self.call.login(&self.endpoint, credentials).await;
        match result {
            Ok(user) => {
                self.auth.update(|state| state.finish_login_success(user));
                SubmitOutcome::Success
            }
            Err(e) => {
                log::warn!("login failed: {e}");
                self.auth.update(AuthState::finish_login_failed);
                e.outcome()
            }
        }
    }

    fn is_loading(&self) -> bool {
        self.auth.with_untracked(|state| state.loading)
    }
}
