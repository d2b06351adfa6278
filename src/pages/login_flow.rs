//! Login submission: delegate to the authenticator, then navigate or notify.
//!
//! DESIGN
//! ======
//! Capabilities are injected at construction so the page wires in the router,
//! the session context and `window.alert`, while tests wire in doubles. The
//! redirect target is fixed when the submitter is built, i.e. at mount.

#[cfg(test)]
#[path = "login_flow_test.rs"]
mod login_flow_test;

use crate::net::auth::Authenticator;
use crate::net::types::{Credentials, SubmitOutcome};
use crate::util::navigation::{Navigator, RedirectTarget};
use crate::util::notify::{Notice, Notifier};

/// The single user-visible effect of one submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitEffect {
    Navigated(String),
    Notified(Notice),
    /// An attempt was already in flight; the authenticator was not called.
    Ignored,
}

pub struct LoginSubmitter<A, N, T> {
    authenticator: A,
    navigator: N,
    notifier: T,
    redirect: RedirectTarget,
}

impl<A, N, T> LoginSubmitter<A, N, T>
where
    A: Authenticator,
    N: Navigator,
    T: Notifier,
{
    pub fn new(authenticator: A, navigator: N, notifier: T, redirect: RedirectTarget) -> Self {
        Self { authenticator, navigator, notifier, redirect }
    }

    /// Run one login attempt with the credentials currently held by the form.
    pub async fn submit(&self, credentials: &Credentials) -> SubmitEffect {
        if self.authenticator.is_loading() {
            log::debug!("login already in flight, ignoring submit");
            return SubmitEffect::Ignored;
        }

        let outcome = self.authenticator.authenticate(credentials).await;
        match outcome {
            SubmitOutcome::NetworkError => self.notify(Notice::NetworkError),
            SubmitOutcome::InvalidCredentials => self.notify(Notice::InvalidCredentials),
            SubmitOutcome::Success => {
                let target = self.redirect.as_str();
                log::info!("login succeeded, redirecting to {target}");
                self.navigator.navigate(target);
                SubmitEffect::Navigated(target.to_owned())
            }
        }
    }

    /// Navigate to the sign-up route.
    pub fn go_to_signup(&self, signup_path: &str) {
        self.navigator.navigate(signup_path);
    }

    fn notify(&self, notice: Notice) -> SubmitEffect {
        log::warn!("login attempt failed: {notice:?}");
        self.notifier.notify(notice);
        SubmitEffect::Notified(notice)
    }
}
