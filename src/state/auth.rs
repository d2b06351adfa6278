//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owned by the app root and shared through a `RwSignal` context. The login
//! page only reads `loading` to disable its submit control; the authenticator
//! writes both fields.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// Mark a login attempt as in flight.
    pub fn begin_login(&mut self) {
        self.loading = true;
    }

    /// Record a successful login. The new identity replaces any previous one,
    /// even when the server did not describe it.
    pub fn finish_login_success(&mut self, user: Option<User>) {
        self.loading = false;
        self.user = user;
    }

    /// Record a failed login; the current identity is left untouched.
    pub fn finish_login_failed(&mut self) {
        self.loading = false;
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }
}
