//! Local state of the login form: credential fields and visibility toggles.
//!
//! DESIGN
//! ======
//! Plain owned fields with explicit setters. The page holds one
//! `LoginFormState` in a `RwSignal`; nothing here touches the DOM, so every
//! transition is testable without a browser.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use crate::net::types::Credentials;

/// Which credential input an edit applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginField {
    Email,
    Password,
}

/// Credentials plus the two independent UI flags.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginFormState {
    credentials: Credentials,
    pub password_visible: bool,
    pub forgot_password_open: bool,
}

impl LoginFormState {
    #[must_use]
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Controlled-input binding: replace the field with the input's value.
    pub fn set_field(&mut self, field: LoginField, value: impl Into<String>) {
        let value = value.into();
        match field {
            LoginField::Email => self.credentials.email = value,
            LoginField::Password => self.credentials.password = value,
        }
    }

    pub fn toggle_visibility(&mut self) {
        self.password_visible = !self.password_visible;
    }

    pub fn open_forgot_password(&mut self) {
        self.forgot_password_open = true;
    }

    pub fn close_forgot_password(&mut self) {
        self.forgot_password_open = false;
    }

    /// `type` attribute for the password input.
    #[must_use]
    pub fn password_input_type(&self) -> &'static str {
        if self.password_visible { "text" } else { "password" }
    }

    /// Accessible label for the eye toggle.
    #[must_use]
    pub fn visibility_label(&self) -> &'static str {
        if self.password_visible { "Hide password" } else { "Show password" }
    }
}

/// Submit button text for the current loading state.
#[must_use]
pub fn submit_label(loading: bool) -> &'static str {
    if loading { "Logging in..." } else { "Login" }
}
