//! Wire DTOs for the login endpoint and the submission outcome.
//!
//! DESIGN
//! ======
//! `SubmitOutcome` is the only error taxonomy the form sees. Everything richer
//! (HTTP status, transport failure, malformed body) is collapsed into it by the
//! `api` layer before it reaches page code.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Email + password as held by the login form.
#[derive(Clone, Default, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self { email: email.into(), password: password.into() }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// The signed-in user returned by a successful login.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Body of a `2xx` login response.
///
/// `ok` is read with `SubmitOutcome::from_login_result`, so providers that
/// answer with the legacy `true | false | "networkError"` value also work.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub ok: serde_json::Value,
    #[serde(default)]
    pub user: Option<User>,
}

/// Result of one login attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Success,
    /// Any non-network failure, including rejected credentials.
    InvalidCredentials,
    /// Transport failure or a server that did not answer sensibly.
    NetworkError,
}

/// Legacy marker returned by auth providers in place of a boolean.
pub const NETWORK_ERROR_MARKER: &str = "networkError";

impl SubmitOutcome {
    /// Collapse a loosely typed `true | false | "networkError"` result.
    ///
    /// Falsy values (`false`, `null`, `0`, `""`) count as rejected
    /// credentials; any other value counts as success.
    #[must_use]
    pub fn from_login_result(value: &serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::String(s) if s == NETWORK_ERROR_MARKER => Self::NetworkError,
            Value::Null | Value::Bool(false) => Self::InvalidCredentials,
            Value::String(s) if s.is_empty() => Self::InvalidCredentials,
            Value::Number(n) if n.as_f64().is_some_and(|v| v == 0.0 || v.is_nan()) => {
                Self::InvalidCredentials
            }
            _ => Self::Success,
        }
    }
}
