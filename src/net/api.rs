//! REST call for the login endpoint.
//!
//! Client-side (hydrate): real HTTP call via `gloo-net`.
//! Server-side (SSR): stub returning an error since logging in is only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures are reported as `LoginError` and collapsed into a `SubmitOutcome`
//! with `LoginError::outcome`. No retry and no timeout are applied here.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
use super::types::LoginResponse;
use super::types::{Credentials, SubmitOutcome, User};

/// Why a login request did not produce a signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("login request failed: {0}")]
    Transport(String),
    #[error("credentials rejected: {0}")]
    Rejected(u16),
    #[error("server error: {0}")]
    Server(u16),
    #[error("malformed login response: {0}")]
    Decode(String),
}

impl LoginError {
    /// Map onto the tri-state the login form understands.
    ///
    /// Every non-network failure reads as invalid credentials.
    #[must_use]
    pub fn outcome(&self) -> SubmitOutcome {
        match self {
            Self::Rejected(_) => SubmitOutcome::InvalidCredentials,
            Self::Transport(_) | Self::Server(_) | Self::Decode(_) => SubmitOutcome::NetworkError,
        }
    }
}

/// Coarse classification of a login response status.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StatusClass {
    Ok,
    Rejected,
    Failed,
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn classify_status(status: u16) -> StatusClass {
    match status {
        200..=299 => StatusClass::Ok,
        400 | 401 | 403 | 422 => StatusClass::Rejected,
        _ => StatusClass::Failed,
    }
}

/// Interpret a decoded `2xx` body.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn interpret_response(status: u16, body: LoginResponse) -> Result<Option<User>, LoginError> {
    match SubmitOutcome::from_login_result(&body.ok) {
        SubmitOutcome::Success => Ok(body.user),
        SubmitOutcome::InvalidCredentials => Err(LoginError::Rejected(status)),
        SubmitOutcome::NetworkError => Err(LoginError::Server(status)),
    }
}

/// Decode and interpret the text of a `2xx` body.
///
/// An empty body (for example a `204`) carries no `ok` value and reads as a
/// rejection, the same as `{}`.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn parse_body(status: u16, text: &str) -> Result<Option<User>, LoginError> {
    let body = if text.trim().is_empty() {
        LoginResponse::default()
    } else {
        serde_json::from_str(text).map_err(|e| LoginError::Decode(e.to_string()))?
    };
    interpret_response(status, body)
}

/// Map a non-`2xx` status onto an error.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn status_error(status: u16) -> LoginError {
    match classify_status(status) {
        StatusClass::Rejected => LoginError::Rejected(status),
        StatusClass::Ok | StatusClass::Failed => LoginError::Server(status),
    }
}

/// Log in with `POST {endpoint}` and a JSON credentials body.
///
/// Returns the signed-in user when the server includes one.
///
/// # Errors
///
/// Returns `LoginError` if the request cannot be sent, the server rejects the
/// credentials, responds with a failure status, or returns a non-empty body
/// that is not valid JSON.
pub async fn login(endpoint: &str, credentials: &Credentials) -> Result<Option<User>, LoginError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(endpoint)
            .json(credentials)
            .map_err(|e| LoginError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| LoginError::Transport(e.to_string()))?;
        let status = resp.status();
        if classify_status(status) != StatusClass::Ok {
            return Err(status_error(status));
        }
        let text = resp.text().await.map_err(|e| LoginError::Decode(e.to_string()))?;
        parse_body(status, &text)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoint, credentials);
        Err(LoginError::Transport("not available on server".to_owned()))
    }
}
