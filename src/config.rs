//! Client configuration resolved at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! A WASM bundle has no process environment, so overrides are read with
//! `option_env!` when the crate is compiled and fall back to the defaults
//! below. The resolved config is provided to components through context.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_LOGIN_ENDPOINT: &str = "/api/auth/login";
pub const DEFAULT_REDIRECT: &str = "/";
pub const DEFAULT_SIGNUP_PATH: &str = "/signup";

/// Endpoints and routes the login page depends on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub login_endpoint: String,
    pub default_redirect: String,
    pub signup_path: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            login_endpoint: DEFAULT_LOGIN_ENDPOINT.to_owned(),
            default_redirect: DEFAULT_REDIRECT.to_owned(),
            signup_path: DEFAULT_SIGNUP_PATH.to_owned(),
        }
    }
}

impl ClientConfig {
    /// Build config from compile-time environment variables.
    ///
    /// Optional:
    /// - `LOGIN_ENDPOINT`: default `/api/auth/login`
    /// - `LOGIN_DEFAULT_REDIRECT`: default `/`
    /// - `LOGIN_SIGNUP_PATH`: default `/signup`
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_overrides(
            option_env!("LOGIN_ENDPOINT"),
            option_env!("LOGIN_DEFAULT_REDIRECT"),
            option_env!("LOGIN_SIGNUP_PATH"),
        )
    }

    fn from_overrides(endpoint: Option<&str>, redirect: Option<&str>, signup: Option<&str>) -> Self {
        Self {
            login_endpoint: non_empty_or(endpoint, DEFAULT_LOGIN_ENDPOINT),
            default_redirect: non_empty_or(redirect, DEFAULT_REDIRECT),
            signup_path: non_empty_or(signup, DEFAULT_SIGNUP_PATH),
        }
    }
}

fn non_empty_or(raw: Option<&str>, default: &str) -> String {
    raw.map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(default)
        .to_owned()
}
