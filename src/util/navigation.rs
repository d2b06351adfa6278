//! Navigation capability and post-login redirect resolution.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page that required authentication sends the user to
//! `/login?from=<path>`. The target is read once when the login page mounts;
//! a successful login navigates there, or to the default landing route.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use leptos_router::NavigateOptions;

use crate::config::DEFAULT_REDIRECT;

/// Something that can move the app to another route.
pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// Adapter over the router's `use_navigate()` function.
#[derive(Clone)]
pub struct RouterNavigator<F> {
    navigate: F,
}

impl<F> RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    pub fn new(navigate: F) -> Self {
        Self { navigate }
    }
}

impl<F> Navigator for RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    fn navigate(&self, path: &str) {
        log::debug!("navigating to {path}");
        (self.navigate)(path, NavigateOptions::default());
    }
}

/// Query parameter carrying the originating route.
pub const FROM_PARAM: &str = "from";

/// Route to open after a successful login.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RedirectTarget(String);

impl RedirectTarget {
    /// Resolve from the recorded `from` value, falling back to `default`.
    ///
    /// Only same-origin absolute paths are accepted; empty, relative or
    /// protocol-relative values fall back. A `default` that is not a local
    /// path is itself replaced by `DEFAULT_REDIRECT`.
    #[must_use]
    pub fn resolve(from: Option<&str>, default: &str) -> Self {
        let default = Some(default.trim()).filter(|p| is_local_path(p)).unwrap_or(DEFAULT_REDIRECT);
        let path = from.map(str::trim).filter(|p| is_local_path(p)).unwrap_or(default);
        Self(path.to_owned())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_local_path(path: &str) -> bool {
    path.starts_with('/') && !path.starts_with("//") && !path.contains('\\')
}
