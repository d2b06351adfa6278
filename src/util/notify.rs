//! Blocking user notifications for failed login attempts.
//!
//! Browser builds use `window.alert`, which blocks until dismissed. Outside
//! the browser the notice is only logged.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

/// A fixed, user-facing failure message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notice {
    NetworkError,
    InvalidCredentials,
}

impl Notice {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::NetworkError => "No internet or server is not responding. Please try again later.",
            Self::InvalidCredentials => "Invalid credentials. Please check your email or password.",
        }
    }
}

/// Something that can show a notice to the user.
pub trait Notifier {
    fn notify(&self, notice: Notice);
}

/// Notifier backed by `window.alert`.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&self, notice: Notice) {
        log::info!("notifying user: {notice:?}");
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.alert_with_message(notice.message()) {
                    log::warn!("alert failed: {e:?}");
                }
            }
        }
    }
}
