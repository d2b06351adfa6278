//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `auth` is the app-wide session context; `login` is local to the login page.

pub mod auth;
pub mod login;
