//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. `login_flow` holds the login page's submit logic apart
//! from its view so it can run under test without a DOM.

pub mod login;
pub mod login_flow;
