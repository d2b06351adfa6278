//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render self-contained surfaces and report back to their parent
//! through callbacks; they hold no app-wide state.

pub mod forgot_password_popup;
