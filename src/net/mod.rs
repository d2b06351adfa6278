//! Networking modules for the login flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the REST call, `auth` exposes it to the form as an
//! `Authenticator`, and `types` defines the wire schema and outcome.

pub mod api;
pub mod auth;
pub mod types;
