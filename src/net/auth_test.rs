#![cfg(not(feature = "hydrate"))]

use std::cell::RefCell;

use futures::channel::oneshot;
use futures::executor::block_on;
use leptos::reactive::owner::Owner;

use super::*;

// =============================================================
// Helpers
// =============================================================

type LoginResult = Result<Option<User>, LoginError>;

fn with_auth<T>(initial: AuthState, f: impl FnOnce(RwSignal<AuthState>) -> T) -> T {
    let owner = Owner::new();
    owner.with(|| f(RwSignal::new(initial)))
}

fn alice() -> User {
    User { id: "u1".to_owned(), email: "alice@example.com".to_owned(), name: Some("Alice".to_owned()) }
}

fn bob() -> User {
    User { id: "u2".to_owned(), email: "bob@example.com".to_owned(), name: None }
}

/// Answers every login with a fixed result.
struct FixedLogin(LoginResult);

impl LoginCall for FixedLogin {
    async fn login(&self, _endpoint: &str, _credentials: &Credentials) -> LoginResult {
        self.0.clone()
    }
}

/// Holds the request open until the test releases it.
struct GatedLogin {
    gate: RefCell<Option<oneshot::Receiver<LoginResult>>>,
    endpoints: RefCell<Vec<String>>,
}

impl LoginCall for GatedLogin {
    async fn login(&self, endpoint: &str, _credentials: &Credentials) -> LoginResult {
        self.endpoints.borrow_mut().push(endpoint.to_owned());
        let gate = self.gate.borrow_mut().take();
        match gate {
            Some(rx) => rx.await.unwrap_or_else(|_| Err(LoginError::Transport("dropped".to_owned()))),
            None => Err(LoginError::Transport("no gate".to_owned())),
        }
    }
}

// =============================================================
// Loading flag
// =============================================================

#[test]
fn is_loading_reads_shared_state() {
    with_auth(AuthState::default(), |auth| {
        let authenticator = SessionAuthenticator::new(auth, "/api/auth/login");
        assert!(!authenticator.is_loading());
        auth.update(AuthState::begin_login);
        assert!(authenticator.is_loading());
    });
}

#[test]
fn loading_is_set_while_request_is_in_flight() {
    with_auth(AuthState::default(), |auth| {
        let (tx, rx) = oneshot::channel();
        let call = GatedLogin { gate: RefCell::new(Some(rx)), endpoints: RefCell::new(Vec::new()) };
        let authenticator = SessionAuthenticator::with_call(auth, "/api/auth/login", call);
        let creds = Credentials::new("alice@example.com", "pw");

        let authenticator = &authenticator;
        let creds = &creds;
        let (outcome, loading_mid_flight) = block_on(async move {
            let attempt = authenticator.authenticate(creds);
            let observer = async move {
                let loading = authenticator.is_loading();
                let _ = tx.send(Ok(Some(alice())));
                loading
            };
            futures::join!(attempt, observer)
        });

        assert!(loading_mid_flight);
        assert_eq!(outcome, SubmitOutcome::Success);
        assert!(!authenticator.is_loading());
        assert_eq!(*authenticator.call.endpoints.borrow(), vec!["/api/auth/login".to_owned()]);
    });
}

// =============================================================
// Outcomes
// =============================================================

#[test]
fn success_records_user() {
    with_auth(AuthState::default(), |auth| {
        let authenticator = SessionAuthenticator::with_call(auth, "/login", FixedLogin(Ok(Some(alice()))));
        let outcome = block_on(authenticator.authenticate(&Credentials::new("alice@example.com", "pw")));
        assert_eq!(outcome, SubmitOutcome::Success);
        assert_eq!(auth.with_untracked(|state| state.user.clone()), Some(alice()));
        assert!(!authenticator.is_loading());
    });
}

#[test]
fn success_replaces_previous_user() {
    let signed_in = AuthState { user: Some(alice()), loading: false };
    with_auth(signed_in, |auth| {
        let authenticator = SessionAuthenticator::with_call(auth, "/login", FixedLogin(Ok(Some(bob()))));
        block_on(authenticator.authenticate(&Credentials::new("bob@example.com", "pw")));
        assert_eq!(auth.with_untracked(|state| state.user.clone()), Some(bob()));
    });
}

#[test]
fn success_without_user_does_not_keep_stale_identity() {
    let signed_in = AuthState { user: Some(alice()), loading: false };
    with_auth(signed_in, |auth| {
        let authenticator = SessionAuthenticator::with_call(auth, "/login", FixedLogin(Ok(None)));
        let outcome = block_on(authenticator.authenticate(&Credentials::new("bob@example.com", "pw")));
        assert_eq!(outcome, SubmitOutcome::Success);
        assert!(auth.with_untracked(|state| state.user.is_none()));
    });
}

#[test]
fn rejection_keeps_user_and_reports_invalid_credentials() {
    let signed_in = AuthState { user: Some(alice()), loading: false };
    with_auth(signed_in, |auth| {
        let authenticator = SessionAuthenticator::with_call(auth, "/login", FixedLogin(Err(LoginError::Rejected(401))));
        let outcome = block_on(authenticator.authenticate(&Credentials::new("alice@example.com", "bad")));
        assert_eq!(outcome, SubmitOutcome::InvalidCredentials);
        assert_eq!(auth.with_untracked(|state| state.user.clone()), Some(alice()));
        assert!(!authenticator.is_loading());
    });
}

#[test]
fn http_login_off_browser_reports_network_error() {
    with_auth(AuthState::default(), |auth| {
        let authenticator = SessionAuthenticator::new(auth, "/api/auth/login");
        let creds = Credentials::new("a@b.com", "pw");
        let outcome = block_on(authenticator.authenticate(&creds));
        assert_eq!(outcome, SubmitOutcome::NetworkError);
        assert!(!authenticator.is_loading());
        assert!(auth.with_untracked(|state| state.user.is_none()));
    });
}
