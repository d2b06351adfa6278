use super::*;

#[test]
fn network_error_message() {
    assert_eq!(
        Notice::NetworkError.message(),
        "No internet or server is not responding. Please try again later."
    );
}

#[test]
fn invalid_credentials_message() {
    assert_eq!(
        Notice::InvalidCredentials.message(),
        "Invalid credentials. Please check your email or password."
    );
}
