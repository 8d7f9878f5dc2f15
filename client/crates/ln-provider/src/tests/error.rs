use crate::ProviderError;

use googletest::assert_that;
use googletest::prelude::{contains_substring, eq, some};
use ln_auth::{AuthError, SignInErrorCode};

#[test]
fn given_api_error_when_converted_then_classified_sign_in_failure() {
    let err: AuthError = ProviderError::api_error(400, "INVALID_API_KEY").into();

    assert_that!(err.sign_in_code(), some(eq(SignInErrorCode::InvalidConfig)));
    assert_that!(err.user_message(), contains_substring("Error: INVALID_API_KEY"));
}

#[test]
fn given_json_error_when_converted_then_unknown() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: AuthError = ProviderError::from(json_err).into();

    assert_that!(err.sign_in_code(), some(eq(SignInErrorCode::Unknown)));
}

#[test]
fn given_api_error_when_displayed_then_includes_status() {
    let err = ProviderError::api_error(403, "PROJECT_NOT_FOUND");

    assert_that!(err.to_string(), contains_substring("status: 403"));
    assert_eq!(err.sign_in_code(), SignInErrorCode::UnauthorizedApp);
}
