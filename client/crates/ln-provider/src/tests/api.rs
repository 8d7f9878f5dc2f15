use crate::{SignInRequest, SignInResponse, classify_api_message};

use googletest::assert_that;
use googletest::prelude::{eq, none, some};
use ln_auth::SignInErrorCode;
use serde_json::json;

#[test]
fn given_invalid_api_key_messages_when_classified_then_invalid_config() {
    assert_eq!(
        classify_api_message("INVALID_API_KEY"),
        SignInErrorCode::InvalidConfig
    );
    assert_eq!(
        classify_api_message("API key not valid. Please pass a valid API key."),
        SignInErrorCode::InvalidConfig
    );
}

#[test]
fn given_project_config_messages_when_classified_then_unauthorized_app() {
    assert_eq!(
        classify_api_message("OPERATION_NOT_ALLOWED"),
        SignInErrorCode::UnauthorizedApp
    );
    assert_eq!(
        classify_api_message("PROJECT_NOT_FOUND : no such project"),
        SignInErrorCode::UnauthorizedApp
    );
}

#[test]
fn given_credential_failures_when_classified_then_unknown() {
    for message in [
        "INVALID_PASSWORD",
        "EMAIL_NOT_FOUND",
        "INVALID_LOGIN_CREDENTIALS",
        "TOO_MANY_ATTEMPTS_TRY_LATER : Access disabled",
        "",
    ] {
        assert_eq!(classify_api_message(message), SignInErrorCode::Unknown);
    }
}

#[test]
fn given_request_when_serialized_then_camel_case_with_secure_token() {
    let request = SignInRequest {
        email: "a@b.c",
        password: "secret",
        return_secure_token: true,
    };

    let value = serde_json::to_value(&request).unwrap();

    assert_eq!(
        value,
        json!({"email": "a@b.c", "password": "secret", "returnSecureToken": true})
    );
}

#[test]
fn given_minimal_response_when_deserialized_then_optional_fields_absent() {
    let response: SignInResponse =
        serde_json::from_value(json!({"localId": "uid-1", "idToken": "tok"})).unwrap();

    assert_that!(response.local_id, eq("uid-1"));
    assert_that!(response.email, none());
    assert_that!(response.display_name, none());
    assert_that!(response.expires_in, none());
}

#[test]
fn given_full_response_when_deserialized_then_fields_mapped() {
    let response: SignInResponse = serde_json::from_value(json!({
        "kind": "identitytoolkit#VerifyPasswordResponse",
        "localId": "uid-2",
        "email": "grace@example.com",
        "displayName": "Grace",
        "idToken": "tok",
        "registered": true,
        "refreshToken": "refresh",
        "expiresIn": "3600"
    }))
    .unwrap();

    assert_that!(response.email, some(eq("grace@example.com")));
    assert_that!(response.display_name, some(eq("Grace")));
    assert_that!(response.expires_in, some(eq("3600")));
}
