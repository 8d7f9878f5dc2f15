use crate::SignInErrorCode;

#[test]
fn given_sdk_codes_when_classified_then_mapped() {
    let cases = [
        ("auth/invalid-api-key", SignInErrorCode::InvalidConfig),
        ("auth/app-not-authorized", SignInErrorCode::UnauthorizedApp),
        (
            "auth/operation-not-supported-in-this-environment",
            SignInErrorCode::EnvironmentUnsupported,
        ),
        ("auth/popup-closed-by-user", SignInErrorCode::UserCancelled),
        ("auth/cancelled-popup-request", SignInErrorCode::RequestCancelled),
    ];

    for (raw, expected) in cases {
        assert_eq!(SignInErrorCode::from_provider_code(raw), expected, "{raw}");
    }
}

#[test]
fn given_own_names_when_classified_then_round_trip() {
    for code in SignInErrorCode::ALL {
        assert_eq!(SignInErrorCode::from_provider_code(code.as_str()), code);
    }
}

#[test]
fn given_unrecognised_code_when_classified_then_unknown() {
    for raw in ["", "auth/network-request-failed", "INVALID_PASSWORD", "nonsense"] {
        assert_eq!(
            SignInErrorCode::from_provider_code(raw),
            SignInErrorCode::Unknown
        );
    }
}

#[test]
fn given_padded_code_when_classified_then_trimmed() {
    assert_eq!(
        SignInErrorCode::from_provider_code("  auth/popup-closed-by-user \n"),
        SignInErrorCode::UserCancelled
    );
}

#[test]
fn given_each_code_when_displayed_then_kebab_name() {
    assert_eq!(SignInErrorCode::EnvironmentUnsupported.to_string(), "environment-unsupported");
    assert_eq!(SignInErrorCode::Unknown.to_string(), "unknown");
}

#[test]
fn given_each_code_when_user_message_then_distinct_text() {
    let mut messages: Vec<&str> = SignInErrorCode::ALL
        .iter()
        .map(SignInErrorCode::user_message)
        .collect();
    messages.sort_unstable();
    messages.dedup();

    assert_eq!(messages.len(), SignInErrorCode::ALL.len());
}

#[test]
fn given_invalid_config_when_user_message_then_mentions_api_key() {
    assert!(SignInErrorCode::InvalidConfig.user_message().contains("API key"));
}
