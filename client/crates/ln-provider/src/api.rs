use ln_auth::SignInErrorCode;

use serde::{Deserialize, Serialize};

/// Body of `accounts:signInWithPassword`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub return_secure_token: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInResponse {
    pub local_id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    pub id_token: String,
    /// Seconds, sent as a string
    #[serde(default)]
    pub expires_in: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub(crate) error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub(crate) message: String,
}

/// Maps an Identity Toolkit error message onto a sign-in error code.
///
/// Messages look like `INVALID_API_KEY` or `INVALID_PASSWORD : details`; a bad
/// key may also come back as free text starting with "API key not valid".
pub fn classify_api_message(message: &str) -> SignInErrorCode {
    let code = message.split(" : ").next().unwrap_or_default().trim();

    match code {
        "INVALID_API_KEY" => SignInErrorCode::InvalidConfig,
        "OPERATION_NOT_ALLOWED" | "PROJECT_NOT_FOUND" => SignInErrorCode::UnauthorizedApp,
        _ if message.contains("API key not valid") => SignInErrorCode::InvalidConfig,
        _ => SignInErrorCode::Unknown,
    }
}
