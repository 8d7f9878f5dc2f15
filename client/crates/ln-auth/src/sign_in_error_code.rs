use std::fmt;

/// Why an interactive sign-in did not complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignInErrorCode {
    InvalidConfig,
    UnauthorizedApp,
    EnvironmentUnsupported,
    /// The user dismissed the sign-in prompt
    UserCancelled,
    /// A newer sign-in request superseded this one
    RequestCancelled,
    Unknown,
}

impl SignInErrorCode {
    pub const ALL: [SignInErrorCode; 6] = [
        Self::InvalidConfig,
        Self::UnauthorizedApp,
        Self::EnvironmentUnsupported,
        Self::UserCancelled,
        Self::RequestCancelled,
        Self::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidConfig => "invalid-config",
            Self::UnauthorizedApp => "unauthorized-app",
            Self::EnvironmentUnsupported => "environment-unsupported",
            Self::UserCancelled => "user-cancelled",
            Self::RequestCancelled => "request-cancelled",
            Self::Unknown => "unknown",
        }
    }

    /// Classifies a provider error code.
    ///
    /// Accepts both our kebab-case names and the provider SDK's `auth/...`
    /// codes. Anything unrecognised is `Unknown`.
    pub fn from_provider_code(code: &str) -> Self {
        match code.trim() {
            "invalid-config" | "auth/invalid-api-key" => Self::InvalidConfig,
            "unauthorized-app" | "auth/app-not-authorized" => Self::UnauthorizedApp,
            "environment-unsupported" | "auth/operation-not-supported-in-this-environment" => {
                Self::EnvironmentUnsupported
            }
            "user-cancelled" | "auth/popup-closed-by-user" => Self::UserCancelled,
            "request-cancelled" | "auth/cancelled-popup-request" => Self::RequestCancelled,
            _ => Self::Unknown,
        }
    }

    /// Message shown to the user on the sign-in screen.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidConfig => {
                "Invalid API key. Check your identity provider configuration."
            }
            Self::UnauthorizedApp => {
                "App not authorized. Enable the sign-in method for this app in the provider console."
            }
            Self::EnvironmentUnsupported => {
                "Interactive sign-in is not supported in this environment."
            }
            Self::UserCancelled => "You closed the sign-in prompt.",
            Self::RequestCancelled => "Sign-in was cancelled.",
            Self::Unknown => "Sign-in failed.",
        }
    }
}

impl fmt::Display for SignInErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
