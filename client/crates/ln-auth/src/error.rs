use crate::SignInErrorCode;

use std::panic::Location;

use error_location::ErrorLocation;
use ln_core::CoreError;
use ln_store::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Identity provider unavailable: {message} {location}")]
    ProviderUnavailable {
        message: String,
        location: ErrorLocation,
    },

    #[error("Sign-in failed ({code}): {message} {location}")]
    SignInFailed {
        code: SignInErrorCode,
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid '{field}': {message} {location}")]
    Validation {
        field: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Provider sign-out failed: {message} {location}")]
    SignOutFailed {
        message: String,
        location: ErrorLocation,
    },

    #[error("Credential store error: {source} {location}")]
    Store {
        #[source]
        source: StoreError,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// Creates ProviderUnavailable error at caller location.
    #[track_caller]
    pub fn provider_unavailable(message: impl Into<String>) -> Self {
        Self::ProviderUnavailable {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates SignInFailed error at caller location.
    #[track_caller]
    pub fn sign_in_failed(code: SignInErrorCode, message: impl Into<String>) -> Self {
        Self::SignInFailed {
            code,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates SignOutFailed error at caller location.
    #[track_caller]
    pub fn sign_out_failed(message: impl Into<String>) -> Self {
        Self::SignOutFailed {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Stable code for logs and tests.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ProviderUnavailable { .. } => "PROVIDER_UNAVAILABLE",
            Self::SignInFailed { .. } => "SIGN_IN_FAILED",
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::SignOutFailed { .. } => "SIGN_OUT_FAILED",
            Self::Store { .. } => "STORE_ERROR",
        }
    }

    /// Classification of a failed interactive sign-in.
    pub fn sign_in_code(&self) -> Option<SignInErrorCode> {
        match self {
            Self::SignInFailed { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Whether the error is shown to the user.
    ///
    /// Provider unavailability falls back to demo mode and provider sign-out
    /// failures are only logged.
    pub fn is_surfaced(&self) -> bool {
        !matches!(
            self,
            Self::ProviderUnavailable { .. } | Self::SignOutFailed { .. }
        )
    }

    /// Text for the sign-in screen.
    pub fn user_message(&self) -> String {
        match self {
            Self::SignInFailed { code, message, .. } => {
                format!("{}\n\nError: {message}", code.user_message())
            }
            Self::Validation { message, .. } => message.clone(),
            Self::Store { source, .. } => source.recovery_hint().to_string(),
            Self::ProviderUnavailable { .. } => {
                "Sign-in with the identity provider is not available.".to_string()
            }
            Self::SignOutFailed { .. } => "Signed out locally.".to_string(),
        }
    }

    /// Re-classifies any failure from an interactive sign-in as `SignInFailed`.
    #[track_caller]
    pub(crate) fn into_sign_in_failure(self) -> Self {
        match self {
            Self::SignInFailed { .. } => self,
            Self::ProviderUnavailable { message, .. } => {
                Self::sign_in_failed(SignInErrorCode::InvalidConfig, message)
            }
            other => Self::sign_in_failed(SignInErrorCode::Unknown, other.to_string()),
        }
    }
}

impl From<CoreError> for AuthError {
    #[track_caller]
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation { field, message, .. } => Self::Validation {
                field,
                message,
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

impl From<StoreError> for AuthError {
    #[track_caller]
    fn from(source: StoreError) -> Self {
        Self::Store {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
