use ln_auth::{AuthError, SignInErrorCode};
use ln_store::StoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors from talking to the Identity Toolkit service.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("API error: {message} (status: {status}) {location}")]
    Api {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Provider session store error: {source} {location}")]
    Session {
        #[source]
        source: StoreError,
        location: ErrorLocation,
    },
}

impl ProviderError {
    /// Convert reqwest error with context. The request URL is stripped from the message.
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        let err = err.without_url();
        ProviderError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ProviderError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Create an API error with location
    #[track_caller]
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        ProviderError::Api {
            status,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// How a failed sign-in is reported to the user.
    pub fn sign_in_code(&self) -> SignInErrorCode {
        match self {
            Self::Api { message, .. } => crate::classify_api_message(message),
            _ => SignInErrorCode::Unknown,
        }
    }

    /// Short detail shown under the sign-in error message.
    pub fn detail(&self) -> String {
        match self {
            Self::Api { message, .. } => message.clone(),
            Self::Http { message, .. } | Self::Json { message, .. } => message.clone(),
            Self::Session { source, .. } => source.to_string(),
        }
    }
}

impl From<reqwest::Error> for ProviderError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ProviderError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ProviderError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ProviderError::from_json(err)
    }
}

impl From<StoreError> for ProviderError {
    #[track_caller]
    fn from(source: StoreError) -> Self {
        ProviderError::Session {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ProviderError> for AuthError {
    #[track_caller]
    fn from(err: ProviderError) -> Self {
        AuthError::sign_in_failed(err.sign_in_code(), err.detail())
    }
}

pub type ProviderErrorResult<T> = std::result::Result<T, ProviderError>;
