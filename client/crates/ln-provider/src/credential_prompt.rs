use std::fmt;

use async_trait::async_trait;

/// Email and password entered by the user.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    Credentials(Credentials),
    /// The user backed out of the prompt
    Dismissed,
    /// There is no way to ask, e.g. stdin is not a terminal
    Unsupported,
}

/// Interactive step of a provider sign-in.
#[async_trait]
pub trait CredentialPrompt: Send + Sync {
    async fn request_credentials(&self) -> PromptOutcome;
}
