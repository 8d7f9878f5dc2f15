use crate::{CoreError, Result as CoreResult};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Prefix of ids minted for self-issued demo identities.
pub const LOCAL_ID_PREFIX: &str = "demo-user-";

/// The signed-in user.
///
/// Serialized with camelCase keys (`id`, `emailAddress`, `displayName`,
/// `isLocal`). The browser-era keys `uid`, `email` and `isDemo` are still
/// accepted when reading old records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    #[serde(alias = "uid")]
    pub id: String,
    #[serde(alias = "email", default)]
    pub email_address: Option<String>,
    #[serde(default)]
    pub display_name: String,
    #[serde(alias = "isDemo", default)]
    pub is_local: bool,
}

impl Identity {
    /// Mints a self-issued identity for the demo sign-in path.
    ///
    /// The email is trimmed; an empty or whitespace-only value is rejected.
    #[track_caller]
    pub fn local(email_address: &str) -> CoreResult<Self> {
        let email = normalize_email(email_address)
            .ok_or_else(|| CoreError::validation("email_address", "Please enter an email"))?;

        Ok(Self {
            id: format!("{LOCAL_ID_PREFIX}{}", Uuid::new_v4()),
            email_address: Some(email.to_string()),
            display_name: display_name_from_email(email).to_string(),
            is_local: true,
        })
    }

    /// Builds an identity reported by an external provider.
    ///
    /// A missing or blank display name is derived from the email local-part,
    /// or falls back to the id when the provider supplied no email.
    pub fn external(
        id: impl Into<String>,
        email_address: Option<String>,
        display_name: Option<String>,
    ) -> Self {
        let id = id.into();
        let email_address = email_address.filter(|e| !e.trim().is_empty());

        let display_name = match display_name.filter(|n| !n.trim().is_empty()) {
            Some(name) => name,
            None => match email_address.as_deref() {
                Some(email) => display_name_from_email(email).to_string(),
                None => id.clone(),
            },
        };

        Self {
            id,
            email_address,
            display_name,
            is_local: false,
        }
    }

    /// Name shown in the "Welcome, ..." header.
    pub fn greeting_name(&self) -> &str {
        if self.display_name.is_empty() {
            self.email_address.as_deref().unwrap_or(&self.id)
        } else {
            &self.display_name
        }
    }
}

/// Text before the first `@`, or the whole input when there is none.
pub fn display_name_from_email(email: &str) -> &str {
    email.split_once('@').map_or(email, |(local, _)| local)
}

/// Trims the input and rejects it when nothing is left.
pub fn normalize_email(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
