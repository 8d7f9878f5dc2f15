use ln_core::Identity;

/// Who is signed in, and how.
///
/// Holding the identity inside the variant means an external and a local
/// identity can never be active at the same time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    SignedOut,
    SignedInExternal(Identity),
    SignedInLocal(Identity),
}

impl SessionState {
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::SignedOut => None,
            Self::SignedInExternal(identity) | Self::SignedInLocal(identity) => Some(identity),
        }
    }

    pub fn is_signed_in(&self) -> bool {
        !matches!(self, Self::SignedOut)
    }

    pub fn is_external(&self) -> bool {
        matches!(self, Self::SignedInExternal(_))
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::SignedOut => "signed-out",
            Self::SignedInExternal(_) => "signed-in-external",
            Self::SignedInLocal(_) => "signed-in-local",
        }
    }

    /// Screen to render for this state.
    pub fn view(&self) -> View {
        match self.identity() {
            Some(identity) => View::Notes(identity.clone()),
            None => View::SignIn,
        }
    }
}

/// The screen the app shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    SignIn,
    /// The notes view, scoped to this identity
    Notes(Identity),
}
