pub mod error;
pub mod identity_provider;
pub mod provider_factory;
pub mod session_broadcaster;
pub mod session_controller;
pub mod session_state;
pub mod sign_in_error_code;
pub mod subscription;

pub use error::{AuthError, Result};
pub use identity_provider::IdentityProvider;
pub use provider_factory::{ProviderFactory, UnavailableProviderFactory};
pub use session_broadcaster::SessionBroadcaster;
pub use session_controller::SessionController;
pub use session_state::{SessionState, View};
pub use sign_in_error_code::SignInErrorCode;
pub use subscription::{IdentityUpdate, Subscription};

#[cfg(test)]
mod tests;
