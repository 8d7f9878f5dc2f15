pub mod error;
pub mod identity;

pub use error::{CoreError, Result};
pub use identity::{Identity, LOCAL_ID_PREFIX, display_name_from_email, normalize_email};
