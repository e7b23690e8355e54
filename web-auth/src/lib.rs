use serde::{Deserialize, Serialize};

#[cfg(feature = "ssr")]
pub mod models;
#[cfg(feature = "ssr")]
mod users;

#[cfg(feature = "ssr")]
pub use users::{migrate, AuthSession, Backend, BackendError, Credentials};

/// The part of a signed-in user that is safe to hand to the browser.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrontendUser {
    pub display_name: Option<String>,
}
