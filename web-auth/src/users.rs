use async_trait::async_trait;
use axum_login::{AuthnBackend, UserId};
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::models::User;

/// A session hand-off token issued by the hosting application.
#[derive(Clone, Deserialize)]
pub struct Credentials {
    pub token: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &"[redacted]")
            .finish()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),

    #[error(transparent)]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

#[derive(Debug, Clone)]
pub struct Backend {
    db: SqlitePool,
}

impl Backend {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

/// Applies the `users` schema shipped with this crate.
pub async fn migrate(db: &SqlitePool) -> Result<(), BackendError> {
    sqlx::migrate!().run(db).await?;
    Ok(())
}

#[async_trait]
impl AuthnBackend for Backend {
    type User = User;
    type Credentials = Credentials;
    type Error = BackendError;

    async fn authenticate(
        &self,
        creds: Self::Credentials,
    ) -> Result<Option<Self::User>, Self::Error> {
        if creds.token.is_empty() {
            return Ok(None);
        }
        let user = User::find_by_token(&self.db, &creds.token).await?;
        if user.is_none() {
            tracing::debug!("hand-off token did not match any user");
        }
        Ok(user)
    }

    async fn get_user(&self, user_id: &UserId<Self>) -> Result<Option<Self::User>, Self::Error> {
        Ok(User::get_user(&self.db, *user_id).await?)
    }
}

// We use a type alias for convenience.
//
// Note that we've supplied our concrete backend here.
pub type AuthSession = axum_login::AuthSession<Backend>;
