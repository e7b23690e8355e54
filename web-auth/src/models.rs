use axum_login::AuthUser;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

use crate::FrontendUser;

#[derive(Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub display_name: Option<String>,
    pub access_token: String,
}

// Here we've implemented `Debug` manually to avoid accidentally logging the
// access token.
impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("display_name", &self.display_name)
            .field("access_token", &"[redacted]")
            .finish()
    }
}

impl AuthUser for User {
    type Id = i64;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn session_auth_hash(&self) -> &[u8] {
        self.access_token.as_bytes()
    }
}

impl From<User> for FrontendUser {
    fn from(user: User) -> Self {
        FrontendUser {
            display_name: user.display_name,
        }
    }
}

impl User {
    pub async fn get_user(db: &SqlitePool, user_id: i64) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as("select * from users where id = ?")
            .bind(user_id)
            .fetch_optional(db)
            .await
    }

    pub async fn find_by_token(
        db: &SqlitePool,
        access_token: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as("select * from users where access_token = ?")
            .bind(access_token)
            .fetch_optional(db)
            .await
    }

    pub async fn add_user(
        db: &SqlitePool,
        username: &str,
        display_name: Option<&str>,
        access_token: &str,
    ) -> Result<User, sqlx::Error> {
        sqlx::query_as(
            r#"
            insert into users (username, display_name, access_token)
            values (?, ?, ?)
            on conflict(username) do update
            set access_token = excluded.access_token,
                display_name = excluded.display_name
            returning *
            "#,
        )
        .bind(username)
        .bind(display_name)
        .bind(access_token)
        .fetch_one(db)
        .await
    }
}
