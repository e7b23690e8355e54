use axum::{
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Redirect},
    routing::{get, post},
    Router,
};
use serde::Deserialize;

use shopflow_auth::{AuthSession, Credentials};

pub const HANDOFF_URL: &str = "/auth/handoff";
pub const LOGOUT_URL: &str = "/auth/logout";

#[derive(Clone, Deserialize)]
pub struct HandoffQuery {
    token: String,
    next: Option<String>,
}

pub fn router<T>() -> Router<T>
where
    T: Clone + Send + Sync + 'static,
{
    Router::new()
        .route(HANDOFF_URL, get(handoff))
        .route(LOGOUT_URL, post(logout))
}

/// Only same-site paths are followed after a hand-off. Browsers strip tabs and
/// newlines from a `Location`, so no control or whitespace character may appear.
fn safe_next(next: Option<&str>) -> &str {
    match next {
        Some(next)
            if next.starts_with('/')
                && !next.starts_with("//")
                && !next.contains('\\')
                && !next.chars().any(|c| c.is_ascii_control() || c.is_whitespace()) =>
        {
            next
        }
        _ => "/",
    }
}

async fn handoff(
    mut auth_session: AuthSession,
    Query(HandoffQuery { token, next }): Query<HandoffQuery>,
) -> impl IntoResponse {
    let user = match auth_session.authenticate(Credentials { token }).await {
        Ok(Some(user)) => user,
        Ok(None) => return Redirect::to("/").into_response(),
        Err(err) => {
            tracing::error!("hand-off authentication failed: {err}");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    if let Err(err) = auth_session.login(&user).await {
        tracing::error!("could not log in user {}: {err}", user.id);
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    tracing::info!(user_id = user.id, "session handed off");

    Redirect::to(safe_next(next.as_deref())).into_response()
}

async fn logout(mut auth_session: AuthSession) -> impl IntoResponse {
    match auth_session.logout().await {
        Ok(_) => Redirect::to("/").into_response(),
        Err(err) => {
            tracing::error!("problem logging out: {err}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
