use anyhow::Result;
use axum::{
    body::Body,
    extract::{FromRef, State},
    http::Request,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use axum_login::AuthManagerLayerBuilder;
use leptos::prelude::*;
use leptos_axum::{generate_route_list, handle_server_fns_with_context, AxumRouteListing, LeptosRoutes};
use sqlx::SqlitePool;
use std::net::SocketAddr;
use time::Duration;
use tower_http::trace::TraceLayer;
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;
use tracing::Span;

use shopflow_auth::{AuthSession, Backend};

use super::{auth, config::Config};
use crate::app::{self, shell, RouteTable};

/// This takes advantage of Axum's SubStates feature by deriving FromRef. This is the only way to have more than one
/// item in Axum's State. Leptos requires you to have leptosOptions in your State struct for the leptos route handlers
#[derive(FromRef, Debug, Clone)]
pub struct AppState {
    pub leptos_options: LeptosOptions,
    pub routes: Vec<AxumRouteListing>,
    pub route_table: RouteTable,
}

pub struct App {
    pub config: Config,
    pub db: SqlitePool,
    pub session_store: SqliteStore,
}

async fn server_fn_handler(
    State(app_state): State<AppState>,
    auth_session: AuthSession,
    request: Request<Body>,
) -> impl IntoResponse {
    handle_server_fns_with_context(
        move || {
            provide_context(auth_session.clone());
            provide_context(app_state.route_table.clone());
        },
        request,
    )
    .await
}

async fn leptos_routes_handler(
    state: State<AppState>,
    auth_session: AuthSession,
    req: Request<Body>,
) -> Response {
    let State(app_state) = state.clone();
    let leptos_options = app_state.leptos_options.clone();
    let handler = leptos_axum::render_route_with_context(
        app_state.routes.clone(),
        move || {
            provide_context(auth_session.clone());
            provide_context(app_state.route_table.clone());
        },
        move || shell(leptos_options.clone()),
    );
    handler(state, req).await.into_response()
}

impl App {
    pub async fn new() -> Result<Self> {
        // a missing .env is fine; the environment may already be populated
        if let Err(err) = dotenvy::dotenv() {
            tracing::debug!("no .env loaded: {err}");
        }
        let config = Config::from_env()?;

        let db = SqlitePool::connect(&config.database_url).await?;
        shopflow_auth::migrate(&db).await?;

        let session_store = SqliteStore::new(db.clone());
        session_store.migrate().await?;

        Ok(Self {
            config,
            db,
            session_store,
        })
    }

    pub fn router(self) -> Result<(Router, SocketAddr)> {
        // Setting get_configuration(None) means we'll be using cargo-leptos's env values
        // For deployment these variables are:
        // <https://github.com/leptos-rs/start-axum#executing-a-server-on-a-remote-machine-without-the-toolchain>
        // Alternately a file can be specified such as Some("Cargo.toml")
        // The file would need to be included with the executable when moved to deployment
        let conf = get_configuration(None)?;
        let addr = conf.leptos_options.site_addr;
        Ok((self.router_with_options(conf.leptos_options), addr))
    }

    pub fn router_with_options(self, leptos_options: LeptosOptions) -> Router {
        let routes = generate_route_list(app::App);

        let app_state = AppState {
            leptos_options,
            routes: routes.clone(),
            route_table: self.config.route_table(),
        };

        // Session layer.
        // This uses `tower-sessions` to establish a layer that will provide the session
        // as a request extension.
        let session_layer = SessionManagerLayer::new(self.session_store)
            .with_secure(self.config.session_secure)
            .with_same_site(SameSite::Lax) // The hand-off arrives as a cross-site redirect.
            .with_expiry(Expiry::OnInactivity(Duration::days(
                self.config.session_expiry_days,
            )));

        // Auth service.
        //
        // This combines the session layer with our backend to establish the auth
        // service which will provide the auth session as a request extension.
        let backend = Backend::new(self.db.clone());
        let auth_layer = AuthManagerLayerBuilder::new(backend, session_layer).build();

        Router::new()
            .route(
                "/api/{*fn_name}",
                get(server_fn_handler).post(server_fn_handler),
            )
            .leptos_routes_with_handler(routes, get(leptos_routes_handler))
            .fallback(leptos_axum::file_and_error_handler::<AppState, _>(shell))
            .merge(auth::router())
            .layer(auth_layer)
            .layer(TraceLayer::new_for_http().make_span_with(request_span))
            .with_state(app_state)
    }
}

// Query strings carry hand-off tokens, so spans record the path only.
fn request_span(req: &Request<Body>) -> Span {
    tracing::debug_span!(
        "request",
        method = %req.method(),
        path = %req.uri().path(),
        version = ?req.version(),
    )
}
