use cfg_if::cfg_if;

cfg_if! { if #[cfg(feature = "ssr")] {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    use shopflow_web::backend;

    #[tokio::main]
    async fn main() -> anyhow::Result<()> {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "shopflow_web=info,tower_http=info".into()),
            )
            .with(tracing_subscriber::fmt::layer())
            .init();

        let (app, addr) = backend::App::new().await?.router()?;

        tracing::info!("listening on http://{}", &addr);
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        axum::serve(listener, app.into_make_service()).await?;
        Ok(())
    }
}}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // unless we want this to work with e.g., Trunk for a purely client-side app
    // see lib.rs for hydration function instead
}
