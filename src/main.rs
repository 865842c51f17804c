use anyhow::{Context, Result};
use motiv8_site::{
    build_catalog,
    config::Config,
    contact::Submitter,
    server::{create_router, AppState},
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("motiv8_site=info".parse()?),
        )
        .init();

    info!("Starting Motiv8 site service");

    let config = Config::from_env()?;

    // Content defects are fatal: resolve every locale before serving.
    let catalog = build_catalog(&config)?;
    let submitter = Submitter::from_config(&config);

    let state = AppState::new(catalog, submitter, config.base_path.clone());
    let app = create_router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
