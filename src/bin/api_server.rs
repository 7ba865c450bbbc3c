// Documentation server binary entry point
//
// Usage: cargo run --bin api_server

use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use zulip_docs::{create_router, AppState, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Pick up a local .env before anything reads the environment
    let dotenv = dotenvy::dotenv();

    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Default log level: info for our crate, warn for others
                    "zulip_docs=info,tower_http=debug,axum=debug,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Ok(path) = dotenv {
        tracing::info!("Loaded environment from {}", path.display());
    }

    tracing::info!("Starting documentation server...");

    let settings = Settings::from_env()?;
    tracing::info!("Configuration:");
    tracing::info!("  EXTERNAL_HOST: {}", settings.external_host);
    tracing::info!("  EXTERNAL_API_PATH: {}", settings.external_api_path);
    tracing::info!("  ROOT_DOMAIN_LANDING_PAGE: {}", settings.root_domain_landing_page);
    tracing::info!("  TEMPLATES_DIR: {}", settings.templates_dir.display());
    tracing::info!("  PORT: {}", settings.port);

    let port = settings.port;
    let state = AppState::new(settings)?;
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
