use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

use light_acapella_api::{app, config, middleware};
use persistence::{db, PgRecordStore};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = config::Config::load()?;

    middleware::logging::init_logging(&config.logging)?;
    middleware::init_metrics()?;

    info!("Starting Light Acapella API v{}", env!("CARGO_PKG_VERSION"));

    let db_config = db::DatabaseConfig::from(&config.database);
    let pool = db::create_pool(&db_config)
        .await
        .context("failed to connect to the record store database")?;

    info!("Running database migrations...");
    db::run_migrations(&pool).await?;
    info!("Migrations completed");

    let store = Arc::new(PgRecordStore::new(pool));
    let addr = config.socket_addr()?;
    let app = app::create_app(config, store);

    info!("Server listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
