use anyhow::Result;
use campus_api::{app, config, middleware, server};
use std::time::Duration;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = config::Config::load()?;

    middleware::logging::init_logging(&config.logging)?;
    middleware::init_metrics()?;

    info!("Starting Campus API v{}", env!("CARGO_PKG_VERSION"));

    let pool = persistence::db::create_pool(&(&config.database).into()).await?;
    info!("Database connection established");

    if config.database.run_migrations {
        info!("Running database migrations...");
        persistence::db::run_migrations(&pool).await?;
        info!("Migrations completed");
    }

    let app = app::create_app(&config, pool.clone());

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on {}", addr);

    server::serve(
        listener,
        app,
        server::shutdown_signal(),
        Duration::from_secs(config.server.shutdown_grace_secs),
    )
    .await?;

    pool.close().await;
    Ok(())
}
