//! Weather service HTTP server
//!
//! Main entry point for the `/weather` API.

use std::sync::Arc;

use anyhow::Context;
use application::WeatherService;
use infrastructure::{
    AppConfig, AsyncDatabase, AsyncDatabaseConfig, SqliteWeatherRecordStore, WeatherAdapter,
    init_logging,
};
use presentation_http::{AppState, create_router, shutdown_signal};
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is normal outside development
    let dotenv_loaded = dotenv::dotenv().is_ok();

    let config = AppConfig::load().context("Failed to load configuration")?;
    init_logging(&config.logging)?;

    info!(version = env!("CARGO_PKG_VERSION"), dotenv_loaded, "Weather service starting");
    info!(
        host = %config.server.host,
        port = config.server.port,
        database = %config.database.url,
        "Configuration loaded"
    );

    if !config.weather.has_api_key() {
        warn!("WEATHER_API_KEY is not set; creating records will fail");
    }

    let db = AsyncDatabase::new(&AsyncDatabaseConfig::from(&config.database))
        .await
        .context("Failed to open database")?;
    if config.database.run_migrations {
        db.migrate().await.context("Failed to run migrations")?;
    }

    let store = Arc::new(SqliteWeatherRecordStore::new(db.pool().clone()));
    let weather = Arc::new(
        WeatherAdapter::new(config.weather.to_client_config())
            .context("Failed to initialize weather client")?,
    );
    let state = AppState::new(WeatherService::new(store, weather));

    let cors_layer = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer);

    let addr = config.server.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("Server listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await;
    info!("Server shutdown complete");

    Ok(())
}
