//! # Quill API Server
//!
//! The main entry point for the Actix-web HTTP server.

use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod state;
mod telemetry;

use config::{AppConfig, StoreConfig};
use middleware::cors::{Cors, CorsPolicy};
use state::AppState;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    telemetry::init_telemetry(&TelemetryConfig::from_app_config(&config));

    if config.uses_default_secret() && !config.debug {
        tracing::warn!("SECRET_KEY not set; using the development default");
    }

    tracing::info!(
        debug = config.debug,
        origins = ?config.frontend_origins,
        store = match &config.store {
            StoreConfig::Memory => "memory",
            StoreConfig::Database(_) => "database",
        },
        "Starting Quill API Server on {}:{}",
        config.host,
        config.port
    );

    let state = AppState::init(&config.store).await.map_err(|e| {
        tracing::error!("Failed to initialize the post store: {}", e);
        std::io::Error::other(e)
    })?;
    let cors = Arc::new(CorsPolicy::new(&config.frontend_origins));

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::new(cors.clone()))
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_app)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
