//! # Blog API Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_web::{App, HttpServer, web};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use tracing_actix_web::TracingLogger;

use blog_api::telemetry::{TelemetryConfig, init_telemetry};
use blog_api::{AppConfig, AppState, handlers, middleware};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    tracing::info!(
        "Starting blog API server on {}:{}",
        config.host,
        config.port
    );

    let db = blog_infra::connect(&config.database)
        .await
        .context("failed to connect to the post store")?;

    if config.run_migrations {
        Migrator::up(&db, None)
            .await
            .context("failed to apply database migrations")?;
        tracing::info!("Database schema is up to date");
    }

    let state = AppState::new(db, &config).context("failed to build application state")?;
    let cors = config.cors.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::cors::cors(&cors))
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))
    .with_context(|| format!("failed to bind {}:{}", config.host, config.port))?
    .run()
    .await?;

    Ok(())
}
