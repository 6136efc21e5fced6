use actix_web::{App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;

use franchise_api::app::{self, AppServices, Storage};
use franchise_api::config::Config;
use franchise_api::middleware::RequestId;
use franchise_api::telemetry;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config
        .validate()
        .context("Configuration validation failed")?;

    // Initialize tracing
    telemetry::init(
        &telemetry::default_directive(&config.app.log_level),
        config.app.log_format,
    );

    tracing::info!("Starting franchise inventory API");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Storage backend: {}", config.app.storage);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    let storage = Storage::connect(&config)
        .await
        .context("Failed to open storage")?;

    if let Some(database) = &config.database {
        tracing::info!(
            "Database pool initialized ({}..{} connections), migrations applied",
            database.pool_size,
            database.max_connections
        );
    }

    let services = AppServices::new(storage);

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let server_services = services.clone();
    let server = HttpServer::new(move || {
        let services = server_services.clone();
        App::new()
            .wrap(RequestId)
            .wrap(TracingLogger::default())
            .configure(move |cfg| app::configure(cfg, &services))
    })
    .workers(config.server.workers)
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await.context("HTTP server failed")?;

    services.storage.close().await;
    tracing::info!("Storage closed, shutting down");

    Ok(())
}
