/**
 * Taskboard API Server Entry Point
 *
 * This is the main entry point for the Taskboard backend server.
 * It loads configuration, connects to MongoDB, and serves the REST API
 * until a shutdown signal arrives.
 */

use taskboard::server::config::AppConfig;
use taskboard::server::init::create_app;
use taskboard::store::Store;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info,taskboard=debug".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let config = AppConfig::from_env();

    tracing::info!("Connecting to MongoDB...");
    let store = Store::connect(&config).await?;
    tracing::info!("Connected to database '{}'", config.database_name);

    let addr = format!("{}:{}", config.app_host, config.app_port);
    let app = create_app(store.clone(), config);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server running at http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped, closing MongoDB connection");
    store.close().await;

    Ok(())
}

/// Resolve when the process receives Ctrl+C
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {:?}", e);
        return;
    }
    tracing::info!("Shutdown signal received");
}
