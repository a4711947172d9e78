use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use campaignhub_api::config::ServerConfig;
use campaignhub_api::router::build_app_router;
use campaignhub_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "campaignhub_api=debug,campaignhub_core=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = %config.port,
        snapshot = ?config.snapshot_path,
        "Loaded server configuration",
    );

    // --- State ---
    let state = AppState::load(config.clone()).expect("Failed to load snapshot");
    {
        let campaigns = state.campaigns.read().await.len();
        let specifications = state.specifications.read().await.len();
        let brand_rules = state.brand_rules.read().await.len();
        tracing::info!(campaigns, specifications, brand_rules, "Registries ready");
    }

    // --- Router ---
    let app = build_app_router(state.clone());

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    // --- Post-shutdown ---
    tracing::info!("Server stopped accepting connections, cleaning up");

    match state.persist().await {
        Ok(true) => tracing::info!("Snapshot written"),
        Ok(false) => tracing::info!("No snapshot path configured, state discarded"),
        Err(e) => tracing::error!(error = %e, "Failed to write snapshot"),
    }

    tracing::info!("Graceful shutdown complete");
}

/// Wait for SIGINT or SIGTERM to initiate graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
