use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Router};
use tokio::signal;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

mod config;
mod error;
mod handlers;
mod models;
mod query;
mod store;

use crate::config::Config;
use crate::store::CollectionSource;

/// Shared application state — cheap to clone (all heap behind Arc).
#[derive(Clone)]
pub struct AppState {
    pub employees: Arc<CollectionSource>,
    pub products: Arc<CollectionSource>,
}

impl AppState {
    /// Open both sources according to the configured load mode.
    pub async fn from_config(config: &Config) -> anyhow::Result<Self> {
        let employees =
            CollectionSource::open("employees", &config.employees_path, config.load_mode)
                .await
                .context("failed to load employees")?;
        let products = CollectionSource::open("products", &config.products_path, config.load_mode)
            .await
            .context("failed to load products")?;

        Ok(Self {
            employees: Arc::new(employees),
            products: Arc::new(products),
        })
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    // Structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,collection_service=debug")),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    info!(
        employees = %config.employees_path.display(),
        products = %config.products_path.display(),
        load_mode = ?config.load_mode,
        "Starting collection service"
    );

    let state = AppState::from_config(&config).await?;
    let app = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

fn build_router(state: AppState) -> Router {
    Router::new()
        // ── Health ──────────────────────────────────────────────────────────
        .route("/health", get(handlers::health))

        // ── Employees ───────────────────────────────────────────────────────
        .route("/employees", get(handlers::employees::list_employees))

        // ── Products ────────────────────────────────────────────────────────
        .route("/products", get(handlers::products::list_products))
        .route("/products/:id", get(handlers::products::get_product))

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
