use axum::{routing::get, Router};
use axum_extra::routing::RouterExt;
use configuration::Config;
use simulator::MockMarket;
use std::sync::Arc;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowHeaders, AllowOrigin, Any, CorsLayer, ExposeHeaders},
    trace::TraceLayer,
};

pub mod error;
pub mod handlers;

/// The shared application state that all handlers can access.
#[derive(Clone)]
pub struct AppState {
    pub market: MockMarket,
}

/// Builds the application router with its middleware stack.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(Any)
        .allow_headers(AllowHeaders::any())
        .expose_headers(ExposeHeaders::any());

    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .typed_get(handlers::get_stock_prices)
        .typed_get(handlers::get_stock_prices_with_slash)
        .route("/api/correlation", get(handlers::get_correlation))
        .route("/api/correlation/", get(handlers::get_correlation))
        .with_state(state)
        .layer(CatchPanicLayer::custom(error::handle_panic))
        .layer(cors)
        // Logs information about every incoming request.
        .layer(TraceLayer::new_for_http())
}

/// Binds the configured address and serves until Ctrl-C or SIGTERM.
pub async fn run_server(config: &Config) -> anyhow::Result<()> {
    let market = match config.market.seed {
        Some(seed) => {
            tracing::info!(seed, "Serving reproducible data from a seeded generator.");
            MockMarket::seeded(seed)
        }
        None => MockMarket::live(),
    };
    let app = build_router(Arc::new(AppState { market }));

    let listener = tokio::net::TcpListener::bind(config.server.socket_addr()).await?;
    tracing::info!("Mock market server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped.");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C.");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM.");
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
    tracing::info!("Shutdown signal received, draining connections.");
}
