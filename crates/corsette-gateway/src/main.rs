//! corsette gateway binary.
//!
//! - Config: `$CORSETTE_CONFIG` (default `corsette.yaml`), `$FRONTEND_URL` override
//! - Routes: `GET /healthz`, all wrapped by the CORS hook
//! - Graceful shutdown on Ctrl-C

use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

use corsette_core::error::{CorsetteError, Result};
use corsette_gateway::{app_state::AppState, config, router};

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    if let Err(e) = run().await {
        tracing::error!(code = e.client_code().as_str(), error = %e, "corsette-gateway failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cfg = config::load()?;
    let listen = cfg.server.listen_addr()?;

    let state = AppState::new(cfg);
    let app = router::build_router(state);

    tracing::info!(%listen, "corsette-gateway starting");
    let listener = TcpListener::bind(listen)
        .await
        .map_err(|e| CorsetteError::Internal(format!("bind {listen} failed: {e}")))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| CorsetteError::Internal(format!("server failed: {e}")))?;

    tracing::info!("corsette-gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "ctrl-c handler unavailable; running until killed");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
