use std::net::SocketAddr;

use axum::Router;
use configs::AppConfig;
use service::runtime;
use tokio::net::TcpListener;
use tracing::info;

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;

/// Open the stores described by `cfg` and build the router around them.
pub async fn build_app(cfg: &AppConfig) -> Result<Router, StartupError> {
    let paths = cfg.storage.paths();
    common::env::ensure_data_dir(&cfg.storage.data_dir)
        .await
        .map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    let stores = runtime::open_stores(&paths, cfg.storage.seed_sample_data).await?;
    info!(
        news_file = %paths.news_file.display(),
        settings_file = %paths.settings_file.display(),
        "storage ready"
    );
    let state = ServerState::from_stores(stores, cfg.ticker.limit);
    Ok(routes::build_router(state, routes::build_cors()))
}

fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    let raw = cfg.bind_addr();
    raw.parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bad bind address {raw}: {e}")))
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!(event = "shutdown_signal", "received Ctrl+C, shutting down");
    }
}

/// Public entry: build the app and serve it until Ctrl+C
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&cfg).await?;
    let addr = bind_addr(&cfg)?;
    let listener = TcpListener::bind(addr).await.map_err(StartupError::from)?;
    info!(%addr, "news service listening");
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
    Ok(())
}
