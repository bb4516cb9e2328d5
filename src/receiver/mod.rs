mod config;
mod errors;
mod handlers;
mod routes;

use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;

use crate::global_constants::LOG_TAG_RECEIVER;

pub use config::{ReceiverConfig, ServeArgs};
use handlers::ReceiverState;

pub fn build_router(upload_dir: PathBuf) -> Router {
    routes::routes().with_state(ReceiverState::new(upload_dir))
}

pub fn ensure_upload_dir(upload_dir: &std::path::Path) -> Result<()> {
    if !upload_dir.exists() {
        std::fs::create_dir_all(upload_dir)
            .with_context(|| format!("creating upload directory {}", upload_dir.display()))?;
        log::info!(
            "{} Created upload directory at {}",
            LOG_TAG_RECEIVER,
            upload_dir.display()
        );
    }
    Ok(())
}

pub async fn run(config: ReceiverConfig) -> Result<()> {
    log::info!("{} Starting receiver with config: {:?}", LOG_TAG_RECEIVER, config);

    ensure_upload_dir(&config.upload_dir)?;
    let app = build_router(config.upload_dir.clone());

    let addr = config.addr();
    let listener = match TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err)
            if err.kind() == ErrorKind::PermissionDenied
                && matches!(config.host.as_str(), "0.0.0.0" | "::") =>
        {
            let fallback_addr = format!("127.0.0.1:{}", config.port);
            log::warn!(
                "{} Permission denied binding to {} ({}). Falling back to {}",
                LOG_TAG_RECEIVER,
                addr,
                err,
                fallback_addr
            );
            TcpListener::bind(&fallback_addr).await?
        }
        Err(err) => return Err(err.into()),
    };

    log::info!(
        "{} Server running at http://{}",
        LOG_TAG_RECEIVER,
        listener.local_addr()?
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("{} Server stopped", LOG_TAG_RECEIVER);
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        log::error!("{} failed to listen for shutdown signal: {}", LOG_TAG_RECEIVER, err);
        std::future::pending::<()>().await;
    }
}
