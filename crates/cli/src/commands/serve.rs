use anyhow::Result;
use std::path::{Path, PathBuf};
use webshelf_http::{AppState, create_router};
use webshelf_storage::Storage;

use crate::ensure_db_dir;

pub(crate) async fn run(db_path: &Path, host: String, port: u16, static_dir: PathBuf) -> Result<()> {
    ensure_db_dir(db_path)?;
    let storage = Storage::new(db_path)?;
    tracing::info!(db = %db_path.display(), "database ready");

    if !static_dir.is_dir() {
        tracing::warn!(dir = %static_dir.display(), "static directory not found, /static will 404");
    }

    let router = create_router(AppState::new(storage), &static_dir);
    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Starting HTTP server on {}", listener.local_addr()?);
    axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
