//! Serve command - serve the built site locally

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr, bail};
use tokio::net::TcpListener;

use crate::server::{create_router, shutdown_signal};

/// Run the serve command.
///
/// Serves `site_dir` (the client build output) until Ctrl+C.
pub async fn run(site_dir: &Path, port: u16, open_browser: bool) -> Result<()> {
    tracing::info!(?site_dir, port, "Starting server");

    if !site_dir.join("index.html").exists() {
        bail!(
            "{} has no index.html; build the frontend first",
            site_dir.display()
        );
    }

    let app = create_router(site_dir);
    let addr = format!("127.0.0.1:{port}");

    let listener = TcpListener::bind(&addr)
        .await
        .wrap_err_with(|| format!("Failed to bind to {addr}"))?;

    println!();
    println!("  Serving {} at http://{addr}", site_dir.display());
    println!("  Press Ctrl+C to stop");
    println!();

    if open_browser {
        if let Err(err) = open::that(format!("http://{addr}")) {
            tracing::warn!("Failed to open browser: {err}");
        }
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .wrap_err("Server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_serve_requires_index() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let err = run(dir.path(), 0, false).await.unwrap_err();
        assert!(err.to_string().contains("has no index.html"));
    }
}
