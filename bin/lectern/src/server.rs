//! Static server for the built client-side site.
//!
//! Files are served from the site directory. Any other route falls back to
//! `index.html` so the client router can resolve it.

use std::path::Path;

use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

/// Create the router serving `site_dir`.
pub fn create_router(site_dir: &Path) -> Router {
    let index = ServeFile::new(site_dir.join("index.html"));
    Router::new().fallback_service(ServeDir::new(site_dir).fallback(index))
}

/// Resolve when Ctrl+C is received.
pub async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {err}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down server");
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use super::*;

    fn site() -> tempfile::TempDir {
        let dir = tempfile::tempdir().expect("create temp dir");
        std::fs::write(dir.path().join("index.html"), "<html>lectern</html>").expect("write");
        std::fs::create_dir_all(dir.path().join("pkg")).expect("mkdir");
        std::fs::write(dir.path().join("pkg/lectern.css"), "body {}").expect("write");
        dir
    }

    async fn get(router: Router, uri: &str) -> (StatusCode, String) {
        let response = router
            .oneshot(Request::get(uri).body(Body::empty()).expect("request"))
            .await
            .expect("response");
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        (status, String::from_utf8_lossy(&body).into_owned())
    }

    #[tokio::test]
    async fn test_serves_static_files() {
        let dir = site();
        let (status, body) = get(create_router(dir.path()), "/pkg/lectern.css").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "body {}");
    }

    #[tokio::test]
    async fn test_client_routes_fall_back_to_index() {
        let dir = site();
        let (status, body) = get(create_router(dir.path()), "/web/css/introduction").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("lectern"));
    }
}
