use axum::{
    routing::{get, MethodRouter},
    Router,
};
use std::path::Path;
use tower_http::services::ServeDir;

use crate::spa::{self, SpaState};

/// Конфигурация всех роутов приложения
///
/// Файлы сборки отдаются из `static_dir`; всё, чего там нет, уходит в SPA fallback.
pub fn configure_routes(static_dir: &Path, index_file: &str) -> Router {
    let spa_state = SpaState::new(static_dir.join(index_file));
    let spa_fallback: MethodRouter = get(spa::spa_fallback).with_state(spa_state);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .fallback_service(ServeDir::new(static_dir).fallback(spa_fallback))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use std::path::PathBuf;
    use tower::ServiceExt;

    const INDEX_HTML: &str = "<!DOCTYPE html><div id=\"app\"></div>";

    fn dist_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("landing-backend-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(dir.join("assets")).unwrap();
        std::fs::write(dir.join("index.html"), INDEX_HTML).unwrap();
        std::fs::write(dir.join("assets/app.js"), "console.log(1);").unwrap();
        dir
    }

    async fn get_path(app: Router, path: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let dir = dist_dir("health");
        let (status, body) = get_path(configure_routes(&dir, "index.html"), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn test_client_routes_get_index() {
        let dir = dist_dir("routes");
        for path in ["/", "/docs", "/signup", "/Docs", "/SignUp/"] {
            let (status, body) = get_path(configure_routes(&dir, "index.html"), path).await;
            assert_eq!(status, StatusCode::OK, "{path}");
            assert_eq!(body, INDEX_HTML, "{path}");
        }
    }

    #[tokio::test]
    async fn test_unknown_path_gets_index_with_404() {
        let dir = dist_dir("unknown");
        let (status, body) = get_path(configure_routes(&dir, "index.html"), "/nonexistent").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, INDEX_HTML);
    }

    #[tokio::test]
    async fn test_assets_are_served() {
        let dir = dist_dir("assets");
        let (status, body) = get_path(configure_routes(&dir, "index.html"), "/assets/app.js").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "console.log(1);");
    }

    #[tokio::test]
    async fn test_missing_index_is_server_error() {
        let dir = dist_dir("missing");
        let (status, _) = get_path(configure_routes(&dir, "missing.html"), "/docs").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
