//! SPA fallback - отдаёт `index.html` на адреса клиентских маршрутов
//!
//! Роутер фронтенда работает через History API, поэтому прямой заход на
//! `/docs` приходит на сервер. Для путей из каталога `contracts::routes`
//! отдаём `index.html` со статусом 200, для остальных - тот же `index.html`
//! со статусом 404: клиент сам покажет страницу "не найдено".

use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use contracts::routes::is_client_route;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Clone)]
pub struct SpaState {
    index_path: Arc<PathBuf>,
}

impl SpaState {
    pub fn new(index_path: PathBuf) -> Self {
        Self {
            index_path: Arc::new(index_path),
        }
    }
}

pub fn fallback_status(path: &str) -> StatusCode {
    if is_client_route(path) {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    }
}

pub async fn spa_fallback(State(state): State<SpaState>, uri: Uri) -> Response {
    let status = fallback_status(uri.path());
    if status == StatusCode::NOT_FOUND {
        tracing::debug!("No client route for {}", uri.path());
    }

    match tokio::fs::read_to_string(state.index_path.as_path()).await {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            tracing::error!(
                "Failed to read SPA entry {}: {}",
                state.index_path.display(),
                e
            );
            (StatusCode::INTERNAL_SERVER_ERROR, "frontend is not built").into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_status() {
        assert_eq!(fallback_status("/"), StatusCode::OK);
        assert_eq!(fallback_status("/docs"), StatusCode::OK);
        assert_eq!(fallback_status("/signup/"), StatusCode::OK);
        assert_eq!(fallback_status("/nonexistent"), StatusCode::NOT_FOUND);
        assert_eq!(fallback_status("/docs/intro"), StatusCode::NOT_FOUND);
    }
}
