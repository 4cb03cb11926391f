use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use std::sync::Arc;

use crate::cache::CatalogCache;
use super::AppState;

pub async fn admin_reload(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let auth_header = headers.get("Authorization").and_then(|h| h.to_str().ok());
    if auth_header != Some("Bearer secret") {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    log::info!("Admin triggered catalog reload");

    let source = {
        let cache = match state.cache.read() {
            Ok(cache) => cache,
            Err(_) => {
                return (StatusCode::INTERNAL_SERVER_ERROR, "Cache unavailable").into_response()
            }
        };
        cache.source().to_path_buf()
    };

    // The rebuild (CSV load, scoring, O(N²) similarity matrix) runs off the
    // lock and off the async workers; readers keep serving the old catalog
    // until the finished artifacts are swapped in under a brief write lock.
    let rebuilt = match tokio::task::spawn_blocking(move || CatalogCache::load(source)).await {
        Ok(result) => result,
        Err(e) => {
            log::error!("Catalog reload task panicked: {:?}", e);
            return (StatusCode::INTERNAL_SERVER_ERROR, "Reload task failed").into_response();
        }
    };

    match rebuilt {
        Ok(fresh) => {
            let total = fresh.movies().len();
            let mut cache = match state.cache.write() {
                Ok(cache) => cache,
                Err(_) => {
                    return (StatusCode::INTERNAL_SERVER_ERROR, "Cache unavailable")
                        .into_response()
                }
            };
            *cache = fresh;
            log::info!("Catalog reload completed: {} movies", total);
            (StatusCode::OK, "Reload complete").into_response()
        }
        Err(e) => {
            log::error!("Catalog reload failed: {:?}", e);
            // The previous catalog stays in place; readers keep working.
            (StatusCode::INTERNAL_SERVER_ERROR, format!("Reload failed: {e}")).into_response()
        }
    }
}
