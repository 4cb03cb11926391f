use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::api::handlers::{
    admin::admin_reload,
    movies::{get_genres, get_movies, get_recommendations, get_titles, get_years},
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/movies", get(get_movies))
        .route("/api/recommendations/:title", get(get_recommendations))
        .route("/api/genres", get(get_genres))
        .route("/api/years", get(get_years))
        .route("/api/titles", get(get_titles))
        .route("/api/admin/reload", post(admin_reload))
        .with_state(state)
}
