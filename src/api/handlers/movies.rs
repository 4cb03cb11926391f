use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use crate::api::models::{
    MovieListItem, MovieListResponse, RecommendationItem, RecommendationResponse,
};
use crate::catalog::{self, CatalogFilter};
use crate::errors::RecommendError;
use super::{AppState, MovieParams, RecommendParams};

pub async fn get_movies(
    State(state): State<Arc<AppState>>,
    Query(params): Query<MovieParams>,
) -> impl IntoResponse {
    let limit = params
        .limit
        .unwrap_or(state.config.scoring.default_limit)
        .clamp(1, 1000);

    let filter = CatalogFilter {
        genre: params.genre,
        year: params.year,
    };

    let cache = match state.cache.read() {
        Ok(cache) => cache,
        Err(_) => return (StatusCode::INTERNAL_SERVER_ERROR, "Cache unavailable").into_response(),
    };

    let popular = cache.popular(&filter, limit);
    let items: Vec<MovieListItem> = popular
        .iter()
        .enumerate()
        .map(|(i, scored)| MovieListItem::from_scored(i + 1, scored))
        .collect();

    Json(MovieListResponse {
        total: items.len(),
        items,
    })
    .into_response()
}

pub async fn get_recommendations(
    State(state): State<Arc<AppState>>,
    Path(title): Path<String>,
    Query(params): Query<RecommendParams>,
) -> impl IntoResponse {
    let count = params
        .count
        .unwrap_or(state.config.similarity.default_top_n)
        .clamp(1, 100);

    let cache = match state.cache.read() {
        Ok(cache) => cache,
        Err(_) => return (StatusCode::INTERNAL_SERVER_ERROR, "Cache unavailable").into_response(),
    };

    match cache.recommend(&title, count) {
        Ok(recommendations) => {
            let items = recommendations
                .iter()
                .map(|(movie, similarity)| RecommendationItem::from_neighbor(movie, *similarity))
                .collect();

            Json(RecommendationResponse {
                query: title,
                items,
            })
            .into_response()
        }
        Err(err @ RecommendError::TitleNotFound { .. }) => {
            (StatusCode::NOT_FOUND, err.to_string()).into_response()
        }
    }
}

pub async fn get_genres(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let cache = match state.cache.read() {
        Ok(cache) => cache,
        Err(_) => return (StatusCode::INTERNAL_SERVER_ERROR, "Cache unavailable").into_response(),
    };

    Json(catalog::distinct_genres(cache.movies())).into_response()
}

pub async fn get_years(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let cache = match state.cache.read() {
        Ok(cache) => cache,
        Err(_) => return (StatusCode::INTERNAL_SERVER_ERROR, "Cache unavailable").into_response(),
    };

    Json(catalog::distinct_years(cache.movies())).into_response()
}

pub async fn get_titles(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let cache = match state.cache.read() {
        Ok(cache) => cache,
        Err(_) => return (StatusCode::INTERNAL_SERVER_ERROR, "Cache unavailable").into_response(),
    };

    Json(catalog::distinct_titles(cache.movies())).into_response()
}
