use serde::Serialize;

use crate::catalog::Movie;
use crate::scoring::ScoredMovie;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieListItem {
    pub rank: usize,
    pub title: String,
    pub year: Option<i32>,
    pub genres: String,
    pub rating: f64,
    pub num_votes: u64,
    pub weighted_score: f64,
}

impl MovieListItem {
    pub fn from_scored(rank: usize, scored: &ScoredMovie) -> Self {
        Self {
            rank,
            title: scored.movie.title.clone(),
            year: scored.movie.year,
            genres: scored.movie.genres.clone(),
            rating: scored.movie.rating,
            num_votes: scored.movie.num_votes,
            weighted_score: scored.weighted_score,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieListResponse {
    pub items: Vec<MovieListItem>,
    pub total: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationItem {
    pub title: String,
    pub year: Option<i32>,
    pub genres: String,
    pub rating: f64,
    pub num_votes: u64,
    pub similarity: f64,
}

impl RecommendationItem {
    pub fn from_neighbor(movie: &Movie, similarity: f64) -> Self {
        Self {
            title: movie.title.clone(),
            year: movie.year,
            genres: movie.genres.clone(),
            rating: movie.rating,
            num_votes: movie.num_votes,
            similarity,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResponse {
    pub query: String,
    pub items: Vec<RecommendationItem>,
}
