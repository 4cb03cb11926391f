use std::sync::RwLock;

use serde::Deserialize;

use crate::cache::CatalogCache;
use crate::config::settings::AppConfig;

pub mod admin;
pub mod movies;

pub struct AppState {
    /// Read-mostly: request handlers only take the read lock; the write
    /// lock is taken by the admin reload alone.
    pub cache: RwLock<CatalogCache>,
    pub config: AppConfig,
}

#[derive(Deserialize)]
pub struct MovieParams {
    pub genre: Option<String>,
    pub year: Option<i32>,
    pub limit: Option<usize>,
}

#[derive(Deserialize)]
pub struct RecommendParams {
    pub count: Option<usize>,
}
