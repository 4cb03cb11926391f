pub mod filter;
pub mod loader;
pub mod models;

pub use filter::{distinct_genres, distinct_titles, distinct_years, CatalogFilter};
pub use loader::load_catalog;
pub use models::Movie;
