use anyhow::Result;
use colored::Colorize;
use log::info;

use crate::cache::CatalogCache;
use crate::config::settings::AppConfig;
use crate::errors::RecommendError;

/// Prints the movies most similar to a chosen title.
pub struct RecommendService {
    config: AppConfig,
}

impl RecommendService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn run(&self, title: &str, count: Option<usize>) -> Result<()> {
        let count = count.unwrap_or(self.config.similarity.default_top_n);

        let cache = CatalogCache::load(self.config.dataset_path())?;
        info!("Recommending for '{}' over {} movies", title, cache.movies().len());

        // An unknown title is a normal outcome, not a process failure.
        let recommendations = match cache.recommend(title, count) {
            Ok(recommendations) => recommendations,
            Err(RecommendError::TitleNotFound { title }) => {
                println!("{}", format!("No movie titled '{title}' in the catalog.").red());
                return Ok(());
            }
        };

        println!("{}", format!("Because you liked '{title}':").bold());
        for (position, (movie, similarity)) in recommendations.iter().enumerate() {
            let year = movie
                .year
                .map(|y| y.to_string())
                .unwrap_or_else(|| "----".to_string());

            println!(
                "{:>3}. {} ({}) [{}] rating {:.1} / {} votes — similarity {}",
                position + 1,
                movie.title.bold(),
                year,
                movie.genres,
                movie.rating,
                movie.num_votes,
                format!("{:.3}", similarity).green()
            );
        }

        Ok(())
    }
}
