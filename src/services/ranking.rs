use anyhow::Result;
use colored::Colorize;
use log::info;

use crate::cache::CatalogCache;
use crate::catalog::CatalogFilter;
use crate::config::settings::AppConfig;
use crate::scoring::ScoredMovie;

/// Prints the most popular movies, optionally narrowed by genre and year.
pub struct RankingService {
    config: AppConfig,
}

impl RankingService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn run(&self, genre: Option<String>, year: Option<i32>, limit: Option<usize>) -> Result<()> {
        let limit = limit.unwrap_or(self.config.scoring.default_limit);
        let filter = CatalogFilter { genre, year };

        let cache = CatalogCache::load(self.config.dataset_path())?;
        let popular = cache.popular(&filter, limit);

        info!(
            "Ranked {} of {} movies (C = {:.2}, m = {:.0})",
            popular.len(),
            cache.movies().len(),
            cache.stats().mean_rating,
            cache.stats().vote_threshold
        );

        self.print_header(&filter);
        if popular.is_empty() {
            println!("{}", "No movies match the current filter.".yellow());
            return Ok(());
        }

        for (position, scored) in popular.iter().enumerate() {
            self.print_row(position + 1, scored);
        }

        Ok(())
    }

    fn print_header(&self, filter: &CatalogFilter) {
        let mut heading = "Most popular movies".to_string();
        if let Some(genre) = &filter.genre {
            heading.push_str(&format!(" | genre: {genre}"));
        }
        if let Some(year) = filter.year {
            heading.push_str(&format!(" | year: {year}"));
        }
        println!("{}", heading.bold());
    }

    fn print_row(&self, position: usize, scored: &ScoredMovie) {
        let movie = &scored.movie;
        let year = movie
            .year
            .map(|y| y.to_string())
            .unwrap_or_else(|| "----".to_string());

        println!(
            "{:>3}. {} ({}) [{}] rating {:.1} / {} votes — score {}",
            position,
            movie.title.bold(),
            year,
            movie.genres,
            movie.rating,
            movie.num_votes,
            format!("{:.2}", scored.weighted_score).green()
        );
    }
}
