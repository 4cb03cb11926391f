use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;

use crate::catalog::{self, CatalogFilter, Movie};
use crate::errors::RecommendError;
use crate::scoring::{self, CorpusStats, ScoredMovie};
use crate::similarity::{self, SimilarityIndex};

/// Session-lifetime cache of the catalog and everything derived from it.
///
/// Loading the CSV, scoring the corpus, and building the O(N²) similarity
/// matrix dominate latency, so all of it happens once here and is read-only
/// afterwards. The only invalidation is `reload()`, which rebuilds every
/// derived artifact from the source file in one pass — nothing is patched
/// incrementally.
///
/// Statistics and the similarity index always cover the full catalog;
/// filters narrow the ranked view only.
pub struct CatalogCache {
    source: PathBuf,
    movies: Vec<Movie>,
    stats: CorpusStats,
    ranked: Vec<ScoredMovie>,
    index: SimilarityIndex,
}

impl CatalogCache {
    /// Load the catalog from `path` and build all derived artifacts.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let source = path.as_ref().to_path_buf();
        let (movies, stats, ranked, index) = Self::build(&source)?;

        Ok(Self {
            source,
            movies,
            stats,
            ranked,
            index,
        })
    }

    /// Re-read the source file and swap in a freshly built catalog. On
    /// failure the existing cache is left untouched, so readers never see
    /// stale-mixed-with-new data.
    pub fn reload(&mut self) -> Result<()> {
        let (movies, stats, ranked, index) = Self::build(&self.source)?;

        self.movies = movies;
        self.stats = stats;
        self.ranked = ranked;
        self.index = index;

        info!("Reloaded catalog from {}", self.source.display());
        Ok(())
    }

    fn build(
        source: &Path,
    ) -> Result<(Vec<Movie>, CorpusStats, Vec<ScoredMovie>, SimilarityIndex)> {
        let movies = catalog::load_catalog(source)
            .with_context(|| format!("Failed to load catalog from {}", source.display()))?;

        let stats =
            scoring::compute_stats(&movies).context("Failed to compute corpus statistics")?;

        let mut ranked = scoring::score_catalog(&movies, &stats).context("Failed to score catalog")?;
        scoring::rank(&mut ranked);

        let index = SimilarityIndex::build(&movies);

        Ok((movies, stats, ranked, index))
    }

    /// The file this cache was built from. A rebuilt replacement cache is
    /// loaded from the same source before being swapped in.
    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn stats(&self) -> CorpusStats {
        self.stats
    }

    pub fn index(&self) -> &SimilarityIndex {
        &self.index
    }

    /// The ranked view: movies sorted by weighted score descending, narrowed
    /// by the filter, truncated to `limit`. Scores come from the full-corpus
    /// statistics even when the view is filtered.
    pub fn popular(&self, filter: &CatalogFilter, limit: usize) -> Vec<ScoredMovie> {
        self.ranked
            .iter()
            .filter(|scored| filter.matches(&scored.movie))
            .take(limit)
            .cloned()
            .collect()
    }

    /// Top-N genre neighbors of the first movie titled `title`.
    pub fn recommend(
        &self,
        title: &str,
        top_n: usize,
    ) -> Result<Vec<(Movie, f64)>, RecommendError> {
        let neighbors = similarity::recommend(title, &self.index, &self.movies, top_n)?;

        Ok(neighbors
            .into_iter()
            .map(|n| (self.movies[n.index].clone(), n.similarity))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const CSV: &str = "primaryTitle,startYear,genres,averageRating,numVotes\n\
                       A,1999,\"Action,Comedy\",8.0,1000\n\
                       B,2005,Action,6.0,50\n\
                       C,2010,Drama,9.0,5\n";

    fn write_temp_csv(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_builds_all_artifacts() {
        let path = write_temp_csv("movie_discovery_cache.csv", CSV);
        let cache = CatalogCache::load(&path).unwrap();

        assert_eq!(cache.movies().len(), 3);
        assert_eq!(cache.index().len(), 3);
        assert!(cache.stats().vote_threshold > 0.0);

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_popular_respects_filter_but_keeps_global_stats() {
        let path = write_temp_csv("movie_discovery_cache_filter.csv", CSV);
        let cache = CatalogCache::load(&path).unwrap();

        let all = cache.popular(&CatalogFilter::default(), 10);
        let dramas = cache.popular(
            &CatalogFilter {
                genre: Some("Drama".to_string()),
                year: None,
            },
            10,
        );

        assert_eq!(all.len(), 3);
        assert_eq!(dramas.len(), 1);
        assert_eq!(dramas[0].movie.title, "C");

        // The filtered view keeps the score computed from full-corpus stats.
        let global = all.iter().find(|s| s.movie.title == "C").unwrap();
        assert_eq!(dramas[0].weighted_score, global.weighted_score);

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_reload_picks_up_new_rows() {
        let path = write_temp_csv("movie_discovery_cache_reload.csv", CSV);
        let mut cache = CatalogCache::load(&path).unwrap();
        assert_eq!(cache.movies().len(), 3);

        let extended = format!("{CSV}D,2020,Comedy,7.5,300\n");
        std::fs::write(&path, extended).unwrap();
        cache.reload().unwrap();

        assert_eq!(cache.movies().len(), 4);
        // The similarity matrix dimension follows the new row count.
        assert_eq!(cache.index().len(), 4);

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_fresh_load_swaps_in_place_of_old_cache() {
        // The server reload path builds a complete replacement cache from
        // the same source while the old one keeps serving, then swaps it in
        // with a plain assignment.
        let path = write_temp_csv("movie_discovery_cache_swap.csv", CSV);
        let mut cache = CatalogCache::load(&path).unwrap();
        assert_eq!(cache.source(), path.as_path());

        let extended = format!("{CSV}D,2020,Comedy,7.5,300\n");
        std::fs::write(&path, extended).unwrap();

        let fresh = CatalogCache::load(cache.source()).unwrap();
        // The old cache is untouched until the swap happens.
        assert_eq!(cache.movies().len(), 3);
        cache = fresh;

        assert_eq!(cache.movies().len(), 4);
        assert_eq!(cache.index().len(), 4);

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_failed_reload_keeps_previous_catalog() {
        let path = write_temp_csv("movie_discovery_cache_bad_reload.csv", CSV);
        let mut cache = CatalogCache::load(&path).unwrap();

        std::fs::write(&path, "primaryTitle,startYear\nbroken,1\n").unwrap();
        assert!(cache.reload().is_err());
        assert_eq!(cache.movies().len(), 3);

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_recommend_through_cache() {
        let path = write_temp_csv("movie_discovery_cache_rec.csv", CSV);
        let cache = CatalogCache::load(&path).unwrap();

        let recs = cache.recommend("A", 1).unwrap();
        assert_eq!(recs[0].0.title, "B");

        let err = cache.recommend("Missing", 5).unwrap_err();
        assert!(matches!(err, RecommendError::TitleNotFound { .. }));

        std::fs::remove_file(path).ok();
    }
}
