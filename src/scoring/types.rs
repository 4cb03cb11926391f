use serde::Serialize;

use crate::catalog::Movie;

/// Aggregate statistics of the full corpus, computed once per scoring pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CorpusStats {
    /// Mean rating across all movies (C in the shrinkage formula).
    pub mean_rating: f64,
    /// 90th-percentile vote count (m in the shrinkage formula).
    pub vote_threshold: f64,
}

/// A movie with its derived popularity score. The score is recomputed on
/// every load; it is never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredMovie {
    pub movie: Movie,
    pub weighted_score: f64,
}
