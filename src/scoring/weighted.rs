use log::info;

use super::types::{CorpusStats, ScoredMovie};
use crate::catalog::Movie;
use crate::errors::ScoringError;

/// Fraction of the vote-count distribution used as the shrinkage threshold.
pub const VOTE_QUANTILE: f64 = 0.90;

/// Compute corpus-wide statistics: the mean rating and the 90th-percentile
/// vote count. Always computed over the full, unfiltered catalog.
pub fn compute_stats(movies: &[Movie]) -> Result<CorpusStats, ScoringError> {
    if movies.is_empty() {
        return Err(ScoringError::DegenerateCorpus);
    }

    let mean_rating = movies.iter().map(|m| m.rating).sum::<f64>() / movies.len() as f64;

    let mut votes: Vec<f64> = movies.iter().map(|m| m.num_votes as f64).collect();
    votes.sort_by(|a, b| a.total_cmp(b));
    let vote_threshold = quantile_sorted(&votes, VOTE_QUANTILE);

    Ok(CorpusStats {
        mean_rating,
        vote_threshold,
    })
}

/// Linearly interpolated quantile over an already-sorted slice.
fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }

    let position = (n - 1) as f64 * q;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;

    sorted[lower] + fraction * (sorted[upper] - sorted[lower])
}

/// The Bayesian-average popularity score.
///
/// A convex combination of the movie's own rating R and the corpus mean C,
/// weighted by vote volume v against the threshold m:
///
///   score = (v / (v + m)) * R + (m / (v + m)) * C
///
/// Few votes pull the score toward C; a large vote count converges it to R.
/// A corpus with zero votes and a zero threshold has no defined score and
/// fails with `DegenerateCorpus` instead of producing NaN.
pub fn weighted_score(movie: &Movie, stats: &CorpusStats) -> Result<f64, ScoringError> {
    let v = movie.num_votes as f64;
    let m = stats.vote_threshold;

    if v + m == 0.0 {
        return Err(ScoringError::DegenerateCorpus);
    }

    Ok((v / (v + m)) * movie.rating + (m / (v + m)) * stats.mean_rating)
}

/// Score every movie in the slice against the given corpus statistics.
pub fn score_catalog(movies: &[Movie], stats: &CorpusStats) -> Result<Vec<ScoredMovie>, ScoringError> {
    info!(
        "Scoring {} movies (C = {:.3}, m = {:.1})",
        movies.len(),
        stats.mean_rating,
        stats.vote_threshold
    );

    movies
        .iter()
        .map(|movie| {
            Ok(ScoredMovie {
                movie: movie.clone(),
                weighted_score: weighted_score(movie, stats)?,
            })
        })
        .collect()
}

/// Sort descending by weighted score. Equal scores break ties on vote count
/// descending, preferring the statistically sturdier movie; the sort is
/// stable so remaining ties keep catalog order.
pub fn rank(scored: &mut [ScoredMovie]) {
    scored.sort_by(|a, b| {
        b.weighted_score
            .total_cmp(&a.weighted_score)
            .then(b.movie.num_votes.cmp(&a.movie.num_votes))
    });
}
