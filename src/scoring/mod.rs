pub mod types;
pub mod weighted;

pub use types::{CorpusStats, ScoredMovie};
pub use weighted::{compute_stats, rank, score_catalog, weighted_score};
