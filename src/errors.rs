use thiserror::Error;

/// Failures while loading or validating the catalog CSV.
///
/// All of these are fatal for the load: the catalog is either complete and
/// well-formed or it does not exist at all.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("required column '{name}' is missing from the dataset")]
    MissingColumn { name: &'static str },

    #[error("invalid row {row}: {reason}")]
    InvalidRow { row: usize, reason: String },

    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse dataset: {0}")]
    Csv(#[from] csv::Error),
}

/// Failures in the popularity scoring pass.
#[derive(Debug, Error, PartialEq)]
pub enum ScoringError {
    /// A zero-vote corpus with a zero vote threshold makes the shrinkage
    /// formula divide by zero. We refuse to score rather than emit NaN.
    #[error("degenerate corpus: zero votes and zero vote threshold")]
    DegenerateCorpus,
}

/// Failures in the recommendation query. `TitleNotFound` is a normal,
/// checkable outcome for callers, not a crash.
#[derive(Debug, Error, PartialEq)]
pub enum RecommendError {
    #[error("no movie titled '{title}' in the catalog")]
    TitleNotFound { title: String },
}
