use serde::Serialize;

/// One row of the movie catalog.
///
/// `genres` keeps the raw comma-separated label list; an absent value in the
/// source is loaded as an empty string, never as a null that could leak into
/// the vectorizer.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Movie {
    pub title: String,
    pub year: Option<i32>,
    pub genres: String,
    pub rating: f64,
    pub num_votes: u64,
}

impl Movie {
    /// Genre labels split on the comma separator. A comma-less non-empty
    /// string is a single label; an empty string yields no labels.
    pub fn genre_labels(&self) -> impl Iterator<Item = &str> {
        self.genres
            .split(',')
            .map(str::trim)
            .filter(|label| !label.is_empty())
    }
}
