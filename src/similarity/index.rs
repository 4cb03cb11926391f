use log::info;
use ndarray::Array2;

use super::tfidf::GenreVectorizer;
use crate::catalog::Movie;
use crate::errors::RecommendError;

/// A movie ranked by its genre similarity to the query.
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbor {
    /// Row index into the catalog the index was built from.
    pub index: usize,
    pub similarity: f64,
}

/// Dense pairwise cosine-similarity matrix over the catalog's genre vectors.
///
/// Symmetric, with values in [0, 1]. The diagonal is 1.0 except for movies
/// with no genre tokens: a zero vector has similarity 0 with everything,
/// including itself, by convention — cosine is undefined there and we never
/// emit NaN.
///
/// Built whole from the full catalog on every (re)load and read-only
/// afterwards; it is never patched incrementally. Construction is the
/// scalability bottleneck: O(N²·V) time and O(N²) space, fine up to tens of
/// thousands of rows.
pub struct SimilarityIndex {
    matrix: Array2<f64>,
}

impl SimilarityIndex {
    /// Vectorize every movie's genres and compute all pairwise similarities.
    pub fn build(movies: &[Movie]) -> Self {
        let vectorizer = GenreVectorizer::fit(movies);
        let tfidf = vectorizer.transform(movies);

        // Rows are L2-normalized, so cosine reduces to the dot product.
        let matrix = tfidf.dot(&tfidf.t());

        info!(
            "Built similarity index: {} movies, {} genre tokens",
            movies.len(),
            vectorizer.vocabulary_size()
        );

        Self { matrix }
    }

    /// Number of catalog rows the index was built from.
    pub fn len(&self) -> usize {
        self.matrix.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.matrix.nrows() == 0
    }

    pub fn similarity(&self, i: usize, j: usize) -> f64 {
        self.matrix[[i, j]]
    }

    /// The `top_n` movies most similar to row `index`, excluding the row
    /// itself. Stable descending sort: equal similarities keep catalog
    /// order, so results are deterministic.
    pub fn neighbors(&self, index: usize, top_n: usize) -> Vec<Neighbor> {
        let row = self.matrix.row(index);

        let mut candidates: Vec<Neighbor> = row
            .iter()
            .enumerate()
            .filter(|(other, _)| *other != index)
            .map(|(other, &similarity)| Neighbor {
                index: other,
                similarity,
            })
            .collect();

        candidates.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
        candidates.truncate(top_n);
        candidates
    }
}

/// Look up `title` in the catalog and return its nearest neighbors.
///
/// Matching is exact; when duplicate titles exist the first occurrence in
/// catalog order wins. An unmatched title is a normal `TitleNotFound`
/// result, not a panic.
pub fn recommend(
    title: &str,
    index: &SimilarityIndex,
    movies: &[Movie],
    top_n: usize,
) -> Result<Vec<Neighbor>, RecommendError> {
    let query = movies
        .iter()
        .position(|m| m.title == title)
        .ok_or_else(|| RecommendError::TitleNotFound {
            title: title.to_string(),
        })?;

    Ok(index.neighbors(query, top_n))
}
