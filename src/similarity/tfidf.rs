use std::collections::HashMap;

use ndarray::Array2;

use crate::catalog::Movie;

/// TF-IDF vectorizer over the corpus's genre vocabulary.
///
/// A movie's comma-separated genre list is treated as a bag of tokens:
/// commas become whitespace and each remaining word is one case-sensitive
/// token. The vocabulary is fixed at fit time.
pub struct GenreVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
}

impl GenreVectorizer {
    /// Build the vocabulary and smoothed IDF weights from the corpus.
    ///
    /// IDF uses ln((1 + N) / (1 + df)) + 1, so a token present in every
    /// document still carries weight 1 rather than vanishing.
    pub fn fit(movies: &[Movie]) -> Self {
        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        let mut document_frequency: Vec<usize> = Vec::new();

        for movie in movies {
            let mut seen: Vec<usize> = Vec::new();
            for token in tokenize(&movie.genres) {
                let column = *vocabulary.entry(token.to_string()).or_insert_with(|| {
                    document_frequency.push(0);
                    document_frequency.len() - 1
                });
                if !seen.contains(&column) {
                    document_frequency[column] += 1;
                    seen.push(column);
                }
            }
        }

        let n = movies.len() as f64;
        let idf = document_frequency
            .iter()
            .map(|&df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        Self { vocabulary, idf }
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Produce the L2-normalized TF-IDF matrix, one row per movie.
    ///
    /// A movie with no genre tokens keeps an all-zero row; it is never
    /// null-propagated or dropped, so row indices stay aligned with the
    /// catalog.
    pub fn transform(&self, movies: &[Movie]) -> Array2<f64> {
        let mut matrix = Array2::<f64>::zeros((movies.len(), self.vocabulary.len()));

        for (row, movie) in movies.iter().enumerate() {
            for token in tokenize(&movie.genres) {
                if let Some(&column) = self.vocabulary.get(token) {
                    matrix[[row, column]] += self.idf[column];
                }
            }

            let norm = matrix.row(row).mapv(|x| x * x).sum().sqrt();
            if norm > 0.0 {
                matrix.row_mut(row).mapv_inplace(|x| x / norm);
            }
        }

        matrix
    }
}

/// Comma separators become plain whitespace before tokenization, turning a
/// delimited tag list into a bag of words.
fn tokenize(genres: &str) -> impl Iterator<Item = &str> {
    genres
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(title: &str, genres: &str) -> Movie {
        Movie {
            title: title.to_string(),
            year: Some(2000),
            genres: genres.to_string(),
            rating: 7.0,
            num_votes: 100,
        }
    }

    #[test]
    fn test_vocabulary_is_case_sensitive_tokens() {
        let movies = vec![movie("A", "Action,Comedy"), movie("B", "action")];
        let vectorizer = GenreVectorizer::fit(&movies);
        // "Action" and "action" are distinct tokens.
        assert_eq!(vectorizer.vocabulary_size(), 3);
    }

    #[test]
    fn test_rows_are_unit_length() {
        let movies = vec![
            movie("A", "Action,Comedy"),
            movie("B", "Action"),
            movie("C", "Drama"),
        ];
        let vectorizer = GenreVectorizer::fit(&movies);
        let matrix = vectorizer.transform(&movies);

        for row in matrix.rows() {
            let norm = row.mapv(|x| x * x).sum().sqrt();
            assert!((norm - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_empty_genres_give_zero_row() {
        let movies = vec![movie("A", "Action"), movie("B", "")];
        let vectorizer = GenreVectorizer::fit(&movies);
        let matrix = vectorizer.transform(&movies);

        assert!(matrix.row(1).iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_rare_token_outweighs_common_token() {
        let movies = vec![
            movie("A", "Action,Drama"),
            movie("B", "Action"),
            movie("C", "Action"),
        ];
        let vectorizer = GenreVectorizer::fit(&movies);
        let matrix = vectorizer.transform(&movies);

        // Vocabulary columns follow first-occurrence order: "Action" is
        // column 0, "Drama" column 1. In movie A the corpus-rare "Drama"
        // must carry more weight than the ubiquitous "Action".
        let row = matrix.row(0);
        let action = row[0];
        let drama = row[1];
        assert!(action > 0.0);
        assert!(drama > action);
    }
}
