use crate::catalog::Movie;

/// Optional view filters accepted from the presentation layer.
///
/// The genre filter is a substring match against the raw comma-separated
/// `genres` field; the year filter is an exact match. Filters shape the
/// ranked view only — corpus statistics and the similarity index are always
/// derived from the full catalog.
#[derive(Debug, Clone, Default)]
pub struct CatalogFilter {
    pub genre: Option<String>,
    pub year: Option<i32>,
}

impl CatalogFilter {
    pub fn is_empty(&self) -> bool {
        self.genre.is_none() && self.year.is_none()
    }

    pub fn matches(&self, movie: &Movie) -> bool {
        if let Some(genre) = &self.genre {
            if !movie.genres.contains(genre.as_str()) {
                return false;
            }
        }
        if let Some(year) = self.year {
            if movie.year != Some(year) {
                return false;
            }
        }
        true
    }
}

/// Distinct genre labels across the catalog, sorted ascending.
pub fn distinct_genres(movies: &[Movie]) -> Vec<String> {
    let mut genres: Vec<String> = movies
        .iter()
        .flat_map(|m| m.genre_labels().map(str::to_string))
        .collect();
    genres.sort();
    genres.dedup();
    genres
}

/// Distinct release years across the catalog, newest first.
pub fn distinct_years(movies: &[Movie]) -> Vec<i32> {
    let mut years: Vec<i32> = movies.iter().filter_map(|m| m.year).collect();
    years.sort_unstable();
    years.dedup();
    years.reverse();
    years
}

/// Distinct titles across the catalog, sorted ascending.
pub fn distinct_titles(movies: &[Movie]) -> Vec<String> {
    let mut titles: Vec<String> = movies.iter().map(|m| m.title.clone()).collect();
    titles.sort();
    titles.dedup();
    titles
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Movie> {
        vec![
            Movie {
                title: "A".to_string(),
                year: Some(1999),
                genres: "Action,Comedy".to_string(),
                rating: 8.0,
                num_votes: 1000,
            },
            Movie {
                title: "B".to_string(),
                year: Some(2005),
                genres: "Action".to_string(),
                rating: 6.0,
                num_votes: 50,
            },
            Movie {
                title: "C".to_string(),
                year: None,
                genres: "Drama".to_string(),
                rating: 9.0,
                num_votes: 5,
            },
        ]
    }

    #[test]
    fn test_genre_filter_is_substring_match() {
        let movies = catalog();
        let filter = CatalogFilter {
            genre: Some("Action".to_string()),
            year: None,
        };
        let matched: Vec<&str> = movies
            .iter()
            .filter(|m| filter.matches(m))
            .map(|m| m.title.as_str())
            .collect();
        assert_eq!(matched, vec!["A", "B"]);
    }

    #[test]
    fn test_year_filter_is_exact() {
        let movies = catalog();
        let filter = CatalogFilter {
            genre: None,
            year: Some(2005),
        };
        let matched: Vec<&str> = movies
            .iter()
            .filter(|m| filter.matches(m))
            .map(|m| m.title.as_str())
            .collect();
        assert_eq!(matched, vec!["B"]);
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let movies = catalog();
        let filter = CatalogFilter::default();
        assert!(filter.is_empty());
        assert!(movies.iter().all(|m| filter.matches(m)));
    }

    #[test]
    fn test_distinct_genres_sorted_and_deduped() {
        let genres = distinct_genres(&catalog());
        assert_eq!(genres, vec!["Action", "Comedy", "Drama"]);
    }

    #[test]
    fn test_distinct_years_newest_first() {
        let years = distinct_years(&catalog());
        assert_eq!(years, vec![2005, 1999]);
    }
}
