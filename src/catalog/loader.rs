use std::path::Path;

use csv::StringRecord;
use log::info;

use crate::catalog::Movie;
use crate::errors::CatalogError;

const COL_TITLE: &str = "primaryTitle";
const COL_YEAR: &str = "startYear";
const COL_GENRES: &str = "genres";
const COL_RATING: &str = "averageRating";
const COL_VOTES: &str = "numVotes";

const REQUIRED_COLUMNS: [&str; 5] = [COL_TITLE, COL_YEAR, COL_GENRES, COL_RATING, COL_VOTES];

/// Column positions resolved once from the header row. String-keyed lookup
/// stops here; everything past the loader works on typed records.
struct ColumnIndex {
    title: usize,
    year: usize,
    genres: usize,
    rating: usize,
    votes: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self, CatalogError> {
        let position = |name: &'static str| -> Result<usize, CatalogError> {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or(CatalogError::MissingColumn { name })
        };

        Ok(Self {
            title: position(COL_TITLE)?,
            year: position(COL_YEAR)?,
            genres: position(COL_GENRES)?,
            rating: position(COL_RATING)?,
            votes: position(COL_VOTES)?,
        })
    }
}

/// Load the full catalog from a CSV file.
///
/// Fails on the first malformed row rather than producing a partial catalog;
/// a half-loaded corpus would silently skew the corpus statistics.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<Movie>, CatalogError> {
    let mut reader = csv::Reader::from_path(path.as_ref())?;
    let columns = ColumnIndex::from_headers(reader.headers()?)?;

    let mut movies = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        // Row 1 is the first data row, after the header.
        let row = idx + 1;
        let record = result?;
        movies.push(parse_row(&record, &columns, row)?);
    }

    info!("Loaded {} movies from {}", movies.len(), path.as_ref().display());
    Ok(movies)
}

fn parse_row(
    record: &StringRecord,
    columns: &ColumnIndex,
    row: usize,
) -> Result<Movie, CatalogError> {
    let field = |pos: usize| record.get(pos).unwrap_or("").trim();

    let title = field(columns.title).to_string();

    let year_raw = field(columns.year);
    let year = if is_absent(year_raw) {
        None
    } else {
        // IMDb exports carry years as "1994.0" after float round-trips.
        let parsed = year_raw
            .parse::<f64>()
            .map_err(|_| invalid(row, COL_YEAR, year_raw))?;
        Some(parsed as i32)
    };

    let genres_raw = field(columns.genres);
    let genres = if is_absent(genres_raw) {
        String::new()
    } else {
        genres_raw.to_string()
    };

    let rating_raw = field(columns.rating);
    let rating = rating_raw
        .parse::<f64>()
        .map_err(|_| invalid(row, COL_RATING, rating_raw))?;

    let votes_raw = field(columns.votes);
    let num_votes = parse_votes(votes_raw).ok_or_else(|| invalid(row, COL_VOTES, votes_raw))?;

    Ok(Movie {
        title,
        year,
        genres,
        rating,
        num_votes,
    })
}

/// Vote counts are non-negative integers. The float path exists only for
/// exports that round-trip counts as "650000.0"; a negative or fractional
/// value is still an invalid row, never silently truncated.
fn parse_votes(raw: &str) -> Option<u64> {
    if let Ok(votes) = raw.parse::<u64>() {
        return Some(votes);
    }

    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0 && v.fract() == 0.0)
        .map(|v| v as u64)
}

fn is_absent(value: &str) -> bool {
    value.is_empty() || value == "\\N"
}

fn invalid(row: usize, column: &str, value: &str) -> CatalogError {
    CatalogError::InvalidRow {
        row,
        reason: format!("cannot parse {column} value '{value}'"),
    }
}
