pub mod index;
pub mod tfidf;

pub use index::{recommend, Neighbor, SimilarityIndex};
pub use tfidf::GenreVectorizer;
