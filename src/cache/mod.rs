pub mod structs;

pub use structs::CatalogCache;
