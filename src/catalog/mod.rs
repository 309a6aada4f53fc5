/// Catalog domain layer: configuration, HTTP client, wire-format
/// translation and statistics aggregation.
pub mod client;
pub mod config;
pub mod errors;
pub mod records;
pub mod stats;
pub mod translate;

pub use client::CatalogClient;
pub use config::CatalogConfig;
pub use errors::CatalogError;
pub use records::SearchResults;
pub use stats::{CatalogStats, aggregate};
