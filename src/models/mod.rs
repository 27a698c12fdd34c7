// src/models/mod.rs

//! Domain models for the crawler application.

mod conference;
mod config;
mod paper;

// Re-export all public types
pub use conference::Conference;
pub use config::{CatalogEntry, Config, FetcherConfig, IeeeConfig};
pub use paper::{Paper, split_authors};
