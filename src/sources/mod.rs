// src/sources/mod.rs

//! Upstream paper-metadata sources.
//!
//! Each source knows two things: which URLs could answer a
//! (conference, year) query, and how to turn one of those responses
//! into normalized [`Paper`](crate::models::Paper) records. Fetching
//! is the resolver's job, so sources stay pure and testable.
//!
//! - `IeeeApiSource` — IEEE Xplore metadata API (needs a key)
//! - `SemanticScholarSource` — Semantic Scholar bulk venue search
//! - `DblpSource` — DBLP publication listing, generic fallback
//! - `ProgramPageSource` — program/accepted-papers page scraper

mod dblp;
mod ieee;
mod program;
mod semantic_scholar;

pub use dblp::DblpSource;
pub use ieee::IeeeApiSource;
pub use program::ProgramPageSource;
pub use semantic_scholar::SemanticScholarSource;

use crate::models::{Conference, Paper};

/// One upstream source of paper metadata.
pub trait Source: Send + Sync {
    /// Short name for logging and provenance.
    fn name(&self) -> &'static str;

    /// Candidate query URLs for a conference/year, in the order they
    /// should be tried. Empty means the source is inapplicable (missing
    /// credential, unknown year) and the resolver skips it entirely.
    fn candidates(&self, conference: Conference, year: u16) -> Vec<String>;

    /// Parse a raw response body into records.
    ///
    /// Unparseable or empty content yields an empty Vec; entries that
    /// cannot be fully parsed are skipped, never emitted degenerate.
    fn parse(&self, body: &str) -> Vec<Paper>;
}
