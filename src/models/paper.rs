//! Paper data structure.

use serde::{Deserialize, Serialize};

/// Normalized metadata for one accepted paper.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Paper {
    /// Paper title
    pub title: String,

    /// Author names in the order the source lists them
    #[serde(default)]
    pub authors: Vec<String>,

    /// Absolute link to the PDF, when the source provides one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf_url: Option<String>,
}

impl Paper {
    /// Build a paper, trimming the title. Returns `None` when the title is
    /// empty after trimming, so callers cannot construct degenerate records.
    pub fn new(title: &str, authors: Vec<String>, pdf_url: Option<String>) -> Option<Self> {
        let title = normalize_whitespace(title);
        if title.is_empty() {
            return None;
        }
        Some(Self {
            title,
            authors,
            pdf_url,
        })
    }

    /// Dedup key: lowercased title with whitespace collapsed.
    pub fn normalized_title(&self) -> String {
        normalize_whitespace(&self.title).to_lowercase()
    }
}

fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split a raw author line into individual names.
///
/// Sources list authors as "A, B, and C" or "A and B"; commas and the
/// trailing "and" both act as separators.
pub fn split_authors(raw: &str) -> Vec<String> {
    raw.replace(" and ", ", ")
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
