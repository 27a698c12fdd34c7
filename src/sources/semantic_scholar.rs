// src/sources/semantic_scholar.rs

//! Semantic Scholar bulk search source.
//!
//! Looks papers up by venue name and year through the Graph API. A
//! well-formed response with zero hits means the venue's proceedings
//! are not indexed yet, which is "no data", not a failure.

use serde::Deserialize;

use crate::models::{Conference, Paper};

use super::Source;

const SEARCH_URL: &str = "https://api.semanticscholar.org/graph/v1/paper/search/bulk";

/// Semantic Scholar Graph API source.
#[derive(Debug, Default)]
pub struct SemanticScholarSource;

impl Source for SemanticScholarSource {
    fn name(&self) -> &'static str {
        "semantic-scholar"
    }

    fn candidates(&self, conference: Conference, year: u16) -> Vec<String> {
        let venue = conference.venue_name().replace(' ', "+");
        vec![format!(
            "{SEARCH_URL}?venue={venue}&year={year}&fields=title,authors,openAccessPdf"
        )]
    }

    fn parse(&self, body: &str) -> Vec<Paper> {
        let response: BulkResponse = match serde_json::from_str(body) {
            Ok(response) => response,
            Err(e) => {
                log::warn!("semantic-scholar: response did not parse as JSON: {e}");
                return Vec::new();
            }
        };

        response
            .data
            .into_iter()
            .filter_map(|entry| {
                let authors = entry.authors.into_iter().map(|a| a.name).collect();
                let pdf_url = entry.open_access_pdf.map(|pdf| pdf.url);
                Paper::new(&entry.title, authors, pdf_url)
            })
            .collect()
    }
}

#[derive(Debug, Deserialize)]
struct BulkResponse {
    #[serde(default)]
    data: Vec<Entry>,
}

#[derive(Debug, Deserialize)]
struct Entry {
    #[serde(default)]
    title: String,
    #[serde(default)]
    authors: Vec<EntryAuthor>,
    #[serde(default, rename = "openAccessPdf")]
    open_access_pdf: Option<OpenAccessPdf>,
}

#[derive(Debug, Deserialize)]
struct EntryAuthor {
    name: String,
}

#[derive(Debug, Deserialize)]
struct OpenAccessPdf {
    url: String,
}
