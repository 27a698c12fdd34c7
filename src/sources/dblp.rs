// src/sources/dblp.rs

//! DBLP publication search source.
//!
//! Queries the DBLP search API by conference stream and year. DBLP has
//! an entry for every conference we handle, which makes this the
//! generic fallback ahead of page scraping.

use serde::Deserialize;

use crate::models::{Conference, Paper};
use crate::utils::url::is_pdf_href;

use super::Source;

const SEARCH_URL: &str = "https://dblp.org/search/publ/api";

/// DBLP search API source.
#[derive(Debug, Default)]
pub struct DblpSource;

impl Source for DblpSource {
    fn name(&self) -> &'static str {
        "dblp"
    }

    fn candidates(&self, conference: Conference, year: u16) -> Vec<String> {
        vec![format!(
            "{SEARCH_URL}?q=stream:{}:+year:{year}&format=json&h=1000",
            conference.dblp_stream()
        )]
    }

    fn parse(&self, body: &str) -> Vec<Paper> {
        let response: SearchResponse = match serde_json::from_str(body) {
            Ok(response) => response,
            Err(e) => {
                log::warn!("dblp: response did not parse as JSON: {e}");
                return Vec::new();
            }
        };

        response
            .result
            .hits
            .hit
            .into_iter()
            .filter_map(|hit| {
                let info = hit.info;
                let authors = info
                    .authors
                    .map(|a| a.author.into_names())
                    .unwrap_or_default();
                let pdf_url = info.ee.filter(|ee| is_pdf_href(ee));
                Paper::new(&info.title, authors, pdf_url)
            })
            .collect()
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    result: SearchResult,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    #[serde(default)]
    hits: Hits,
}

#[derive(Debug, Deserialize, Default)]
struct Hits {
    #[serde(default)]
    hit: Vec<Hit>,
}

#[derive(Debug, Deserialize)]
struct Hit {
    info: HitInfo,
}

#[derive(Debug, Deserialize)]
struct HitInfo {
    #[serde(default)]
    title: String,
    #[serde(default)]
    authors: Option<Authors>,
    /// Electronic edition link; usually a DOI, occasionally a direct PDF
    #[serde(default)]
    ee: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Authors {
    #[serde(default)]
    author: AuthorField,
}

/// DBLP collapses single-element arrays to a bare object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AuthorField {
    One(Author),
    Many(Vec<Author>),
}

impl Default for AuthorField {
    fn default() -> Self {
        AuthorField::Many(Vec::new())
    }
}

impl AuthorField {
    fn into_names(self) -> Vec<String> {
        match self {
            AuthorField::One(author) => vec![author.text],
            AuthorField::Many(authors) => authors.into_iter().map(|a| a.text).collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct Author {
    text: String,
}
