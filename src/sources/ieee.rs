// src/sources/ieee.rs

//! IEEE Xplore metadata API source.
//!
//! Covers S&P, whose proceedings live in Xplore under a per-year
//! publication number. Requires an API key; without one, or for a year
//! with no known publication number, the source yields no candidates
//! and the resolver moves on.

use serde::Deserialize;

use crate::models::{Conference, IeeeConfig, Paper};

use super::Source;

const API_URL: &str = "https://ieeexploreapi.ieee.org/api/v1/search/articles";

/// IEEE Xplore API source.
pub struct IeeeApiSource {
    config: IeeeConfig,
}

impl IeeeApiSource {
    pub fn new(config: IeeeConfig) -> Self {
        Self { config }
    }
}

impl Source for IeeeApiSource {
    fn name(&self) -> &'static str {
        "ieee-api"
    }

    fn candidates(&self, conference: Conference, year: u16) -> Vec<String> {
        if conference != Conference::Sp {
            return Vec::new();
        }
        let Some(api_key) = self.config.api_key.as_deref() else {
            log::debug!("ieee-api: no API key configured, skipping");
            return Vec::new();
        };
        let Some(punumber) = self.config.catalog_for(year) else {
            log::debug!("ieee-api: no catalog number known for {year}, skipping");
            return Vec::new();
        };

        vec![format!(
            "{API_URL}?punumber={punumber}&apikey={api_key}&max_records=200&start_record=1"
        )]
    }

    fn parse(&self, body: &str) -> Vec<Paper> {
        let response: ArticlesResponse = match serde_json::from_str(body) {
            Ok(response) => response,
            Err(e) => {
                log::warn!("ieee-api: response did not parse as JSON: {e}");
                return Vec::new();
            }
        };

        response
            .articles
            .into_iter()
            .filter_map(|article| {
                let authors = article
                    .authors
                    .map(|a| a.authors.into_iter().map(|a| a.full_name).collect())
                    .unwrap_or_default();
                Paper::new(&article.title, authors, article.pdf_url)
            })
            .collect()
    }
}

#[derive(Debug, Deserialize)]
struct ArticlesResponse {
    #[serde(default)]
    articles: Vec<Article>,
}

#[derive(Debug, Deserialize)]
struct Article {
    #[serde(default)]
    title: String,
    #[serde(default)]
    authors: Option<ArticleAuthors>,
    #[serde(default)]
    pdf_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ArticleAuthors {
    #[serde(default)]
    authors: Vec<ArticleAuthor>,
}

#[derive(Debug, Deserialize)]
struct ArticleAuthor {
    full_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source_with_key() -> IeeeApiSource {
        IeeeApiSource::new(IeeeConfig {
            api_key: Some("test-key".to_string()),
            ..IeeeConfig::default()
        })
    }

    #[test]
    fn test_no_candidates_without_key() {
        let source = IeeeApiSource::new(IeeeConfig::default());
        assert!(source.candidates(Conference::Sp, 2023).is_empty());
    }

    #[test]
    fn test_no_candidates_for_unknown_year() {
        assert!(source_with_key().candidates(Conference::Sp, 2099).is_empty());
    }

    #[test]
    fn test_no_candidates_for_other_conferences() {
        assert!(
            source_with_key()
                .candidates(Conference::Ndss, 2023)
                .is_empty()
        );
    }

    #[test]
    fn test_candidates_embed_catalog_and_key() {
        let urls = source_with_key().candidates(Conference::Sp, 2023);
        assert_eq!(urls.len(), 1);
        assert!(urls[0].contains("punumber=10179215"));
        assert!(urls[0].contains("apikey=test-key"));
    }

    #[test]
    fn test_parse_articles() {
        let body = r#"{
            "total_records": 2,
            "articles": [
                {
                    "title": "A Formal Treatment",
                    "authors": {"authors": [{"full_name": "Alice Able"}, {"full_name": "Bob Baker"}]},
                    "pdf_url": "https://ieeexplore.ieee.org/stamp/stamp.jsp?arnumber=1"
                },
                {
                    "title": "",
                    "authors": {"authors": []}
                }
            ]
        }"#;
        let papers = source_with_key().parse(body);
        // The titleless article is skipped, not emitted degenerate
        assert_eq!(papers.len(), 1);
        assert_eq!(papers[0].title, "A Formal Treatment");
        assert_eq!(papers[0].authors.len(), 2);
        assert!(papers[0].pdf_url.is_some());
    }

    #[test]
    fn test_parse_error_page_is_empty() {
        assert!(source_with_key().parse("Developer Inactive").is_empty());
    }
}
