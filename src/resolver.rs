// src/resolver.rs

//! Source resolution and fallback.
//!
//! A [`Resolver`] owns a per-conference priority list of sources and
//! walks it strictly in order: the first source whose reachable
//! response parses to at least one record decides the whole result.
//! Lower-priority sources are never consulted after a success, so the
//! provenance of a result is always a single upstream. Exhausting the
//! list is a normal outcome ("not published yet") and yields an empty
//! list, never an error.

use std::collections::HashSet;

use crate::error::{AppError, Result};
use crate::models::{Conference, Config, Paper};
use crate::sources::{
    DblpSource, IeeeApiSource, ProgramPageSource, SemanticScholarSource, Source,
};
use crate::utils::http::{Fetch, HttpFetcher};
use crate::utils::url;

/// Accepted year range for caller input.
const MIN_YEAR: u16 = 1980;
const MAX_YEAR: u16 = 2100;

/// Per-conference fallback controller.
pub struct Resolver {
    conference: Conference,
    sources: Vec<Box<dyn Source>>,
}

impl Resolver {
    /// Build the source priority list for a conference.
    ///
    /// Structured sources come before the page scraper: they are stable
    /// across years while program pages drift. S&P leads with the IEEE
    /// API (skipped without a key), CCS with Semantic Scholar; DBLP is
    /// the structured fallback for everyone.
    pub fn for_conference(conference: Conference, config: &Config) -> Self {
        let mut sources: Vec<Box<dyn Source>> = Vec::new();

        match conference {
            Conference::Sp => sources.push(Box::new(IeeeApiSource::new(config.ieee.clone()))),
            Conference::Ccs => sources.push(Box::new(SemanticScholarSource)),
            Conference::Usenix | Conference::Ndss => {}
        }
        sources.push(Box::new(DblpSource));
        sources.push(Box::new(ProgramPageSource));

        Self {
            conference,
            sources,
        }
    }

    /// Try each source in priority order; first non-empty parse wins.
    pub async fn resolve(&self, fetcher: &dyn Fetch, year: u16) -> Vec<Paper> {
        for source in &self.sources {
            let candidates = source.candidates(self.conference, year);
            if candidates.is_empty() {
                log::debug!("{}: inapplicable for {} {year}", source.name(), self.conference);
                continue;
            }

            let Some((page_url, body)) = fetch_first(fetcher, &candidates).await else {
                log::warn!(
                    "{}: could not fetch any page from: {}",
                    source.name(),
                    candidates.join(", ")
                );
                continue;
            };

            let papers = source.parse(&body);
            if papers.is_empty() {
                log::info!("{}: {page_url} reachable but no entries, trying next source", source.name());
                continue;
            }

            log::info!("{}: {} entries from {page_url}", source.name(), papers.len());
            return finalize(papers, &page_url);
        }

        log::info!("No source produced entries for {} {year}", self.conference);
        Vec::new()
    }
}

/// Return the body of the first successfully retrieved URL.
async fn fetch_first(fetcher: &dyn Fetch, candidates: &[String]) -> Option<(String, String)> {
    for url in candidates {
        if let Some(body) = fetcher.get(url).await {
            return Some((url.clone(), body));
        }
    }
    None
}

/// Make PDF links absolute and drop duplicate titles, first seen wins.
fn finalize(papers: Vec<Paper>, page_url: &str) -> Vec<Paper> {
    let mut seen = HashSet::new();
    let mut result = Vec::new();

    for mut paper in papers {
        if let Some(href) = paper.pdf_url.take() {
            // A link that cannot be made absolute is dropped, not surfaced relative.
            paper.pdf_url = url::resolve(page_url, &href);
        }
        if seen.insert(paper.normalized_title()) {
            result.push(paper);
        }
    }
    result
}

/// Resolve papers for a conference code and year over real HTTP.
///
/// Unknown codes and out-of-range years are caller-input defects and
/// return an error; upstream unavailability returns `Ok(vec![])`.
pub async fn resolve(config: &Config, conference_code: &str, year: u16) -> Result<Vec<Paper>> {
    let fetcher = HttpFetcher::new(&config.fetcher)?;
    resolve_with(config, &fetcher, conference_code, year).await
}

/// Like [`resolve`], with an injected fetcher.
pub async fn resolve_with(
    config: &Config,
    fetcher: &dyn Fetch,
    conference_code: &str,
    year: u16,
) -> Result<Vec<Paper>> {
    let conference: Conference = conference_code.parse()?;
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(AppError::InvalidYear(year, MIN_YEAR, MAX_YEAR));
    }

    let resolver = Resolver::for_conference(conference, config);
    Ok(resolver.resolve(fetcher, year).await)
}
