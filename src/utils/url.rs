// src/utils/url.rs

//! URL manipulation utilities.

use url::Url;

/// Resolve a potentially relative href against the page it was found on.
///
/// Returns `None` when neither the href nor the combination with the base
/// yields a well-formed absolute URL.
pub fn resolve(base: &str, href: &str) -> Option<String> {
    if let Ok(absolute) = Url::parse(href) {
        return Some(absolute.to_string());
    }
    Url::parse(base)
        .ok()?
        .join(href)
        .ok()
        .map(|u| u.to_string())
}

/// Whether an href points at a PDF, judging by the link text alone.
pub fn is_pdf_href(href: &str) -> bool {
    let path = href.split(['?', '#']).next().unwrap_or(href);
    path.to_lowercase().ends_with(".pdf")
}
