// src/sources/program.rs

//! Program-page scraper source.
//!
//! Last-resort source: fetches the conference's program or
//! accepted-papers page and extracts entries by structural pattern
//! matching. URL templates and page patterns are both data, so a new
//! year or a markup change is a table edit, not new control flow.
//!
//! PDF hrefs are returned exactly as found on the page; the resolver
//! makes them absolute against the page URL.

use scraper::{ElementRef, Html, Selector};

use crate::models::{Conference, Paper, split_authors};
use crate::utils::url::is_pdf_href;

use super::Source;

/// Candidate program-page URL templates, most likely first.
///
/// `{year}` expands to the four-digit year, `{yy}` to the two-digit
/// form some venues use in path segments.
const URL_TEMPLATES: &[(Conference, &[&str])] = &[
    (Conference::Sp, &[
        "https://www.ieee-security.org/TC/SP{year}/program.html",
        "https://sp{year}.ieee-security.org/program.html",
        "https://sp{year}.ieee-security.org/accepted-papers.html",
    ]),
    (Conference::Ccs, &[
        "https://www.sigsac.org/ccs/CCS{year}/program.html",
        "https://www.sigsac.org/ccs/CCS{year}/program/",
        "https://www.sigsac.org/ccs/CCS{year}/accepted-papers.html",
    ]),
    (Conference::Usenix, &[
        "https://www.usenix.org/conference/usenixsecurity{yy}/technical-sessions",
        "https://www.usenix.org/conference/usenixsecurity{yy}/fall-accepted-papers",
        "https://www.usenix.org/conference/usenixsecurity{year}/technical-sessions",
    ]),
    (Conference::Ndss, &[
        "https://www.ndss-symposium.org/ndss{year}-program/",
        "https://www.ndss-symposium.org/ndss{year}/program/",
        "https://www.ndss-symposium.org/ndss{year}/accepted-papers/",
    ]),
];

/// One recognizable page structure with its extraction selectors.
struct PagePattern {
    name: &'static str,

    /// Substring that identifies this structure in the raw HTML
    detect_html_contains: Option<&'static str>,

    /// Selector for one paper entry
    entry_selector: &'static str,

    /// Selector for the title element within an entry
    title_selector: &'static str,

    /// Selector for the author line within an entry
    authors_selector: &'static str,
}

/// Page structures seen across the four conference sites, most specific
/// first. Entries a pattern cannot confidently parse are skipped.
const PAGE_PATTERNS: &[PagePattern] = &[
    // USENIX Drupal nodes
    PagePattern {
        name: "usenix_node",
        detect_html_contains: Some("node--type-paper"),
        entry_selector: "div.node--type-paper",
        title_selector: "h2.node-title, h3.node-title",
        authors_selector: "div.field--name-field-paper-people-text, div.field--name-field-paper-authors",
    },
    // S&P / CCS / NDSS program pages
    PagePattern {
        name: "paper_div",
        detect_html_contains: None,
        entry_selector: "div.paper",
        title_selector: "div.title, h3, h4",
        authors_selector: "div.authors, p.authors, p.author",
    },
    // Accepted-papers bullet lists
    PagePattern {
        name: "accepted_list",
        detect_html_contains: Some("Accepted Papers"),
        entry_selector: "li:has(strong), li:has(b)",
        title_selector: "strong, b",
        authors_selector: "em, i",
    },
];

/// Program/accepted-papers page scraper.
#[derive(Debug, Default)]
pub struct ProgramPageSource;

impl Source for ProgramPageSource {
    fn name(&self) -> &'static str {
        "program-page"
    }

    fn candidates(&self, conference: Conference, year: u16) -> Vec<String> {
        let templates = URL_TEMPLATES
            .iter()
            .find(|(c, _)| *c == conference)
            .map(|(_, templates)| *templates)
            .unwrap_or_default();

        templates
            .iter()
            .map(|template| {
                template
                    .replace("{year}", &year.to_string())
                    .replace("{yy}", &format!("{:02}", year % 100))
            })
            .collect()
    }

    fn parse(&self, body: &str) -> Vec<Paper> {
        let document = Html::parse_document(body);

        for pattern in PAGE_PATTERNS {
            if let Some(marker) = pattern.detect_html_contains {
                if !body.contains(marker) {
                    continue;
                }
            }

            let papers = pattern.extract(&document);
            if !papers.is_empty() {
                log::debug!(
                    "program-page: pattern '{}' matched {} entries",
                    pattern.name,
                    papers.len()
                );
                return papers;
            }
        }

        log::debug!("program-page: no pattern matched");
        Vec::new()
    }
}

impl PagePattern {
    fn extract(&self, document: &Html) -> Vec<Paper> {
        // Selectors are compile-time constants; a parse failure is a defect
        // in this table, not a runtime condition.
        let Ok(entry_sel) = Selector::parse(self.entry_selector) else {
            return Vec::new();
        };
        let Ok(title_sel) = Selector::parse(self.title_selector) else {
            return Vec::new();
        };
        let Ok(authors_sel) = Selector::parse(self.authors_selector) else {
            return Vec::new();
        };

        document
            .select(&entry_sel)
            .filter_map(|entry| self.parse_entry(&entry, &title_sel, &authors_sel))
            .collect()
    }

    fn parse_entry(
        &self,
        entry: &ElementRef,
        title_sel: &Selector,
        authors_sel: &Selector,
    ) -> Option<Paper> {
        let title: String = entry.select(title_sel).next()?.text().collect();

        let authors = entry
            .select(authors_sel)
            .next()
            .map(|el| split_authors(&el.text().collect::<String>()))
            .unwrap_or_default();

        let pdf_url = find_pdf_href(entry);

        Paper::new(&title, authors, pdf_url)
    }
}

/// First anchor within the entry whose href looks like a PDF.
fn find_pdf_href(entry: &ElementRef) -> Option<String> {
    let anchor_sel = Selector::parse("a[href]").ok()?;
    entry
        .select(&anchor_sel)
        .filter_map(|a| a.value().attr("href"))
        .find(|href| is_pdf_href(href))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAPER_DIV_PAGE: &str = r#"
        <html><body>
        <h1>Program</h1>
        <div class="paper">
            <div class="title">Breaking Things at Scale</div>
            <div class="authors">Alice Able, Bob Baker</div>
            <a href="papers/breaking.pdf">PDF</a>
        </div>
        <div class="paper">
            <div class="title">Unbreaking Things</div>
            <div class="authors">Carol Cook and Dan Dale</div>
            <a href="https://example.org/unbreaking">Details</a>
        </div>
        <div class="paper">
            <div class="authors">Orphaned Author Line</div>
        </div>
        </body></html>"#;

    const USENIX_PAGE: &str = r#"
        <html><body>
        <div class="node--type-paper">
            <h2 class="node-title">Kernel Fuzzing Revisited</h2>
            <div class="field--name-field-paper-people-text">Erin East, Frank Field</div>
            <a href="/system/files/kernel.pdf">Paper PDF</a>
        </div>
        </body></html>"#;

    #[test]
    fn test_candidates_two_digit_year() {
        let urls = ProgramPageSource.candidates(Conference::Usenix, 2023);
        assert_eq!(urls.len(), 3);
        assert!(urls[0].contains("usenixsecurity23/"));
        assert!(urls[2].contains("usenixsecurity2023/"));
    }

    #[test]
    fn test_candidates_four_digit_year() {
        let urls = ProgramPageSource.candidates(Conference::Ndss, 2024);
        assert_eq!(urls.len(), 3);
        assert!(urls.iter().all(|u| u.contains("ndss2024")));
    }

    #[test]
    fn test_parse_paper_divs() {
        let papers = ProgramPageSource.parse(PAPER_DIV_PAGE);
        // The entry without a title is skipped
        assert_eq!(papers.len(), 2);
        assert_eq!(papers[0].title, "Breaking Things at Scale");
        assert_eq!(papers[0].authors, vec!["Alice Able", "Bob Baker"]);
        assert_eq!(papers[0].pdf_url.as_deref(), Some("papers/breaking.pdf"));
        assert_eq!(papers[1].authors, vec!["Carol Cook", "Dan Dale"]);
        assert_eq!(papers[1].pdf_url, None);
    }

    #[test]
    fn test_parse_usenix_nodes() {
        let papers = ProgramPageSource.parse(USENIX_PAGE);
        assert_eq!(papers.len(), 1);
        assert_eq!(papers[0].title, "Kernel Fuzzing Revisited");
        assert_eq!(papers[0].authors, vec!["Erin East", "Frank Field"]);
        assert_eq!(papers[0].pdf_url.as_deref(), Some("/system/files/kernel.pdf"));
    }

    #[test]
    fn test_parse_unrecognized_markup_is_empty() {
        let page = "<html><body><p>The program will be announced soon.</p></body></html>";
        assert!(ProgramPageSource.parse(page).is_empty());
    }

    #[test]
    fn test_pattern_selectors_are_valid() {
        for pattern in PAGE_PATTERNS {
            assert!(Selector::parse(pattern.entry_selector).is_ok(), "{}", pattern.name);
            assert!(Selector::parse(pattern.title_selector).is_ok(), "{}", pattern.name);
            assert!(Selector::parse(pattern.authors_selector).is_ok(), "{}", pattern.name);
        }
    }
}
