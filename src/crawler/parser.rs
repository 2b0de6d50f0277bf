//! HTML parser for extracting the page title and raw link targets
//!
//! Hrefs are returned exactly as written in the document. Resolving them against
//! the page URL, stripping fragments and checking the host is the crawler's job.

use scraper::{Html, Selector};

/// Extracted information from an HTML page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedPage {
    /// The page title (from <title> tag), trimmed; None if absent or blank
    pub title: Option<String>,

    /// Every `<a href>` value in document order
    pub hrefs: Vec<String>,
}

/// Parses HTML content and extracts the title and anchor hrefs
///
/// Malformed markup never fails: the parser recovers what it can, and a page
/// with nothing extractable yields no title and no hrefs.
///
/// # Example
///
/// ```
/// use flow_mapper::crawler::parse_html;
///
/// let html = r#"<html><head><title> Test </title></head><body><a href="/page">Link</a></body></html>"#;
/// let parsed = parse_html(html);
/// assert_eq!(parsed.title, Some("Test".to_string()));
/// assert_eq!(parsed.hrefs, vec!["/page".to_string()]);
/// ```
pub fn parse_html(html: &str) -> ParsedPage {
    let document = Html::parse_document(html);

    ParsedPage {
        title: extract_title(&document),
        hrefs: extract_hrefs(&document),
    }
}

/// Extracts the page title from the HTML document
fn extract_title(document: &Html) -> Option<String> {
    let title_selector = Selector::parse("title").ok()?;

    document
        .select(&title_selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Extracts the href of every anchor carrying one
fn extract_hrefs(document: &Html) -> Vec<String> {
    let Ok(a_selector) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    document
        .select(&a_selector)
        .filter_map(|element| element.value().attr("href"))
        .map(str::to_string)
        .collect()
}
