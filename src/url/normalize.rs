use crate::UrlError;
use url::Url;

/// Normalizes a seed URL
///
/// # Normalization Steps
///
/// 1. Parse the URL; reject if malformed
/// 2. Require an HTTP or HTTPS scheme
/// 3. Require a host
/// 4. Remove fragment (everything after #)
///
/// Host lowercasing and dot-segment removal are applied by the parser itself.
/// Nothing else is rewritten: pages are compared by exact string equality, so
/// query strings and trailing slashes are kept as written.
///
/// # Arguments
///
/// * `url_str` - The URL string to normalize
///
/// # Returns
///
/// * `Ok(Url)` - Normalized URL
/// * `Err(UrlError)` - Failed to parse or the URL is not crawlable
///
/// # Examples
///
/// ```
/// use flow_mapper::url::normalize_url;
///
/// let url = normalize_url("https://EXAMPLE.com/docs#intro").unwrap();
/// assert_eq!(url.as_str(), "https://example.com/docs");
/// ```
pub fn normalize_url(url_str: &str) -> Result<Url, UrlError> {
    let mut url = Url::parse(url_str.trim()).map_err(|e| UrlError::Parse(e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    if url.host_str().is_none() {
        return Err(UrlError::MissingHost);
    }

    url.set_fragment(None);

    Ok(url)
}

/// Returns the part of an href before the first `#`
///
/// # Examples
///
/// ```
/// use flow_mapper::url::strip_fragment;
///
/// assert_eq!(strip_fragment("/pricing#plans"), "/pricing");
/// assert_eq!(strip_fragment("#top"), "");
/// assert_eq!(strip_fragment("/about"), "/about");
/// ```
pub fn strip_fragment(href: &str) -> &str {
    match href.find('#') {
        Some(idx) => &href[..idx],
        None => href,
    }
}

/// Resolves a raw href found on `page` into an absolute URL
///
/// The fragment is stripped first, so a fragment-only href (`#section`)
/// resolves to the page itself. Returns None if the href cannot be joined
/// onto the page URL.
///
/// Scheme filtering is left to the caller's host check: `mailto:` and
/// `javascript:` targets carry no host and never match a site.
pub fn resolve_link(href: &str, page: &Url) -> Option<Url> {
    let mut resolved = page.join(strip_fragment(href)).ok()?;
    resolved.set_fragment(None);
    Some(resolved)
}
