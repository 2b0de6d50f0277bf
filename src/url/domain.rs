use url::Url;

/// Extracts the domain from a URL
///
/// This function retrieves the host portion of a URL and converts it to lowercase.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use flow_mapper::url::extract_domain;
///
/// let url = Url::parse("https://Example.com/path").unwrap();
/// assert_eq!(extract_domain(&url), Some("example.com".to_string()));
///
/// let url = Url::parse("mailto:someone@example.com").unwrap();
/// assert_eq!(extract_domain(&url), None);
/// ```
pub fn extract_domain(url: &Url) -> Option<String> {
    url.host_str().map(|h| h.to_lowercase())
}

/// The network location a crawl is confined to
///
/// Built from the seed URL. A link is in scope when it is an HTTP(S) URL whose
/// host and explicit port match the seed's. The scheme is not compared, so
/// `http://a.test/x` belongs to a crawl seeded at `https://a.test/`, while
/// `https://a.test:8080/` does not. A port equal to the scheme's default counts
/// as no port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteScope {
    host: String,
    port: Option<u16>,
}

impl SiteScope {
    /// Builds the scope for a seed URL, or None if the seed has no host
    pub fn from_seed(seed: &Url) -> Option<Self> {
        Some(Self {
            host: extract_domain(seed)?,
            port: seed.port(),
        })
    }

    /// The host every in-scope URL must carry
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns true if the URL lives on the scoped site
    pub fn contains(&self, url: &Url) -> bool {
        if url.scheme() != "http" && url.scheme() != "https" {
            return false;
        }
        match extract_domain(url) {
            Some(host) => host == self.host && url.port() == self.port,
            None => false,
        }
    }
}
