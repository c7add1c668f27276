use crate::shared::constants::DEFAULT_TRUSTED_SOURCES;

/// Ordered base URLs that search links are built against.
///
/// Fixed once constructed; there is no API to add or remove sources.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrustedSources {
    urls: Vec<String>,
}

impl TrustedSources {
    /// URLs are kept exactly as given; links append to them verbatim.
    pub fn new<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            urls: urls.into_iter().map(|u| u.as_ref().to_string()).collect(),
        }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.urls
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.urls.iter().map(String::as_str)
    }
}

impl Default for TrustedSources {
    fn default() -> Self {
        Self::new(DEFAULT_TRUSTED_SOURCES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_three_sources_in_order() {
        let sources = TrustedSources::default();
        assert_eq!(sources.len(), 3);
        assert_eq!(
            sources.as_slice(),
            &[
                "https://developer.mozilla.org",
                "https://docs.python.org",
                "https://stackoverflow.com/questions",
            ]
        );
    }

    #[test]
    fn test_urls_kept_verbatim() {
        let sources = TrustedSources::new(["https://docs.rs/", " https://crates.io "]);
        assert_eq!(sources.as_slice(), &["https://docs.rs/", " https://crates.io "]);
    }

    #[test]
    fn test_empty() {
        let sources = TrustedSources::new(Vec::<String>::new());
        assert!(sources.is_empty());
        assert_eq!(sources.iter().count(), 0);
    }
}
