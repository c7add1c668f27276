use super::trusted_sources::TrustedSources;
use crate::shared::constants::{MAX_LINKS, SEARCH_PATH};

/// Builds search links for keywords against a fixed set of trusted sources.
#[derive(Clone, Debug)]
pub struct LinkGenerator {
    sources: TrustedSources,
    max_links: usize,
}

impl LinkGenerator {
    pub fn new(sources: TrustedSources, max_links: usize) -> Self {
        Self { sources, max_links }
    }

    pub fn sources(&self) -> &TrustedSources {
        &self.sources
    }

    pub fn max_links(&self) -> usize {
        self.max_links
    }

    /// Keyword-major, source-minor product of links, cut at `max_links`.
    pub fn generate<S: AsRef<str>>(&self, keywords: &[S]) -> Vec<String> {
        let sources = &self.sources;
        keywords
            .iter()
            .flat_map(move |keyword| {
                let query = encode_query(keyword.as_ref());
                sources
                    .iter()
                    .map(move |source| format!("{source}{SEARCH_PATH}{query}"))
            })
            .take(self.max_links)
            .collect()
    }
}

impl Default for LinkGenerator {
    fn default() -> Self {
        Self::new(TrustedSources::default(), MAX_LINKS)
    }
}

/// Generate up to five search links for `keywords` against `sources`.
pub fn generate_links<K, S>(keywords: &[K], sources: &[S]) -> Vec<String>
where
    K: AsRef<str>,
    S: AsRef<str>,
{
    LinkGenerator::new(TrustedSources::new(sources), MAX_LINKS).generate(keywords)
}

/// Percent-encode a query value, with spaces as `+`.
pub fn encode_query(value: &str) -> String {
    urlencoding::encode(value).replace("%20", "+")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const SOURCES: [&str; 3] = [
        "https://developer.mozilla.org",
        "https://docs.python.org",
        "https://stackoverflow.com/questions",
    ];

    #[test]
    fn test_single_keyword_single_source() {
        let links = generate_links(&["quick"], &["https://docs.python.org"]);
        assert_eq!(links, vec!["https://docs.python.org/search?q=quick"]);
    }

    #[test]
    fn test_source_is_appended_to_verbatim() {
        let links = generate_links(&["quick"], &["https://a.org/"]);
        assert_eq!(links, vec!["https://a.org//search?q=quick"]);
    }

    #[test]
    fn test_single_keyword_three_sources() {
        let links = generate_links(&["tokio"], &SOURCES);
        assert_eq!(
            links,
            vec![
                "https://developer.mozilla.org/search?q=tokio",
                "https://docs.python.org/search?q=tokio",
                "https://stackoverflow.com/questions/search?q=tokio",
            ]
        );
    }

    #[test]
    fn test_empty_keywords_returns_empty() {
        let keywords: [&str; 0] = [];
        assert!(generate_links(&keywords, &SOURCES).is_empty());
    }

    #[test]
    fn test_empty_sources_returns_empty() {
        let sources: [&str; 0] = [];
        assert!(generate_links(&["quick"], &sources).is_empty());
    }

    #[test]
    fn test_keyword_major_order_truncated_to_five() {
        let links = generate_links(&["alpha", "bravo", "charlie"], &SOURCES);
        assert_eq!(
            links,
            vec![
                "https://developer.mozilla.org/search?q=alpha",
                "https://docs.python.org/search?q=alpha",
                "https://stackoverflow.com/questions/search?q=alpha",
                "https://developer.mozilla.org/search?q=bravo",
                "https://docs.python.org/search?q=bravo",
            ]
        );
    }

    #[rstest]
    #[case::one(1, 3)]
    #[case::two(2, 5)]
    #[case::many(40, 5)]
    fn test_link_count_bounded(#[case] keyword_count: usize, #[case] expected: usize) {
        let keywords: Vec<String> = (0..keyword_count).map(|i| format!("keyword{i}")).collect();
        assert_eq!(generate_links(&keywords, &SOURCES).len(), expected);
    }

    #[rstest]
    #[case::plain("rust", "rust")]
    #[case::space("async rust", "async+rust")]
    #[case::reserved("c++ & c#", "c%2B%2B+%26+c%23")]
    #[case::unreserved("a-b_c.d~e", "a-b_c.d~e")]
    #[case::slash("path/to", "path%2Fto")]
    #[case::unicode("café", "caf%C3%A9")]
    fn test_encode_query(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(encode_query(input), expected);
    }

    #[test]
    fn test_keyword_is_encoded_in_link() {
        let links = generate_links(&["what's new"], &["https://docs.python.org"]);
        assert_eq!(
            links,
            vec!["https://docs.python.org/search?q=what%27s+new"]
        );
    }

    #[test]
    fn test_custom_limit() {
        let generator = LinkGenerator::new(TrustedSources::new(SOURCES), 2);
        let links = generator.generate(&["alpha", "bravo"]);
        assert_eq!(links.len(), 2);
        assert_eq!(generator.max_links(), 2);
    }

    #[test]
    fn test_default_generator_uses_default_sources() {
        let generator = LinkGenerator::default();
        assert_eq!(generator.sources(), &TrustedSources::default());
        assert_eq!(generator.max_links(), MAX_LINKS);
    }
}
