use super::PatternMatcher;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Scheme is mandatory, host needs at least one dotted suffix of 2+ letters,
    // the tail is anything non-whitespace introduced by '/' or '?'
    static ref URL_PATTERN: Regex = Regex::new(
        r"^https?://(?:www\.)?[A-Za-z0-9-]+(?:\.[A-Za-z]{2,})+(?:[/?][^\s]*)?$"
    ).unwrap();

    static ref URL_EXTRACTION_PATTERN: Regex = Regex::new(
        r"https?://(?:www\.)?[A-Za-z0-9-]+(?:\.[A-Za-z]{2,})+(?:[/?][^\s]*)?"
    ).unwrap();
}

pub fn is_match(value: &str) -> bool {
    URL_PATTERN.is_match(value)
}

pub fn extract_urls(text: &str) -> Vec<String> {
    let mut results = Vec::new();

    for cap in URL_EXTRACTION_PATTERN.captures_iter(text) {
        results.push(cap[0].to_string());
    }

    results
}

pub struct UrlMatcher {}

impl PatternMatcher for UrlMatcher {
    fn matches(&self, value: &str) -> bool {
        is_match(value)
    }

    fn extract(&self, text: &str) -> Vec<String> {
        extract_urls(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_urls() {
        let valid_urls = vec![
            "http://example.com",
            "https://example.com",
            "https://www.example.com",
            "http://example.com/path",
            "https://example.com/path?query=value",
            "https://subdomain.example.org/page",
        ];

        for url in valid_urls {
            assert!(is_match(url), "URL should be valid: {}", url);
        }
    }

    #[test]
    fn test_invalid_urls() {
        let invalid_urls = vec![
            "example.com",       // missing scheme
            "www.example.com",   // bare www without scheme
            "http://",           // missing host
            "http://example",    // missing dotted suffix
            "ftp://example.com", // unsupported scheme
        ];

        for url in invalid_urls {
            assert!(!is_match(url), "URL should be invalid: {}", url);
        }
    }

    #[test]
    fn test_extract_from_text() {
        let text = "Visit our website: https://www.example.com or https://subdomain.example.org/page";
        assert_eq!(
            extract_urls(text),
            vec!["https://www.example.com", "https://subdomain.example.org/page"]
        );
    }

    #[test]
    fn test_extract_query_string() {
        assert_eq!(
            extract_urls("Visit https://example.com/page?x=1"),
            vec!["https://example.com/page?x=1"]
        );
    }

    #[test]
    fn test_extract_skips_incomplete() {
        assert_eq!(extract_urls("Invalid: http:/incomplete and http://"), Vec::<String>::new());
    }
}
