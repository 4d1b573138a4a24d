use super::PatternMatcher;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Opening, closing, self-closing and attributed tags alike: anything
    // between '<' and the next '>'
    static ref HTML_TAG_PATTERN: Regex = Regex::new(r"^<[^>]+>$").unwrap();

    static ref HTML_TAG_EXTRACTION_PATTERN: Regex = Regex::new(r"<[^>]+>").unwrap();
}

pub fn is_match(value: &str) -> bool {
    HTML_TAG_PATTERN.is_match(value)
}

pub fn extract_html_tags(text: &str) -> Vec<String> {
    let mut results = Vec::new();

    for cap in HTML_TAG_EXTRACTION_PATTERN.captures_iter(text) {
        results.push(cap[0].to_string());
    }

    results
}

pub struct HtmlTagMatcher {}

impl PatternMatcher for HtmlTagMatcher {
    fn matches(&self, value: &str) -> bool {
        is_match(value)
    }

    fn extract(&self, text: &str) -> Vec<String> {
        extract_html_tags(text)
    }
}
