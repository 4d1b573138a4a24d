use super::PatternMatcher;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TIME_24H_PATTERN: Regex =
        Regex::new(r"^(?:[01]?[0-9]|2[0-3]):[0-5][0-9]$").unwrap();

    static ref TIME_12H_PATTERN: Regex =
        Regex::new(r"^(?:1[0-2]|0?[1-9]):[0-5][0-9]\s?[AaPp][Mm]$").unwrap();

    static ref TIME_24H_EXTRACTION_PATTERN: Regex =
        Regex::new(r"\b(?:[01]?[0-9]|2[0-3]):[0-5][0-9]\b").unwrap();

    static ref TIME_12H_EXTRACTION_PATTERN: Regex =
        Regex::new(r"\b(?:1[0-2]|0?[1-9]):[0-5][0-9]\s?[AaPp][Mm]\b").unwrap();
}

pub fn is_match_24h(value: &str) -> bool {
    TIME_24H_PATTERN.is_match(value)
}

pub fn is_match_12h(value: &str) -> bool {
    TIME_12H_PATTERN.is_match(value)
}

fn spans_12h(text: &str) -> Vec<(usize, usize)> {
    TIME_12H_EXTRACTION_PATTERN
        .find_iter(text)
        .map(|m| (m.start(), m.end()))
        .collect()
}

pub fn extract_times_12h(text: &str) -> Vec<String> {
    let mut results = Vec::new();

    for m in TIME_12H_EXTRACTION_PATTERN.find_iter(text) {
        results.push(m.as_str().to_string());
    }

    results
}

pub fn extract_times_24h(text: &str) -> Vec<String> {
    let spans = spans_12h(text);
    let mut results = Vec::new();

    for m in TIME_24H_EXTRACTION_PATTERN.find_iter(text) {
        // "2:30" inside "2:30 PM" is the hour-minute core of a 12-hour
        // time, not a separate 24-hour reading
        let inside_12h = spans
            .iter()
            .any(|&(start, end)| m.start() >= start && m.end() <= end);
        if !inside_12h {
            results.push(m.as_str().to_string());
        }
    }

    results
}

/// Both formats merged, ordered by position in the text.
pub fn extract_times(text: &str) -> Vec<String> {
    let spans = spans_12h(text);
    let mut found: Vec<(usize, String)> = Vec::new();

    for m in TIME_24H_EXTRACTION_PATTERN.find_iter(text) {
        let inside_12h = spans
            .iter()
            .any(|&(start, end)| m.start() >= start && m.end() <= end);
        if !inside_12h {
            found.push((m.start(), m.as_str().to_string()));
        }
    }
    for m in TIME_12H_EXTRACTION_PATTERN.find_iter(text) {
        found.push((m.start(), m.as_str().to_string()));
    }

    found.sort_by_key(|&(start, _)| start);
    found.into_iter().map(|(_, time)| time).collect()
}

pub struct Time24hMatcher {}

impl PatternMatcher for Time24hMatcher {
    fn matches(&self, value: &str) -> bool {
        is_match_24h(value)
    }

    fn extract(&self, text: &str) -> Vec<String> {
        extract_times_24h(text)
    }
}

pub struct Time12hMatcher {}

impl PatternMatcher for Time12hMatcher {
    fn matches(&self, value: &str) -> bool {
        is_match_12h(value)
    }

    fn extract(&self, text: &str) -> Vec<String> {
        extract_times_12h(text)
    }
}
