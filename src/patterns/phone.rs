use super::PatternMatcher;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // US-style 3-3-4 numbers, optional parentheses around the area code.
    // Each separator slot is independently optional: the canonical
    // "(123) 456-7890" form mixes a space and a dash.
    static ref PHONE_PATTERN: Regex =
        Regex::new(r"^\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}$").unwrap();

    static ref PHONE_EXTRACTION_PATTERN: Regex =
        Regex::new(r"\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").unwrap();
}

pub fn is_match(value: &str) -> bool {
    PHONE_PATTERN.is_match(value)
}

pub fn extract_phone_numbers(text: &str) -> Vec<String> {
    let mut results = Vec::new();

    for m in PHONE_EXTRACTION_PATTERN.find_iter(text) {
        // Skip international forms: a candidate glued to a leading '+', a
        // country-code separator, or more digits is not a bare 3-3-4 number
        let preceded_by = text[..m.start()].chars().next_back();
        if matches!(preceded_by, Some('+') | Some('-') | Some('.')) {
            continue;
        }
        if preceded_by.map_or(false, |c| c.is_ascii_digit()) {
            continue;
        }
        results.push(m.as_str().to_string());
    }

    results
}

pub struct PhoneMatcher {}

impl PatternMatcher for PhoneMatcher {
    fn matches(&self, value: &str) -> bool {
        is_match(value)
    }

    fn extract(&self, text: &str) -> Vec<String> {
        extract_phone_numbers(text)
    }
}
