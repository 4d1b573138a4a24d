use super::PatternMatcher;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Comma-grouped with cents, plain digits with cents, or a whole-dollar
    // amount with no decimal part at all
    static ref CURRENCY_PATTERN: Regex = Regex::new(
        r"^\$(?:\d{1,3}(?:,\d{3})*\.\d{2}|\d+\.\d{2}|\d+)$"
    ).unwrap();

    // Permissive candidate scan; each candidate is validated against the
    // anchored pattern so a malformed amount like "$1234.5" drops out whole
    // instead of leaving a "$1234" fragment behind
    static ref CURRENCY_CANDIDATE_PATTERN: Regex =
        Regex::new(r"\$[0-9][0-9,]*(?:\.[0-9]+)*").unwrap();
}

pub fn is_match(value: &str) -> bool {
    CURRENCY_PATTERN.is_match(value)
}

pub fn extract_currency(text: &str) -> Vec<String> {
    let mut results = Vec::new();

    for m in CURRENCY_CANDIDATE_PATTERN.find_iter(text) {
        // A list comma glued to the end of an amount is punctuation, not grouping
        let candidate = m.as_str().trim_end_matches(',');
        if CURRENCY_PATTERN.is_match(candidate) {
            results.push(candidate.to_string());
        }
    }

    results
}

pub struct CurrencyMatcher {}

impl PatternMatcher for CurrencyMatcher {
    fn matches(&self, value: &str) -> bool {
        is_match(value)
    }

    fn extract(&self, text: &str) -> Vec<String> {
        extract_currency(text)
    }
}
