use super::PatternMatcher;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Four 4-digit groups with uniform separation: all dashes, all spaces,
    // or 16 contiguous digits. Mixed separators do not form a card number.
    static ref CREDIT_CARD_PATTERN: Regex = Regex::new(
        r"^\d{4}(?:(?:-\d{4}){3}|(?: \d{4}){3}|\d{12})$"
    ).unwrap();

    static ref CREDIT_CARD_EXTRACTION_PATTERN: Regex = Regex::new(
        r"\b\d{4}(?:(?:-\d{4}){3}|(?: \d{4}){3}|\d{12})\b"
    ).unwrap();
}

pub fn is_match(value: &str) -> bool {
    CREDIT_CARD_PATTERN.is_match(value)
}

pub fn extract_credit_cards(text: &str) -> Vec<String> {
    let mut results = Vec::new();

    for cap in CREDIT_CARD_EXTRACTION_PATTERN.captures_iter(text) {
        results.push(cap[0].to_string());
    }

    results
}

pub struct CreditCardMatcher {}

impl PatternMatcher for CreditCardMatcher {
    fn matches(&self, value: &str) -> bool {
        is_match(value)
    }

    fn extract(&self, text: &str) -> Vec<String> {
        extract_credit_cards(text)
    }
}
