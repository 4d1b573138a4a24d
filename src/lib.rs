//! Extraction of structured substrings (emails, URLs, phone numbers, credit
//! card numbers, times, HTML tags, hashtags, currency amounts) from free text.
//!
//! Every grammar is a compiled regex built once and read-only afterward, so
//! the extraction functions are pure: same text in, same matches out, in
//! left-to-right order of occurrence. Matching is linear-time in the input
//! (the regex engine does not backtrack), so adversarial digit/separator runs
//! cannot blow up extraction cost. No input is an error; text with nothing to
//! find yields empty vectors.

pub mod patterns;

use patterns::PatternMatcher;
use serde::Serialize;
use std::collections::HashMap;

/// Time matches kept apart by format, mirroring the split result shape of the
/// aggregate operation. The merged view is [`extract_times`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TimeMatches {
    #[serde(rename = "24h_format")]
    pub format_24h: Vec<String>,
    #[serde(rename = "12h_format")]
    pub format_12h: Vec<String>,
}

/// Every category's matches for one input text. All fields are always
/// populated; "nothing found" is an empty vector, never a missing field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionResult {
    pub emails: Vec<String>,
    pub urls: Vec<String>,
    pub phone_numbers: Vec<String>,
    pub credit_cards: Vec<String>,
    pub times: TimeMatches,
    pub html_tags: Vec<String>,
    pub hashtags: Vec<String>,
    pub currency: Vec<String>,
}

pub fn extract_emails(text: &str) -> Vec<String> {
    patterns::email::extract_emails(text)
}

pub fn extract_urls(text: &str) -> Vec<String> {
    patterns::url::extract_urls(text)
}

pub fn extract_phone_numbers(text: &str) -> Vec<String> {
    patterns::phone::extract_phone_numbers(text)
}

pub fn extract_credit_cards(text: &str) -> Vec<String> {
    patterns::credit_card::extract_credit_cards(text)
}

/// Times in both formats, merged and ordered by position in the text.
pub fn extract_times(text: &str) -> Vec<String> {
    patterns::time::extract_times(text)
}

/// Times kept apart by format, as carried in [`ExtractionResult`].
pub fn extract_times_split(text: &str) -> TimeMatches {
    TimeMatches {
        format_24h: patterns::time::extract_times_24h(text),
        format_12h: patterns::time::extract_times_12h(text),
    }
}

pub fn extract_html_tags(text: &str) -> Vec<String> {
    patterns::html_tag::extract_html_tags(text)
}

pub fn extract_hashtags(text: &str) -> Vec<String> {
    patterns::hashtag::extract_hashtags(text)
}

pub fn extract_currency(text: &str) -> Vec<String> {
    patterns::currency::extract_currency(text)
}

/// Runs every category over the text independently. No cross-category
/// deduplication or suppression: a span may show up under several categories.
pub fn extract_all(text: &str) -> ExtractionResult {
    ExtractionResult {
        emails: extract_emails(text),
        urls: extract_urls(text),
        phone_numbers: extract_phone_numbers(text),
        credit_cards: extract_credit_cards(text),
        times: extract_times_split(text),
        html_tags: extract_html_tags(text),
        hashtags: extract_hashtags(text),
        currency: extract_currency(text),
    }
}

/// Names of every category whose grammar matches the whole value.
pub fn classify(value: &str) -> Vec<String> {
    if value.is_empty() {
        return vec![];
    }

    let mut matches = Vec::new();

    if patterns::email::is_match(value) {
        matches.push("email".to_string());
    }
    if patterns::url::is_match(value) {
        matches.push("url".to_string());
    }
    if patterns::phone::is_match(value) {
        matches.push("phone".to_string());
    }
    if patterns::credit_card::is_match(value) {
        matches.push("credit_card".to_string());
    }
    if patterns::time::is_match_24h(value) {
        matches.push("time_24h".to_string());
    }
    if patterns::time::is_match_12h(value) {
        matches.push("time_12h".to_string());
    }
    if patterns::html_tag::is_match(value) {
        matches.push("html_tag".to_string());
    }
    if patterns::hashtag::is_match(value) {
        matches.push("hashtag".to_string());
    }
    if patterns::currency::is_match(value) {
        matches.push("currency".to_string());
    }

    matches
}

pub fn get_all_matchers() -> HashMap<String, Box<dyn PatternMatcher>> {
    let mut matchers: HashMap<String, Box<dyn PatternMatcher>> = HashMap::new();

    matchers.insert("email".to_string(), Box::new(patterns::email::EmailMatcher {}));
    matchers.insert("url".to_string(), Box::new(patterns::url::UrlMatcher {}));
    matchers.insert("phone".to_string(), Box::new(patterns::phone::PhoneMatcher {}));
    matchers.insert(
        "credit_card".to_string(),
        Box::new(patterns::credit_card::CreditCardMatcher {}),
    );
    matchers.insert("time_24h".to_string(), Box::new(patterns::time::Time24hMatcher {}));
    matchers.insert("time_12h".to_string(), Box::new(patterns::time::Time12hMatcher {}));
    matchers.insert("html_tag".to_string(), Box::new(patterns::html_tag::HtmlTagMatcher {}));
    matchers.insert("hashtag".to_string(), Box::new(patterns::hashtag::HashtagMatcher {}));
    matchers.insert("currency".to_string(), Box::new(patterns::currency::CurrencyMatcher {}));

    matchers
}
