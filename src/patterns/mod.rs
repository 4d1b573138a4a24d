pub mod credit_card;
pub mod currency;
pub mod email;
pub mod hashtag;
pub mod html_tag;
pub mod phone;
pub mod time;
pub mod url;

pub trait PatternMatcher {
    /// Anchored check: does the whole value satisfy this category's grammar?
    fn matches(&self, value: &str) -> bool;

    /// Unanchored scan: every non-overlapping match in the text, left to right.
    fn extract(&self, text: &str) -> Vec<String>;
}
