use super::PatternMatcher;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref HASHTAG_PATTERN: Regex = Regex::new(r"^#[A-Za-z0-9_]+$").unwrap();

    // No boundary requirement before '#': adjacent tags like "#a#b" split
    // into separate matches
    static ref HASHTAG_EXTRACTION_PATTERN: Regex = Regex::new(r"#[A-Za-z0-9_]+").unwrap();
}

pub fn is_match(value: &str) -> bool {
    HASHTAG_PATTERN.is_match(value)
}

pub fn extract_hashtags(text: &str) -> Vec<String> {
    let mut results = Vec::new();

    for cap in HASHTAG_EXTRACTION_PATTERN.captures_iter(text) {
        results.push(cap[0].to_string());
    }

    results
}

pub struct HashtagMatcher {}

impl PatternMatcher for HashtagMatcher {
    fn matches(&self, value: &str) -> bool {
        is_match(value)
    }

    fn extract(&self, text: &str) -> Vec<String> {
        extract_hashtags(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_hashtags() {
        let valid_hashtags = vec!["#python", "#123", "#test_hashtag", "#ThisIsAHashtag", "#2024"];

        for hashtag in valid_hashtags {
            assert!(is_match(hashtag), "Hashtag should be valid: {}", hashtag);
        }
    }

    #[test]
    fn test_invalid_hashtags() {
        let invalid_hashtags = vec!["#", "# spaced", "plain", "#tag-with-dash"];

        for hashtag in invalid_hashtags {
            assert!(!is_match(hashtag), "Hashtag should be invalid: {}", hashtag);
        }
    }

    #[test]
    fn test_extract_from_text() {
        let text = "Trending: #python #MachineLearning #ThisIsAHashtag";
        assert_eq!(
            extract_hashtags(text),
            vec!["#python", "#MachineLearning", "#ThisIsAHashtag"]
        );
    }

    #[test]
    fn test_extract_adjacent_tags_split() {
        assert_eq!(extract_hashtags("#multiple#hashtags"), vec!["#multiple", "#hashtags"]);
    }

    #[test]
    fn test_extract_skips_bare_hash() {
        assert_eq!(extract_hashtags("# spaced hashtag"), Vec::<String>::new());
    }
}
