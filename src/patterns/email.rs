use super::PatternMatcher;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref EMAIL_PATTERN: Regex =
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap();

    // Extraction pattern without anchors
    static ref EMAIL_EXTRACTION_PATTERN: Regex =
        Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").unwrap();
}

pub fn is_match(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

pub fn extract_emails(text: &str) -> Vec<String> {
    let mut results = Vec::new();

    for cap in EMAIL_EXTRACTION_PATTERN.captures_iter(text) {
        results.push(cap[0].to_string());
    }

    results
}

pub struct EmailMatcher {}

impl PatternMatcher for EmailMatcher {
    fn matches(&self, value: &str) -> bool {
        is_match(value)
    }

    fn extract(&self, text: &str) -> Vec<String> {
        extract_emails(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        let valid_emails = vec![
            "user@example.com",
            "user.name@example.com",
            "user+tag@example.com",
            "user123@example.co.uk",
            "user-name@example-domain.com",
            "user_name%x@example.com",
        ];

        for email in valid_emails {
            assert!(is_match(email), "Email should be valid: {}", email);
        }
    }

    #[test]
    fn test_invalid_emails() {
        let invalid_emails = vec![
            "user@",
            "user@example",
            "user@example.c",
            "user name@example.com",
            "plain-text",
        ];

        for email in invalid_emails {
            assert!(!is_match(email), "Email should be invalid: {}", email);
        }
    }

    #[test]
    fn test_extract_from_text() {
        let text = "Contact us at user@example.com or firstname.lastname@company.co.uk";
        assert_eq!(
            extract_emails(text),
            vec!["user@example.com", "firstname.lastname@company.co.uk"]
        );
    }

    #[test]
    fn test_extract_skips_malformed() {
        assert_eq!(extract_emails("notanemail@ and @domain.com"), Vec::<String>::new());
        assert_eq!(extract_emails(""), Vec::<String>::new());
    }
}
