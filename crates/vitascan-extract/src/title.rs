//! Job title detection in the document head.

use once_cell::sync::Lazy;
use regex::Regex;

use vitascan_core::TITLE_SENTINEL;

/// Canonical titles in priority order — earlier entries win when the head
/// window contains several.
const KNOWN_TITLES: &[&str] = &[
    "Web Developer",
    "Data Analyst",
    "Engineer",
    "Web Development Fresher",
    "Software Developer",
    "Machine Learning",
    "Data Scientist",
];

/// Only this many leading characters are scanned; titles appear in the
/// document head, and deeper matches are usually work history.
const HEAD_WINDOW: usize = 200;

static TITLE_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    KNOWN_TITLES
        .iter()
        .map(|&title| {
            let pattern = format!(r"(?i)\b{}\b", regex::escape(title));
            (title, Regex::new(&pattern).unwrap())
        })
        .collect()
});

/// Return the first known title matching in the head window, or the
/// sentinel when none does.
pub fn extract_job_title(text: &str) -> String {
    let head: String = text.chars().take(HEAD_WINDOW).collect();

    for (title, re) in TITLE_PATTERNS.iter() {
        if re.is_match(&head) {
            return (*title).to_string();
        }
    }
    TITLE_SENTINEL.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_title_in_head() {
        let title = extract_job_title("Jane Doe Senior web developer with 8 years experience");
        assert_eq!(title, "Web Developer");
    }

    #[test]
    fn test_priority_order_wins() {
        // Both "Engineer" and "Data Analyst" appear; list order decides.
        let title = extract_job_title("Engineer turned Data Analyst");
        assert_eq!(title, "Data Analyst");
    }

    #[test]
    fn test_title_outside_window_ignored() {
        let mut text = "x ".repeat(120);
        text.push_str("Web Developer");
        assert_eq!(extract_job_title(&text), TITLE_SENTINEL);
    }

    #[test]
    fn test_sentinel_when_absent() {
        assert_eq!(extract_job_title("no role mentioned here"), TITLE_SENTINEL);
    }
}
