//! Summary/objective span isolation.
//!
//! The span starts right after the first objective/summary/profile header
//! and ends at the earliest recognized section header, or at end of text.

use once_cell::sync::Lazy;
use regex::Regex;

static SPAN_START_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(objective|summary|profile)\s*:?\s*").unwrap());

/// Section headers that terminate the span.
const END_HEADERS: &[&str] = &[
    "core skills",
    "key projects",
    "certifications",
    "education",
    "experience",
    "work experience",
];

static END_HEADER_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    END_HEADERS
        .iter()
        .map(|&h| {
            let pattern = format!(r"(?i)(\s|^){}[:\s]", regex::escape(h));
            Regex::new(&pattern).unwrap()
        })
        .collect()
});

static TRAILING_PUNCT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s.,;]+$").unwrap());

/// Spans at or under this length carry no usable signal.
const MIN_SPAN_CHARS: usize = 20;

/// Extract the summary/objective span, if one long enough exists.
pub fn extract_summary(text: &str) -> Option<String> {
    let start = SPAN_START_RE.find(text)?.end();
    let span = text[start..].trim();

    let mut end = span.len();
    for re in END_HEADER_PATTERNS.iter() {
        if let Some(m) = re.find(span) {
            if m.start() < end {
                end = m.start();
            }
        }
    }

    let span = span[..end].trim();
    let span = TRAILING_PUNCT_RE.replace(span, "");

    if span.chars().count() > MIN_SPAN_CHARS {
        Some(span.to_string())
    } else {
        None
    }
}
