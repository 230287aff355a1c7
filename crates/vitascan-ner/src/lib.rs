//! Named-entity recognition for Vitascan.
//!
//! The `NerBackend` trait abstracts over entity recognition.
//! Implementations:
//! - `HeuristicNer`: regex-based person/organization detection — replaces
//!   a statistical NER model with pattern heuristics.
//! - `NoopNer`: reports no entities and unavailable (exercises the
//!   missing-model startup check).

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Entity category. Profile assembly only consumes `Person`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityLabel {
    Person,
    Organization,
}

/// A typed entity found in a text span.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub text: String,
    pub label: EntityLabel,
    /// Byte offset of the entity in the scanned text.
    pub start: usize,
}

/// Trait for NER backends.
pub trait NerBackend: Send + Sync {
    /// Recognize entities in a text span, in document order.
    fn entities(&self, text: &str) -> Vec<Entity>;

    /// Check if the backend is usable (model or patterns loaded).
    fn is_available(&self) -> bool;
}

// Honorific followed by a capitalized name
static HONORIFIC_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:Mr|Mrs|Ms|Dr|Prof)\.\s+([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*)").unwrap()
});

// Run of 2-4 capitalized words (likely a person name in a document head)
static TITLE_CASE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Z][a-z]+(?:\s+[A-Z][a-z]+){1,3}\b").unwrap());

// Run of 2-4 ALL-CAPS words (résumé headers often set the name in caps)
static ALL_CAPS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Z]{2,}(?:\s+[A-Z]{2,}){1,3}\b").unwrap());

// Organization with a corporate suffix
static ORG_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Z][a-z]+(?:\s+[A-Z][a-z]+)*\s+(?:Inc\.|Corp\.|LLC|Ltd\.)").unwrap()
});

/// Regex-based entity recognition. Always available.
pub struct HeuristicNer;

impl NerBackend for HeuristicNer {
    fn entities(&self, text: &str) -> Vec<Entity> {
        let mut found: Vec<Entity> = Vec::new();

        for caps in HONORIFIC_RE.captures_iter(text) {
            if let Some(m) = caps.get(1) {
                push_non_overlapping(&mut found, m.start(), m.as_str(), EntityLabel::Person);
            }
        }
        for m in ORG_RE.find_iter(text) {
            push_non_overlapping(&mut found, m.start(), m.as_str(), EntityLabel::Organization);
        }
        for m in TITLE_CASE_RE.find_iter(text) {
            push_non_overlapping(&mut found, m.start(), m.as_str(), EntityLabel::Person);
        }
        for m in ALL_CAPS_RE.find_iter(text) {
            push_non_overlapping(&mut found, m.start(), m.as_str(), EntityLabel::Person);
        }

        found.sort_by_key(|e| e.start);
        found
    }

    fn is_available(&self) -> bool {
        true
    }
}

fn push_non_overlapping(found: &mut Vec<Entity>, start: usize, text: &str, label: EntityLabel) {
    let end = start + text.len();
    let overlaps = found
        .iter()
        .any(|e| start < e.start + e.text.len() && e.start < end);
    if !overlaps {
        found.push(Entity {
            text: text.to_string(),
            label,
            start,
        });
    }
}

/// Backend that recognizes nothing and reports itself unavailable.
pub struct NoopNer;

impl NerBackend for NoopNer {
    fn entities(&self, _text: &str) -> Vec<Entity> {
        Vec::new()
    }

    fn is_available(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case_person() {
        let entities = HeuristicNer.entities("John Smith Web Developer john@mail.com");
        assert_eq!(entities[0].label, EntityLabel::Person);
        assert!(entities[0].text.starts_with("John Smith"));
    }

    #[test]
    fn test_all_caps_person() {
        let entities = HeuristicNer.entities("BHAVRATTAN SINGH BAGGA Web Development Fresher");
        assert_eq!(entities[0].text, "BHAVRATTAN SINGH BAGGA");
        assert_eq!(entities[0].label, EntityLabel::Person);
    }

    #[test]
    fn test_honorific_person() {
        let entities = HeuristicNer.entities("contact Dr. Jane Doe for details");
        assert!(entities
            .iter()
            .any(|e| e.text == "Jane Doe" && e.label == EntityLabel::Person));
    }

    #[test]
    fn test_organization_suffix() {
        let entities = HeuristicNer.entities("worked at Acme Widgets Inc. since 2019");
        assert!(entities
            .iter()
            .any(|e| e.label == EntityLabel::Organization && e.text.contains("Acme")));
    }

    #[test]
    fn test_lowercase_text_has_no_person() {
        let entities = HeuristicNer.entities("seasoned developer with ten years of experience");
        assert!(entities.is_empty());
    }

    #[test]
    fn test_document_order() {
        let entities = HeuristicNer.entities("Alice Green then Bob Brown");
        assert!(entities[0].start < entities[1].start);
    }

    #[test]
    fn test_noop_unavailable() {
        assert!(!NoopNer.is_available());
        assert!(NoopNer.entities("John Smith").is_empty());
    }
}
