//! Job-description-side trait scoring.
//!
//! No length normalization here: the job score is a ceiling-style upper
//! bound on demonstrated importance. Every trait starts at 0.5 and each
//! matched keyword raises its trait to `max(current, weight)`.

use once_cell::sync::Lazy;
use regex::Regex;

use vitascan_core::{Trait, TraitVector};

use crate::lexicon::JOB_LEXICON;

static JOB_PATTERNS: Lazy<Vec<(Regex, Trait, f64)>> = Lazy::new(|| {
    JOB_LEXICON
        .iter()
        .map(|(kw, t, w)| {
            let re = Regex::new(&format!(r"\b{}\b", regex::escape(kw))).unwrap();
            (re, *t, *w)
        })
        .collect()
});

/// Score a job description's ideal personality.
pub fn ideal_personality(text: &str) -> TraitVector {
    let text_lower = text.to_lowercase();
    let mut v = TraitVector::uniform(0.5);

    for (re, t, weight) in JOB_PATTERNS.iter() {
        if re.is_match(&text_lower) {
            v.raise(*t, *weight);
        }
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_without_keywords_is_half() {
        let v = ideal_personality("a plain role description with no trait language");
        for t in Trait::ALL {
            assert_eq!(v.get(t), 0.5, "{} not defaulted", t.name());
        }
    }

    #[test]
    fn test_keywords_raise_traits() {
        let v = ideal_personality("We need an organized, innovative engineer skilled in Python and SQL");
        assert_eq!(v.conscientiousness, 0.90);
        assert_eq!(v.openness, 0.80);
        assert_eq!(v.extraversion, 0.5);
        assert_eq!(v.agreeableness, 0.5);
        assert_eq!(v.neuroticism, 0.5);
    }

    #[test]
    fn test_max_wins_across_keywords() {
        // "creative" (0.90) outranks "curious" (0.75)
        let v = ideal_personality("curious and creative thinkers wanted");
        assert_eq!(v.openness, 0.90);
    }

    #[test]
    fn test_stability_keywords_lower_bound_ignored() {
        // "resilient" carries 0.15, below the 0.5 default, so the max-raise
        // leaves Neuroticism unchanged.
        let v = ideal_personality("resilient under pressure");
        assert_eq!(v.neuroticism, 0.5);
    }

    #[test]
    fn test_word_boundary_matching() {
        // "stable" must not fire inside "unstable"
        let v = ideal_personality("handles unstable environments");
        assert_eq!(v.neuroticism, 0.5);
    }
}
