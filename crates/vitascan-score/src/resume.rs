//! Résumé-side trait scoring: lexicon occurrence counting with summary
//! emphasis, then bounded length-adjusted normalization.

use once_cell::sync::Lazy;
use regex::Regex;

use vitascan_core::{Trait, TraitVector};

use crate::lexicon::RESUME_LEXICON;

/// Raw weighted count at which a trait saturates the 0-100 scale.
const SATURATION_COUNT: f64 = 30.0;

/// Occurrences inside the summary span count this many times.
const SUMMARY_WEIGHT: f64 = 3.0;

/// Reference word count for length dampening.
const REFERENCE_WORDS: f64 = 300.0;

/// Scores under this threshold get the floor boost: no relevant vocabulary
/// is insufficient negative evidence, not a measured low trait.
const FLOOR_THRESHOLD: f64 = 15.0;
const FLOOR_BOOST: f64 = 20.0;

// Word-boundary matcher per keyword, compiled once.
static LEXICON_PATTERNS: Lazy<Vec<(Trait, Vec<Regex>)>> = Lazy::new(|| {
    RESUME_LEXICON
        .iter()
        .map(|(t, keywords)| {
            let patterns = keywords
                .iter()
                .map(|kw| Regex::new(&format!(r"\b{}\b", regex::escape(kw))).unwrap())
                .collect();
            (*t, patterns)
        })
        .collect()
});

/// Sum of weighted whole-word occurrence counts for one trait's keywords.
/// Both inputs must already be lowercased.
fn score_trait(patterns: &[Regex], text_lower: &str, summary_lower: &str) -> f64 {
    let mut total = 0.0;
    for re in patterns {
        let count_full = re.find_iter(text_lower).count() as f64;
        let count_summary = re.find_iter(summary_lower).count() as f64;
        total += (count_full - count_summary) + count_summary * SUMMARY_WEIGHT;
    }
    total
}

/// Convert a raw weighted count into a bounded [0, 1] score.
///
/// Length dampening is sub-linear (cube root of the word count relative to
/// 300) so short documents cannot reach ceiling scores just by being short,
/// without punishing long ones linearly.
pub fn normalize_score(raw_count: f64, word_count: usize) -> f64 {
    let damp = (word_count as f64 / REFERENCE_WORDS)
        .max(1.0)
        .powf(1.0 / 3.0);
    let base = raw_count / SATURATION_COUNT * 100.0;
    let mut score = (base / damp).min(100.0);
    if score < FLOOR_THRESHOLD {
        score += FLOOR_BOOST;
    }
    score.clamp(0.0, 100.0) / 100.0
}

/// Score the résumé text against all five traits.
///
/// The summary span, when present, carries triple weight; the Neuroticism
/// lexicon measures emotional stability, so its normalized score is
/// inverted before it is returned.
pub fn analyze_personality(full_text: &str, summary: Option<&str>) -> TraitVector {
    let text_lower = full_text.to_lowercase();
    let summary_lower = summary.map(str::to_lowercase).unwrap_or_default();
    let word_count = text_lower.split_whitespace().count();

    let mut scores = TraitVector::uniform(0.0);
    for (t, patterns) in LEXICON_PATTERNS.iter() {
        let raw = score_trait(patterns, &text_lower, &summary_lower);
        let mut normalized = normalize_score(raw, word_count);
        if *t == Trait::Neuroticism {
            normalized = (1.0 - normalized).max(0.0);
        }
        scores.set(*t, normalized);
    }

    tracing::debug!(
        word_count,
        openness = scores.openness,
        conscientiousness = scores.conscientiousness,
        "scored résumé personality"
    );
    scores
}
