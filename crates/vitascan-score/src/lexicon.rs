//! Fixed trait lexicons.
//!
//! The résumé lexicon is unweighted: every keyword contributes equally and
//! the raw occurrence count is normalized afterwards. The job lexicon maps
//! each keyword to one trait and a weight in [0, 1] that acts as a ceiling
//! raise on the default 0.5 score.
//!
//! The Neuroticism keyword list deliberately holds *emotional-stability*
//! vocabulary; scoring it high means low neuroticism, and the final score
//! is inverted in `resume::analyze_personality`.

use vitascan_core::Trait;

/// Résumé lexicon: trait -> unweighted signal keywords.
pub const RESUME_LEXICON: &[(Trait, &[&str])] = &[
    (
        Trait::Openness,
        &[
            "innovative", "creative", "imagination", "intellectual", "curious",
            "inventive", "unconventional", "abstract", "theory", "concept",
            "research", "framework", "pytorch", "tensorflow", "keras", "nltk",
            "opencv", "new", "design", "experiment", "novel", "learning",
            "exploring", "inquiry", "unbiased", "artistic", "open-minded",
            "visionary", "complex", "ideation", "conceptual", "algorithms",
        ],
    ),
    (
        Trait::Conscientiousness,
        &[
            "motivated", "principles", "structured", "organized", "management",
            "project", "complete", "detail", "grasp", "strong", "efficient",
            "accurate", "responsibility", "timeline", "ensuring", "duties",
            "punctual", "reliable", "methodical", "planning", "systematic",
            "goal", "achieve", "deliverable", "diligent", "focused", "work ethic",
            "consistent", "meticulous", "prepared", "dedicated", "process",
        ],
    ),
    (
        Trait::Extraversion,
        &[
            "collaborated", "team", "communication", "interact", "contributed",
            "passionate", "friendly", "enthusiastic", "public", "social",
            "active", "outspoken", "leadership", "presented", "spoke",
            "engaging", "network", "client", "group", "dynamic", "energetic",
            "outgoing", "assertive", "persuasion", "influence", "user-facing",
        ],
    ),
    (
        Trait::Agreeableness,
        &[
            "collaborated", "team", "integration", "seamless", "support",
            "assist", "cooperative", "helpful", "friendly", "harmony",
            "respect", "kind", "patient", "empathy", "service", "customer",
            "listen", "polite", "ethical", "consensus", "understanding",
            "negotiated", "mediation", "trust", "unselfish", "supportive",
        ],
    ),
    (
        // Emotional-stability vocabulary, inverted at the end of scoring.
        Trait::Neuroticism,
        &[
            "stable", "calm", "focused", "resilient", "reliable", "consistent",
            "clear", "stress", "pressure", "organized", "composed", "secure",
            "confident", "poised", "steady", "practical", "rational", "adaptable",
            "decisive", "manage", "control", "level-headed", "realistic",
        ],
    ),
];

/// Job-description lexicon: keyword -> (trait, ceiling weight).
///
/// "resilient" and "stable" carry low Neuroticism weights directly: a job
/// asking for resilience wants low neuroticism, so no inversion applies on
/// the job side.
pub const JOB_LEXICON: &[(&str, Trait, f64)] = &[
    ("organized", Trait::Conscientiousness, 0.90),
    ("responsible", Trait::Conscientiousness, 0.85),
    ("detail-oriented", Trait::Conscientiousness, 0.95),
    ("disciplined", Trait::Conscientiousness, 0.80),
    ("innovative", Trait::Openness, 0.80),
    ("creative", Trait::Openness, 0.90),
    ("curious", Trait::Openness, 0.75),
    ("communicative", Trait::Extraversion, 0.70),
    ("team player", Trait::Extraversion, 0.85),
    ("collaborative", Trait::Agreeableness, 0.85),
    ("cooperative", Trait::Agreeableness, 0.80),
    ("resilient", Trait::Neuroticism, 0.15),
    ("stable", Trait::Neuroticism, 0.20),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_trait_has_resume_keywords() {
        for t in Trait::ALL {
            assert!(
                RESUME_LEXICON.iter().any(|(lt, kws)| *lt == t && !kws.is_empty()),
                "no keywords for {}",
                t.name()
            );
        }
    }

    #[test]
    fn test_job_weights_in_range() {
        for (kw, _, w) in JOB_LEXICON {
            assert!((0.0..=1.0).contains(w), "weight out of range for {}", kw);
        }
    }
}
