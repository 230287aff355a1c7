//! Skill vocabulary matching.
//!
//! Each vocabulary entry is tried with two case-insensitive word-boundary
//! patterns: the entry verbatim and the entry with internal spaces removed,
//! so "nodejs" still hits "Node.js"-style concatenations. Vocabularies are
//! precompiled once and passed explicitly at the call site.

use once_cell::sync::Lazy;
use regex::Regex;

use vitascan_core::SkillSet;

/// Baseline web skills substituted when a job description matches nothing.
pub const FALLBACK_WEB_SKILLS: &[&str] = &["HTML5", "CSS3", "JavaScript"];

/// A precompiled skill vocabulary.
pub struct SkillVocabulary {
    patterns: Vec<(&'static str, Regex, Option<Regex>)>,
}

impl SkillVocabulary {
    /// Compile word-boundary patterns for every entry. Entries keep their
    /// canonical casing; matching is done lowercase.
    pub fn compile(entries: &[&'static str]) -> Self {
        let patterns = entries
            .iter()
            .map(|&entry| {
                let lower = entry.to_lowercase();
                let verbatim =
                    Regex::new(&format!(r"\b{}\b", regex::escape(&lower))).unwrap();
                let fused = if lower.contains(' ') {
                    let joined = lower.replace(' ', "");
                    Some(Regex::new(&format!(r"\b{}\b", regex::escape(&joined))).unwrap())
                } else {
                    None
                };
                (entry, verbatim, fused)
            })
            .collect();
        Self { patterns }
    }
}

/// Canonical résumé skill vocabulary (display casing preserved).
pub static RESUME_SKILL_VOCAB: Lazy<SkillVocabulary> = Lazy::new(|| {
    SkillVocabulary::compile(&[
        "Power BI",
        "Python",
        "JavaScript",
        "HTML5",
        "CSS3",
        "MySQL",
        "React",
        "Node.js",
        "SQL",
        "AWS",
        "Docker",
        "Git",
        "NumPy",
        "Pandas",
        "Matplotlib",
        "Scikit-learn",
        "PyTorch",
        "TensorFlow",
        "Keras",
        "NLTK",
        "OpenCV",
        "Postman",
        "C",
        "C++",
        "Java",
        "R",
        "Tableau",
        "Azure",
        "GCP",
        "Spring Boot",
        "MongoDB",
    ])
});

/// Job-description skill vocabulary (lowercase tokens; output is
/// capitalized by `extract_job_skills`).
pub static JOB_SKILL_VOCAB: Lazy<SkillVocabulary> = Lazy::new(|| {
    SkillVocabulary::compile(&[
        "python",
        "sql",
        "html5",
        "css3",
        "javascript",
        "react",
        "nodejs",
        "express",
        "mongodb",
        "postgresql",
        "git",
        "docker",
        "aws",
        "typescript",
        "java",
        "c++",
        "scikit-learn",
        "tensorflow",
        "keras",
        "powerbi",
        "pandas",
        "numpy",
        "matplotlib",
        "c",
        "mysql",
    ])
});

/// Match a vocabulary against the text. A hit by either pattern inserts
/// the canonical entry; the result is a true set. May be empty.
pub fn extract_skills(text: &str, vocabulary: &SkillVocabulary) -> SkillSet {
    let text_lower = text.to_lowercase();
    let mut found = SkillSet::new();

    for (entry, verbatim, fused) in &vocabulary.patterns {
        let hit = verbatim.is_match(&text_lower)
            || fused.as_ref().is_some_and(|re| re.is_match(&text_lower));
        if hit {
            found.insert((*entry).to_string());
        }
    }
    found
}

/// Extract required skills from a job description.
///
/// Entries are capitalized for display ("sql" -> "Sql"); an empty result
/// is replaced by the baseline web skill set, so job extraction never
/// returns an empty set.
pub fn extract_job_skills(text: &str) -> SkillSet {
    let found = extract_skills(text, &JOB_SKILL_VOCAB);

    if found.is_empty() {
        tracing::debug!("no vocabulary hits in job description, using fallback skills");
        return FALLBACK_WEB_SKILLS.iter().map(|s| s.to_string()).collect();
    }
    found.into_iter().map(|s| capitalize(&s)).collect()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_word_boundary() {
        let skills = extract_skills("Built dashboards in PYTHON and react", &RESUME_SKILL_VOCAB);
        assert!(skills.contains("Python"));
        assert!(skills.contains("React"));
    }

    #[test]
    fn test_no_substring_match_inside_larger_token() {
        let skills = extract_skills("typescriptjavascripted is not a skill", &RESUME_SKILL_VOCAB);
        assert!(!skills.contains("JavaScript"));
        assert!(!skills.contains("Java"));
    }

    #[test]
    fn test_fused_variant_matches() {
        // "Power BI" tolerated as "powerbi"
        let skills = extract_skills("reporting in powerbi for finance", &RESUME_SKILL_VOCAB);
        assert!(skills.contains("Power BI"));
    }

    #[test]
    fn test_resume_extraction_may_be_empty() {
        assert!(extract_skills("gardening and carpentry", &RESUME_SKILL_VOCAB).is_empty());
    }

    #[test]
    fn test_job_skills_capitalized() {
        let skills = extract_job_skills("needs python and sql experience");
        assert!(skills.contains("Python"));
        assert!(skills.contains("Sql"));
    }

    #[test]
    fn test_job_fallback_never_empty() {
        let skills = extract_job_skills("a role with no technology named");
        let expected: SkillSet = FALLBACK_WEB_SKILLS.iter().map(|s| s.to_string()).collect();
        assert_eq!(skills, expected);
    }

    #[test]
    fn test_duplicate_patterns_single_entry() {
        // Both the verbatim and fused pattern can hit; result is a set.
        let skills = extract_skills("spring boot and springboot services", &RESUME_SKILL_VOCAB);
        assert_eq!(skills.iter().filter(|s| *s == "Spring Boot").count(), 1);
    }
}
