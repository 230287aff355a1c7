//! Profile data model: OCEAN traits, contact info, candidate and job profiles.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Fallback candidate name when no PERSON entity is resolved.
pub const UNKNOWN_CANDIDATE: &str = "Unknown Candidate";
/// Fallback when no known job title appears in the document head.
pub const TITLE_SENTINEL: &str = "Job Title N/A";
/// Fallback when no usable summary/objective span is found.
pub const NO_SUMMARY_SENTINEL: &str = "No summary/objective found.";
/// Location is never resolved by this core.
pub const UNRESOLVED_LOCATION: &str = "Location N/A";

/// The five-factor (OCEAN) personality dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trait {
    Openness,
    Conscientiousness,
    Extraversion,
    Agreeableness,
    Neuroticism,
}

impl Trait {
    pub const ALL: [Trait; 5] = [
        Trait::Openness,
        Trait::Conscientiousness,
        Trait::Extraversion,
        Trait::Agreeableness,
        Trait::Neuroticism,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Trait::Openness => "Openness",
            Trait::Conscientiousness => "Conscientiousness",
            Trait::Extraversion => "Extraversion",
            Trait::Agreeableness => "Agreeableness",
            Trait::Neuroticism => "Neuroticism",
        }
    }
}

/// Scores for all five OCEAN traits, each in [0, 1].
///
/// All five keys are always present by construction; the wire format uses
/// the capitalized trait names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraitVector {
    #[serde(rename = "Openness")]
    pub openness: f64,
    #[serde(rename = "Conscientiousness")]
    pub conscientiousness: f64,
    #[serde(rename = "Extraversion")]
    pub extraversion: f64,
    #[serde(rename = "Agreeableness")]
    pub agreeableness: f64,
    #[serde(rename = "Neuroticism")]
    pub neuroticism: f64,
}

impl TraitVector {
    /// A vector with the same score for every trait.
    pub fn uniform(score: f64) -> Self {
        Self {
            openness: score,
            conscientiousness: score,
            extraversion: score,
            agreeableness: score,
            neuroticism: score,
        }
    }

    pub fn get(&self, t: Trait) -> f64 {
        match t {
            Trait::Openness => self.openness,
            Trait::Conscientiousness => self.conscientiousness,
            Trait::Extraversion => self.extraversion,
            Trait::Agreeableness => self.agreeableness,
            Trait::Neuroticism => self.neuroticism,
        }
    }

    pub fn set(&mut self, t: Trait, score: f64) {
        match t {
            Trait::Openness => self.openness = score,
            Trait::Conscientiousness => self.conscientiousness = score,
            Trait::Extraversion => self.extraversion = score,
            Trait::Agreeableness => self.agreeableness = score,
            Trait::Neuroticism => self.neuroticism = score,
        }
    }

    /// Raise a trait's score to `score` if it is higher than the current value.
    pub fn raise(&mut self, t: Trait, score: f64) {
        if score > self.get(t) {
            self.set(t, score);
        }
    }

    /// True when every score lies in [0, 1].
    pub fn in_bounds(&self) -> bool {
        Trait::ALL
            .iter()
            .all(|&t| (0.0..=1.0).contains(&self.get(t)))
    }
}

impl Default for TraitVector {
    fn default() -> Self {
        Self::uniform(0.5)
    }
}

/// Deduplicated canonical skill labels, deterministically ordered.
pub type SkillSet = BTreeSet<String>;

/// Email and phone extracted from a résumé; either may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: Option<String>,
    /// Last 10 digits of the first phone-shaped match.
    pub phone: Option<String>,
}

/// Structured résumé profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub name: String,
    #[serde(rename = "jobTitle")]
    pub job_title: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub summary: String,
    pub skills: SkillSet,
    pub personality: TraitVector,
    pub raw_text_length: usize,
    pub location: String,
}

/// Structured job-description profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobProfile {
    #[serde(rename = "REQUIRED_SKILLS")]
    pub required_skills: SkillSet,
    #[serde(rename = "IDEAL_PERSONALITY")]
    pub ideal_personality: TraitVector,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_default() {
        let v = TraitVector::default();
        for t in Trait::ALL {
            assert_eq!(v.get(t), 0.5);
        }
        assert!(v.in_bounds());
    }

    #[test]
    fn test_raise_is_monotonic() {
        let mut v = TraitVector::default();
        v.raise(Trait::Openness, 0.8);
        assert_eq!(v.openness, 0.8);
        v.raise(Trait::Openness, 0.6);
        assert_eq!(v.openness, 0.8);
    }

    #[test]
    fn test_trait_vector_wire_names() {
        let json = serde_json::to_value(TraitVector::default()).unwrap();
        for t in Trait::ALL {
            assert!(json.get(t.name()).is_some(), "missing {}", t.name());
        }
    }

    #[test]
    fn test_candidate_profile_wire_names() {
        let profile = CandidateProfile {
            name: UNKNOWN_CANDIDATE.into(),
            job_title: TITLE_SENTINEL.into(),
            email: None,
            phone: None,
            summary: NO_SUMMARY_SENTINEL.into(),
            skills: SkillSet::new(),
            personality: TraitVector::default(),
            raw_text_length: 0,
            location: UNRESOLVED_LOCATION.into(),
        };
        let json = serde_json::to_value(&profile).unwrap();
        assert!(json.get("jobTitle").is_some());
        assert!(json.get("raw_text_length").is_some());
        assert_eq!(json["location"], "Location N/A");
    }
}
