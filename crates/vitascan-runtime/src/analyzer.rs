//! Analyzer — coordinates the capability seams and the segment/scoring
//! pipeline into one profile per document.

use std::path::Path;

use tracing::{debug, info};

use vitascan_core::{
    CandidateProfile, Envelope, Error, JobProfile, ProfileData, Result, NO_SUMMARY_SENTINEL,
    UNKNOWN_CANDIDATE, UNRESOLVED_LOCATION,
};
use vitascan_extract::{
    extract_contact, extract_job_skills, extract_job_title, extract_name, extract_skills,
    extract_summary, RESUME_SKILL_VOCAB,
};
use vitascan_ingest::{normalize, FileExtractor, TextExtractor};
use vitascan_ner::{HeuristicNer, NerBackend};
use vitascan_score::{analyze_personality, ideal_personality};

/// Top-level analyzer holding the document and NER capabilities.
///
/// Each profile is built fresh from one input document; nothing is shared
/// across invocations beyond the process-wide constant tables.
pub struct Analyzer {
    extractor: Box<dyn TextExtractor>,
    ner: Box<dyn NerBackend>,
}

impl Analyzer {
    /// Create an analyzer with the default backends.
    pub fn new() -> Self {
        Self {
            extractor: Box::new(FileExtractor),
            ner: Box::new(HeuristicNer),
        }
    }

    /// Create with explicit backends (for testing).
    pub fn with_backends(
        extractor: Box<dyn TextExtractor>,
        ner: Box<dyn NerBackend>,
    ) -> Self {
        Self { extractor, ner }
    }

    /// The résumé path requires the NER capability before any document is
    /// touched.
    pub fn ensure_ner_available(&self) -> Result<()> {
        if self.ner.is_available() {
            Ok(())
        } else {
            Err(Error::MissingModel(
                "no usable NER backend for name extraction".into(),
            ))
        }
    }

    /// Build a structured candidate profile from a résumé document.
    pub fn candidate_profile(&self, path: &Path) -> Result<CandidateProfile> {
        self.ensure_ner_available()?;

        let raw = self.extractor.extract(path)?;
        let text = normalize(&raw);
        debug!("normalized résumé text: {} chars", text.chars().count());

        let name = extract_name(&text, self.ner.as_ref());
        let title = extract_job_title(&text);
        let contact = extract_contact(&text);
        let summary = extract_summary(&text);
        let skills = extract_skills(&text, &RESUME_SKILL_VOCAB);
        let personality = analyze_personality(&text, summary.as_deref());

        let profile = CandidateProfile {
            name: name.unwrap_or_else(|| UNKNOWN_CANDIDATE.to_string()),
            job_title: title,
            email: contact.email,
            phone: contact.phone,
            summary: summary.unwrap_or_else(|| NO_SUMMARY_SENTINEL.to_string()),
            raw_text_length: text.chars().count(),
            location: UNRESOLVED_LOCATION.to_string(),
            skills,
            personality,
        };

        info!(
            name = %profile.name,
            skills = profile.skills.len(),
            "assembled candidate profile"
        );
        Ok(profile)
    }

    /// Build a structured requirement profile from a job description.
    pub fn job_profile(&self, path: &Path) -> Result<JobProfile> {
        let raw = self.extractor.extract(path)?;
        let text = normalize(&raw);
        debug!("normalized job text: {} chars", text.chars().count());

        let profile = JobProfile {
            required_skills: extract_job_skills(&text),
            ideal_personality: ideal_personality(&text),
        };

        info!(skills = profile.required_skills.len(), "assembled job profile");
        Ok(profile)
    }

    /// Résumé path with the all-or-nothing envelope contract.
    pub fn analyze_resume(&self, path: &Path) -> Envelope {
        match self.candidate_profile(path) {
            Ok(profile) => Envelope::success(ProfileData::Candidate(profile)),
            Err(err) => Envelope::from(err),
        }
    }

    /// Job-description path with the all-or-nothing envelope contract.
    pub fn analyze_job(&self, path: &Path) -> Envelope {
        match self.job_profile(path) {
            Ok(profile) => Envelope::success(ProfileData::Job(profile)),
            Err(err) => Envelope::from(err),
        }
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}
