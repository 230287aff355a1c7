//! Vitascan Core — error taxonomy, profile data model, result envelope.

pub mod envelope;
pub mod error;
pub mod types;

pub use envelope::{Envelope, ProfileData};
pub use error::{Error, Result};
pub use types::{
    CandidateProfile, ContactInfo, JobProfile, SkillSet, Trait, TraitVector,
    NO_SUMMARY_SENTINEL, TITLE_SENTINEL, UNKNOWN_CANDIDATE, UNRESOLVED_LOCATION,
};
