//! Vitascan Extract — heuristic segmenters over normalized document text.
//!
//! Each sub-extractor is independent and order-insensitive; all of them
//! expect text already cleaned by `vitascan_ingest::normalize`.

pub mod contact;
pub mod name;
pub mod skills;
pub mod summary;
pub mod title;

pub use contact::extract_contact;
pub use name::extract_name;
pub use skills::{
    extract_job_skills, extract_skills, SkillVocabulary, FALLBACK_WEB_SKILLS, JOB_SKILL_VOCAB,
    RESUME_SKILL_VOCAB,
};
pub use summary::extract_summary;
pub use title::extract_job_title;
