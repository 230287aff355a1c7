//! Success/failure result envelope — the only output schema.
//!
//! Every invocation prints exactly one parseable JSON line:
//! `{"success": true, "data": <profile>}` or
//! `{"success": false, "error": <message>}`.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::types::{CandidateProfile, JobProfile};

/// Payload of a success envelope: exactly one profile kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProfileData {
    Candidate(CandidateProfile),
    Job(JobProfile),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ProfileData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Envelope {
    pub fn success(data: ProfileData) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }

    /// Serialize as the single stdout line. Serialization of these types
    /// cannot fail; a defect here still yields a parseable failure line.
    pub fn to_line(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            format!(
                "{{\"success\": false, \"error\": \"envelope serialization failed: {}\"}}",
                e
            )
        })
    }
}

impl From<Error> for Envelope {
    fn from(err: Error) -> Self {
        Self::failure(err.envelope_message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{SkillSet, TraitVector};

    #[test]
    fn test_success_line_shape() {
        let profile = JobProfile {
            required_skills: SkillSet::new(),
            ideal_personality: TraitVector::default(),
        };
        let line = Envelope::success(ProfileData::Job(profile)).to_line();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["success"], true);
        assert!(value.get("error").is_none());
        assert!(value["data"].get("REQUIRED_SKILLS").is_some());
    }

    #[test]
    fn test_failure_line_shape() {
        let line = Envelope::from(Error::MissingArgument).to_line();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["success"], false);
        assert!(value.get("data").is_none());
        assert_eq!(value["error"], "Missing document path argument.");
    }
}
