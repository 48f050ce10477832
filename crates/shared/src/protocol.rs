use serde::{Deserialize, Serialize};

use crate::domain::TalentCandidate;

/// Path of the matching endpoint relative to the page origin.
pub const MATCH_TALENT_PATH: &str = "/api/match-talent";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchTalentRequest {
    pub project_description: String,
}

impl MatchTalentRequest {
    pub fn new(project_description: impl Into<String>) -> Self {
        Self {
            project_description: project_description.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MatchTalentResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub talents: Option<Vec<TalentCandidate>>,
}

impl MatchTalentResponse {
    /// An absent or `null` talents list reads as no matches.
    pub fn into_talents(self) -> Vec<TalentCandidate> {
        self.talents.unwrap_or_default()
    }
}
