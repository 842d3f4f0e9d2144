use serde::{Deserialize, Serialize};

use crate::lexicon::RoleProfile;
use crate::models::resume::{PersonalInfo, SectionMap};
use crate::models::score::ScoreBreakdown;

/// Caller identity attached to an analysis request. Both fields may be empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// Everything the pipeline produces for one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// `None` when no role cleared the relevance threshold.
    pub role: Option<RoleProfile>,
    pub personal_info: PersonalInfo,
    pub sections: SectionMap,
    pub score: ScoreBreakdown,
    pub generated_resume: String,
    pub cover_letter: String,
}
