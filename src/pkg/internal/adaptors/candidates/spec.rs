use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::pkg::internal::adaptors::educations::spec::EducationEntry;
use crate::pkg::internal::adaptors::skills::spec::SkillEntry;
use crate::pkg::internal::adaptors::work_experiences::spec::WorkExperienceEntry;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CandidateEntry {
    pub id: i32,
    pub full_name: String,
    pub location: String,
    pub phone_number: String,
    pub bio: String,
    pub resume_url: String,
    pub user_id: String,
}

/// The candidate row with the account email folded in.
#[derive(Debug, Serialize)]
pub struct ProfileDoc {
    #[serde(flatten)]
    pub candidate: CandidateEntry,
    pub email: String,
}

/// Full candidate dossier as served to recruiters and to the candidate
/// themselves: exactly these four top-level keys.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateProfileDoc {
    pub profile: ProfileDoc,
    pub educations: Vec<EducationEntry>,
    pub work_experiences: Vec<WorkExperienceEntry>,
    pub skills: Vec<SkillEntry>,
}
