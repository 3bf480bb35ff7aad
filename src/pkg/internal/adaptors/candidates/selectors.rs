use sqlx::PgConnection;

use crate::pkg::internal::adaptors::candidates::spec::{
    CandidateEntry, CandidateProfileDoc, ProfileDoc,
};
use crate::pkg::internal::adaptors::educations::selectors::EducationSelector;
use crate::pkg::internal::adaptors::skills::selectors::SkillSelector;
use crate::pkg::internal::adaptors::work_experiences::selectors::WorkExperienceSelector;
use crate::prelude::*;

pub struct CandidateSelector<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> CandidateSelector<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        CandidateSelector { pool }
    }

    pub async fn get_by_user_id(&mut self, user_id: &str) -> Result<Option<CandidateEntry>> {
        let row = sqlx::query_as::<_, CandidateEntry>(
            "SELECT id, full_name, location, phone_number, bio, resume_url, user_id
             FROM candidates WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&mut *self.pool)
        .await?;

        Ok(row)
    }

    /// Assemble the full profile document for one user id. Fails with
    /// NotFound when the id has no candidate row.
    pub async fn profile(&mut self, user_id: &str) -> Result<CandidateProfileDoc> {
        let candidate = self
            .get_by_user_id(user_id)
            .await?
            .ok_or(Error::NotFound("Candidate"))?;

        let email = sqlx::query_scalar::<_, String>("SELECT email FROM users WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&mut *self.pool)
            .await?;

        let educations = EducationSelector::new(&mut *self.pool)
            .get_all_by_user_id(user_id)
            .await?;
        let work_experiences = WorkExperienceSelector::new(&mut *self.pool)
            .get_all_by_user_id(user_id)
            .await?;
        let skills = SkillSelector::new(&mut *self.pool)
            .get_all_by_user_id(user_id)
            .await?;

        Ok(CandidateProfileDoc {
            profile: ProfileDoc { candidate, email },
            educations,
            work_experiences,
            skills,
        })
    }
}
