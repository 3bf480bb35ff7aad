use sqlx::PgConnection;

use crate::pkg::internal::adaptors::candidates::selectors::CandidateSelector;
use crate::pkg::internal::adaptors::candidates::spec::CandidateEntry;
use crate::pkg::server::handlers::candidates::UpdateCandidateInput;
use crate::prelude::Result;

pub struct CandidateMutator<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> CandidateMutator<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        CandidateMutator { pool }
    }

    /// Registration creates the profile shell; fields are filled in later
    /// through patch.
    pub async fn create_empty(&mut self, user_id: &str) -> Result<CandidateEntry> {
        let row = sqlx::query_as::<_, CandidateEntry>(
            r#"
            INSERT INTO candidates (user_id)
            VALUES ($1)
            RETURNING id, full_name, location, phone_number, bio, resume_url, user_id
            "#,
        )
        .bind(user_id)
        .fetch_one(&mut *self.pool)
        .await?;

        Ok(row)
    }

    pub async fn patch(
        &mut self,
        user_id: &str,
        profile: UpdateCandidateInput,
    ) -> Result<Option<CandidateEntry>> {
        let mut sets = Vec::new();
        let mut param_count = 1;

        if profile.full_name.is_some() {
            param_count += 1;
            sets.push(format!("full_name = ${}", param_count));
        }
        if profile.location.is_some() {
            param_count += 1;
            sets.push(format!("location = ${}", param_count));
        }
        if profile.phone_number.is_some() {
            param_count += 1;
            sets.push(format!("phone_number = ${}", param_count));
        }
        if profile.bio.is_some() {
            param_count += 1;
            sets.push(format!("bio = ${}", param_count));
        }
        if profile.resume_url.is_some() {
            param_count += 1;
            sets.push(format!("resume_url = ${}", param_count));
        }

        if sets.is_empty() {
            return CandidateSelector::new(&mut *self.pool)
                .get_by_user_id(user_id)
                .await;
        }

        let query = format!(
            "UPDATE candidates SET {} WHERE user_id = $1 \
             RETURNING id, full_name, location, phone_number, bio, resume_url, user_id",
            sets.join(", ")
        );

        let mut q = sqlx::query_as::<_, CandidateEntry>(&query).bind(user_id);

        if let Some(full_name) = profile.full_name {
            q = q.bind(full_name);
        }
        if let Some(location) = profile.location {
            q = q.bind(location);
        }
        if let Some(phone_number) = profile.phone_number {
            q = q.bind(phone_number);
        }
        if let Some(bio) = profile.bio {
            q = q.bind(bio);
        }
        if let Some(resume_url) = profile.resume_url {
            q = q.bind(resume_url);
        }

        let row = q.fetch_optional(&mut *self.pool).await?;
        Ok(row)
    }
}
