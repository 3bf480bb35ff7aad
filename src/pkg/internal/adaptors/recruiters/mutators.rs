use sqlx::PgConnection;

use crate::pkg::internal::adaptors::recruiters::selectors::RecruiterSelector;
use crate::pkg::internal::adaptors::recruiters::spec::RecruiterEntry;
use crate::pkg::server::handlers::recruiters::UpdateRecruiterInput;
use crate::prelude::Result;

pub struct RecruiterMutator<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> RecruiterMutator<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        RecruiterMutator { pool }
    }

    /// Registration creates the profile shell; fields are filled in later
    /// through patch.
    pub async fn create_empty(&mut self, user_id: &str) -> Result<RecruiterEntry> {
        let row = sqlx::query_as::<_, RecruiterEntry>(
            r#"
            INSERT INTO recruiters (user_id)
            VALUES ($1)
            RETURNING id, company_name, company_size, industry, company_logo_url, user_id
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
        profile: UpdateRecruiterInput,
    ) -> Result<Option<RecruiterEntry>> {
        let mut sets = Vec::new();
        let mut param_count = 1;

        if profile.company_name.is_some() {
            param_count += 1;
            sets.push(format!("company_name = ${}", param_count));
        }
        if profile.company_size.is_some() {
            param_count += 1;
            sets.push(format!("company_size = ${}", param_count));
        }
        if profile.industry.is_some() {
            param_count += 1;
            sets.push(format!("industry = ${}", param_count));
        }
        if profile.company_logo_url.is_some() {
            param_count += 1;
            sets.push(format!("company_logo_url = ${}", param_count));
        }

        if sets.is_empty() {
            return RecruiterSelector::new(&mut *self.pool)
                .get_by_user_id(user_id)
                .await;
        }

        let query = format!(
            "UPDATE recruiters SET {} WHERE user_id = $1 \
             RETURNING id, company_name, company_size, industry, company_logo_url, user_id",
            sets.join(", ")
        );

        let mut q = sqlx::query_as::<_, RecruiterEntry>(&query).bind(user_id);

        if let Some(company_name) = profile.company_name {
            q = q.bind(company_name);
        }
        if let Some(company_size) = profile.company_size {
            q = q.bind(company_size);
        }
        if let Some(industry) = profile.industry {
            q = q.bind(industry);
        }
        if let Some(company_logo_url) = profile.company_logo_url {
            q = q.bind(company_logo_url);
        }

        let row = q.fetch_optional(&mut *self.pool).await?;
        Ok(row)
    }
}
