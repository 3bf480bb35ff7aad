use sqlx::PgConnection;

use crate::pkg::internal::adaptors::recruiters::spec::RecruiterEntry;
use crate::prelude::Result;

pub struct RecruiterSelector<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> RecruiterSelector<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        RecruiterSelector { pool }
    }

    pub async fn get_by_user_id(&mut self, user_id: &str) -> Result<Option<RecruiterEntry>> {
        let row = sqlx::query_as::<_, RecruiterEntry>(
            "SELECT id, company_name, company_size, industry, company_logo_url, user_id
             FROM recruiters WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&mut *self.pool)
        .await?;

        Ok(row)
    }
}
