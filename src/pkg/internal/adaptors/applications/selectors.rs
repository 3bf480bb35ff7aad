use sqlx::PgConnection;

use crate::pkg::internal::adaptors::applications::spec::ApplicationEntry;
use crate::prelude::Result;

pub struct ApplicationSelector<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> ApplicationSelector<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        ApplicationSelector { pool }
    }

    pub async fn get_by_id(&mut self, id: i32) -> Result<Option<ApplicationEntry>> {
        let row = sqlx::query_as::<_, ApplicationEntry>(
            "SELECT id, status, user_id, job_id FROM applications WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *self.pool)
        .await?;

        Ok(row)
    }

    pub async fn get_all_by_user_id(&mut self, user_id: &str) -> Result<Vec<ApplicationEntry>> {
        let rows = sqlx::query_as::<_, ApplicationEntry>(
            "SELECT id, status, user_id, job_id FROM applications WHERE user_id = $1 ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(&mut *self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn get_all_by_job_id(&mut self, job_id: i32) -> Result<Vec<ApplicationEntry>> {
        let rows = sqlx::query_as::<_, ApplicationEntry>(
            "SELECT id, status, user_id, job_id FROM applications WHERE job_id = $1 ORDER BY id",
        )
        .bind(job_id)
        .fetch_all(&mut *self.pool)
        .await?;

        Ok(rows)
    }

    /// Pre-check for the one-application-per-(candidate, job) rule. Not
    /// atomic with the following insert; concurrent duplicates can slip
    /// through.
    pub async fn user_applied(&mut self, user_id: &str, job_id: i32) -> Result<bool> {
        let row = sqlx::query_scalar::<_, i32>(
            "SELECT id FROM applications WHERE user_id = $1 AND job_id = $2 LIMIT 1",
        )
        .bind(user_id)
        .bind(job_id)
        .fetch_optional(&mut *self.pool)
        .await?;

        Ok(row.is_some())
    }
}
