use sqlx::PgConnection;

use crate::pkg::internal::adaptors::applications::spec::{ApplicationEntry, ApplicationStatus};
use crate::prelude::Result;

pub struct ApplicationMutator<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> ApplicationMutator<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        ApplicationMutator { pool }
    }

    /// New applications always start out Processing.
    pub async fn create(&mut self, user_id: &str, job_id: i32) -> Result<ApplicationEntry> {
        let row = sqlx::query_as::<_, ApplicationEntry>(
            r#"
            INSERT INTO applications (status, user_id, job_id)
            VALUES ($1, $2, $3)
            RETURNING id, status, user_id, job_id
            "#,
        )
        .bind(ApplicationStatus::Processing)
        .bind(user_id)
        .bind(job_id)
        .fetch_one(&mut *self.pool)
        .await?;

        Ok(row)
    }

    pub async fn update_status(
        &mut self,
        id: i32,
        status: ApplicationStatus,
    ) -> Result<Option<ApplicationEntry>> {
        let row = sqlx::query_as::<_, ApplicationEntry>(
            r#"
            UPDATE applications SET status = $2 WHERE id = $1
            RETURNING id, status, user_id, job_id
            "#,
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&mut *self.pool)
        .await?;

        Ok(row)
    }

    pub async fn delete(&mut self, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM applications WHERE id = $1")
            .bind(id)
            .execute(&mut *self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
