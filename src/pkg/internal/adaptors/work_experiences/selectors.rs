use sqlx::PgConnection;

use crate::pkg::internal::adaptors::work_experiences::spec::WorkExperienceEntry;
use crate::prelude::Result;

pub struct WorkExperienceSelector<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> WorkExperienceSelector<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        WorkExperienceSelector { pool }
    }

    pub async fn get_by_id(&mut self, id: i32) -> Result<Option<WorkExperienceEntry>> {
        let row = sqlx::query_as::<_, WorkExperienceEntry>(
            "SELECT id, company_name, position, location, current_job, start_date, end_date, description, user_id
             FROM work_experience WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *self.pool)
        .await?;

        Ok(row)
    }

    pub async fn get_all_by_user_id(&mut self, user_id: &str) -> Result<Vec<WorkExperienceEntry>> {
        let rows = sqlx::query_as::<_, WorkExperienceEntry>(
            "SELECT id, company_name, position, location, current_job, start_date, end_date, description, user_id
             FROM work_experience WHERE user_id = $1 ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(&mut *self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn all_exist(&mut self, ids: &[i32]) -> Result<bool> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM work_experience WHERE id = ANY($1)",
        )
        .bind(ids)
        .fetch_one(&mut *self.pool)
        .await?;

        Ok(count as usize == ids.len())
    }
}
