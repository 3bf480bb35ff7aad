use sqlx::PgConnection;

use crate::pkg::internal::adaptors::educations::spec::EducationEntry;
use crate::prelude::Result;

pub struct EducationSelector<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> EducationSelector<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        EducationSelector { pool }
    }

    pub async fn get_by_school_id(&mut self, school_id: i32) -> Result<Option<EducationEntry>> {
        let row = sqlx::query_as::<_, EducationEntry>(
            "SELECT school_id, school_name, degree, major, start_date, end_date, description, user_id
             FROM education WHERE school_id = $1",
        )
        .bind(school_id)
        .fetch_optional(&mut *self.pool)
        .await?;

        Ok(row)
    }

    pub async fn get_all_by_user_id(&mut self, user_id: &str) -> Result<Vec<EducationEntry>> {
        let rows = sqlx::query_as::<_, EducationEntry>(
            "SELECT school_id, school_name, degree, major, start_date, end_date, description, user_id
             FROM education WHERE user_id = $1 ORDER BY school_id",
        )
        .bind(user_id)
        .fetch_all(&mut *self.pool)
        .await?;

        Ok(rows)
    }

    /// True when every id in the (deduplicated) list exists.
    pub async fn all_exist(&mut self, school_ids: &[i32]) -> Result<bool> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM education WHERE school_id = ANY($1)",
        )
        .bind(school_ids)
        .fetch_one(&mut *self.pool)
        .await?;

        Ok(count as usize == school_ids.len())
    }
}
