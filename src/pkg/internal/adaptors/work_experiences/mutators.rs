use sqlx::PgConnection;

use crate::pkg::internal::adaptors::work_experiences::spec::WorkExperienceEntry;
use crate::pkg::server::handlers::work_experiences::{
    UpdateWorkExperienceInput, WorkExperienceInput,
};
use crate::prelude::Result;

pub struct WorkExperienceMutator<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> WorkExperienceMutator<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        WorkExperienceMutator { pool }
    }

    pub async fn create(
        &mut self,
        experience: &WorkExperienceInput,
        user_id: &str,
    ) -> Result<WorkExperienceEntry> {
        let row = sqlx::query_as::<_, WorkExperienceEntry>(
            r#"
            INSERT INTO work_experience (company_name, position, location, current_job, start_date, end_date, description, user_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, company_name, position, location, current_job, start_date, end_date, description, user_id
            "#,
        )
        .bind(&experience.company_name)
        .bind(&experience.position)
        .bind(&experience.location)
        .bind(experience.current_job)
        .bind(experience.start_date)
        .bind(experience.end_date)
        .bind(&experience.description)
        .bind(user_id)
        .fetch_one(&mut *self.pool)
        .await?;

        Ok(row)
    }

    pub async fn update(
        &mut self,
        experience: &UpdateWorkExperienceInput,
    ) -> Result<Option<WorkExperienceEntry>> {
        let row = sqlx::query_as::<_, WorkExperienceEntry>(
            r#"
            UPDATE work_experience
            SET company_name = $2, position = $3, location = $4, current_job = $5,
                start_date = $6, end_date = $7, description = $8
            WHERE id = $1
            RETURNING id, company_name, position, location, current_job, start_date, end_date, description, user_id
            "#,
        )
        .bind(experience.id)
        .bind(&experience.company_name)
        .bind(&experience.position)
        .bind(&experience.location)
        .bind(experience.current_job)
        .bind(experience.start_date)
        .bind(experience.end_date)
        .bind(&experience.description)
        .fetch_optional(&mut *self.pool)
        .await?;

        Ok(row)
    }

    pub async fn delete(&mut self, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM work_experience WHERE id = $1")
            .bind(id)
            .execute(&mut *self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
