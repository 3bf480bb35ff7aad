use sqlx::PgConnection;

use crate::pkg::internal::adaptors::educations::spec::EducationEntry;
use crate::pkg::server::handlers::educations::{EducationInput, UpdateEducationInput};
use crate::prelude::Result;

pub struct EducationMutator<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> EducationMutator<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        EducationMutator { pool }
    }

    pub async fn create(
        &mut self,
        education: &EducationInput,
        user_id: &str,
    ) -> Result<EducationEntry> {
        let row = sqlx::query_as::<_, EducationEntry>(
            r#"
            INSERT INTO education (school_name, degree, major, start_date, end_date, description, user_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING school_id, school_name, degree, major, start_date, end_date, description, user_id
            "#,
        )
        .bind(&education.school_name)
        .bind(&education.degree)
        .bind(&education.major)
        .bind(education.start_date)
        .bind(education.end_date)
        .bind(&education.description)
        .bind(user_id)
        .fetch_one(&mut *self.pool)
        .await?;

        Ok(row)
    }

    pub async fn update(
        &mut self,
        education: &UpdateEducationInput,
    ) -> Result<Option<EducationEntry>> {
        let row = sqlx::query_as::<_, EducationEntry>(
            r#"
            UPDATE education
            SET school_name = $2, degree = $3, major = $4, start_date = $5, end_date = $6, description = $7
            WHERE school_id = $1
            RETURNING school_id, school_name, degree, major, start_date, end_date, description, user_id
            "#,
        )
        .bind(education.school_id)
        .bind(&education.school_name)
        .bind(&education.degree)
        .bind(&education.major)
        .bind(education.start_date)
        .bind(education.end_date)
        .bind(&education.description)
        .fetch_optional(&mut *self.pool)
        .await?;

        Ok(row)
    }

    pub async fn delete(&mut self, school_id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM education WHERE school_id = $1")
            .bind(school_id)
            .execute(&mut *self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
