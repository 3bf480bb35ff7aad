use sqlx::PgConnection;

use crate::pkg::internal::adaptors::jobs::spec::{JobEntry, SavedJobEntry};
use crate::pkg::server::handlers::jobs::{CreateJobInput, PatchJobInput};
use crate::prelude::Result;

pub struct JobMutator<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> JobMutator<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        JobMutator { pool }
    }

    pub async fn create(&mut self, job: &CreateJobInput, user_id: &str) -> Result<JobEntry> {
        let row = sqlx::query_as::<_, JobEntry>(
            r#"
            INSERT INTO jobs (title, location, type, category, experience_level, salary_min, salary_max, start_date, end_date, description, user_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING id, title, location, type, category, experience_level, salary_min, salary_max, start_date, end_date, description, user_id
            "#,
        )
        .bind(&job.title)
        .bind(&job.location)
        .bind(&job.job_type)
        .bind(&job.category)
        .bind(&job.experience_level)
        .bind(job.salary_min)
        .bind(job.salary_max)
        .bind(job.start_date)
        .bind(job.end_date)
        .bind(&job.description)
        .bind(user_id)
        .fetch_one(&mut *self.pool)
        .await?;

        Ok(row)
    }

    pub async fn patch(&mut self, job_id: i32, job: PatchJobInput) -> Result<Option<JobEntry>> {
        let mut sets = Vec::new();
        let mut param_count = 1;

        if job.title.is_some() {
            param_count += 1;
            sets.push(format!("title = ${}", param_count));
        }
        if job.location.is_some() {
            param_count += 1;
            sets.push(format!("location = ${}", param_count));
        }
        if job.job_type.is_some() {
            param_count += 1;
            sets.push(format!("type = ${}", param_count));
        }
        if job.category.is_some() {
            param_count += 1;
            sets.push(format!("category = ${}", param_count));
        }
        if job.experience_level.is_some() {
            param_count += 1;
            sets.push(format!("experience_level = ${}", param_count));
        }
        if job.salary_min.is_some() {
            param_count += 1;
            sets.push(format!("salary_min = ${}", param_count));
        }
        if job.salary_max.is_some() {
            param_count += 1;
            sets.push(format!("salary_max = ${}", param_count));
        }
        if job.start_date.is_some() {
            param_count += 1;
            sets.push(format!("start_date = ${}", param_count));
        }
        if job.end_date.is_some() {
            param_count += 1;
            sets.push(format!("end_date = ${}", param_count));
        }
        if job.description.is_some() {
            param_count += 1;
            sets.push(format!("description = ${}", param_count));
        }

        if sets.is_empty() {
            return Ok(None);
        }

        let query = format!(
            "UPDATE jobs SET {} WHERE id = $1 \
             RETURNING id, title, location, type, category, experience_level, salary_min, salary_max, \
             start_date, end_date, description, user_id",
            sets.join(", ")
        );

        let mut q = sqlx::query_as::<_, JobEntry>(&query).bind(job_id);

        if let Some(title) = job.title {
            q = q.bind(title);
        }
        if let Some(location) = job.location {
            q = q.bind(location);
        }
        if let Some(job_type) = job.job_type {
            q = q.bind(job_type);
        }
        if let Some(category) = job.category {
            q = q.bind(category);
        }
        if let Some(experience_level) = job.experience_level {
            q = q.bind(experience_level);
        }
        if let Some(salary_min) = job.salary_min {
            q = q.bind(salary_min);
        }
        if let Some(salary_max) = job.salary_max {
            q = q.bind(salary_max);
        }
        if let Some(start_date) = job.start_date {
            q = q.bind(start_date);
        }
        if let Some(end_date) = job.end_date {
            q = q.bind(end_date);
        }
        if let Some(description) = job.description {
            q = q.bind(description);
        }

        let row = q.fetch_optional(&mut *self.pool).await?;
        Ok(row)
    }

    /// Applications and bookmarks go with the job (ON DELETE CASCADE).
    pub async fn delete(&mut self, job_id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(job_id)
            .execute(&mut *self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn save_job(&mut self, job_id: i32, user_id: &str) -> Result<SavedJobEntry> {
        let row = sqlx::query_as::<_, SavedJobEntry>(
            r#"
            INSERT INTO saved_jobs (job_id, user_id)
            VALUES ($1, $2)
            RETURNING id, job_id, user_id
            "#,
        )
        .bind(job_id)
        .bind(user_id)
        .fetch_one(&mut *self.pool)
        .await?;

        Ok(row)
    }

    pub async fn delete_saved(&mut self, saved_job_id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM saved_jobs WHERE id = $1")
            .bind(saved_job_id)
            .execute(&mut *self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
