use sqlx::PgConnection;

use crate::pkg::internal::adaptors::jobs::spec::{
    JobCompanyApplicationRow, JobCompanyRow, JobEntry, SavedJobEntry,
};
use crate::pkg::internal::reshape::JoinedRow;
use crate::prelude::Result;

/// jobs ⋈ recruiters over the posting recruiter's user id, restricted to
/// jobs whose end date is still ahead of the database clock.
const JOB_COMPANY_SELECT: &str = "SELECT j.id, j.title, j.location, j.type, j.category, j.experience_level, \
     j.salary_min, j.salary_max, j.start_date, j.end_date, j.description, j.user_id, \
     r.id AS company_id, r.company_name, r.company_size, r.industry, r.company_logo_url \
     FROM jobs j \
     JOIN recruiters r ON j.user_id = r.user_id \
     WHERE j.end_date > CURRENT_DATE";

/// Same join widened with the job's applications (NULL columns when none).
const JOB_COMPANY_APPLICATION_SELECT: &str = "SELECT j.id, j.title, j.location, j.type, j.category, j.experience_level, \
     j.salary_min, j.salary_max, j.start_date, j.end_date, j.description, j.user_id, \
     r.id AS company_id, r.company_name, r.company_size, r.industry, r.company_logo_url, \
     a.id AS application_id, a.status AS application_status, a.user_id AS applicant_id \
     FROM jobs j \
     JOIN recruiters r ON j.user_id = r.user_id \
     LEFT JOIN applications a ON a.job_id = j.id \
     WHERE j.end_date > CURRENT_DATE";

pub struct JobSelector<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> JobSelector<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        JobSelector { pool }
    }

    pub async fn get_all_job_company(&mut self) -> Result<Vec<JoinedRow>> {
        let rows = sqlx::query_as::<_, JobCompanyRow>(&format!(
            "{} ORDER BY j.id",
            JOB_COMPANY_SELECT
        ))
        .fetch_all(&mut *self.pool)
        .await?;

        Ok(rows.into_iter().map(JobCompanyRow::into_joined).collect())
    }

    /// Case-insensitive substring search. Either filter may be absent; with
    /// both absent every non-expired job comes back.
    pub async fn get_job_company_by_title_location(
        &mut self,
        title: Option<&str>,
        location: Option<&str>,
    ) -> Result<Vec<JoinedRow>> {
        let mut query = String::from(JOB_COMPANY_SELECT);
        let mut param_count = 0;

        if title.is_some() {
            param_count += 1;
            query.push_str(&format!(" AND j.title ILIKE '%' || ${} || '%'", param_count));
        }
        if location.is_some() {
            param_count += 1;
            query.push_str(&format!(
                " AND j.location ILIKE '%' || ${} || '%'",
                param_count
            ));
        }
        query.push_str(" ORDER BY j.id");

        let mut q = sqlx::query_as::<_, JobCompanyRow>(&query);
        if let Some(title) = title {
            q = q.bind(title.to_string());
        }
        if let Some(location) = location {
            q = q.bind(location.to_string());
        }

        let rows = q.fetch_all(&mut *self.pool).await?;
        Ok(rows.into_iter().map(JobCompanyRow::into_joined).collect())
    }

    /// One page of 10 rows starting at `offset`; the caller keeps the offset.
    pub async fn get_ten_job_company(&mut self, offset: i64) -> Result<Vec<JoinedRow>> {
        let rows = sqlx::query_as::<_, JobCompanyRow>(&format!(
            "{} ORDER BY j.id OFFSET $1 LIMIT 10",
            JOB_COMPANY_SELECT
        ))
        .bind(offset)
        .fetch_all(&mut *self.pool)
        .await?;

        Ok(rows.into_iter().map(JobCompanyRow::into_joined).collect())
    }

    pub async fn get_one_job_company(&mut self, job_id: i32) -> Result<Option<JoinedRow>> {
        let row = sqlx::query_as::<_, JobCompanyRow>(&format!(
            "{} AND j.id = $1",
            JOB_COMPANY_SELECT
        ))
        .bind(job_id)
        .fetch_optional(&mut *self.pool)
        .await?;

        Ok(row.map(JobCompanyRow::into_joined))
    }

    /// All postings of one recruiter, application rows fanned out.
    pub async fn get_job_company_applications_by_uid(
        &mut self,
        user_id: &str,
    ) -> Result<Vec<JoinedRow>> {
        let rows = sqlx::query_as::<_, JobCompanyApplicationRow>(&format!(
            "{} AND j.user_id = $1 ORDER BY j.id, a.id",
            JOB_COMPANY_APPLICATION_SELECT
        ))
        .bind(user_id)
        .fetch_all(&mut *self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(JobCompanyApplicationRow::into_joined)
            .collect())
    }

    /// A single posting with its applications, for the owning recruiter.
    pub async fn get_one_job_company_applications(
        &mut self,
        job_id: i32,
    ) -> Result<Vec<JoinedRow>> {
        let rows = sqlx::query_as::<_, JobCompanyApplicationRow>(&format!(
            "{} AND j.id = $1 ORDER BY a.id",
            JOB_COMPANY_APPLICATION_SELECT
        ))
        .bind(job_id)
        .fetch_all(&mut *self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(JobCompanyApplicationRow::into_joined)
            .collect())
    }

    pub async fn get_by_job_id(&mut self, job_id: i32) -> Result<Option<JobEntry>> {
        let row = sqlx::query_as::<_, JobEntry>(
            "SELECT id, title, location, type, category, experience_level, salary_min, salary_max, \
             start_date, end_date, description, user_id \
             FROM jobs WHERE id = $1 AND end_date > CURRENT_DATE",
        )
        .bind(job_id)
        .fetch_optional(&mut *self.pool)
        .await?;

        Ok(row)
    }

    /// Ownership is checked against the row itself, expired or not.
    pub async fn is_owner(&mut self, user_id: &str, job_id: i32) -> Result<bool> {
        let owner_id =
            sqlx::query_scalar::<_, String>("SELECT user_id FROM jobs WHERE id = $1")
                .bind(job_id)
                .fetch_optional(&mut *self.pool)
                .await?;

        Ok(owner_id.as_deref() == Some(user_id))
    }

    pub async fn get_saved_by_user_id(&mut self, user_id: &str) -> Result<Vec<SavedJobEntry>> {
        let rows = sqlx::query_as::<_, SavedJobEntry>(
            "SELECT id, job_id, user_id FROM saved_jobs WHERE user_id = $1 ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(&mut *self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn get_saved_by_id(&mut self, saved_job_id: i32) -> Result<Option<SavedJobEntry>> {
        let row = sqlx::query_as::<_, SavedJobEntry>(
            "SELECT id, job_id, user_id FROM saved_jobs WHERE id = $1",
        )
        .bind(saved_job_id)
        .fetch_optional(&mut *self.pool)
        .await?;

        Ok(row)
    }

    /// Pre-check for the one-bookmark-per-(job, candidate) rule; not atomic
    /// with the following insert.
    pub async fn job_was_saved(&mut self, job_id: i32, user_id: &str) -> Result<bool> {
        let row = sqlx::query_scalar::<_, i32>(
            "SELECT id FROM saved_jobs WHERE job_id = $1 AND user_id = $2 LIMIT 1",
        )
        .bind(job_id)
        .bind(user_id)
        .fetch_optional(&mut *self.pool)
        .await?;

        Ok(row.is_some())
    }
}
