use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::pkg::internal::adaptors::applications::spec::{ApplicationEntry, ApplicationStatus};
use crate::pkg::internal::adaptors::recruiters::spec::RecruiterEntry;
use crate::pkg::internal::reshape::JoinedRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct JobEntry {
    pub id: i32,
    pub title: String,
    pub location: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub job_type: String,
    pub category: String,
    pub experience_level: String,
    pub salary_min: i32,
    pub salary_max: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub description: String,
    pub user_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SavedJobEntry {
    pub id: i32,
    pub job_id: i32,
    pub user_id: String,
}

/// One row of the jobs ⋈ recruiters join. Company columns are aliased in the
/// query to keep them apart from the job's own.
#[derive(Debug, FromRow)]
pub struct JobCompanyRow {
    pub id: i32,
    pub title: String,
    pub location: String,
    #[sqlx(rename = "type")]
    pub job_type: String,
    pub category: String,
    pub experience_level: String,
    pub salary_min: i32,
    pub salary_max: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub description: String,
    pub user_id: String,
    pub company_id: i32,
    pub company_name: String,
    pub company_size: String,
    pub industry: String,
    pub company_logo_url: String,
}

impl JobCompanyRow {
    fn split(self) -> (JobEntry, RecruiterEntry) {
        let company = RecruiterEntry {
            id: self.company_id,
            company_name: self.company_name,
            company_size: self.company_size,
            industry: self.industry,
            company_logo_url: self.company_logo_url,
            user_id: self.user_id.clone(),
        };
        let job = JobEntry {
            id: self.id,
            title: self.title,
            location: self.location,
            job_type: self.job_type,
            category: self.category,
            experience_level: self.experience_level,
            salary_min: self.salary_min,
            salary_max: self.salary_max,
            start_date: self.start_date,
            end_date: self.end_date,
            description: self.description,
            user_id: self.user_id,
        };
        (job, company)
    }

    pub fn into_joined(self) -> JoinedRow {
        let (job, company) = self.split();
        JoinedRow::JobWithCompany(job, company)
    }
}

/// One row of jobs ⋈ recruiters ⟕ applications; the application columns are
/// NULL when a job has no applicants yet.
#[derive(Debug, FromRow)]
pub struct JobCompanyApplicationRow {
    pub id: i32,
    pub title: String,
    pub location: String,
    #[sqlx(rename = "type")]
    pub job_type: String,
    pub category: String,
    pub experience_level: String,
    pub salary_min: i32,
    pub salary_max: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub description: String,
    pub user_id: String,
    pub company_id: i32,
    pub company_name: String,
    pub company_size: String,
    pub industry: String,
    pub company_logo_url: String,
    pub application_id: Option<i32>,
    pub application_status: Option<ApplicationStatus>,
    pub applicant_id: Option<String>,
}

impl JobCompanyApplicationRow {
    pub fn into_joined(self) -> JoinedRow {
        let application = match (self.application_id, self.application_status, &self.applicant_id)
        {
            (Some(id), Some(status), Some(applicant_id)) => Some(ApplicationEntry {
                id,
                status,
                user_id: applicant_id.clone(),
                job_id: self.id,
            }),
            _ => None,
        };
        let row = JobCompanyRow {
            id: self.id,
            title: self.title,
            location: self.location,
            job_type: self.job_type,
            category: self.category,
            experience_level: self.experience_level,
            salary_min: self.salary_min,
            salary_max: self.salary_max,
            start_date: self.start_date,
            end_date: self.end_date,
            description: self.description,
            user_id: self.user_id,
            company_id: self.company_id,
            company_name: self.company_name,
            company_size: self.company_size,
            industry: self.industry,
            company_logo_url: self.company_logo_url,
        };
        let (job, company) = row.split();
        match application {
            Some(application) => {
                JoinedRow::JobWithCompanyAndApplication(job, company, application)
            }
            None => JoinedRow::JobWithCompany(job, company),
        }
    }
}
