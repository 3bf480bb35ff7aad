use std::collections::HashMap;

use serde::Serialize;

use crate::pkg::internal::adaptors::applications::spec::ApplicationEntry;
use crate::pkg::internal::adaptors::jobs::spec::JobEntry;
use crate::pkg::internal::adaptors::recruiters::spec::RecruiterEntry;

/// One row out of the job listing joins. The arity of the underlying SQL row
/// is carried in the variant instead of being sniffed at reshape time.
#[derive(Debug)]
pub enum JoinedRow {
    JobWithCompany(JobEntry, RecruiterEntry),
    JobWithCompanyAndApplication(JobEntry, RecruiterEntry, ApplicationEntry),
}

/// Client-facing job document: the job's own fields flattened at the top,
/// the posting company nested under `company`, and — only for jobs that had
/// at least one application row in the input — an `applications` list.
/// Callers must tolerate the key being absent, not expect an empty list.
#[derive(Debug, Serialize)]
pub struct JobDocument {
    #[serde(flatten)]
    pub job: JobEntry,
    pub company: RecruiterEntry,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applications: Option<Vec<ApplicationEntry>>,
}

#[derive(Debug, Default, Serialize)]
pub struct JobListing {
    pub jobs: Vec<JobDocument>,
}

/// Collapse joined rows into one document per distinct job id, keeping
/// first-seen input order. Repeated rows for a job contribute their
/// application (if any) to the existing document and nothing else.
pub fn reshape(rows: Vec<JoinedRow>) -> JobListing {
    let mut jobs: Vec<JobDocument> = Vec::new();
    let mut seen: HashMap<i32, usize> = HashMap::new();

    for row in rows {
        let (job, company, application) = match row {
            JoinedRow::JobWithCompany(job, company) => (job, company, None),
            JoinedRow::JobWithCompanyAndApplication(job, company, application) => {
                (job, company, Some(application))
            }
        };

        match seen.get(&job.id).copied() {
            Some(idx) => {
                if let Some(application) = application {
                    jobs[idx]
                        .applications
                        .get_or_insert_with(Vec::new)
                        .push(application);
                }
            }
            None => {
                seen.insert(job.id, jobs.len());
                jobs.push(JobDocument {
                    job,
                    company,
                    applications: application.map(|application| vec![application]),
                });
            }
        }
    }

    JobListing { jobs }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pkg::internal::adaptors::applications::spec::ApplicationStatus;
    use chrono::NaiveDate;
    use serde_json::Value;
    use tracing_test::traced_test;

    fn job(id: i32, title: &str) -> JobEntry {
        JobEntry {
            id,
            title: title.to_string(),
            location: "Remote".into(),
            job_type: "Full-time".into(),
            category: "Engineering".into(),
            experience_level: "Senior".into(),
            salary_min: 90_000,
            salary_max: 120_000,
            start_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2033, 1, 1).unwrap(),
            description: "desc".into(),
            user_id: "recruiter-1".into(),
        }
    }

    fn company(id: i32) -> RecruiterEntry {
        RecruiterEntry {
            id,
            company_name: "Acme".into(),
            company_size: "51-200".into(),
            industry: "Software".into(),
            company_logo_url: "https://example.com/logo.png".into(),
            user_id: "recruiter-1".into(),
        }
    }

    fn application(id: i32) -> ApplicationEntry {
        ApplicationEntry {
            id,
            status: ApplicationStatus::Processing,
            user_id: "candidate-1".into(),
            job_id: 1,
        }
    }

    #[traced_test]
    #[test]
    fn test_empty_input() {
        let listing = reshape(vec![]);
        assert!(listing.jobs.is_empty());
        assert_eq!(
            serde_json::to_value(&listing).unwrap(),
            serde_json::json!({ "jobs": [] })
        );
    }

    #[test]
    fn test_one_document_per_job_id_in_first_seen_order() {
        let rows = vec![
            JoinedRow::JobWithCompany(job(3, "C"), company(9)),
            JoinedRow::JobWithCompany(job(1, "A"), company(9)),
            JoinedRow::JobWithCompany(job(3, "C"), company(9)),
            JoinedRow::JobWithCompany(job(2, "B"), company(9)),
        ];
        let listing = reshape(rows);
        let ids: Vec<i32> = listing.jobs.iter().map(|doc| doc.job.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_applications_accumulate_on_first_document() {
        // the worked example: a bare row followed by an application row for
        // the same job yields a single document carrying that application
        let rows = vec![
            JoinedRow::JobWithCompany(job(1, "A"), company(9)),
            JoinedRow::JobWithCompanyAndApplication(job(1, "A"), company(9), application(100)),
            JoinedRow::JobWithCompanyAndApplication(job(1, "A"), company(9), application(101)),
        ];
        let listing = reshape(rows);
        assert_eq!(listing.jobs.len(), 1);
        let applications = listing.jobs[0].applications.as_ref().unwrap();
        let ids: Vec<i32> = applications.iter().map(|app| app.id).collect();
        assert_eq!(ids, vec![100, 101]);
    }

    #[test]
    fn test_applications_key_absent_without_application_rows() {
        let rows = vec![
            JoinedRow::JobWithCompany(job(1, "A"), company(9)),
            JoinedRow::JobWithCompanyAndApplication(job(2, "B"), company(9), application(100)),
        ];
        let value = serde_json::to_value(reshape(rows)).unwrap();
        let docs = value["jobs"].as_array().unwrap();
        assert!(docs[0].get("applications").is_none());
        assert!(docs[1].get("applications").is_some());
    }

    #[test]
    fn test_documents_are_camel_cased() {
        let rows = vec![JoinedRow::JobWithCompanyAndApplication(
            job(1, "A"),
            company(9),
            application(100),
        )];
        let value = serde_json::to_value(reshape(rows)).unwrap();
        let doc = &value["jobs"][0];
        assert!(doc.get("experienceLevel").is_some());
        assert!(doc.get("salaryMin").is_some());
        assert_eq!(doc["type"], Value::String("Full-time".into()));
        assert!(doc["company"].get("companyName").is_some());
        assert!(doc["company"].get("companyLogoUrl").is_some());
        assert!(doc["applications"][0].get("jobId").is_some());
        assert!(doc["applications"][0].get("userId").is_some());
    }
}
