use axum::{
    extract::{Query, State},
    http::StatusCode,
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::{
    pkg::{
        internal::{
            adaptors::{
                applications::{
                    mutators::ApplicationMutator,
                    selectors::ApplicationSelector,
                    spec::{ApplicationEntry, ApplicationStatus},
                },
                candidates::{selectors::CandidateSelector, spec::CandidateProfileDoc},
                jobs::{selectors::JobSelector, spec::JobEntry},
                recruiters::{selectors::RecruiterSelector, spec::RecruiterEntry},
            },
            auth::{AuthSession, Role},
        },
        server::state::{AppState, GetTxn},
    },
    prelude::*,
};

#[derive(Deserialize)]
pub struct AddApplicationInput {
    pub job_id: i32,
}

#[derive(Deserialize)]
pub struct UpdateApplicationInput {
    pub id: i32,
    pub status: ApplicationStatus,
}

#[derive(Deserialize)]
pub struct JobIdQuery {
    pub job_id: i32,
}

#[derive(Deserialize)]
pub struct DeleteApplicationQuery {
    pub application_id: i32,
}

/// A candidate's application, decorated with the posting and its company.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationWithJob {
    #[serde(flatten)]
    pub application: ApplicationEntry,
    pub job_info: JobEntry,
    pub company_info: RecruiterEntry,
}

/// What the posting recruiter sees per applicant.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationWithCandidate {
    pub candidate_info: CandidateProfileDoc,
    pub application_info: ApplicationEntry,
}

pub async fn get_all(
    State(state): State<AppState>,
    Extension(session): Extension<AuthSession>,
) -> Result<Json<Value>> {
    session.require_role(Role::Candidate)?;

    let mut conn = state.db_pool.acquire().await?;
    let applications = ApplicationSelector::new(&mut conn)
        .get_all_by_user_id(&session.user_id)
        .await?;

    let mut results = Vec::with_capacity(applications.len());
    for application in applications {
        // postings past their end date have dropped out of the job reads;
        // their applications are skipped rather than served half-built
        let Some(job) = JobSelector::new(&mut conn)
            .get_by_job_id(application.job_id)
            .await?
        else {
            continue;
        };
        let company = RecruiterSelector::new(&mut conn)
            .get_by_user_id(&job.user_id)
            .await?
            .ok_or(Error::NotFound("Recruiter"))?;
        results.push(ApplicationWithJob {
            application,
            job_info: job,
            company_info: company,
        });
    }

    Ok(Json(json!({ "applications": results })))
}

pub async fn get_all_by_job_id(
    State(state): State<AppState>,
    Extension(session): Extension<AuthSession>,
    Query(query): Query<JobIdQuery>,
) -> Result<Json<Vec<ApplicationWithCandidate>>> {
    session.require_role(Role::Recruiter)?;
    if query.job_id <= 0 {
        return Err(Error::Validation("job_id must be a positive integer".into()));
    }

    let mut conn = state.db_pool.acquire().await?;
    if !JobSelector::new(&mut conn)
        .is_owner(&session.user_id, query.job_id)
        .await?
    {
        return Err(Error::Forbidden);
    }

    let applications = ApplicationSelector::new(&mut conn)
        .get_all_by_job_id(query.job_id)
        .await?;

    let mut results = Vec::with_capacity(applications.len());
    for application in applications {
        let candidate = CandidateSelector::new(&mut conn)
            .profile(&application.user_id)
            .await?;
        results.push(ApplicationWithCandidate {
            candidate_info: candidate,
            application_info: application,
        });
    }

    Ok(Json(results))
}

pub async fn add(
    State(state): State<AppState>,
    Extension(session): Extension<AuthSession>,
    Json(input): Json<AddApplicationInput>,
) -> Result<(StatusCode, Json<Value>)> {
    session.require_role(Role::Candidate)?;

    let mut tx = state.db_pool.begin_txn().await?;
    JobSelector::new(&mut tx)
        .get_by_job_id(input.job_id)
        .await?
        .ok_or(Error::NotFound("Job"))?;

    if ApplicationSelector::new(&mut tx)
        .user_applied(&session.user_id, input.job_id)
        .await?
    {
        return Ok((
            StatusCode::OK,
            Json(json!({ "message": "You have already applied for this job" })),
        ));
    }

    ApplicationMutator::new(&mut tx)
        .create(&session.user_id, input.job_id)
        .await?;
    tx.commit().await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Application added successfully" })),
    ))
}

pub async fn update(
    State(state): State<AppState>,
    Extension(session): Extension<AuthSession>,
    Json(input): Json<UpdateApplicationInput>,
) -> Result<(StatusCode, Json<Value>)> {
    session.require_role(Role::Recruiter)?;
    // Processing is the system-assigned initial state, not a reviewable one
    if input.status == ApplicationStatus::Processing {
        return Err(Error::Validation(
            "status must be one of Accepted, Rejected, Pending".into(),
        ));
    }

    let mut tx = state.db_pool.begin_txn().await?;
    let application = ApplicationSelector::new(&mut tx)
        .get_by_id(input.id)
        .await?
        .ok_or(Error::NotFound("Application"))?;

    if !JobSelector::new(&mut tx)
        .is_owner(&session.user_id, application.job_id)
        .await?
    {
        return Err(Error::Forbidden);
    }

    let updated = ApplicationMutator::new(&mut tx)
        .update_status(input.id, input.status)
        .await?
        .ok_or(Error::NotFound("Application"))?;
    tx.commit().await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "application": updated })),
    ))
}

pub async fn delete(
    State(state): State<AppState>,
    Extension(session): Extension<AuthSession>,
    Query(query): Query<DeleteApplicationQuery>,
) -> Result<Json<Value>> {
    session.require_role(Role::Candidate)?;
    if query.application_id <= 0 {
        return Err(Error::Validation(
            "application_id must be a positive integer".into(),
        ));
    }

    let mut tx = state.db_pool.begin_txn().await?;
    let application = ApplicationSelector::new(&mut tx)
        .get_by_id(query.application_id)
        .await?
        .ok_or(Error::NotFound("Application"))?;

    if application.user_id != session.user_id {
        return Err(Error::Forbidden);
    }

    ApplicationMutator::new(&mut tx)
        .delete(query.application_id)
        .await?;
    tx.commit().await?;

    Ok(Json(json!({ "message": "Application deleted successfully" })))
}
