use axum::{
    extract::{Query, State},
    http::StatusCode,
    Extension, Json,
};
use axum_extra::extract::CookieJar;
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{
    pkg::{
        internal::{
            adaptors::jobs::{mutators::JobMutator, selectors::JobSelector},
            auth::{verify_token, AuthSession, Role, TOKEN_COOKIE},
            reshape::{reshape, JobListing},
        },
        server::state::{AppState, GetTxn},
    },
    prelude::*,
};

#[derive(Deserialize)]
pub struct CreateJobInput {
    pub title: String,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: String,
    pub category: String,
    pub experience_level: String,
    pub salary_min: i32,
    pub salary_max: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub description: String,
}

#[derive(Deserialize)]
pub struct PatchJobInput {
    pub job_id: i32,
    pub title: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub job_type: Option<String>,
    pub category: Option<String>,
    pub experience_level: Option<String>,
    pub salary_min: Option<i32>,
    pub salary_max: Option<i32>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,
}

#[derive(Deserialize)]
pub struct GetTenQuery {
    pub offset: i64,
}

#[derive(Deserialize)]
pub struct JobIdQuery {
    pub job_id: i32,
}

#[derive(Deserialize)]
pub struct SaveJobInput {
    pub job_id: i32,
}

#[derive(Deserialize)]
pub struct DeleteSavedJobQuery {
    pub saved_job_id: i32,
}

/// Cross-field checks shared by create and patch.
pub fn check_salary_range(salary_min: i32, salary_max: i32) -> Result<()> {
    if salary_min > salary_max {
        return Err(Error::Validation(
            "Salary min cannot be greater than salary max".into(),
        ));
    }
    Ok(())
}

pub fn check_date_range(start_date: NaiveDate, end_date: NaiveDate) -> Result<()> {
    if start_date > end_date {
        return Err(Error::Validation(
            "Start date cannot be greater than end date".into(),
        ));
    }
    Ok(())
}

pub async fn get_all(State(state): State<AppState>) -> Result<Json<JobListing>> {
    let mut conn = state.db_pool.acquire().await?;
    let rows = JobSelector::new(&mut conn).get_all_job_company().await?;
    Ok(Json(reshape(rows)))
}

pub async fn get_ten(
    State(state): State<AppState>,
    Query(query): Query<GetTenQuery>,
) -> Result<Json<JobListing>> {
    let mut conn = state.db_pool.acquire().await?;
    let rows = JobSelector::new(&mut conn)
        .get_ten_job_company(query.offset)
        .await?;
    Ok(Json(reshape(rows)))
}

/// Public view of a single posting. A logged-in recruiter who owns the job
/// gets the widened view with its applications; a recruiter who does not is
/// turned away.
pub async fn get_one(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(query): Query<JobIdQuery>,
) -> Result<Json<JobListing>> {
    let claims = jar
        .get(TOKEN_COOKIE)
        .and_then(|cookie| verify_token(cookie.value()).ok());

    let mut conn = state.db_pool.acquire().await?;
    let mut selector = JobSelector::new(&mut conn);

    if let Some(claims) = claims {
        if claims.role == Role::Recruiter {
            if !selector.is_owner(&claims.user_id, query.job_id).await? {
                return Err(Error::Forbidden);
            }
            let rows = selector
                .get_one_job_company_applications(query.job_id)
                .await?;
            return Ok(Json(reshape(rows)));
        }
    }

    let row = selector
        .get_one_job_company(query.job_id)
        .await?
        .ok_or(Error::NotFound("Job"))?;
    Ok(Json(reshape(vec![row])))
}

pub async fn get_posted(
    State(state): State<AppState>,
    Extension(session): Extension<AuthSession>,
) -> Result<Json<JobListing>> {
    session.require_role(Role::Recruiter)?;

    let mut conn = state.db_pool.acquire().await?;
    let rows = JobSelector::new(&mut conn)
        .get_job_company_applications_by_uid(&session.user_id)
        .await?;
    Ok(Json(reshape(rows)))
}

pub async fn create(
    State(state): State<AppState>,
    Extension(session): Extension<AuthSession>,
    Json(input): Json<CreateJobInput>,
) -> Result<(StatusCode, Json<Value>)> {
    session.require_role(Role::Recruiter)?;

    check_salary_range(input.salary_min, input.salary_max)?;
    if input.end_date < Utc::now().date_naive() {
        return Err(Error::Validation("The end date cannot be in the past.".into()));
    }
    check_date_range(input.start_date, input.end_date)?;

    let mut tx = state.db_pool.begin_txn().await?;
    JobMutator::new(&mut tx)
        .create(&input, &session.user_id)
        .await?;
    tx.commit().await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Job created successfully." })),
    ))
}

pub async fn update(
    State(state): State<AppState>,
    Extension(session): Extension<AuthSession>,
    Json(input): Json<PatchJobInput>,
) -> Result<Json<Value>> {
    if let (Some(salary_min), Some(salary_max)) = (input.salary_min, input.salary_max) {
        check_salary_range(salary_min, salary_max)?;
    }
    if let (Some(start_date), Some(end_date)) = (input.start_date, input.end_date) {
        check_date_range(start_date, end_date)?;
    }

    let mut tx = state.db_pool.begin_txn().await?;
    let job = JobSelector::new(&mut tx).get_by_job_id(input.job_id).await?;
    match job {
        Some(job) if job.user_id == session.user_id => {}
        _ => return Err(Error::Forbidden),
    }

    let updated = JobMutator::new(&mut tx)
        .patch(input.job_id, input)
        .await?
        .ok_or(Error::NotFound("Job"))?;
    tx.commit().await?;

    Ok(Json(json!({ "updatedJob": updated })))
}

pub async fn delete(
    State(state): State<AppState>,
    Extension(session): Extension<AuthSession>,
    Query(query): Query<JobIdQuery>,
) -> Result<Json<Value>> {
    session.require_role(Role::Recruiter)?;
    if query.job_id <= 0 {
        return Err(Error::Validation("job_id must be a positive integer".into()));
    }

    let mut tx = state.db_pool.begin_txn().await?;
    JobSelector::new(&mut tx)
        .get_by_job_id(query.job_id)
        .await?
        .ok_or(Error::NotFound("Job"))?;
    if !JobSelector::new(&mut tx)
        .is_owner(&session.user_id, query.job_id)
        .await?
    {
        return Err(Error::Forbidden);
    }

    JobMutator::new(&mut tx).delete(query.job_id).await?;
    tx.commit().await?;

    Ok(Json(json!({ "message": "Job deleted successfully" })))
}

pub async fn save_job(
    State(state): State<AppState>,
    Extension(session): Extension<AuthSession>,
    Json(input): Json<SaveJobInput>,
) -> Result<(StatusCode, Json<Value>)> {
    session.require_role(Role::Candidate)?;

    let mut tx = state.db_pool.begin_txn().await?;
    if JobSelector::new(&mut tx)
        .job_was_saved(input.job_id, &session.user_id)
        .await?
    {
        return Err(Error::Validation("Job already saved.".into()));
    }

    JobMutator::new(&mut tx)
        .save_job(input.job_id, &session.user_id)
        .await?;
    tx.commit().await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Job saved successfully." })),
    ))
}

pub async fn get_saved(
    State(state): State<AppState>,
    Extension(session): Extension<AuthSession>,
) -> Result<Json<Value>> {
    session.require_role(Role::Candidate)?;

    let mut conn = state.db_pool.acquire().await?;
    let saved = JobSelector::new(&mut conn)
        .get_saved_by_user_id(&session.user_id)
        .await?;

    Ok(Json(json!({ "savedJobs": saved })))
}

pub async fn delete_saved(
    State(state): State<AppState>,
    Extension(session): Extension<AuthSession>,
    Query(query): Query<DeleteSavedJobQuery>,
) -> Result<Json<Value>> {
    session.require_role(Role::Candidate)?;
    if query.saved_job_id <= 0 {
        return Err(Error::Validation(
            "saved_job_id must be a positive integer".into(),
        ));
    }

    let mut tx = state.db_pool.begin_txn().await?;
    let saved = JobSelector::new(&mut tx)
        .get_saved_by_id(query.saved_job_id)
        .await?
        .ok_or(Error::NotFound("Saved job"))?;
    if saved.user_id != session.user_id {
        return Err(Error::Forbidden);
    }

    JobMutator::new(&mut tx).delete_saved(saved.id).await?;
    tx.commit().await?;

    Ok(Json(json!({ "message": "Job unsaved successfully" })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverted_salary_range_rejected() {
        assert!(check_salary_range(50_000, 100_000).is_ok());
        assert!(check_salary_range(50_000, 50_000).is_ok());
        assert!(matches!(
            check_salary_range(100_000, 50_000),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn test_inverted_date_range_rejected() {
        let earlier = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        let later = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();
        assert!(check_date_range(earlier, later).is_ok());
        assert!(check_date_range(earlier, earlier).is_ok());
        assert!(matches!(
            check_date_range(later, earlier),
            Err(Error::Validation(_))
        ));
    }
}
