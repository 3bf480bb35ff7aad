use axum::{
    extract::{Query, State},
    http::StatusCode,
    Extension, Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{
    pkg::{
        internal::{
            adaptors::work_experiences::{
                mutators::WorkExperienceMutator, selectors::WorkExperienceSelector,
            },
            auth::{AuthSession, Role},
        },
        server::{
            handlers::{educations::check_date_range, skills::parse_id_list},
            state::{AppState, GetTxn},
        },
    },
    prelude::*,
};

#[derive(Deserialize)]
pub struct WorkExperienceInput {
    pub company_name: String,
    pub position: String,
    pub location: Option<String>,
    pub current_job: Option<bool>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateWorkExperienceInput {
    pub id: i32,
    pub company_name: String,
    pub position: String,
    pub location: Option<String>,
    pub current_job: Option<bool>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,
}

#[derive(Deserialize)]
pub struct DeleteWorkExperiencesQuery {
    pub ids: String,
}

pub async fn get_all(
    State(state): State<AppState>,
    Extension(session): Extension<AuthSession>,
) -> Result<Json<Value>> {
    session.require_role(Role::Candidate)?;

    let mut conn = state.db_pool.acquire().await?;
    let work_experiences = WorkExperienceSelector::new(&mut conn)
        .get_all_by_user_id(&session.user_id)
        .await?;

    Ok(Json(json!({ "workExperiences": work_experiences })))
}

pub async fn add_one(
    State(state): State<AppState>,
    Extension(session): Extension<AuthSession>,
    Json(input): Json<WorkExperienceInput>,
) -> Result<(StatusCode, Json<Value>)> {
    session.require_role(Role::Candidate)?;
    check_date_range(input.start_date, input.end_date)?;

    let mut tx = state.db_pool.begin_txn().await?;
    WorkExperienceMutator::new(&mut tx)
        .create(&input, &session.user_id)
        .await?;
    tx.commit().await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Work experience added successfully" })),
    ))
}

/// Whole-batch validation first, per-row inserts after; a mid-batch failure
/// leaves earlier rows applied.
pub async fn add_batch(
    State(state): State<AppState>,
    Extension(session): Extension<AuthSession>,
    Json(input): Json<Vec<WorkExperienceInput>>,
) -> Result<(StatusCode, Json<Value>)> {
    session.require_role(Role::Candidate)?;
    for experience in &input {
        check_date_range(experience.start_date, experience.end_date)?;
    }

    let mut tx = state.db_pool.begin_txn().await?;
    for experience in &input {
        WorkExperienceMutator::new(&mut tx)
            .create(experience, &session.user_id)
            .await?;
    }
    tx.commit().await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Work experiences added successfully" })),
    ))
}

pub async fn update(
    State(state): State<AppState>,
    Extension(session): Extension<AuthSession>,
    Json(input): Json<Vec<UpdateWorkExperienceInput>>,
) -> Result<Json<Value>> {
    session.require_role(Role::Candidate)?;
    for experience in &input {
        check_date_range(experience.start_date, experience.end_date)?;
    }

    let mut tx = state.db_pool.begin_txn().await?;
    let mut work_experiences = Vec::with_capacity(input.len());
    for experience in &input {
        let updated = WorkExperienceMutator::new(&mut tx)
            .update(experience)
            .await?
            .ok_or(Error::NotFound("Work experience"))?;
        work_experiences.push(updated);
    }
    tx.commit().await?;

    Ok(Json(json!({ "workExperiences": work_experiences })))
}

pub async fn delete(
    State(state): State<AppState>,
    Extension(session): Extension<AuthSession>,
    Query(query): Query<DeleteWorkExperiencesQuery>,
) -> Result<Json<Value>> {
    session.require_role(Role::Candidate)?;

    let ids = parse_id_list(&query.ids)?;

    let mut tx = state.db_pool.begin_txn().await?;
    if !WorkExperienceSelector::new(&mut tx).all_exist(&ids).await? {
        return Err(Error::Validation(
            "One or more IDs are not found. No changes were made.".into(),
        ));
    }

    for id in ids {
        WorkExperienceMutator::new(&mut tx).delete(id).await?;
    }
    tx.commit().await?;

    Ok(Json(json!({ "message": "Work experiences deleted successfully." })))
}
