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
            adaptors::educations::{mutators::EducationMutator, selectors::EducationSelector},
            auth::{AuthSession, Role},
        },
        server::{
            handlers::skills::parse_id_list,
            state::{AppState, GetTxn},
        },
    },
    prelude::*,
};

#[derive(Deserialize)]
pub struct EducationInput {
    pub school_name: String,
    pub degree: Option<String>,
    pub major: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateEducationInput {
    pub school_id: i32,
    pub school_name: String,
    pub degree: Option<String>,
    pub major: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,
}

#[derive(Deserialize)]
pub struct DeleteEducationsQuery {
    pub ids: String,
}

pub fn check_date_range(start_date: Option<NaiveDate>, end_date: Option<NaiveDate>) -> Result<()> {
    if let (Some(start_date), Some(end_date)) = (start_date, end_date) {
        if end_date < start_date {
            return Err(Error::Validation(
                "Start date cannot be greater than end date".into(),
            ));
        }
    }
    Ok(())
}

pub async fn get_all(
    State(state): State<AppState>,
    Extension(session): Extension<AuthSession>,
) -> Result<Json<Value>> {
    session.require_role(Role::Candidate)?;

    let mut conn = state.db_pool.acquire().await?;
    let educations = EducationSelector::new(&mut conn)
        .get_all_by_user_id(&session.user_id)
        .await?;

    Ok(Json(json!({ "educations": educations })))
}

pub async fn add_one(
    State(state): State<AppState>,
    Extension(session): Extension<AuthSession>,
    Json(input): Json<EducationInput>,
) -> Result<(StatusCode, Json<Value>)> {
    session.require_role(Role::Candidate)?;
    check_date_range(input.start_date, input.end_date)?;

    let mut tx = state.db_pool.begin_txn().await?;
    EducationMutator::new(&mut tx)
        .create(&input, &session.user_id)
        .await?;
    tx.commit().await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Education added successfully" })),
    ))
}

/// Whole-batch validation runs before any write; the inserts themselves are
/// per-row, so a mid-batch persistence failure leaves earlier rows applied.
pub async fn add_batch(
    State(state): State<AppState>,
    Extension(session): Extension<AuthSession>,
    Json(input): Json<Vec<EducationInput>>,
) -> Result<(StatusCode, Json<Value>)> {
    session.require_role(Role::Candidate)?;
    for education in &input {
        check_date_range(education.start_date, education.end_date)?;
    }

    let mut tx = state.db_pool.begin_txn().await?;
    for education in &input {
        EducationMutator::new(&mut tx)
            .create(education, &session.user_id)
            .await?;
    }
    tx.commit().await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "All educations added successfully" })),
    ))
}

pub async fn update(
    State(state): State<AppState>,
    Extension(session): Extension<AuthSession>,
    Json(input): Json<Vec<UpdateEducationInput>>,
) -> Result<Json<Value>> {
    session.require_role(Role::Candidate)?;
    for education in &input {
        check_date_range(education.start_date, education.end_date)?;
    }

    let mut tx = state.db_pool.begin_txn().await?;
    let mut educations = Vec::with_capacity(input.len());
    for education in &input {
        let updated = EducationMutator::new(&mut tx)
            .update(education)
            .await?
            .ok_or(Error::NotFound("Education"))?;
        educations.push(updated);
    }
    tx.commit().await?;

    Ok(Json(json!({ "educations": educations })))
}

pub async fn delete(
    State(state): State<AppState>,
    Extension(session): Extension<AuthSession>,
    Query(query): Query<DeleteEducationsQuery>,
) -> Result<Json<Value>> {
    session.require_role(Role::Candidate)?;

    let ids = parse_id_list(&query.ids)?;

    let mut tx = state.db_pool.begin_txn().await?;
    if !EducationSelector::new(&mut tx).all_exist(&ids).await? {
        return Err(Error::Validation(
            "One or more IDs are not found. No changes were made.".into(),
        ));
    }

    for school_id in ids {
        EducationMutator::new(&mut tx).delete(school_id).await?;
    }
    tx.commit().await?;

    Ok(Json(json!({ "message": "Educations deleted successfully." })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_date_range_tolerates_missing_bounds() {
        let date = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        assert!(check_date_range(None, None).is_ok());
        assert!(check_date_range(Some(date), None).is_ok());
        assert!(check_date_range(None, Some(date)).is_ok());
    }

    #[test]
    fn test_check_date_range_rejects_inversion() {
        let earlier = NaiveDate::from_ymd_opt(2020, 9, 1).unwrap();
        let later = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert!(check_date_range(Some(earlier), Some(later)).is_ok());
        assert!(matches!(
            check_date_range(Some(later), Some(earlier)),
            Err(Error::Validation(_))
        ));
    }
}
