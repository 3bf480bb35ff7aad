use axum::{extract::State, http::StatusCode, Extension, Json};
use serde::Deserialize;
use serde_json::{json, Value};
use validator::Validate;

use crate::{
    pkg::{
        internal::{
            adaptors::{
                candidates::selectors::CandidateSelector,
                recruiters::{
                    mutators::RecruiterMutator, selectors::RecruiterSelector, spec::RecruiterEntry,
                },
                users::selectors::UserSelector,
            },
            auth::{AuthSession, Role},
        },
        server::state::{AppState, GetTxn},
    },
    prelude::*,
};

#[derive(Deserialize, Validate)]
pub struct UpdateRecruiterInput {
    pub company_name: Option<String>,
    pub company_size: Option<String>,
    pub industry: Option<String>,
    #[validate(url)]
    pub company_logo_url: Option<String>,
}

pub async fn get_profile(
    State(state): State<AppState>,
    Extension(session): Extension<AuthSession>,
) -> Result<Json<RecruiterEntry>> {
    session.require_role(Role::Recruiter)?;

    let mut conn = state.db_pool.acquire().await?;
    let recruiter = RecruiterSelector::new(&mut conn)
        .get_by_user_id(&session.user_id)
        .await?
        .ok_or(Error::NotFound("Recruiter"))?;

    Ok(Json(recruiter))
}

pub async fn update(
    State(state): State<AppState>,
    Extension(session): Extension<AuthSession>,
    Json(input): Json<UpdateRecruiterInput>,
) -> Result<(StatusCode, Json<RecruiterEntry>)> {
    session.require_role(Role::Recruiter)?;
    input.validate()?;

    let mut tx = state.db_pool.begin_txn().await?;
    let recruiter = RecruiterMutator::new(&mut tx)
        .patch(&session.user_id, input)
        .await?
        .ok_or(Error::NotFound("Recruiter"))?;
    tx.commit().await?;

    Ok((StatusCode::CREATED, Json(recruiter)))
}

/// Every candidate on the platform, each as a full profile dossier.
pub async fn get_candidate_profiles(
    State(state): State<AppState>,
    Extension(session): Extension<AuthSession>,
) -> Result<Json<Value>> {
    session.require_role(Role::Recruiter)?;

    let mut conn = state.db_pool.acquire().await?;
    if RecruiterSelector::new(&mut conn)
        .get_by_user_id(&session.user_id)
        .await?
        .is_none()
    {
        return Err(Error::NotFound("Recruiter"));
    }

    let candidate_ids = UserSelector::new(&mut conn)
        .get_ids_by_role(Role::Candidate)
        .await?;

    let mut candidates = Vec::with_capacity(candidate_ids.len());
    for user_id in candidate_ids {
        let profile = CandidateSelector::new(&mut conn).profile(&user_id).await?;
        candidates.push(profile);
    }

    Ok(Json(json!({ "candidates": candidates })))
}
