use axum::{extract::State, http::StatusCode, Extension, Json};
use serde::Deserialize;

use crate::{
    pkg::{
        internal::{
            adaptors::candidates::{
                mutators::CandidateMutator,
                selectors::CandidateSelector,
                spec::{CandidateEntry, CandidateProfileDoc},
            },
            auth::{AuthSession, Role},
        },
        server::state::{AppState, GetTxn},
    },
    prelude::*,
};

#[derive(Deserialize)]
pub struct UpdateCandidateInput {
    pub full_name: Option<String>,
    pub location: Option<String>,
    pub phone_number: Option<String>,
    pub bio: Option<String>,
    pub resume_url: Option<String>,
}

pub async fn get_profile(
    State(state): State<AppState>,
    Extension(session): Extension<AuthSession>,
) -> Result<Json<CandidateProfileDoc>> {
    session.require_role(Role::Candidate)?;

    let mut conn = state.db_pool.acquire().await?;
    let profile = CandidateSelector::new(&mut conn)
        .profile(&session.user_id)
        .await?;

    Ok(Json(profile))
}

pub async fn update(
    State(state): State<AppState>,
    Extension(session): Extension<AuthSession>,
    Json(input): Json<UpdateCandidateInput>,
) -> Result<(StatusCode, Json<CandidateEntry>)> {
    session.require_role(Role::Candidate)?;

    let mut tx = state.db_pool.begin_txn().await?;
    let candidate = CandidateMutator::new(&mut tx)
        .patch(&session.user_id, input)
        .await?
        .ok_or(Error::NotFound("Candidate"))?;
    tx.commit().await?;

    Ok((StatusCode::CREATED, Json(candidate)))
}
