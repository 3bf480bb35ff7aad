use axum::{extract::State, http::StatusCode, Extension, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{
    pkg::{
        internal::{
            adaptors::memberships::{
                mutators::MembershipMutator,
                selectors::MembershipSelector,
                spec::{MembershipEntry, MembershipType},
            },
            auth::{AuthSession, Role},
        },
        server::state::{AppState, GetTxn},
    },
    prelude::*,
};

#[derive(Deserialize)]
pub struct MembershipInput {
    #[serde(rename = "type")]
    pub membership_type: MembershipType,
    pub price: f64,
}

pub async fn add(
    State(state): State<AppState>,
    Extension(session): Extension<AuthSession>,
    Json(input): Json<MembershipInput>,
) -> Result<(StatusCode, Json<Value>)> {
    session.require_role(Role::Recruiter)?;

    let mut tx = state.db_pool.begin_txn().await?;
    if MembershipSelector::new(&mut tx)
        .get_active_by_user_id(&session.user_id)
        .await?
        .is_some()
    {
        return Err(Error::Validation(
            "You have already subscribed to a membership.".into(),
        ));
    }

    MembershipMutator::new(&mut tx)
        .create(input.membership_type, input.price, &session.user_id)
        .await?;
    tx.commit().await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Membership added successfully." })),
    ))
}

pub async fn get(
    State(state): State<AppState>,
    Extension(session): Extension<AuthSession>,
) -> Result<Json<MembershipEntry>> {
    session.require_role(Role::Recruiter)?;

    let mut conn = state.db_pool.acquire().await?;
    let membership = MembershipSelector::new(&mut conn)
        .get_active_by_user_id(&session.user_id)
        .await?
        .ok_or(Error::NotFound("Membership"))?;

    Ok(Json(membership))
}

pub async fn update(
    State(state): State<AppState>,
    Extension(session): Extension<AuthSession>,
    Json(input): Json<MembershipInput>,
) -> Result<Json<MembershipEntry>> {
    session.require_role(Role::Recruiter)?;

    let mut tx = state.db_pool.begin_txn().await?;
    if MembershipSelector::new(&mut tx)
        .get_active_by_user_id(&session.user_id)
        .await?
        .is_none()
    {
        return Err(Error::Validation(
            "You have not subscribed to a membership yet.".into(),
        ));
    }

    let membership = MembershipMutator::new(&mut tx)
        .update(&session.user_id, input.membership_type, input.price)
        .await?
        .ok_or(Error::NotFound("Membership"))?;
    tx.commit().await?;

    Ok(Json(membership))
}

pub async fn delete(
    State(state): State<AppState>,
    Extension(session): Extension<AuthSession>,
) -> Result<Json<Value>> {
    session.require_role(Role::Recruiter)?;

    let mut tx = state.db_pool.begin_txn().await?;
    if MembershipSelector::new(&mut tx)
        .get_active_by_user_id(&session.user_id)
        .await?
        .is_none()
    {
        return Err(Error::NotFound("Membership"));
    }

    MembershipMutator::new(&mut tx)
        .delete_by_user_id(&session.user_id)
        .await?;
    tx.commit().await?;

    Ok(Json(json!({ "message": "Membership deleted successfully" })))
}
