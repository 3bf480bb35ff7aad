use std::collections::HashSet;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Extension, Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{
    pkg::{
        internal::{
            adaptors::skills::{
                mutators::SkillMutator, selectors::SkillSelector, spec::missing_skills,
            },
            auth::{AuthSession, Role},
        },
        server::state::{AppState, GetTxn},
    },
    prelude::*,
};

#[derive(Deserialize)]
pub struct SkillListInput {
    pub skills: Vec<String>,
}

#[derive(Deserialize)]
pub struct SkillInput {
    pub skill: String,
}

#[derive(Deserialize)]
pub struct DeleteSkillsQuery {
    pub ids: String,
}

pub fn parse_id_list(raw: &str) -> Result<Vec<i32>> {
    let mut seen = HashSet::new();
    raw.split(',')
        .map(|id| {
            id.trim()
                .parse::<i32>()
                .map_err(|_| Error::Validation("IDs must be integers and separated by commas.".into()))
        })
        .filter(|id| match id {
            Ok(id) => seen.insert(*id),
            Err(_) => true,
        })
        .collect()
}

/// Bulk add: only the skills the candidate does not already have (compared
/// case-insensitively) are inserted.
pub async fn add_list(
    State(state): State<AppState>,
    Extension(session): Extension<AuthSession>,
    Json(input): Json<SkillListInput>,
) -> Result<(StatusCode, Json<Value>)> {
    session.require_role(Role::Candidate)?;

    let mut tx = state.db_pool.begin_txn().await?;
    let existing = SkillSelector::new(&mut tx).name_set(&session.user_id).await?;
    for name in missing_skills(&input.skills, &existing) {
        SkillMutator::new(&mut tx)
            .create(&name, &session.user_id)
            .await?;
    }
    tx.commit().await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Skills added successfully" })),
    ))
}

pub async fn add_one(
    State(state): State<AppState>,
    Extension(session): Extension<AuthSession>,
    Json(input): Json<SkillInput>,
) -> Result<(StatusCode, Json<Value>)> {
    session.require_role(Role::Candidate)?;

    let mut tx = state.db_pool.begin_txn().await?;
    let existing = SkillSelector::new(&mut tx).name_set(&session.user_id).await?;
    if existing.contains(&input.skill.to_lowercase()) {
        return Err(Error::Validation("Skill already exists".into()));
    }

    let skill = SkillMutator::new(&mut tx)
        .create(&input.skill, &session.user_id)
        .await?;
    tx.commit().await?;

    Ok((StatusCode::CREATED, Json(json!({ "skill": skill }))))
}

pub async fn get(
    State(state): State<AppState>,
    Extension(session): Extension<AuthSession>,
) -> Result<Json<Value>> {
    session.require_role(Role::Candidate)?;

    let mut conn = state.db_pool.acquire().await?;
    let skills = SkillSelector::new(&mut conn)
        .get_all_by_user_id(&session.user_id)
        .await?;

    Ok(Json(json!({ "skills": skills })))
}

pub async fn delete(
    State(state): State<AppState>,
    Extension(session): Extension<AuthSession>,
    Query(query): Query<DeleteSkillsQuery>,
) -> Result<Json<Value>> {
    session.require_role(Role::Candidate)?;

    let ids_to_delete = parse_id_list(&query.ids)?;

    let mut tx = state.db_pool.begin_txn().await?;
    let owned: HashSet<i32> = SkillSelector::new(&mut tx)
        .get_all_by_user_id(&session.user_id)
        .await?
        .into_iter()
        .map(|skill| skill.id)
        .collect();

    if !ids_to_delete.iter().all(|id| owned.contains(id)) {
        return Err(Error::Validation("One or more skill ids are invalid.".into()));
    }

    for id in ids_to_delete {
        SkillMutator::new(&mut tx).delete(id).await?;
    }
    tx.commit().await?;

    Ok(Json(json!({ "message": "Skills deleted successfully" })))
}

/// Replace-all: the candidate's skill list becomes exactly the submitted
/// set (deduplicated case-insensitively, first spelling wins).
pub async fn update(
    State(state): State<AppState>,
    Extension(session): Extension<AuthSession>,
    Json(input): Json<SkillListInput>,
) -> Result<(StatusCode, Json<Value>)> {
    session.require_role(Role::Candidate)?;

    let mut tx = state.db_pool.begin_txn().await?;
    SkillMutator::new(&mut tx)
        .delete_all_by_user_id(&session.user_id)
        .await?;
    for name in missing_skills(&input.skills, &HashSet::new()) {
        SkillMutator::new(&mut tx)
            .create(&name, &session.user_id)
            .await?;
    }
    tx.commit().await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Skills updated successfully" })),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_list() -> Result<()> {
        assert_eq!(parse_id_list("1,2,3")?, vec![1, 2, 3]);
        assert_eq!(parse_id_list("4, 4 ,5")?, vec![4, 5]);
        assert!(matches!(parse_id_list("1,x"), Err(Error::Validation(_))));
        assert!(matches!(parse_id_list(""), Err(Error::Validation(_))));
        Ok(())
    }
}
