use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{
    pkg::{
        internal::{
            adaptors::{
                candidates::selectors::CandidateSelector, jobs::selectors::JobSelector,
                skills::selectors::SkillSelector,
            },
            auth::{AuthSession, Role},
            reshape::{reshape, JobListing},
        },
        server::state::AppState,
    },
    prelude::*,
};

#[derive(Deserialize)]
pub struct TitleLocationQuery {
    pub title: Option<String>,
    pub location: Option<String>,
}

#[derive(Deserialize)]
pub struct SkillsQuery {
    pub skills: String,
}

/// Public job search. Empty filters behave as absent ones; with neither set
/// every non-expired job comes back.
pub async fn title_and_location(
    State(state): State<AppState>,
    Query(query): Query<TitleLocationQuery>,
) -> Result<Json<JobListing>> {
    let title = query.title.as_deref().filter(|title| !title.is_empty());
    let location = query
        .location
        .as_deref()
        .filter(|location| !location.is_empty());

    let mut conn = state.db_pool.acquire().await?;
    let rows = JobSelector::new(&mut conn)
        .get_job_company_by_title_location(title, location)
        .await?;

    Ok(Json(reshape(rows)))
}

/// Recruiter-only candidate search: comma-separated skill name fragments,
/// OR-ed together; each distinct matching candidate comes back as a full
/// profile dossier.
pub async fn skills(
    State(state): State<AppState>,
    Extension(session): Extension<AuthSession>,
    Query(query): Query<SkillsQuery>,
) -> Result<Json<Value>> {
    session.require_role(Role::Recruiter)?;

    let names: Vec<String> = query
        .skills
        .split(',')
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .collect();

    let mut conn = state.db_pool.acquire().await?;
    let candidate_ids = SkillSelector::new(&mut conn)
        .candidate_ids_by_skill_names(&names)
        .await?;

    let mut candidates = Vec::with_capacity(candidate_ids.len());
    for user_id in candidate_ids {
        let profile = CandidateSelector::new(&mut conn).profile(&user_id).await?;
        candidates.push(profile);
    }

    Ok(Json(json!({ "candidates": candidates })))
}
