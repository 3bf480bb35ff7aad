use axum::{extract::State, Json};
use serde_json::{json, Value};
use sqlx::query;

use crate::{pkg::server::state::AppState, prelude::Result};

pub async fn livez() -> Result<Json<Value>> {
    Ok(Json(json!({ "status": "alive" })))
}

/// Liveness plus a database round trip.
pub async fn healthz(State(state): State<AppState>) -> Result<Json<Value>> {
    query("SELECT 1").execute(&*state.db_pool).await?;
    Ok(Json(json!({ "status": "healthy" })))
}
