use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A recruiter profile row. Doubles as the nested `company` document when
/// jobs are reshaped for the client.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct RecruiterEntry {
    pub id: i32,
    pub company_name: String,
    pub company_size: String,
    pub industry: String,
    pub company_logo_url: String,
    pub user_id: String,
}
