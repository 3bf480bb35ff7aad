use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::pkg::internal::auth::Role;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct UserEntry {
    pub user_id: String,
    pub email: String,
    // the argon2 hash; never serialized back to clients
    #[serde(skip_serializing)]
    pub password: String,
    pub role: Role,
}
