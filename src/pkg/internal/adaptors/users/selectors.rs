use sqlx::PgConnection;

use crate::pkg::internal::adaptors::users::spec::UserEntry;
use crate::pkg::internal::auth::Role;
use crate::prelude::Result;

pub struct UserSelector<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> UserSelector<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        UserSelector { pool }
    }

    pub async fn get_by_id(&mut self, user_id: &str) -> Result<Option<UserEntry>> {
        let row = sqlx::query_as::<_, UserEntry>(
            "SELECT user_id, email, password, role FROM users WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&mut *self.pool)
        .await?;

        Ok(row)
    }

    pub async fn get_by_email(&mut self, email: &str) -> Result<Option<UserEntry>> {
        let row = sqlx::query_as::<_, UserEntry>(
            "SELECT user_id, email, password, role FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&mut *self.pool)
        .await?;

        Ok(row)
    }

    pub async fn get_all(&mut self) -> Result<Vec<UserEntry>> {
        let rows = sqlx::query_as::<_, UserEntry>(
            "SELECT user_id, email, password, role FROM users ORDER BY email",
        )
        .fetch_all(&mut *self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn get_ids_by_role(&mut self, role: Role) -> Result<Vec<String>> {
        let ids = sqlx::query_scalar::<_, String>("SELECT user_id FROM users WHERE role = $1")
            .bind(role)
            .fetch_all(&mut *self.pool)
            .await?;

        Ok(ids)
    }
}
