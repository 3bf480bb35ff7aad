use sqlx::PgConnection;

use crate::pkg::internal::adaptors::password_resets::spec::ResetTokenEntry;
use crate::prelude::Result;

pub struct ResetTokenSelector<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> ResetTokenSelector<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        ResetTokenSelector { pool }
    }

    pub async fn get_by_token(&mut self, token: &str) -> Result<Option<ResetTokenEntry>> {
        let row = sqlx::query_as::<_, ResetTokenEntry>(
            "SELECT id, reset_token, email, expires_at FROM password_resets WHERE reset_token = $1",
        )
        .bind(token)
        .fetch_optional(&mut *self.pool)
        .await?;

        Ok(row)
    }

    pub async fn get_by_email(&mut self, email: &str) -> Result<Option<ResetTokenEntry>> {
        let row = sqlx::query_as::<_, ResetTokenEntry>(
            "SELECT id, reset_token, email, expires_at FROM password_resets WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&mut *self.pool)
        .await?;

        Ok(row)
    }
}
