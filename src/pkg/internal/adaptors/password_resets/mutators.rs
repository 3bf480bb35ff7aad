use chrono::{Duration, Utc};
use rand::{distr::Alphanumeric, Rng};
use sqlx::PgConnection;

use crate::pkg::internal::adaptors::password_resets::selectors::ResetTokenSelector;
use crate::pkg::internal::adaptors::password_resets::spec::{
    ResetTokenEntry, RESET_TOKEN_TTL_MINUTES,
};
use crate::prelude::Result;

pub struct ResetTokenMutator<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> ResetTokenMutator<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        ResetTokenMutator { pool }
    }

    fn generate_token() -> String {
        rand::rng()
            .sample_iter(&Alphanumeric)
            .take(64)
            .map(char::from)
            .collect()
    }

    /// A repeat request while a token exists keeps the token and refreshes
    /// its expiry, so the previously mailed link stays valid.
    pub async fn issue_for_email(&mut self, email: &str) -> Result<ResetTokenEntry> {
        let expires_at = Utc::now() + Duration::minutes(RESET_TOKEN_TTL_MINUTES);

        if let Some(existing) = ResetTokenSelector::new(&mut *self.pool)
            .get_by_email(email)
            .await?
        {
            let row = sqlx::query_as::<_, ResetTokenEntry>(
                r#"
                UPDATE password_resets SET expires_at = $2 WHERE id = $1
                RETURNING id, reset_token, email, expires_at
                "#,
            )
            .bind(existing.id)
            .bind(expires_at)
            .fetch_one(&mut *self.pool)
            .await?;
            return Ok(row);
        }

        let row = sqlx::query_as::<_, ResetTokenEntry>(
            r#"
            INSERT INTO password_resets (reset_token, email, expires_at)
            VALUES ($1, $2, $3)
            RETURNING id, reset_token, email, expires_at
            "#,
        )
        .bind(Self::generate_token())
        .bind(email)
        .bind(expires_at)
        .fetch_one(&mut *self.pool)
        .await?;

        Ok(row)
    }

    /// Consumed tokens are removed so a reset link only works once.
    pub async fn delete(&mut self, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM password_resets WHERE id = $1")
            .bind(id)
            .execute(&mut *self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
