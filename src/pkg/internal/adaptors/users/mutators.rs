use sqlx::PgConnection;
use uuid::Uuid;

use crate::pkg::internal::adaptors::users::spec::UserEntry;
use crate::pkg::internal::auth::Role;
use crate::prelude::Result;

pub struct UserMutator<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> UserMutator<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        UserMutator { pool }
    }

    pub async fn create(&mut self, email: &str, password: &str, role: Role) -> Result<UserEntry> {
        let row = sqlx::query_as::<_, UserEntry>(
            r#"
            INSERT INTO users (user_id, email, password, role)
            VALUES ($1, $2, $3, $4)
            RETURNING user_id, email, password, role
            "#,
        )
        .bind(Uuid::new_v4().to_string())
        .bind(email)
        .bind(password)
        .bind(role)
        .fetch_one(&mut *self.pool)
        .await?;

        Ok(row)
    }

    pub async fn update_email(&mut self, user_id: &str, email: &str) -> Result<()> {
        sqlx::query("UPDATE users SET email = $2 WHERE user_id = $1")
            .bind(user_id)
            .bind(email)
            .execute(&mut *self.pool)
            .await?;
        Ok(())
    }

    pub async fn update_password(&mut self, user_id: &str, password: &str) -> Result<()> {
        sqlx::query("UPDATE users SET password = $2 WHERE user_id = $1")
            .bind(user_id)
            .bind(password)
            .execute(&mut *self.pool)
            .await?;
        Ok(())
    }

    pub async fn update_password_by_email(&mut self, email: &str, password: &str) -> Result<()> {
        sqlx::query("UPDATE users SET password = $2 WHERE email = $1")
            .bind(email)
            .bind(password)
            .execute(&mut *self.pool)
            .await?;
        Ok(())
    }

    /// Cascades through every owned row (profiles, jobs, applications, ...).
    pub async fn delete(&mut self, user_id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM users WHERE user_id = $1")
            .bind(user_id)
            .execute(&mut *self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
