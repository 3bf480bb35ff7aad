use sqlx::PgConnection;

use crate::pkg::internal::adaptors::skills::spec::SkillEntry;
use crate::prelude::Result;

pub struct SkillMutator<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> SkillMutator<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        SkillMutator { pool }
    }

    pub async fn create(&mut self, name: &str, user_id: &str) -> Result<SkillEntry> {
        let row = sqlx::query_as::<_, SkillEntry>(
            r#"
            INSERT INTO skills (name, user_id)
            VALUES ($1, $2)
            RETURNING id, name, user_id
            "#,
        )
        .bind(name)
        .bind(user_id)
        .fetch_one(&mut *self.pool)
        .await?;

        Ok(row)
    }

    pub async fn delete(&mut self, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM skills WHERE id = $1")
            .bind(id)
            .execute(&mut *self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete_all_by_user_id(&mut self, user_id: &str) -> Result<u64> {
        let result = sqlx::query("DELETE FROM skills WHERE user_id = $1")
            .bind(user_id)
            .execute(&mut *self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
