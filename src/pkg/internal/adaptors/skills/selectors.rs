use std::collections::HashSet;

use sqlx::PgConnection;

use crate::pkg::internal::adaptors::skills::spec::SkillEntry;
use crate::prelude::Result;

pub struct SkillSelector<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> SkillSelector<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        SkillSelector { pool }
    }

    pub async fn get_all_by_user_id(&mut self, user_id: &str) -> Result<Vec<SkillEntry>> {
        let rows = sqlx::query_as::<_, SkillEntry>(
            "SELECT id, name, user_id FROM skills WHERE user_id = $1 ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(&mut *self.pool)
        .await?;

        Ok(rows)
    }

    /// Lowercased skill names of one user, for set-difference checks.
    pub async fn name_set(&mut self, user_id: &str) -> Result<HashSet<String>> {
        let names =
            sqlx::query_scalar::<_, String>("SELECT name FROM skills WHERE user_id = $1")
                .bind(user_id)
                .fetch_all(&mut *self.pool)
                .await?;

        Ok(names.into_iter().map(|name| name.to_lowercase()).collect())
    }

    /// Distinct user ids whose skill names substring-match any of the queried
    /// names (logical OR, case-insensitive).
    pub async fn candidate_ids_by_skill_names(&mut self, names: &[String]) -> Result<Vec<String>> {
        if names.is_empty() {
            return Ok(Vec::new());
        }
        let patterns: Vec<String> = names.iter().map(|name| format!("%{}%", name)).collect();
        let ids = sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT user_id FROM skills WHERE name ILIKE ANY($1)",
        )
        .bind(&patterns)
        .fetch_all(&mut *self.pool)
        .await?;

        Ok(ids)
    }
}
