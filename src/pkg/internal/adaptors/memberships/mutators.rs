use chrono::Utc;
use sqlx::PgConnection;

use crate::pkg::internal::adaptors::memberships::spec::{MembershipEntry, MembershipType};
use crate::prelude::Result;

pub struct MembershipMutator<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> MembershipMutator<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        MembershipMutator { pool }
    }

    pub async fn create(
        &mut self,
        membership_type: MembershipType,
        price: f64,
        user_id: &str,
    ) -> Result<MembershipEntry> {
        let start = Utc::now().date_naive();
        let expiration = membership_type.expiration_from(start);
        let row = sqlx::query_as::<_, MembershipEntry>(
            r#"
            INSERT INTO memberships (type, price, start_date, expiration_date, user_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, type, price, start_date, expiration_date, user_id
            "#,
        )
        .bind(membership_type)
        .bind(price)
        .bind(start)
        .bind(expiration)
        .bind(user_id)
        .fetch_one(&mut *self.pool)
        .await?;

        Ok(row)
    }

    /// Plan change. The expiry extends from today by the *stored* plan's
    /// duration; the new type only affects the renewal after that.
    pub async fn update(
        &mut self,
        user_id: &str,
        membership_type: MembershipType,
        price: f64,
    ) -> Result<Option<MembershipEntry>> {
        let current = sqlx::query_as::<_, MembershipEntry>(
            "SELECT id, type, price, start_date, expiration_date, user_id
             FROM memberships WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&mut *self.pool)
        .await?;

        let Some(current) = current else {
            return Ok(None);
        };

        let expiration = current
            .membership_type
            .expiration_from(Utc::now().date_naive());

        let row = sqlx::query_as::<_, MembershipEntry>(
            r#"
            UPDATE memberships SET type = $2, price = $3, expiration_date = $4
            WHERE user_id = $1
            RETURNING id, type, price, start_date, expiration_date, user_id
            "#,
        )
        .bind(user_id)
        .bind(membership_type)
        .bind(price)
        .bind(expiration)
        .fetch_optional(&mut *self.pool)
        .await?;

        Ok(row)
    }

    pub async fn delete_by_user_id(&mut self, user_id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM memberships WHERE user_id = $1")
            .bind(user_id)
            .execute(&mut *self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
