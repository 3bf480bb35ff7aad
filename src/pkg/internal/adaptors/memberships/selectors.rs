use sqlx::PgConnection;

use crate::pkg::internal::adaptors::memberships::spec::MembershipEntry;
use crate::prelude::Result;

pub struct MembershipSelector<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> MembershipSelector<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        MembershipSelector { pool }
    }

    /// Only a membership whose expiration is still ahead of the database
    /// clock counts as subscribed.
    pub async fn get_active_by_user_id(
        &mut self,
        user_id: &str,
    ) -> Result<Option<MembershipEntry>> {
        let row = sqlx::query_as::<_, MembershipEntry>(
            "SELECT id, type, price, start_date, expiration_date, user_id
             FROM memberships WHERE user_id = $1 AND expiration_date > CURRENT_DATE",
        )
        .bind(user_id)
        .fetch_optional(&mut *self.pool)
        .await?;

        Ok(row)
    }
}
