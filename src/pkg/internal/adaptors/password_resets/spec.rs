use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Validity window for a reset link.
pub const RESET_TOKEN_TTL_MINUTES: i64 = 30;

#[derive(Debug, Clone, FromRow)]
pub struct ResetTokenEntry {
    pub id: i32,
    pub reset_token: String,
    pub email: String,
    pub expires_at: DateTime<Utc>,
}

impl ResetTokenEntry {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at < now
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_expiry_is_strict() {
        let now = Utc::now();
        let entry = ResetTokenEntry {
            id: 1,
            reset_token: "tok".into(),
            email: "a@b.c".into(),
            expires_at: now,
        };
        assert!(!entry.is_expired(now));
        assert!(entry.is_expired(now + Duration::seconds(1)));
    }
}
