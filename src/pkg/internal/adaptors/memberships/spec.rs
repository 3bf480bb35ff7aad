use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "membership_type")]
pub enum MembershipType {
    Monthly,
    #[sqlx(rename = "Semi-Annual")]
    #[serde(rename = "Semi-Annual")]
    SemiAnnual,
    Annual,
}

impl MembershipType {
    pub fn duration_days(self) -> i64 {
        match self {
            MembershipType::Monthly => 30,
            MembershipType::SemiAnnual => 180,
            MembershipType::Annual => 365,
        }
    }

    pub fn expiration_from(self, start: NaiveDate) -> NaiveDate {
        start + Duration::days(self.duration_days())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct MembershipEntry {
    pub id: i32,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub membership_type: MembershipType,
    pub price: f64,
    pub start_date: NaiveDate,
    pub expiration_date: NaiveDate,
    pub user_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiration_arithmetic() {
        let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        assert_eq!(
            MembershipType::Monthly.expiration_from(start),
            NaiveDate::from_ymd_opt(2023, 1, 31).unwrap()
        );
        assert_eq!(
            MembershipType::SemiAnnual.expiration_from(start),
            NaiveDate::from_ymd_opt(2023, 6, 30).unwrap()
        );
        assert_eq!(
            MembershipType::Annual.expiration_from(start),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_type_serializes_with_hyphen() {
        let json = serde_json::to_string(&MembershipType::SemiAnnual).unwrap();
        assert_eq!(json, r#""Semi-Annual""#);
    }
}
