use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SkillEntry {
    pub id: i32,
    pub name: String,
    pub user_id: String,
}

/// Skills the user asked to add that they do not already have. Comparison is
/// case-insensitive; requested order is kept, repeats collapse onto the first
/// occurrence.
pub fn missing_skills(requested: &[String], existing: &HashSet<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    requested
        .iter()
        .filter(|name| {
            let lowered = name.to_lowercase();
            !existing.contains(&lowered) && seen.insert(lowered)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_skills_is_case_insensitive() {
        let existing: HashSet<String> = ["python".to_string(), "sql".to_string()].into();
        let requested = vec!["Python".to_string(), "Rust".to_string(), "SQL".to_string()];
        assert_eq!(missing_skills(&requested, &existing), vec!["Rust"]);
    }

    #[test]
    fn test_missing_skills_collapses_repeats() {
        let existing = HashSet::new();
        let requested = vec!["Go".to_string(), "go".to_string(), "Go".to_string()];
        assert_eq!(missing_skills(&requested, &existing), vec!["Go"]);
    }

    #[test]
    fn test_missing_skills_empty_request() {
        let existing: HashSet<String> = ["python".to_string()].into();
        assert!(missing_skills(&[], &existing).is_empty());
    }
}
