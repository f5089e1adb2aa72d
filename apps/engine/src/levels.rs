//! Canonical experience-level and role-level enums.
//!
//! Two distinct axes exist in the domain and must not be conflated:
//! `ExperienceLevel` calibrates resume analysis (entry / mid / senior), while
//! `RoleLevel` is the ordered rung of the role-progression ladder
//! (beginner < junior < intermediate < senior < lead). Every component takes
//! these enums instead of strings, and all alias handling ("advanced",
//! "expert") lives in the two `parse` functions so components cannot drift.

use serde::{Deserialize, Serialize};

/// Career stage used to calibrate scoring expectations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    /// 0–2 years.
    Entry,
    /// 3–7 years.
    #[default]
    Mid,
    /// 8+ years.
    Senior,
}

impl ExperienceLevel {
    /// Parses a level name, accepting the aliases seen in caller input
    /// ("junior" for entry, "advanced" for senior). Returns `None` for
    /// anything unrecognized — callers decide whether to default.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "entry" | "entry-level" | "junior" => Some(Self::Entry),
            "mid" | "mid-level" | "intermediate" => Some(Self::Mid),
            "senior" | "advanced" => Some(Self::Senior),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Entry => "entry",
            Self::Mid => "mid",
            Self::Senior => "senior",
        }
    }
}

/// A rung on the role-progression ladder. Ordered; `next` walks upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleLevel {
    Beginner,
    Junior,
    Intermediate,
    Senior,
    Lead,
}

impl RoleLevel {
    pub const ORDERED: [RoleLevel; 5] = [
        Self::Beginner,
        Self::Junior,
        Self::Intermediate,
        Self::Senior,
        Self::Lead,
    ];

    /// Parses a ladder rung, folding in the legacy aliases that used to
    /// diverge between components: "advanced" → senior, "expert" → lead.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "beginner" => Some(Self::Beginner),
            "junior" => Some(Self::Junior),
            "intermediate" => Some(Self::Intermediate),
            "senior" | "advanced" => Some(Self::Senior),
            "lead" | "expert" => Some(Self::Lead),
            _ => None,
        }
    }

    /// The next rung up, or `None` at the top of the ladder.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Beginner => Some(Self::Junior),
            Self::Junior => Some(Self::Intermediate),
            Self::Intermediate => Some(Self::Senior),
            Self::Senior => Some(Self::Lead),
            Self::Lead => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Junior => "junior",
            Self::Intermediate => "intermediate",
            Self::Senior => "senior",
            Self::Lead => "lead",
        }
    }

    /// Human-readable label with the years band, for UI selection lists.
    pub fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner (0–1 years)",
            Self::Junior => "Junior (1–2 years)",
            Self::Intermediate => "Intermediate (2–4 years)",
            Self::Senior => "Senior (4–7 years)",
            Self::Lead => "Lead (7+ years)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_experience_level_parses_canonical_names() {
        assert_eq!(ExperienceLevel::parse("entry"), Some(ExperienceLevel::Entry));
        assert_eq!(ExperienceLevel::parse("mid"), Some(ExperienceLevel::Mid));
        assert_eq!(ExperienceLevel::parse("senior"), Some(ExperienceLevel::Senior));
    }

    #[test]
    fn test_experience_level_advanced_alias_maps_to_senior() {
        assert_eq!(
            ExperienceLevel::parse("Advanced"),
            Some(ExperienceLevel::Senior),
            "the 'advanced' alias must resolve to senior everywhere"
        );
    }

    #[test]
    fn test_experience_level_unknown_is_none() {
        assert_eq!(ExperienceLevel::parse("wizard"), None);
    }

    #[test]
    fn test_role_level_ordering_is_the_ladder() {
        assert!(RoleLevel::Beginner < RoleLevel::Junior);
        assert!(RoleLevel::Junior < RoleLevel::Intermediate);
        assert!(RoleLevel::Intermediate < RoleLevel::Senior);
        assert!(RoleLevel::Senior < RoleLevel::Lead);
    }

    #[test]
    fn test_role_level_next_walks_upward() {
        assert_eq!(RoleLevel::Beginner.next(), Some(RoleLevel::Junior));
        assert_eq!(RoleLevel::Senior.next(), Some(RoleLevel::Lead));
    }

    #[test]
    fn test_role_level_lead_has_no_next() {
        assert_eq!(RoleLevel::Lead.next(), None, "lead is the top of the ladder");
    }

    #[test]
    fn test_role_level_expert_alias_maps_to_lead() {
        assert_eq!(RoleLevel::parse("expert"), Some(RoleLevel::Lead));
        assert_eq!(RoleLevel::parse("advanced"), Some(RoleLevel::Senior));
    }

    #[test]
    fn test_role_level_serde_is_snake_case() {
        let json = serde_json::to_string(&RoleLevel::Intermediate).unwrap();
        assert_eq!(json, r#""intermediate""#);
    }
}
