//! Role progression model — static (interest × level) → role profile graph.
//!
//! Each interest owns a five-rung ladder of role titles plus one skill
//! requirement record shared across its rungs. The next-role title is
//! computed from the ladder at construction, so it can never disagree with
//! the ladder itself; the top rung has no next role.

mod data;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::EngineError;
use crate::levels::RoleLevel;

/// Canonical key for a supported career interest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interest {
    Backend,
    Frontend,
    Fullstack,
    Ml,
    Nlp,
    Data,
    Ai,
    Mlops,
    DataEngineering,
    Design,
    Product,
}

impl Interest {
    pub const ALL: [Interest; 11] = [
        Self::Backend,
        Self::Frontend,
        Self::Fullstack,
        Self::Ml,
        Self::Nlp,
        Self::Data,
        Self::Ai,
        Self::Mlops,
        Self::DataEngineering,
        Self::Design,
        Self::Product,
    ];

    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "backend" => Some(Self::Backend),
            "frontend" => Some(Self::Frontend),
            "fullstack" | "full-stack" => Some(Self::Fullstack),
            "ml" => Some(Self::Ml),
            "nlp" => Some(Self::Nlp),
            "data" => Some(Self::Data),
            "ai" => Some(Self::Ai),
            "mlops" => Some(Self::Mlops),
            "data_engineering" => Some(Self::DataEngineering),
            "design" => Some(Self::Design),
            "product" => Some(Self::Product),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Backend => "backend",
            Self::Frontend => "frontend",
            Self::Fullstack => "fullstack",
            Self::Ml => "ml",
            Self::Nlp => "nlp",
            Self::Data => "data",
            Self::Ai => "ai",
            Self::Mlops => "mlops",
            Self::DataEngineering => "data_engineering",
            Self::Design => "design",
            Self::Product => "product",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Backend => "Backend Engineering",
            Self::Frontend => "Frontend Engineering",
            Self::Fullstack => "Full-Stack Engineering",
            Self::Ml => "Machine Learning",
            Self::Nlp => "Natural Language Processing",
            Self::Data => "Data Science",
            Self::Ai => "AI Engineering",
            Self::Mlops => "MLOps Engineering",
            Self::DataEngineering => "Data Engineering",
            Self::Design => "Product Design",
            Self::Product => "Product Management",
        }
    }
}

/// Hiring-market demand annotation for a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketDemand {
    Low,
    Medium,
    High,
    VeryHigh,
}

/// Three priority tiers of a role's skill requirements. Core requirements
/// weigh most in readiness matching, then supporting, then optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillRequirements {
    pub core: Vec<String>,
    pub supporting: Vec<String>,
    pub optional: Vec<String>,
}

impl SkillRequirements {
    pub fn is_empty(&self) -> bool {
        self.core.is_empty() && self.supporting.is_empty() && self.optional.is_empty()
    }
}

/// One rung of an interest's ladder, fully resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleProfile {
    pub role: String,
    pub tier: RoleLevel,
    /// Title of the next rung up, `None` at the top of the ladder.
    pub next_role: Option<String>,
    /// Typical months of focused preparation before interviewing.
    pub time_to_ready_months: u32,
    pub market_demand: MarketDemand,
    pub skills: SkillRequirements,
}

/// Raw per-rung data before next-role resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleLadder {
    pub interest: Interest,
    /// (role title, time_to_ready_months, market demand), beginner → lead.
    pub rungs: Vec<(String, u32, MarketDemand)>,
    pub skills: SkillRequirements,
}

/// A resolved role lookup; `fallback` is true when the interest was unknown
/// and the placeholder profile was substituted.
#[derive(Debug)]
pub struct RoleLookup<'a> {
    pub interest: Option<Interest>,
    pub profile: &'a RoleProfile,
    pub fallback: bool,
}

/// Immutable catalog of every (interest, level) role profile.
#[derive(Debug, Clone)]
pub struct RoleCatalog {
    profiles: std::collections::BTreeMap<(Interest, RoleLevel), RoleProfile>,
    placeholder: RoleProfile,
}

impl RoleCatalog {
    /// Builds the catalog from per-interest ladders. Every ladder must have
    /// exactly one rung per level, in ladder order.
    pub fn new(ladders: Vec<RoleLadder>) -> Result<Self, EngineError> {
        let mut profiles = std::collections::BTreeMap::new();
        for ladder in ladders {
            if ladder.rungs.len() != RoleLevel::ORDERED.len() {
                return Err(EngineError::Config(format!(
                    "interest '{}' has {} rungs, expected {}",
                    ladder.interest.as_str(),
                    ladder.rungs.len(),
                    RoleLevel::ORDERED.len()
                )));
            }
            for (idx, level) in RoleLevel::ORDERED.iter().enumerate() {
                let (role, months, demand) = ladder.rungs[idx].clone();
                let next_role = ladder
                    .rungs
                    .get(idx + 1)
                    .map(|(next, _, _)| next.clone());
                let previous = profiles.insert(
                    (ladder.interest, *level),
                    RoleProfile {
                        role,
                        tier: *level,
                        next_role,
                        time_to_ready_months: months,
                        market_demand: demand,
                        skills: ladder.skills.clone(),
                    },
                );
                if previous.is_some() {
                    return Err(EngineError::Config(format!(
                        "duplicate ladder for interest '{}'",
                        ladder.interest.as_str()
                    )));
                }
            }
        }
        Ok(Self {
            profiles,
            placeholder: Self::placeholder_profile(),
        })
    }

    pub fn builtin() -> Result<Self, EngineError> {
        Self::new(data::builtin_ladders())
    }

    pub fn from_json_str(json: &str) -> Result<Self, EngineError> {
        let ladders: Vec<RoleLadder> = serde_json::from_str(json)?;
        Self::new(ladders)
    }

    /// Resolves a raw interest string at a ladder level, substituting the
    /// "Career Assistant" placeholder for unknown interests. The
    /// substitution is flagged, never silent.
    pub fn resolve(&self, raw_interest: &str, level: RoleLevel) -> RoleLookup<'_> {
        match Interest::parse(raw_interest)
            .and_then(|interest| self.profiles.get(&(interest, level)).map(|p| (interest, p)))
        {
            Some((interest, profile)) => RoleLookup {
                interest: Some(interest),
                profile,
                fallback: false,
            },
            None => {
                warn!(
                    requested = raw_interest,
                    level = level.as_str(),
                    "unknown interest, using placeholder role"
                );
                RoleLookup {
                    interest: None,
                    profile: &self.placeholder,
                    fallback: true,
                }
            }
        }
    }

    pub fn get(&self, interest: Interest, level: RoleLevel) -> Option<&RoleProfile> {
        self.profiles.get(&(interest, level))
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    fn placeholder_profile() -> RoleProfile {
        RoleProfile {
            role: "Career Assistant".to_string(),
            tier: RoleLevel::Beginner,
            next_role: None,
            time_to_ready_months: 0,
            market_demand: MarketDemand::Medium,
            skills: SkillRequirements::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_covers_every_interest_and_level() {
        let catalog = RoleCatalog::builtin().unwrap();
        assert_eq!(catalog.len(), Interest::ALL.len() * RoleLevel::ORDERED.len());
        for interest in Interest::ALL {
            for level in RoleLevel::ORDERED {
                assert!(
                    catalog.get(interest, level).is_some(),
                    "missing profile for ({interest:?}, {level:?})"
                );
            }
        }
    }

    #[test]
    fn test_next_role_follows_the_ladder() {
        let catalog = RoleCatalog::builtin().unwrap();
        let junior = catalog.get(Interest::Backend, RoleLevel::Junior).unwrap();
        let intermediate = catalog
            .get(Interest::Backend, RoleLevel::Intermediate)
            .unwrap();
        assert_eq!(junior.next_role.as_deref(), Some(intermediate.role.as_str()));
    }

    #[test]
    fn test_top_rung_has_no_next_role() {
        let catalog = RoleCatalog::builtin().unwrap();
        let lead = catalog.get(Interest::Backend, RoleLevel::Lead).unwrap();
        assert_eq!(lead.next_role, None, "lead is the top of the ladder");
    }

    #[test]
    fn test_every_profile_has_skill_requirements() {
        let catalog = RoleCatalog::builtin().unwrap();
        for interest in Interest::ALL {
            for level in RoleLevel::ORDERED {
                let profile = catalog.get(interest, level).unwrap();
                assert!(
                    !profile.skills.core.is_empty(),
                    "({interest:?}, {level:?}) has no core skill requirements"
                );
            }
        }
    }

    #[test]
    fn test_resolve_unknown_interest_falls_back_to_placeholder() {
        let catalog = RoleCatalog::builtin().unwrap();
        let lookup = catalog.resolve("astronaut", RoleLevel::Junior);
        assert!(lookup.fallback);
        assert_eq!(lookup.profile.role, "Career Assistant");
        assert!(lookup.profile.skills.is_empty());
    }

    #[test]
    fn test_resolve_known_interest() {
        let catalog = RoleCatalog::builtin().unwrap();
        let lookup = catalog.resolve("data", RoleLevel::Intermediate);
        assert!(!lookup.fallback);
        assert_eq!(lookup.interest, Some(Interest::Data));
        assert_eq!(lookup.profile.role, "Data Scientist");
    }

    #[test]
    fn test_interest_parse_accepts_full_stack_spelling() {
        assert_eq!(Interest::parse("full-stack"), Some(Interest::Fullstack));
    }

    #[test]
    fn test_short_ladder_is_rejected() {
        let ladder = RoleLadder {
            interest: Interest::Backend,
            rungs: vec![("Backend Engineer".to_string(), 6, MarketDemand::High)],
            skills: SkillRequirements::default(),
        };
        let err = RoleCatalog::new(vec![ladder]).unwrap_err();
        assert!(err.to_string().contains("rungs"));
    }

    #[test]
    fn test_duplicate_ladder_is_rejected() {
        let make = || RoleLadder {
            interest: Interest::Design,
            rungs: vec![
                ("Junior Product Designer".to_string(), 4, MarketDemand::High),
                ("Product Designer".to_string(), 8, MarketDemand::High),
                ("Senior Product Designer".to_string(), 12, MarketDemand::High),
                ("Lead Designer".to_string(), 18, MarketDemand::Medium),
                ("Design Manager".to_string(), 24, MarketDemand::Low),
            ],
            skills: SkillRequirements {
                core: vec!["Figma".to_string()],
                ..Default::default()
            },
        };
        assert!(RoleCatalog::new(vec![make(), make()]).is_err());
    }
}
