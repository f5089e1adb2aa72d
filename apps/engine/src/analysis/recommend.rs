//! Role recommendation — pairs a role-progression lookup with a quantified
//! confidence score and structured "why this role" reasoning.

use serde::{Deserialize, Serialize};

use crate::levels::RoleLevel;
use crate::roles::{Interest, RoleLookup};
use crate::score::ratio;

/// Confidence is clamped into this band: never certain, never hopeless.
const CONFIDENCE_FLOOR: u32 = 40;
const CONFIDENCE_CEILING: u32 = 95;

/// Human-readable confidence bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    Low,
    Medium,
    High,
}

impl ConfidenceLevel {
    fn from_confidence(confidence: u32) -> Self {
        if confidence >= 80 {
            Self::High
        } else if confidence >= 60 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// Structured reasoning behind a recommendation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhyReasoning {
    pub skill_alignment: String,
    pub experience_suitability: String,
    pub industry_demand: String,
    pub gap_feasibility: String,
}

/// A recommended role with confidence and explanation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleRecommendation {
    pub role: String,
    pub tier: RoleLevel,
    pub next_role: Option<String>,
    pub confidence: u32,
    pub confidence_level: ConfidenceLevel,
    pub why: WhyReasoning,
    /// True when the requested interest was unknown and the placeholder
    /// role was substituted.
    pub fallback: bool,
}

/// Builds a recommendation from a resolved role lookup and the user's
/// skills. Deterministic; identical inputs produce identical output.
pub fn recommend(lookup: &RoleLookup<'_>, user_skills: &[String]) -> RoleRecommendation {
    let profile = lookup.profile;
    let user_skills_lower: Vec<String> =
        user_skills.iter().map(|s| s.to_lowercase()).collect();

    let core = &profile.skills.core;
    let matched: Vec<&String> = core
        .iter()
        .filter(|requirement| {
            let req = requirement.to_lowercase();
            user_skills_lower
                .iter()
                .any(|skill| skill.contains(&req) || req.contains(skill.as_str()))
        })
        .collect();
    let match_ratio = ratio(matched.len(), core.len());

    let confidence = confidence_for(profile.tier, core.is_empty(), match_ratio);
    let confidence_level = ConfidenceLevel::from_confidence(confidence);

    let why = WhyReasoning {
        skill_alignment: skill_alignment(matched.len(), core.len(), &profile.role),
        experience_suitability: experience_suitability(profile.tier).to_string(),
        industry_demand: industry_demand(lookup.interest).to_string(),
        gap_feasibility: gap_feasibility(core.len() - matched.len(), core.is_empty()),
    };

    RoleRecommendation {
        role: profile.role.clone(),
        tier: profile.tier,
        next_role: profile.next_role.clone(),
        confidence,
        confidence_level,
        why,
        fallback: lookup.fallback,
    }
}

fn confidence_for(tier: RoleLevel, no_requirements: bool, match_ratio: f64) -> u32 {
    let base: i32 = match tier {
        RoleLevel::Beginner => 60,
        RoleLevel::Junior => 70,
        RoleLevel::Intermediate => 80,
        RoleLevel::Senior => 85,
        RoleLevel::Lead => 90,
    };
    let adjusted = if no_requirements {
        base
    } else if match_ratio > 0.8 {
        base + 10
    } else if match_ratio < 0.3 {
        base - 10
    } else {
        base
    };
    (adjusted.max(0) as u32).clamp(CONFIDENCE_FLOOR, CONFIDENCE_CEILING)
}

fn skill_alignment(matched: usize, total: usize, role: &str) -> String {
    if total == 0 {
        return "Your skills provide a foundation for this role. Specialized training will help."
            .to_string();
    }
    let pct = matched * 100 / total;
    if pct > 70 {
        format!("You have {matched} of {total} core skills ({pct}%). Strong foundation for {role}.")
    } else if pct > 40 {
        format!(
            "You have {matched} of {total} core skills ({pct}%). Solid foundation, but some gaps remain."
        )
    } else {
        format!(
            "You have {matched} of {total} core skills ({pct}%). You'll need to develop foundational skills."
        )
    }
}

fn experience_suitability(tier: RoleLevel) -> &'static str {
    match tier {
        RoleLevel::Beginner => "Perfect entry-level position to start your career in this field.",
        RoleLevel::Junior => {
            "Ideal for consolidating your skills and moving into more independent work."
        }
        RoleLevel::Intermediate => "Natural progression that leverages your growing expertise.",
        RoleLevel::Senior => "Positions you as a senior contributor with leadership potential.",
        RoleLevel::Lead => "Top-tier role for industry veterans and thought leaders.",
    }
}

fn industry_demand(interest: Option<Interest>) -> &'static str {
    match interest {
        Some(Interest::Ml | Interest::Nlp | Interest::Ai | Interest::Mlops) => {
            "AI/ML roles are in extremely high demand. Companies are investing heavily in AI talent."
        }
        Some(Interest::Backend | Interest::Frontend | Interest::Fullstack) => {
            "Software engineering roles are consistently in high demand across all sectors."
        }
        Some(Interest::Data | Interest::DataEngineering) => {
            "Data roles are critical as companies become more data-driven."
        }
        Some(Interest::Design) => {
            "Product and UX design roles are increasingly valued in tech companies."
        }
        Some(Interest::Product) => {
            "Product management is one of the most sought-after roles in tech."
        }
        None => "This role has strong industry demand.",
    }
}

fn gap_feasibility(gap_count: usize, no_requirements: bool) -> String {
    if no_requirements {
        return "Clear learning path with manageable skill gaps.".to_string();
    }
    if gap_count <= 2 {
        format!(
            "You need to master {gap_count} critical skill(s). This is very achievable with focused effort (3-6 months)."
        )
    } else if gap_count <= 4 {
        format!(
            "You need to develop {gap_count} core skills. This is realistic with a 6-12 month learning plan."
        )
    } else {
        format!(
            "You need to develop {gap_count} core skills. This requires a structured 12+ month learning journey."
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roles::RoleCatalog;

    fn catalog() -> RoleCatalog {
        RoleCatalog::builtin().unwrap()
    }

    fn skills(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_full_match_raises_confidence_above_base() {
        let catalog = catalog();
        let lookup = catalog.resolve("backend", RoleLevel::Junior);
        let rec = recommend(
            &lookup,
            &skills(&[
                "Python", "Go", "Java", "Node.js", "Databases", "API Design", "System Design",
            ]),
        );
        assert_eq!(rec.confidence, 80, "junior base 70 + 10 for >80% match");
        assert_eq!(rec.confidence_level, ConfidenceLevel::High);
        assert!(rec.why.skill_alignment.contains("Strong foundation"));
    }

    #[test]
    fn test_no_skills_lowers_confidence_below_base() {
        let catalog = catalog();
        let lookup = catalog.resolve("backend", RoleLevel::Junior);
        let rec = recommend(&lookup, &[]);
        assert_eq!(rec.confidence, 60, "junior base 70 - 10 for <30% match");
        assert_eq!(rec.confidence_level, ConfidenceLevel::Medium);
    }

    #[test]
    fn test_confidence_stays_inside_band() {
        let catalog = catalog();
        let lead = recommend(&catalog.resolve("product", RoleLevel::Lead), &[]);
        assert!(lead.confidence >= CONFIDENCE_FLOOR);
        assert!(lead.confidence <= CONFIDENCE_CEILING);
    }

    #[test]
    fn test_fallback_interest_is_flagged_and_neutral() {
        let catalog = catalog();
        let lookup = catalog.resolve("underwater_basket_weaving", RoleLevel::Junior);
        let rec = recommend(&lookup, &skills(&["Python"]));
        assert!(rec.fallback);
        assert_eq!(rec.role, "Career Assistant");
        assert!(rec.why.skill_alignment.contains("foundation for this role"));
        assert_eq!(
            rec.why.industry_demand,
            "This role has strong industry demand."
        );
    }

    #[test]
    fn test_why_reasoning_tracks_gap_count() {
        let catalog = catalog();
        let lookup = catalog.resolve("backend", RoleLevel::Junior);
        let rec = recommend(&lookup, &skills(&["Python", "Go", "Java", "Node.js", "Databases"]));
        // 2 of 7 core skills missing.
        assert!(rec.why.gap_feasibility.contains("2 critical skill(s)"));
    }

    #[test]
    fn test_recommendation_is_deterministic() {
        let catalog = catalog();
        let lookup = catalog.resolve("data", RoleLevel::Intermediate);
        let user = skills(&["Python", "SQL"]);
        let first = recommend(&lookup, &user);
        let second = recommend(&lookup, &user);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_ai_interests_share_demand_message() {
        let catalog = catalog();
        for interest in ["ml", "nlp", "ai", "mlops"] {
            let rec = recommend(&catalog.resolve(interest, RoleLevel::Junior), &[]);
            assert!(rec.why.industry_demand.contains("AI/ML"));
        }
    }
}
