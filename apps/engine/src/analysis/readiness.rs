//! Role readiness and gap calculation — how close a skill set is to a
//! target role's requirements, with explainable strengths, gaps, and next
//! actions.
//!
//! Total for any input: an empty skill set yields all gaps at the minimum
//! readiness, and a role with no configured requirement groups floors at
//! the base credit.

use serde::{Deserialize, Serialize};

use crate::roles::RoleProfile;
use crate::score::clamp_score;

/// Weighted blend of per-group match ratios (plus the base credit).
pub(crate) const READINESS_WEIGHTS: [(&str, f64); 3] = [
    ("core", 0.40),
    ("supporting", 0.35),
    ("optional", 0.20),
];

/// Everyone starts with a little credit for showing up with a target role.
const BASE_CREDIT: f64 = 5.0;

const CORE_GAP_CAP: usize = 3;
const SUPPORTING_GAP_CAP: usize = 3;
const OPTIONAL_GAP_CAP: usize = 2;

/// Plain-language status labels per requirement group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessStatus {
    pub core_skills: String,
    pub supporting_depth: String,
    pub optional_tooling: String,
}

/// Output of the readiness calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessComponents {
    pub readiness_score: u32,
    pub core_match_pct: u32,
    pub supporting_match_pct: u32,
    pub optional_match_pct: u32,
    pub strengths: Vec<String>,
    pub gaps: Vec<String>,
    pub next_actions: Vec<String>,
    pub status: ReadinessStatus,
}

struct GroupMatch {
    ratio: f64,
    missing: Vec<String>,
}

/// A requirement is met when it and a user skill contain each other in
/// either direction, case-insensitively ("Postgres" covers "PostgreSQL
/// tuning" and vice versa).
fn matches_requirement(requirement: &str, user_skills_lower: &[String]) -> bool {
    let req = requirement.to_lowercase();
    user_skills_lower
        .iter()
        .any(|skill| skill.contains(&req) || req.contains(skill.as_str()))
}

fn match_group(requirements: &[String], user_skills_lower: &[String]) -> GroupMatch {
    if requirements.is_empty() {
        return GroupMatch {
            ratio: 0.0,
            missing: Vec::new(),
        };
    }
    let mut matched = 0usize;
    let mut missing = Vec::new();
    for requirement in requirements {
        if matches_requirement(requirement, user_skills_lower) {
            matched += 1;
        } else {
            missing.push(requirement.clone());
        }
    }
    GroupMatch {
        ratio: matched as f64 / requirements.len() as f64,
        missing,
    }
}

/// Calculates readiness for `profile` given the user's skills.
pub fn calculate(profile: &RoleProfile, user_skills: &[String]) -> ReadinessComponents {
    let user_skills_lower: Vec<String> =
        user_skills.iter().map(|s| s.to_lowercase()).collect();

    let core = match_group(&profile.skills.core, &user_skills_lower);
    let supporting = match_group(&profile.skills.supporting, &user_skills_lower);
    let optional = match_group(&profile.skills.optional, &user_skills_lower);

    let readiness_score = clamp_score(
        core.ratio * READINESS_WEIGHTS[0].1 * 100.0
            + supporting.ratio * READINESS_WEIGHTS[1].1 * 100.0
            + optional.ratio * READINESS_WEIGHTS[2].1 * 100.0
            + BASE_CREDIT,
    );

    let mut strengths = Vec::new();
    if core.ratio >= 0.7 {
        strengths.push("Strong core skills foundation".to_string());
    }
    if supporting.ratio >= 0.6 {
        strengths.push("Good supporting technical knowledge".to_string());
    }
    if optional.ratio >= 0.5 {
        strengths.push("Familiar with key tools".to_string());
    }
    if !user_skills.is_empty() {
        strengths.push(format!("{} skills identified", user_skills.len()));
    }

    let mut gaps = Vec::new();
    if !core.missing.is_empty() {
        gaps.push(format!(
            "Missing core: {}",
            join_capped(&core.missing, CORE_GAP_CAP)
        ));
    }
    if !supporting.missing.is_empty() {
        gaps.push(format!(
            "Need to learn: {}",
            join_capped(&supporting.missing, SUPPORTING_GAP_CAP)
        ));
    }
    if !optional.missing.is_empty() {
        gaps.push(format!(
            "Tool experience: {}",
            join_capped(&optional.missing, OPTIONAL_GAP_CAP)
        ));
    }

    let mut next_actions: Vec<String> = if readiness_score < 40 {
        vec![
            "Start with foundational courses".to_string(),
            "Build beginner projects".to_string(),
            "Join community groups".to_string(),
        ]
    } else if readiness_score < 70 {
        vec![
            "Deepen technical knowledge".to_string(),
            "Build intermediate projects".to_string(),
            "Get relevant certifications".to_string(),
        ]
    } else {
        vec![
            "Specialize in niche areas".to_string(),
            "Build advanced projects".to_string(),
            "Contribute to open source".to_string(),
        ]
    };
    next_actions.push("Update resume with proof of skills".to_string());

    let status = ReadinessStatus {
        core_skills: tier_label(core.ratio, "Mastered", "Learning", "Start here"),
        supporting_depth: tier_label(supporting.ratio, "Advanced", "Intermediate", "Beginner"),
        optional_tooling: tier_label(optional.ratio, "Expert", "Proficient", "Novice"),
    };

    tracing::debug!(
        readiness_score,
        role = profile.role.as_str(),
        "readiness calculation complete"
    );

    ReadinessComponents {
        readiness_score,
        core_match_pct: clamp_score(core.ratio * 100.0),
        supporting_match_pct: clamp_score(supporting.ratio * 100.0),
        optional_match_pct: clamp_score(optional.ratio * 100.0),
        strengths,
        gaps,
        next_actions,
        status,
    }
}

fn join_capped(items: &[String], cap: usize) -> String {
    items
        .iter()
        .take(cap)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

fn tier_label(ratio: f64, high: &str, mid: &str, low: &str) -> String {
    if ratio >= 0.8 {
        high.to_string()
    } else if ratio >= 0.4 {
        mid.to_string()
    } else {
        low.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::levels::RoleLevel;
    use crate::roles::{MarketDemand, SkillRequirements};

    fn profile(core: &[&str], supporting: &[&str], optional: &[&str]) -> RoleProfile {
        RoleProfile {
            role: "Backend Engineer".to_string(),
            tier: RoleLevel::Junior,
            next_role: Some("Senior Backend Engineer".to_string()),
            time_to_ready_months: 6,
            market_demand: MarketDemand::VeryHigh,
            skills: SkillRequirements {
                core: core.iter().map(|s| s.to_string()).collect(),
                supporting: supporting.iter().map(|s| s.to_string()).collect(),
                optional: optional.iter().map(|s| s.to_string()).collect(),
            },
        }
    }

    fn skills(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_skill_set_is_all_gaps_at_minimum_readiness() {
        let profile = profile(&["Python", "Go"], &["Docker"], &["Kubernetes"]);
        let result = calculate(&profile, &[]);
        assert_eq!(result.readiness_score, 5, "base credit only");
        assert_eq!(result.gaps.len(), 3);
        assert!(result.gaps[0].starts_with("Missing core: Python, Go"));
        assert_eq!(result.status.core_skills, "Start here");
    }

    #[test]
    fn test_role_with_no_requirements_floors_at_base_credit() {
        let profile = profile(&[], &[], &[]);
        let result = calculate(&profile, &skills(&["Python"]));
        assert_eq!(result.readiness_score, 5);
        assert!(result.gaps.is_empty());
    }

    #[test]
    fn test_full_match_hits_the_weighted_ceiling() {
        let profile = profile(&["Python"], &["Docker"], &["Kubernetes"]);
        let result = calculate(&profile, &skills(&["Python", "Docker", "Kubernetes"]));
        // 40 + 35 + 20 + 5 base
        assert_eq!(result.readiness_score, 100);
        assert_eq!(result.core_match_pct, 100);
        assert_eq!(result.status.core_skills, "Mastered");
    }

    #[test]
    fn test_matching_is_bidirectional_substring() {
        let profile = profile(&["API Design"], &[], &[]);
        let broader = calculate(&profile, &skills(&["rest api design and versioning"]));
        assert!(
            broader.readiness_score > 5,
            "requirement contained in a broader user skill should match"
        );
        let narrower = calculate(&profile, &skills(&["api"]));
        assert!(
            narrower.readiness_score > 5,
            "user skill contained in the requirement should match"
        );
    }

    #[test]
    fn test_adding_a_matching_skill_never_decreases_score() {
        let profile = profile(&["Python", "Go", "SQL"], &["Docker"], &["Kubernetes"]);
        let mut acquired: Vec<String> = Vec::new();
        let mut last = calculate(&profile, &acquired).readiness_score;
        for skill in ["Python", "Go", "SQL", "Docker", "Kubernetes"] {
            acquired.push(skill.to_string());
            let score = calculate(&profile, &acquired).readiness_score;
            assert!(
                score >= last,
                "adding {skill} dropped readiness from {last} to {score}"
            );
            last = score;
        }
        assert_eq!(last, 100);
    }

    #[test]
    fn test_gap_lists_are_capped() {
        let profile = profile(
            &["A", "B", "C", "D", "E"],
            &["F", "G", "H", "I"],
            &["J", "K", "L"],
        );
        let result = calculate(&profile, &[]);
        assert_eq!(result.gaps[0], "Missing core: A, B, C");
        assert_eq!(result.gaps[1], "Need to learn: F, G, H");
        assert_eq!(result.gaps[2], "Tool experience: J, K");
    }

    #[test]
    fn test_next_actions_track_score_bracket() {
        let profile = profile(&["Python", "Go"], &["Docker"], &[]);

        let low = calculate(&profile, &[]);
        assert!(low.next_actions.contains(&"Start with foundational courses".to_string()));

        let mid = calculate(&profile, &skills(&["Python", "Docker"]));
        assert!(mid.next_actions.contains(&"Deepen technical knowledge".to_string()));

        let high = calculate(&profile, &skills(&["Python", "Go", "Docker"]));
        assert!(high.next_actions.contains(&"Specialize in niche areas".to_string()));
    }

    #[test]
    fn test_resume_update_action_is_always_appended() {
        let profile = profile(&["Python"], &[], &[]);
        for user in [vec![], skills(&["Python"])] {
            let result = calculate(&profile, &user);
            assert_eq!(
                result.next_actions.last().map(String::as_str),
                Some("Update resume with proof of skills")
            );
        }
    }

    #[test]
    fn test_strength_thresholds() {
        let profile = profile(&["Python", "Go", "SQL"], &["Docker", "CI/CD"], &["K8s"]);
        let result = calculate(
            &profile,
            &skills(&["Python", "Go", "SQL", "Docker", "CI/CD", "K8s"]),
        );
        assert!(result.strengths.contains(&"Strong core skills foundation".to_string()));
        assert!(result.strengths.contains(&"Familiar with key tools".to_string()));
        assert!(result.strengths.contains(&"6 skills identified".to_string()));
    }
}
