//! Recommendation synthesis — blends the component scores into an overall
//! grade with prioritized improvements, quick wins, and field advice.
//!
//! The blend weights shift by field category and experience level, then get
//! normalized so the overall stays a convex combination of its components
//! no matter which adjustments fire. Synthesis is pure and idempotent: the
//! same component reports always produce the same `ReadinessReport`.

use serde::{Deserialize, Serialize};

use crate::analysis::ats::AtsReport;
use crate::analysis::experience::ExperienceReport;
use crate::analysis::readiness::ReadinessComponents;
use crate::analysis::skills::SkillsReport;
use crate::extraction::ExtractedSkillSet;
use crate::fields::{FieldCategory, FieldConfig, FieldKey};
use crate::levels::ExperienceLevel;
use crate::score::clamp_score;

pub(crate) const ANALYSIS_VERSION: &str = "2.0";

/// Base blend weights before field/level adjustment.
pub(crate) const BLEND_WEIGHTS: [(&str, f64); 5] = [
    ("ats", 0.25),
    ("skills", 0.20),
    ("experience", 0.25),
    ("structure", 0.10),
    ("impact", 0.20),
];

const PRIORITY_IMPROVEMENT_CAP: usize = 5;
const QUICK_WIN_CAP: usize = 3;
const STRENGTH_CAP: usize = 5;
const ADVICE_CAP: usize = 5;

/// Letter grade for an overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    Excellent,
    Strong,
    Good,
    Fair,
    #[serde(rename = "Needs Work")]
    NeedsWork,
}

impl Grade {
    pub fn from_score(score: u32) -> Self {
        match score {
            90.. => Self::Excellent,
            80..=89 => Self::Strong,
            70..=79 => Self::Good,
            60..=69 => Self::Fair,
            _ => Self::NeedsWork,
        }
    }
}

/// Priority attached to an improvement item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Critical,
    High,
    Medium,
}

/// One prioritized improvement with impact and effort context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Improvement {
    pub priority: Priority,
    pub category: String,
    pub issue: String,
    pub impact: String,
    pub effort: String,
}

/// The five component scores that feed the overall blend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ComponentScores {
    pub ats: u32,
    pub skills: u32,
    pub experience: u32,
    pub structure: u32,
    pub impact: u32,
}

/// Strengths, prioritized improvements, and quick wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    pub strengths: Vec<String>,
    pub priority_improvements: Vec<Improvement>,
    pub quick_wins: Vec<String>,
}

/// Provenance of an analysis, including any registry fallbacks and the
/// extraction warnings handed over by the document-extraction step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisMetadata {
    pub field: String,
    pub field_key: FieldKey,
    pub experience_level: ExperienceLevel,
    /// The raw key the caller asked for, when it was unknown and the
    /// default field config was substituted.
    pub fallback_field: Option<String>,
    pub extraction_warnings: Vec<String>,
    pub analysis_version: String,
}

/// The terminal synthesized artifact of one analysis call. Immutable after
/// construction; ownership transfers to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessReport {
    pub overall_score: u32,
    pub grade: Grade,
    pub scores: ComponentScores,
    pub ats: AtsReport,
    pub skills: SkillsReport,
    pub experience: ExperienceReport,
    pub matched_skills: ExtractedSkillSet,
    /// Missing core skills, ranked in field declaration order.
    pub missing_skills: Vec<String>,
    /// Present when the caller supplied a target role.
    pub role_readiness: Option<ReadinessComponents>,
    pub summary: Summary,
    pub field_specific_advice: Vec<String>,
    pub metadata: AnalysisMetadata,
}

/// Blend weights after field/level adjustment, normalized to sum 1.0.
struct BlendWeights {
    ats: f64,
    skills: f64,
    experience: f64,
    structure: f64,
    impact: f64,
}

impl BlendWeights {
    fn adjusted(category: FieldCategory, level: ExperienceLevel) -> Self {
        let mut ats = BLEND_WEIGHTS[0].1;
        let mut skills = BLEND_WEIGHTS[1].1;
        let mut experience = BLEND_WEIGHTS[2].1;
        let mut structure = BLEND_WEIGHTS[3].1;
        let mut impact = BLEND_WEIGHTS[4].1;

        match category {
            FieldCategory::Software | FieldCategory::DataScience => {
                skills = 0.25;
                experience = 0.20;
            }
            FieldCategory::Product | FieldCategory::Marketing => {
                experience = 0.30;
                impact = 0.25;
                skills = 0.15;
            }
            FieldCategory::Design => {
                experience = 0.35;
                ats = 0.15;
            }
        }

        match level {
            ExperienceLevel::Entry => {
                skills += 0.05;
                experience -= 0.05;
            }
            ExperienceLevel::Mid => {}
            ExperienceLevel::Senior => {
                experience += 0.05;
                impact += 0.05;
                skills -= 0.05;
                structure -= 0.05;
            }
        }

        let sum = ats + skills + experience + structure + impact;
        Self {
            ats: ats / sum,
            skills: skills / sum,
            experience: experience / sum,
            structure: structure / sum,
            impact: impact / sum,
        }
    }

    fn overall(&self, scores: &ComponentScores) -> u32 {
        clamp_score(
            scores.ats as f64 * self.ats
                + scores.skills as f64 * self.skills
                + scores.experience as f64 * self.experience
                + scores.structure as f64 * self.structure
                + scores.impact as f64 * self.impact,
        )
    }
}

/// Synthesizes the final report from the component analyses.
#[allow(clippy::too_many_arguments)]
pub fn synthesize(
    ats: AtsReport,
    skills: SkillsReport,
    experience: ExperienceReport,
    matched_skills: ExtractedSkillSet,
    role_readiness: Option<ReadinessComponents>,
    config: &FieldConfig,
    level: ExperienceLevel,
    metadata: AnalysisMetadata,
) -> ReadinessReport {
    let scores = ComponentScores {
        ats: ats.score,
        skills: skills.score,
        experience: experience.score,
        structure: ats.breakdown.sections,
        impact: experience.breakdown.impact,
    };

    let weights = BlendWeights::adjusted(config.category, level);
    let overall_score = weights.overall(&scores);
    let grade = Grade::from_score(overall_score);

    let summary = build_summary(&ats, &skills, &experience);
    let field_specific_advice = field_advice(config, level, &ats, &skills, &experience);
    let missing_skills = skills.missing_core_skills.clone();

    tracing::debug!(overall_score, ?grade, "synthesis complete");

    ReadinessReport {
        overall_score,
        grade,
        scores,
        ats,
        skills,
        experience,
        matched_skills,
        missing_skills,
        role_readiness,
        summary,
        field_specific_advice,
        metadata,
    }
}

/// Improvements are assembled in fixed precedence: ATS blockers first, then
/// the top ATS items, then skills and experience items when those scores
/// are below threshold.
fn build_summary(
    ats: &AtsReport,
    skills: &SkillsReport,
    experience: &ExperienceReport,
) -> Summary {
    let mut strengths = Vec::new();
    strengths.extend(ats.strengths.iter().cloned());
    strengths.extend(skills.strengths.iter().cloned());
    strengths.extend(experience.strengths.iter().cloned());
    strengths.truncate(STRENGTH_CAP);

    let mut improvements = Vec::new();

    for blocker in &ats.blockers {
        improvements.push(Improvement {
            priority: Priority::Critical,
            category: "ATS Compatibility".to_string(),
            issue: blocker.clone(),
            impact: "High - May prevent resume from being read".to_string(),
            effort: "Medium".to_string(),
        });
    }

    for improvement in ats.improvements.iter().take(2) {
        improvements.push(Improvement {
            priority: Priority::High,
            category: "ATS Compatibility".to_string(),
            issue: improvement.clone(),
            impact: "High - Improves parsing and keyword matching".to_string(),
            effort: "Low to Medium".to_string(),
        });
    }

    if skills.score < 70 {
        for improvement in skills.improvements.iter().take(2) {
            improvements.push(Improvement {
                priority: Priority::High,
                category: "Skills".to_string(),
                issue: improvement.clone(),
                impact: "Medium to High - Increases relevance".to_string(),
                effort: "Low".to_string(),
            });
        }
    }

    if experience.score < 70 {
        for improvement in experience.improvements.iter().take(2) {
            improvements.push(Improvement {
                priority: Priority::High,
                category: "Experience".to_string(),
                issue: improvement.clone(),
                impact: "High - Demonstrates value".to_string(),
                effort: "Medium".to_string(),
            });
        }
    }

    improvements.truncate(PRIORITY_IMPROVEMENT_CAP);

    let mut quick_wins = Vec::new();
    if ats.breakdown.contact < 80 {
        for improvement in &ats.improvements {
            let lower = improvement.to_lowercase();
            if lower.contains("linkedin") || lower.contains("github") {
                quick_wins.push(improvement.clone());
            }
        }
    }
    if ats.breakdown.sections < 75 {
        quick_wins.push(
            "Use standard section headers in ALL CAPS (EXPERIENCE, EDUCATION, SKILLS)".to_string(),
        );
    }
    if skills.score < 80 && !skills.missing_core_skills.is_empty() {
        let suggestions: Vec<&str> = skills
            .missing_core_skills
            .iter()
            .take(3)
            .map(String::as_str)
            .collect();
        quick_wins.push(format!(
            "Add these skills if you have them: {}",
            suggestions.join(", ")
        ));
    }
    quick_wins.truncate(QUICK_WIN_CAP);

    Summary {
        strengths,
        priority_improvements: improvements,
        quick_wins,
    }
}

fn field_advice(
    config: &FieldConfig,
    level: ExperienceLevel,
    ats: &AtsReport,
    skills: &SkillsReport,
    experience: &ExperienceReport,
) -> Vec<String> {
    let mut advice = Vec::new();
    let impact = experience.breakdown.impact;
    let github_missing = ats
        .improvements
        .iter()
        .any(|i| i.to_lowercase().contains("github"));
    let portfolio_missing = !ats
        .strengths
        .iter()
        .any(|s| s.to_lowercase().contains("contact"))
        && ats.breakdown.contact < 90;

    match config.category {
        FieldCategory::Software => {
            if github_missing {
                advice.push(
                    "Add GitHub profile - recruiters want to see your code for engineering roles"
                        .to_string(),
                );
            }
            if impact < 70 {
                advice.push(
                    "Quantify technical impact: system scale (requests/sec, users), performance improvements (latency reduction), or reliability metrics (uptime)"
                        .to_string(),
                );
            }
            if skills.score < 70 {
                advice.push(
                    "For engineering roles, show both breadth (multiple languages/frameworks) and depth (years of experience, complex projects)"
                        .to_string(),
                );
            }
        }
        FieldCategory::DataScience => {
            advice.push(
                "Highlight end-to-end ML projects: data collection → model training → deployment → business impact"
                    .to_string(),
            );
            if impact < 70 {
                advice.push(
                    "Quantify model performance (accuracy, AUC, F1) AND business impact (revenue, cost savings, efficiency)"
                        .to_string(),
                );
            }
            advice.push(
                "Include both statistical foundations and modern ML tools - recruiters look for both"
                    .to_string(),
            );
        }
        FieldCategory::Product => {
            if impact < 70 {
                advice.push(
                    "Product roles require clear metrics: user growth (DAU/MAU), engagement, conversion, retention, revenue"
                        .to_string(),
                );
            }
            advice.push(
                "Emphasize cross-functional leadership and stakeholder management - PMs are connectors"
                    .to_string(),
            );
            advice.push(
                "Show data-driven decision making: A/B tests, user research, analytics".to_string(),
            );
        }
        FieldCategory::Design => {
            if portfolio_missing {
                advice.push(
                    "CRITICAL: Add portfolio link - for design roles, portfolio matters more than resume"
                        .to_string(),
                );
            }
            advice.push(
                "Show design process, not just final outputs: research → ideation → iteration → validation"
                    .to_string(),
            );
            advice.push(
                "Highlight user impact: improved task completion, reduced errors, increased satisfaction"
                    .to_string(),
            );
        }
        FieldCategory::Marketing => {
            if impact < 70 {
                advice.push(
                    "Marketing roles require ROI metrics: CAC, LTV, ROAS, conversion rates, revenue growth"
                        .to_string(),
                );
            }
            advice.push(
                "Show multi-channel expertise - modern marketers need to work across digital channels"
                    .to_string(),
            );
            advice.push(
                "Demonstrate data-driven optimization: A/B testing, analytics, attribution"
                    .to_string(),
            );
        }
    }

    match level {
        ExperienceLevel::Entry => advice.push(
            "For entry-level: emphasize projects, internships, and relevant coursework - show potential and learning ability"
                .to_string(),
        ),
        ExperienceLevel::Mid => {}
        ExperienceLevel::Senior => advice.push(
            "For senior roles: emphasize leadership, strategic impact, and mentorship - show you can multiply team effectiveness"
                .to_string(),
        ),
    }

    advice.truncate(ADVICE_CAP);
    advice
}
