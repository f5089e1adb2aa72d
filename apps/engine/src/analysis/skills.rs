//! Skills & experience depth analysis — field-keyword coverage, proficiency
//! depth, supporting coverage, and recency.
//!
//! Coverage expectations shift with career stage: the same raw coverage
//! signals more at entry level and less at senior level, so entry results
//! get a leniency multiplier and senior results a stricter one.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::extraction::ExtractedSkillSet;
use crate::fields::FieldConfig;
use crate::levels::ExperienceLevel;
use crate::score::{clamp_score, ratio};

/// Weighted blend of the four depth sub-scores.
pub(crate) const SKILLS_WEIGHTS: [(&str, f64); 4] = [
    ("core_coverage", 0.40),
    ("depth", 0.30),
    ("supporting", 0.20),
    ("recency", 0.10),
];

const ENTRY_LENIENCY: f64 = 1.3;
const SENIOR_STRICTNESS: f64 = 0.9;

/// Missing core skills reported to the synthesizer, at most this many.
const MISSING_CORE_CAP: usize = 5;
/// Creation-verb evidence is checked for at most this many found skills.
const PROJECT_EVIDENCE_CAP: usize = 10;
/// Score used when recency cannot be determined from the text.
const NEUTRAL_RECENCY: u32 = 50;

static YEARS_MENTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{1,2})\s*\+?\s*years?").unwrap());
static MONTHS_MENTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d{1,2})\s*months?").unwrap());
static CALENDAR_YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(20\d{2})\b").unwrap());
static CERTIFICATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)certified|certification|certificate").unwrap());

const EXPERT_MARKERS: &[&str] = &["expert", "advanced", "proficient", "mastery", "specialized"];
const STRONG_MARKERS: &[&str] = &["strong", "extensive", "solid", "deep knowledge"];
const EXPERIENCED_MARKERS: &[&str] = &["experienced", "familiar", "working knowledge", "hands-on"];
const CREATION_VERBS: &[&str] = &["built", "developed", "designed", "implemented", "architected"];

/// Named depth sub-scores, each in [0, 100].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SkillsBreakdown {
    pub core_coverage: u32,
    pub depth: u32,
    pub supporting: u32,
    pub recency: u32,
}

/// Full skills-depth report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillsReport {
    pub score: u32,
    pub breakdown: SkillsBreakdown,
    pub core_skills_found: Vec<String>,
    /// Unmet core keywords in declaration order, capped.
    pub missing_core_skills: Vec<String>,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
}

/// Field- and level-aware skills depth analyzer.
pub struct SkillsAnalyzer<'a> {
    config: &'a FieldConfig,
    level: ExperienceLevel,
}

impl<'a> SkillsAnalyzer<'a> {
    pub fn new(config: &'a FieldConfig, level: ExperienceLevel) -> Self {
        Self { config, level }
    }

    /// `current_year` is derived at the call boundary (not hardcoded) so a
    /// given (text, as-of date) pair always scores identically.
    pub fn analyze(
        &self,
        text: &str,
        extracted: &ExtractedSkillSet,
        current_year: i32,
    ) -> SkillsReport {
        let text_lower = text.to_lowercase();
        let extracted_lower: Vec<String> = extracted
            .names()
            .iter()
            .map(|n| n.to_lowercase())
            .collect();

        let (core_coverage, core_found) = self.core_coverage(&text_lower, &extracted_lower);
        let depth = self.depth(&text_lower, &core_found);
        let supporting = self.supporting(&text_lower, &extracted_lower);
        let recency = self.recency(text, &core_found, current_year);

        let breakdown = SkillsBreakdown {
            core_coverage,
            depth,
            supporting,
            recency,
        };
        let score = clamp_score(
            core_coverage as f64 * SKILLS_WEIGHTS[0].1
                + depth as f64 * SKILLS_WEIGHTS[1].1
                + supporting as f64 * SKILLS_WEIGHTS[2].1
                + recency as f64 * SKILLS_WEIGHTS[3].1,
        );

        let missing_core_skills = self.missing_core(&core_found);
        let strengths = self.identify_strengths(core_coverage, depth, &core_found);
        let improvements =
            self.generate_improvements(core_coverage, depth, supporting, &missing_core_skills);

        tracing::debug!(
            score,
            core_coverage,
            depth,
            supporting,
            recency,
            "skills depth analysis complete"
        );

        SkillsReport {
            score,
            breakdown,
            core_skills_found: core_found,
            missing_core_skills,
            strengths,
            improvements,
        }
    }

    /// Coverage of the field's core keywords, found either in the raw text
    /// or among the extracted skills, with the level multiplier applied.
    fn core_coverage(
        &self,
        text_lower: &str,
        extracted_lower: &[String],
    ) -> (u32, Vec<String>) {
        let mut found = Vec::new();
        for keyword in &self.config.core_keywords {
            let in_text = text_lower.contains(keyword.as_str());
            let in_extracted = extracted_lower.iter().any(|s| s == keyword);
            if in_text || in_extracted {
                found.push(keyword.clone());
            }
        }

        let mut coverage = ratio(found.len(), self.config.core_keywords.len()) * 100.0;
        coverage = match self.level {
            ExperienceLevel::Entry => (coverage * ENTRY_LENIENCY).min(100.0),
            ExperienceLevel::Mid => coverage,
            ExperienceLevel::Senior => coverage * SENIOR_STRICTNESS,
        };

        (clamp_score(coverage), found)
    }

    /// Additive depth evidence: proficiency language, explicit durations,
    /// creation verbs co-occurring with found skills, certifications.
    fn depth(&self, text_lower: &str, core_found: &[String]) -> u32 {
        if core_found.is_empty() {
            return 0;
        }

        let mut points: u32 = 0;

        for marker in EXPERT_MARKERS {
            if text_lower.contains(marker) {
                points += 15;
            }
        }
        for marker in STRONG_MARKERS {
            if text_lower.contains(marker) {
                points += 10;
            }
        }
        for marker in EXPERIENCED_MARKERS {
            if text_lower.contains(marker) {
                points += 5;
            }
        }

        for caps in YEARS_MENTION.captures_iter(text_lower) {
            if let Ok(years) = caps[1].parse::<f64>() {
                points += duration_points(years);
            }
        }
        for caps in MONTHS_MENTION.captures_iter(text_lower) {
            if let Ok(months) = caps[1].parse::<f64>() {
                points += duration_points(months / 12.0);
            }
        }

        // Skill named in the same line as a creation verb reads as project
        // evidence, not a bare list entry.
        for skill in core_found.iter().take(PROJECT_EVIDENCE_CAP) {
            let evidenced = text_lower.lines().any(|line| {
                line.contains(skill.as_str())
                    && CREATION_VERBS.iter().any(|verb| line.contains(verb))
            });
            if evidenced {
                points += 3;
            }
        }

        if CERTIFICATION.is_match(text_lower) {
            points += 10;
        }

        points.min(100)
    }

    fn supporting(&self, text_lower: &str, extracted_lower: &[String]) -> u32 {
        let found = self
            .config
            .supporting_keywords
            .iter()
            .filter(|keyword| {
                text_lower.contains(keyword.as_str())
                    || extracted_lower.iter().any(|s| s == *keyword)
            })
            .count();
        clamp_score(ratio(found, self.config.supporting_keywords.len()) * 100.0)
    }

    /// Buckets years-since-most-recent-year into a fixed decreasing ladder.
    fn recency(&self, text: &str, core_found: &[String], current_year: i32) -> u32 {
        if core_found.is_empty() {
            return NEUTRAL_RECENCY;
        }
        let most_recent = CALENDAR_YEAR
            .captures_iter(text)
            .filter_map(|c| c[1].parse::<i32>().ok())
            .filter(|year| *year <= current_year + 1)
            .max();
        let Some(most_recent) = most_recent else {
            return NEUTRAL_RECENCY;
        };

        match current_year.saturating_sub(most_recent) {
            i32::MIN..=1 => 100,
            2 => 90,
            3..=4 => 75,
            5..=6 => 50,
            _ => 25,
        }
    }

    fn missing_core(&self, core_found: &[String]) -> Vec<String> {
        self.config
            .core_keywords
            .iter()
            .filter(|keyword| !core_found.contains(keyword))
            .take(MISSING_CORE_CAP)
            .cloned()
            .collect()
    }

    fn identify_strengths(
        &self,
        core_coverage: u32,
        depth: u32,
        core_found: &[String],
    ) -> Vec<String> {
        let mut strengths = Vec::new();

        if core_coverage >= 70 {
            strengths.push(format!(
                "Strong coverage of {} core skills ({} skills)",
                self.config.name,
                core_found.len()
            ));
        }
        if depth >= 70 {
            strengths.push("Clear evidence of skill proficiency and depth".to_string());
        }
        if core_found.len() >= 15 {
            strengths.push("Diverse technical skill set".to_string());
        }

        strengths
    }

    fn generate_improvements(
        &self,
        core_coverage: u32,
        depth: u32,
        supporting: u32,
        missing_core: &[String],
    ) -> Vec<String> {
        let mut improvements = Vec::new();

        if core_coverage < 60 {
            if !missing_core.is_empty() {
                let suggestions: Vec<&str> =
                    missing_core.iter().take(3).map(String::as_str).collect();
                improvements.push(format!(
                    "Add these high-value skills if you have them: {}",
                    suggestions.join(", ")
                ));
            }
            improvements.push(format!(
                "Increase coverage of {} core skills",
                self.config.name
            ));
        }

        if depth < 50 {
            improvements.push(
                "Show skill depth - add years of experience, proficiency levels, or certifications"
                    .to_string(),
            );
            improvements.push(
                "Demonstrate skills through project descriptions, not just listing them".to_string(),
            );
        }

        if supporting < 40 {
            improvements
                .push("Add complementary skills that strengthen your core expertise".to_string());
        }

        improvements
    }
}

fn duration_points(years: f64) -> u32 {
    if years >= 5.0 {
        15
    } else if years >= 3.0 {
        10
    } else if years >= 1.0 {
        5
    } else {
        0
    }
}
