//! Work-experience quality analysis — role alignment, demonstrated impact,
//! career progression, and recency of experience.
//!
//! The impact sub-score doubles as the synthesizer's standalone "impact"
//! component, so its rubric (metric patterns, strong verbs, weak-verb
//! penalty) carries weight beyond this module's own blend.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::fields::{FieldCategory, FieldConfig};
use crate::levels::ExperienceLevel;
use crate::score::{clamp_points, clamp_score};

/// Weighted blend of the four experience sub-scores.
pub(crate) const EXPERIENCE_WEIGHTS: [(&str, f64); 4] = [
    ("alignment", 0.30),
    ("impact", 0.30),
    ("progression", 0.20),
    ("relevance", 0.20),
];

static METRIC_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\d+%",
        r"\$\d+[KMB]?",
        r"(?i)\d+[KMB]\+?\s*(users|requests|records|customers)",
        r"\d+x\b",
        r"(?i)\d+\s*(hours|days|weeks|months)",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static JOB_TITLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"([A-Z][a-z]+\s+)*(Engineer|Developer|Manager|Designer|Analyst|Scientist|Lead|Architect)",
    )
    .unwrap()
});

static CALENDAR_YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(20\d{2})\b").unwrap());

const LEADERSHIP_VERBS: &[&str] = &["led", "directed", "managed", "coordinated", "mentored", "guided", "supervised"];
const CREATION_VERBS: &[&str] = &["built", "developed", "designed", "architected", "created", "established", "launched"];
const IMPROVEMENT_VERBS: &[&str] = &["optimized", "enhanced", "streamlined", "improved", "increased", "reduced", "accelerated"];
const ANALYSIS_VERBS: &[&str] = &["analyzed", "evaluated", "assessed", "investigated", "researched", "identified"];
const DELIVERY_VERBS: &[&str] = &["shipped", "delivered", "implemented", "deployed", "released", "executed"];

const WEAK_VERBS: &[&str] = &[
    "responsible for",
    "worked on",
    "helped with",
    "involved in",
    "participated in",
    "assisted",
];

const SENIORITY_TERMS: &[&str] = &[
    "junior", "associate", "mid", "senior", "lead", "principal", "staff", "director",
];
const RESPONSIBILITY_INDICATORS: &[&str] =
    &["led team", "managed", "mentored", "architected", "directed"];

const EXPERIENCE_HEADERS: &[&str] = &[
    "experience",
    "work history",
    "employment",
    "professional experience",
];
const FOLLOWING_SECTIONS: &[&str] = &["education", "skills", "projects", "certifications"];

/// Named experience sub-scores, each in [0, 100].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ExperienceBreakdown {
    pub alignment: u32,
    pub impact: u32,
    pub progression: u32,
    pub relevance: u32,
}

/// Full experience quality report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceReport {
    pub score: u32,
    pub breakdown: ExperienceBreakdown,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
}

/// Field- and level-aware experience analyzer.
pub struct ExperienceAnalyzer<'a> {
    config: &'a FieldConfig,
    #[allow(dead_code)]
    level: ExperienceLevel,
}

impl<'a> ExperienceAnalyzer<'a> {
    pub fn new(config: &'a FieldConfig, level: ExperienceLevel) -> Self {
        Self { config, level }
    }

    pub fn analyze(&self, text: &str, current_year: i32) -> ExperienceReport {
        let text_lower = text.to_lowercase();

        let alignment = self.alignment(&text_lower);
        let impact = self.impact(text, &text_lower);
        let progression = self.progression(text, &text_lower);
        let relevance = self.relevance(text, current_year);

        let breakdown = ExperienceBreakdown {
            alignment,
            impact,
            progression,
            relevance,
        };
        let score = clamp_score(
            alignment as f64 * EXPERIENCE_WEIGHTS[0].1
                + impact as f64 * EXPERIENCE_WEIGHTS[1].1
                + progression as f64 * EXPERIENCE_WEIGHTS[2].1
                + relevance as f64 * EXPERIENCE_WEIGHTS[3].1,
        );

        let strengths = self.identify_strengths(&breakdown);
        let improvements = self.generate_improvements(&breakdown, &text_lower);

        tracing::debug!(
            score,
            alignment,
            impact,
            progression,
            relevance,
            "experience analysis complete"
        );

        ExperienceReport {
            score,
            breakdown,
            strengths,
            improvements,
        }
    }

    /// Keyword density of the field's core vocabulary inside the experience
    /// section, plus a bonus for field-appropriate role titles.
    fn alignment(&self, text_lower: &str) -> u32 {
        let Some(section) = experience_section(text_lower) else {
            return 30; // partial credit when the section cannot be located
        };

        let keyword_count = self
            .config
            .core_keywords
            .iter()
            .filter(|keyword| section.contains(keyword.as_str()))
            .count();
        let density = crate::score::ratio(keyword_count, self.config.core_keywords.len());
        let mut score = (density * 100.0) as u32;

        let titles: &[&str] = match self.config.category {
            FieldCategory::Software => &["engineer", "developer", "programmer", "architect"],
            FieldCategory::DataScience => &["data scientist", "ml engineer", "analyst", "researcher"],
            FieldCategory::Product => &["product manager", "product owner", "pm"],
            FieldCategory::Design => &["designer", "ux", "ui", "product designer"],
            FieldCategory::Marketing => &["marketing", "growth", "demand gen", "content"],
        };
        if titles.iter().any(|title| section.contains(title)) {
            score += 15;
        }

        score.min(100)
    }

    /// Quantified achievements, strong verbs, weak-verb penalty, and
    /// field-specific impact vocabulary.
    fn impact(&self, text: &str, text_lower: &str) -> u32 {
        let mut score: i32 = 0;

        let metric_count: usize = METRIC_PATTERNS
            .iter()
            .map(|p| p.find_iter(text).count())
            .sum();
        score += match metric_count {
            0 => 0,
            1..=2 => 10,
            3..=5 => 20,
            6..=9 => 30,
            _ => 40,
        };

        let strong_verb_count: usize = [
            LEADERSHIP_VERBS,
            CREATION_VERBS,
            IMPROVEMENT_VERBS,
            ANALYSIS_VERBS,
            DELIVERY_VERBS,
        ]
        .iter()
        .flat_map(|verbs| verbs.iter())
        .map(|verb| count_word(text_lower, verb))
        .sum();
        score += match strong_verb_count {
            0..=4 => 0,
            5..=9 => 10,
            10..=14 => 20,
            _ => 30,
        };

        let weak_verb_count: usize = WEAK_VERBS
            .iter()
            .map(|verb| text_lower.matches(verb).count())
            .sum();
        if weak_verb_count > 5 {
            score -= 10;
        }

        let impact_metric_count = self
            .config
            .impact_metrics
            .iter()
            .filter(|metric| text_lower.contains(metric.as_str()))
            .count();
        score += match impact_metric_count {
            0 => 0,
            1..=2 => 10,
            _ => 20,
        };

        clamp_points(score)
    }

    /// Career growth: multiple roles, seniority-ladder terms, and
    /// increasing-responsibility language.
    fn progression(&self, text: &str, text_lower: &str) -> u32 {
        let title_count = JOB_TITLE.find_iter(text).count();
        if title_count < 2 {
            return 50; // cannot assess progression from a single role
        }

        let mut score: u32 = 50;

        let levels_found = SENIORITY_TERMS
            .iter()
            .filter(|term| text_lower.contains(*term))
            .count();
        if levels_found >= 2 {
            score += 25;
        }

        if RESPONSIBILITY_INDICATORS
            .iter()
            .any(|indicator| text_lower.contains(indicator))
        {
            score += 25;
        }

        score.min(100)
    }

    /// Recency of the most recent experience year.
    fn relevance(&self, text: &str, current_year: i32) -> u32 {
        let most_recent = CALENDAR_YEAR
            .captures_iter(text)
            .filter_map(|c| c[1].parse::<i32>().ok())
            .filter(|year| *year <= current_year + 1)
            .max();
        let Some(most_recent) = most_recent else {
            return 50;
        };

        match current_year.saturating_sub(most_recent) {
            i32::MIN..=1 => 100,
            2 => 90,
            3 => 75,
            4..=5 => 60,
            _ => 40,
        }
    }

    fn identify_strengths(&self, breakdown: &ExperienceBreakdown) -> Vec<String> {
        let mut strengths = Vec::new();

        if breakdown.alignment >= 75 {
            strengths.push(format!(
                "Experience strongly aligns with {}",
                self.config.name
            ));
        }
        if breakdown.impact >= 70 {
            strengths
                .push("Clear demonstration of quantified impact and achievements".to_string());
        }
        if breakdown.progression >= 75 {
            strengths
                .push("Strong career progression and increasing responsibility".to_string());
        }

        strengths
    }

    fn generate_improvements(
        &self,
        breakdown: &ExperienceBreakdown,
        text_lower: &str,
    ) -> Vec<String> {
        let mut improvements = Vec::new();

        if breakdown.impact < 60 {
            improvements.push(
                "Add specific metrics to quantify your impact (e.g., '40% faster', '2M users', '$500K saved')"
                    .to_string(),
            );
            let weak_verb_count: usize = WEAK_VERBS
                .iter()
                .map(|verb| text_lower.matches(verb).count())
                .sum();
            if weak_verb_count > 3 {
                improvements.push(
                    "Replace weak phrases like 'responsible for' with strong action verbs like 'led', 'built', 'optimized'"
                        .to_string(),
                );
            }
        }

        if breakdown.alignment < 60 {
            improvements.push(format!(
                "Highlight experience more relevant to {}",
                self.config.name
            ));
            improvements.push(
                "Emphasize projects and achievements that match the target role".to_string(),
            );
        }

        if breakdown.progression < 50 {
            improvements.push(
                "Show career growth - highlight increasing scope, leadership, or technical complexity"
                    .to_string(),
            );
        }

        improvements
    }
}

/// Slice of the text between the experience header and the next major
/// section header, lower-cased input expected.
fn experience_section(text_lower: &str) -> Option<&str> {
    let start = EXPERIENCE_HEADERS
        .iter()
        .filter_map(|header| text_lower.find(header))
        .min()?;

    let search_from = start + 10;
    let end = FOLLOWING_SECTIONS
        .iter()
        .filter_map(|section| {
            if search_from < text_lower.len() {
                text_lower[search_from..]
                    .find(section)
                    .map(|pos| pos + search_from)
            } else {
                None
            }
        })
        .min()
        .unwrap_or(text_lower.len());

    Some(&text_lower[start..end])
}

/// Whole-word occurrence count without building a regex per verb.
fn count_word(text_lower: &str, word: &str) -> usize {
    text_lower
        .match_indices(word)
        .filter(|(idx, _)| {
            let before_ok = *idx == 0
                || !text_lower[..*idx]
                    .chars()
                    .next_back()
                    .is_some_and(|c| c.is_alphanumeric());
            let after = idx + word.len();
            let after_ok = after >= text_lower.len()
                || !text_lower[after..]
                    .chars()
                    .next()
                    .is_some_and(|c| c.is_alphanumeric());
            before_ok && after_ok
        })
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{FieldKey, FieldRegistry};

    const AS_OF_YEAR: i32 = 2026;

    fn analyze(text: &str) -> ExperienceReport {
        let registry = FieldRegistry::builtin().unwrap();
        let config = registry.get(FieldKey::SoftwareBackend).unwrap();
        ExperienceAnalyzer::new(config, ExperienceLevel::Mid).analyze(text, AS_OF_YEAR)
    }

    #[test]
    fn test_alignment_partial_credit_without_section() {
        let report = analyze("python sql docker but no section headers anywhere");
        assert_eq!(report.breakdown.alignment, 30);
    }

    #[test]
    fn test_alignment_counts_keywords_in_experience_section_only() {
        let text = "EXPERIENCE\nbuilt python and sql services as a backend engineer\nEDUCATION\njava coursework";
        let report = analyze(&text.to_string());
        // java sits in the education section and must not count.
        assert!(report.breakdown.alignment > 0);
        assert!(report.breakdown.alignment < 100);
    }

    #[test]
    fn test_alignment_title_bonus() {
        let with_title = analyze("EXPERIENCE\nsoftware engineer shipping python services");
        let without_title = analyze("EXPERIENCE\nshipping python services");
        assert_eq!(
            with_title.breakdown.alignment,
            without_title.breakdown.alignment + 15
        );
    }

    #[test]
    fn test_impact_rises_with_metrics() {
        let flat = analyze("EXPERIENCE\nworked on services");
        let quantified = analyze(
            "EXPERIENCE\nreduced latency 40%, saved $200K, served 3M users, 2x throughput, cut 12 hours weekly",
        );
        assert!(quantified.breakdown.impact > flat.breakdown.impact);
    }

    #[test]
    fn test_impact_penalizes_weak_verbs() {
        let weak = "EXPERIENCE\n".to_string()
            + &"responsible for stuff. worked on things. helped with tasks. "
                .repeat(3);
        let report = analyze(&weak);
        assert!(report
            .improvements
            .iter()
            .any(|i| i.contains("responsible for")));
    }

    #[test]
    fn test_progression_neutral_with_single_role() {
        let report = analyze("EXPERIENCE\nEngineer at one company");
        assert_eq!(report.breakdown.progression, 50);
    }

    #[test]
    fn test_progression_rewards_seniority_ladder() {
        let report = analyze(
            "EXPERIENCE\nSenior Engineer at Acme. Previously Junior Developer at Beta. Led team of four.",
        );
        assert_eq!(report.breakdown.progression, 100);
    }

    #[test]
    fn test_relevance_ladder() {
        let recent = analyze("EXPERIENCE\nEngineer 2025");
        let stale = analyze("EXPERIENCE\nEngineer 2018");
        assert_eq!(recent.breakdown.relevance, 100);
        assert_eq!(stale.breakdown.relevance, 40);
    }

    #[test]
    fn test_relevance_neutral_without_years() {
        let report = analyze("EXPERIENCE\nEngineer, dates unknown");
        assert_eq!(report.breakdown.relevance, 50);
    }

    #[test]
    fn test_count_word_respects_boundaries() {
        assert_eq!(count_word("led the team, misled nobody", "led"), 1);
        assert_eq!(count_word("managed and micromanaged", "managed"), 1);
    }

    #[test]
    fn test_experience_section_extraction_stops_at_next_header() {
        let section = experience_section("experience\npython work\neducation\nbs degree").unwrap();
        assert!(section.contains("python work"));
        assert!(!section.contains("bs degree"));
    }

    #[test]
    fn test_score_is_weighted_blend_and_clamped() {
        let report = analyze(
            "EXPERIENCE\nSenior Engineer, led team, reduced latency 40% in python services 2025\nEDUCATION\nBS 2016",
        );
        assert!(report.score <= 100);
        let expected = clamp_score(
            report.breakdown.alignment as f64 * 0.30
                + report.breakdown.impact as f64 * 0.30
                + report.breakdown.progression as f64 * 0.20
                + report.breakdown.relevance as f64 * 0.20,
        );
        assert_eq!(report.score, expected);
    }
}
