//! ATS compatibility scoring — how reliably a resume survives automated
//! parsing, scored against field-specific expectations.
//!
//! Four sub-scores (format, sections, keywords, contact), each clamped to
//! [0, 100]; the overall is their weighted blend. The scorer never fails on
//! malformed or garbage text — the worst case is low scores, not an error.

use once_cell::sync::Lazy;
use regex::Regex;

use serde::{Deserialize, Serialize};

use crate::fields::{FieldCategory, FieldConfig};
use crate::levels::ExperienceLevel;
use crate::score::{clamp_points, clamp_score};

/// Weighted blend of the four ATS sub-scores.
pub(crate) const ATS_WEIGHTS: [(&str, f64); 4] = [
    ("format", 0.30),
    ("sections", 0.25),
    ("keywords", 0.25),
    ("contact", 0.20),
];

/// Point budget distributed evenly across a field's required sections.
const SECTION_BUDGET: u32 = 80;
/// Bonus for three or more clearly distinguishable ALL-CAPS headers.
const CLEAR_HEADER_BONUS: u32 = 10;
/// Bonus for level-appropriate ordering of education vs experience.
const SECTION_ORDER_BONUS: u32 = 10;
/// Repetitions of a single core keyword above this count read as stuffing.
const STUFFING_THRESHOLD: usize = 8;

// Layout blockers that real ATS parsers choke on.
static TABLE_MARKUP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<table|\\begin\{tabular\}").unwrap());
static IMAGE_MARKUP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<img|\\includegraphics").unwrap());
static TEXT_BOX_MARKUP: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<textbox").unwrap());
static MULTI_COLUMN_MARKUP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\\begin\{multicols\}").unwrap());

static DATE_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d{1,2}/\d{4}\b|\b\d{4}\b|\b[A-Z][a-z]+ \d{4}\b").unwrap());
static YEAR_ONLY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}$").unwrap());

static ALL_CAPS_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\s*[A-Z][A-Z &/]{2,}\s*$").unwrap());
static BULLET_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\s*[•\-\*]\s*(.+)$").unwrap());

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap());
static PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b\d{3}[-.\s]?\d{3}[-.\s]?\d{4}\b|\(\d{3}\)\s*\d{3}[-.\s]?\d{4}").unwrap()
});
static LINKEDIN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)linkedin\.com/in/[\w-]+").unwrap());
static GITHUB: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)github\.com/[\w-]+").unwrap());
static CITY_STATE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[A-Z][a-z]+,\s*[A-Z]{2}\b").unwrap());

/// Named ATS sub-scores, each in [0, 100].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AtsBreakdown {
    pub format: u32,
    pub sections: u32,
    pub keywords: u32,
    pub contact: u32,
}

/// Full ATS compatibility report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtsReport {
    pub score: u32,
    pub breakdown: AtsBreakdown,
    pub blockers: Vec<String>,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
}

/// Field- and level-aware ATS analyzer.
pub struct AtsAnalyzer<'a> {
    config: &'a FieldConfig,
    level: ExperienceLevel,
}

impl<'a> AtsAnalyzer<'a> {
    pub fn new(config: &'a FieldConfig, level: ExperienceLevel) -> Self {
        Self { config, level }
    }

    pub fn analyze(&self, text: &str) -> AtsReport {
        let text_lower = text.to_lowercase();

        let format = self.score_format(text);
        let sections = self.score_sections(text, &text_lower);
        let keywords = self.score_keywords(text, &text_lower);
        let contact = self.score_contact(text, &text_lower);

        let breakdown = AtsBreakdown {
            format,
            sections,
            keywords,
            contact,
        };
        let score = clamp_score(
            format as f64 * ATS_WEIGHTS[0].1
                + sections as f64 * ATS_WEIGHTS[1].1
                + keywords as f64 * ATS_WEIGHTS[2].1
                + contact as f64 * ATS_WEIGHTS[3].1,
        );

        let blockers = self.identify_blockers(text);
        let strengths = self.identify_strengths(&breakdown);
        let improvements = self.generate_improvements(&breakdown, text, &text_lower);

        tracing::debug!(
            score,
            format,
            sections,
            keywords,
            contact,
            "ats analysis complete"
        );

        AtsReport {
            score,
            breakdown,
            blockers,
            strengths,
            improvements,
        }
    }

    /// Parseability: starts at 100 and deducts fixed penalties for layout
    /// blockers, inconsistent date formats, and extreme length.
    fn score_format(&self, text: &str) -> u32 {
        let mut score: i32 = 100;

        if TABLE_MARKUP.is_match(text) {
            score -= 15;
        }
        if IMAGE_MARKUP.is_match(text) {
            score -= 10;
        }
        if TEXT_BOX_MARKUP.is_match(text) {
            score -= 10;
        }
        if MULTI_COLUMN_MARKUP.is_match(text) {
            score -= 10;
        }

        let mut formats = std::collections::BTreeSet::new();
        for m in DATE_TOKEN.find_iter(text) {
            let token = m.as_str();
            if token.contains('/') {
                formats.insert("slash");
            } else if YEAR_ONLY.is_match(token) {
                formats.insert("year_only");
            } else {
                formats.insert("month_year");
            }
        }
        if formats.len() > 1 {
            score -= 5;
        }

        let word_count = text.split_whitespace().count();
        if word_count < 200 {
            score -= 10;
        } else if word_count > 1500 {
            score -= 5;
        }

        clamp_points(score)
    }

    /// Section structure: a fixed budget split across the field's required
    /// sections, plus header-clarity and section-ordering bonuses.
    fn score_sections(&self, text: &str, text_lower: &str) -> u32 {
        let required = &self.config.required_sections;
        let per_section = SECTION_BUDGET / required.len() as u32;

        let mut score: u32 = 0;
        for section in required {
            let found = section
                .headers()
                .iter()
                .any(|header| text_lower.contains(header));
            if found {
                score += per_section;
            }
        }

        if ALL_CAPS_HEADER.find_iter(text).count() >= 3 {
            score += CLEAR_HEADER_BONUS;
        }

        // Entry-level resumes are expected to lead with education;
        // experienced ones with experience.
        let exp_pos = text_lower.find("experience");
        let edu_pos = text_lower.find("education");
        if let (Some(exp), Some(edu)) = (exp_pos, edu_pos) {
            let well_ordered = match self.level {
                ExperienceLevel::Entry => edu < exp,
                ExperienceLevel::Mid | ExperienceLevel::Senior => exp < edu,
            };
            if well_ordered {
                score += SECTION_ORDER_BONUS;
            }
        }

        score.min(100)
    }

    /// Keyword optimization: core coverage weighted 70%, supporting 30%,
    /// with a stuffing penalty and an in-context bonus for keywords that
    /// show up inside bullet points rather than a bare list.
    fn score_keywords(&self, text: &str, text_lower: &str) -> u32 {
        let core = &self.config.core_keywords;
        let supporting = &self.config.supporting_keywords;

        let core_found = core.iter().filter(|k| text_lower.contains(k.as_str())).count();
        let core_coverage = crate::score::ratio(core_found, core.len()) * 100.0;

        let supporting_found = supporting
            .iter()
            .filter(|k| text_lower.contains(k.as_str()))
            .count();
        let supporting_coverage = crate::score::ratio(supporting_found, supporting.len()) * 100.0;

        let mut score = (core_coverage * 0.70 + supporting_coverage * 0.30) as i32;

        for keyword in core {
            if text_lower.matches(keyword.as_str()).count() > STUFFING_THRESHOLD {
                score -= 5;
            }
        }

        let keywords_in_context = BULLET_LINE
            .captures_iter(text)
            .map(|c| c[1].to_lowercase())
            .map(|bullet| core.iter().filter(|k| bullet.contains(k.as_str())).count())
            .sum::<usize>();
        if keywords_in_context > 5 {
            score += 10;
        }

        clamp_points(score)
    }

    /// Contact completeness: fixed point awards for each parseable channel,
    /// with the portfolio link expectation depending on the field.
    fn score_contact(&self, text: &str, text_lower: &str) -> u32 {
        let mut score: u32 = 0;

        if EMAIL.is_match(text) {
            score += 30;
        }
        if PHONE.is_match(text) {
            score += 25;
        }
        if LINKEDIN.is_match(text) {
            score += 25;
        }

        match self.config.category {
            FieldCategory::Software | FieldCategory::DataScience => {
                if GITHUB.is_match(text) {
                    score += 20;
                }
            }
            FieldCategory::Design => {
                if ["portfolio", "behance", "dribbble"]
                    .iter()
                    .any(|k| text_lower.contains(k))
                {
                    score += 20;
                }
            }
            FieldCategory::Product | FieldCategory::Marketing => {
                // No field-standard link to check; partial credit.
                score += 10;
            }
        }

        if CITY_STATE.is_match(text) {
            score += 10;
        }

        score.min(100)
    }

    fn identify_blockers(&self, text: &str) -> Vec<String> {
        let mut blockers = Vec::new();

        if TABLE_MARKUP.is_match(text) {
            blockers.push("Table-based layout detected - ATS may misread content order".to_string());
        }
        if IMAGE_MARKUP.is_match(text) {
            blockers.push("Images or graphics detected - ATS cannot parse visual content".to_string());
        }
        if MULTI_COLUMN_MARKUP.is_match(text) {
            blockers
                .push("Multi-column layout detected - text order may be scrambled by ATS".to_string());
        }

        // Contact details buried in a header block are routinely dropped.
        let lines: Vec<&str> = text.lines().collect();
        if lines.len() > 10 {
            let header_text = lines[..3].join(" ").to_lowercase();
            if header_text.contains("page") || header_text.contains("resume") {
                blockers.push(
                    "Contact information may be in header - ATS often ignores headers".to_string(),
                );
            }
        }

        blockers
    }

    fn identify_strengths(&self, breakdown: &AtsBreakdown) -> Vec<String> {
        let mut strengths = Vec::new();

        if breakdown.format >= 90 {
            strengths.push("Clean, parseable format - ATS will read this easily".to_string());
        }
        if breakdown.sections >= 85 {
            strengths.push("Well-organized sections with clear headers".to_string());
        }
        if breakdown.keywords >= 70 {
            strengths.push(format!(
                "Strong keyword coverage for {}",
                self.config.name
            ));
        }
        if breakdown.contact >= 90 {
            strengths.push(
                "Complete contact information - easy for recruiters to reach you".to_string(),
            );
        }

        strengths
    }

    fn generate_improvements(
        &self,
        breakdown: &AtsBreakdown,
        text: &str,
        text_lower: &str,
    ) -> Vec<String> {
        let mut improvements = Vec::new();

        if breakdown.format < 80 {
            if TABLE_MARKUP.is_match(text) {
                improvements.push(
                    "Remove table-based layout - use simple text formatting with clear section breaks"
                        .to_string(),
                );
            }
            if MULTI_COLUMN_MARKUP.is_match(text) {
                improvements.push(
                    "Convert multi-column layout to single column - ATS reads left-to-right, top-to-bottom"
                        .to_string(),
                );
            }
        }

        if breakdown.sections < 70 {
            let missing: Vec<&str> = self
                .config
                .required_sections
                .iter()
                .filter(|section| {
                    !section
                        .headers()
                        .iter()
                        .any(|header| text_lower.contains(header))
                })
                .map(|section| section.title())
                .collect();
            if !missing.is_empty() {
                improvements.push(format!("Add missing sections: {}", missing.join(", ")));
            }
            improvements.push(
                "Use standard section headers in ALL CAPS or bold (e.g., EXPERIENCE, EDUCATION, SKILLS)"
                    .to_string(),
            );
        }

        if breakdown.keywords < 60 {
            let suggestions: Vec<&str> = self
                .config
                .core_keywords
                .iter()
                .take(5)
                .map(String::as_str)
                .collect();
            improvements.push(format!(
                "Increase relevant keyword coverage - consider adding: {}",
                suggestions.join(", ")
            ));
            improvements.push(
                "Incorporate keywords naturally in your experience bullets, not just in a skills list"
                    .to_string(),
            );
        }

        if breakdown.contact < 80 {
            if !LINKEDIN.is_match(text) {
                improvements.push("Add LinkedIn profile URL".to_string());
            }
            if !EMAIL.is_match(text) {
                improvements.push("Ensure email address is clearly visible".to_string());
            }
            if matches!(self.config.category, FieldCategory::Software)
                && !GITHUB.is_match(text)
            {
                improvements.push("Add GitHub profile to showcase your code".to_string());
            }
        }

        improvements
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{FieldKey, FieldRegistry};

    fn registry() -> FieldRegistry {
        FieldRegistry::builtin().unwrap()
    }

    fn backend_report(text: &str, level: ExperienceLevel) -> AtsReport {
        let registry = registry();
        let config = registry.get(FieldKey::SoftwareBackend).unwrap();
        AtsAnalyzer::new(config, level).analyze(text)
    }

    const SOLID_RESUME: &str = "\
John Doe
john@example.com | (555) 123-4567 | linkedin.com/in/john | github.com/john | Austin, TX

EXPERIENCE
Senior Backend Engineer, Acme Corp, Jan 2021 - Dec 2024
- Built REST api services in python with postgresql and redis
- Led docker and kubernetes migration, improved deployment frequency
- Designed microservices with ci/cd pipelines on aws

EDUCATION
BS Computer Science, State University, 2016

SKILLS
python, java, sql, docker, kubernetes, aws, git, testing, agile
";

    #[test]
    fn test_sub_scores_and_overall_are_clamped() {
        let report = backend_report(SOLID_RESUME, ExperienceLevel::Mid);
        assert!(report.score <= 100);
        for sub in [
            report.breakdown.format,
            report.breakdown.sections,
            report.breakdown.keywords,
            report.breakdown.contact,
        ] {
            assert!(sub <= 100);
        }
    }

    #[test]
    fn test_garbage_text_scores_low_but_never_errors() {
        let report = backend_report("@@@@ ???? \u{0000} ~~~~~", ExperienceLevel::Mid);
        assert!(report.score <= 100);
        assert_eq!(report.breakdown.sections, 0);
        assert_eq!(report.breakdown.contact, 0);
    }

    #[test]
    fn test_contact_score_counts_each_channel() {
        let text = "reach me: jane@corp.io, (555) 987-6543, linkedin.com/in/jane, github.com/jane, Denver, CO";
        let report = backend_report(text, ExperienceLevel::Mid);
        // email 30 + phone 25 + linkedin 25 + github 20 + location 10, capped.
        assert_eq!(report.breakdown.contact, 100);
    }

    #[test]
    fn test_contact_partial_when_channels_missing() {
        let text = "jane@corp.io and linkedin.com/in/jane";
        let report = backend_report(text, ExperienceLevel::Mid);
        assert_eq!(report.breakdown.contact, 55);
    }

    #[test]
    fn test_design_field_accepts_portfolio_instead_of_github() {
        let registry = registry();
        let config = registry.get(FieldKey::UxUiDesign).unwrap();
        let report = AtsAnalyzer::new(config, ExperienceLevel::Mid)
            .analyze("jane@corp.io — portfolio: behance.net/jane");
        assert!(report.breakdown.contact >= 50, "email 30 + portfolio 20");
    }

    #[test]
    fn test_format_penalizes_table_markup() {
        let clean = backend_report(SOLID_RESUME, ExperienceLevel::Mid);
        let with_table = backend_report(
            &format!("{SOLID_RESUME}\n<table><tr><td>layout</td></tr></table>"),
            ExperienceLevel::Mid,
        );
        assert!(with_table.breakdown.format < clean.breakdown.format);
        assert!(with_table
            .blockers
            .iter()
            .any(|b| b.contains("Table-based layout")));
    }

    #[test]
    fn test_format_penalizes_short_text() {
        let report = backend_report("too short", ExperienceLevel::Mid);
        assert!(report.breakdown.format <= 90, "short text loses length points");
    }

    #[test]
    fn test_section_order_bonus_flips_by_level() {
        let exp_first = "EXPERIENCE\nbuilt things\nEDUCATION\nBS degree\nSKILLS\npython";
        let edu_first = "EDUCATION\nBS degree\nEXPERIENCE\nbuilt things\nSKILLS\npython";

        let mid_exp_first = backend_report(exp_first, ExperienceLevel::Mid);
        let mid_edu_first = backend_report(edu_first, ExperienceLevel::Mid);
        assert!(mid_exp_first.breakdown.sections > mid_edu_first.breakdown.sections);

        let entry_exp_first = backend_report(exp_first, ExperienceLevel::Entry);
        let entry_edu_first = backend_report(edu_first, ExperienceLevel::Entry);
        assert!(entry_edu_first.breakdown.sections > entry_exp_first.breakdown.sections);
    }

    #[test]
    fn test_keyword_stuffing_is_penalized() {
        let stuffed = format!("EXPERIENCE {}", "python ".repeat(20));
        let normal = "EXPERIENCE python used daily";
        let stuffed_report = backend_report(&stuffed, ExperienceLevel::Mid);
        let normal_report = backend_report(normal, ExperienceLevel::Mid);
        assert!(stuffed_report.breakdown.keywords < normal_report.breakdown.keywords + 6);
    }

    #[test]
    fn test_keywords_in_bullets_earn_context_bonus() {
        let listed = "skills: python java sql aws docker kubernetes git testing";
        let in_context = "\
- shipped python services
- tuned sql queries
- ran docker builds
- managed aws infra
- owned kubernetes upgrades
- added java tooling
";
        let listed_score = backend_report(listed, ExperienceLevel::Mid).breakdown.keywords;
        let context_score = backend_report(in_context, ExperienceLevel::Mid)
            .breakdown
            .keywords;
        assert!(
            context_score > listed_score,
            "bullet context should outscore a bare list ({context_score} vs {listed_score})"
        );
    }

    #[test]
    fn test_missing_sections_named_in_improvements() {
        let report = backend_report(
            "jane@corp.io writes software with python and java every day for work",
            ExperienceLevel::Mid,
        );
        assert!(report
            .improvements
            .iter()
            .any(|i| i.starts_with("Add missing sections:")));
    }

    #[test]
    fn test_overall_is_weighted_blend() {
        let report = backend_report(SOLID_RESUME, ExperienceLevel::Mid);
        let expected = clamp_score(
            report.breakdown.format as f64 * 0.30
                + report.breakdown.sections as f64 * 0.25
                + report.breakdown.keywords as f64 * 0.25
                + report.breakdown.contact as f64 * 0.20,
        );
        assert_eq!(report.score, expected);
    }
}
