//! Skill extraction — scans resume text against the taxonomy and returns
//! detected skills in taxonomy declaration order.
//!
//! Output order is deliberately *not* discovery order: downstream scoring
//! must be reproducible for identical input, so the taxonomy's declaration
//! order is the one stable ordering available.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::taxonomy::SkillTaxonomy;

/// Proficiency tier inferred from language near a skill mention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProficiencyTier {
    Basic,
    Experienced,
    Strong,
    Expert,
}

/// Evidence that a detected skill reflects real proficiency rather than a
/// bare keyword mention.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DepthSignal {
    pub proficiency: Option<ProficiencyTier>,
    /// Years-of-experience estimate from an explicit duration mention.
    pub years: Option<f64>,
    pub certified: bool,
}

impl DepthSignal {
    fn is_empty(&self) -> bool {
        self.proficiency.is_none() && self.years.is_none() && !self.certified
    }
}

/// One canonical skill detected in a resume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedSkill {
    pub name: String,
    pub category: String,
    pub depth: Option<DepthSignal>,
}

/// The set of skills detected in one resume text, in taxonomy order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractedSkillSet {
    pub skills: Vec<DetectedSkill>,
}

impl ExtractedSkillSet {
    pub fn names(&self) -> Vec<&str> {
        self.skills.iter().map(|s| s.name.as_str()).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.skills
            .iter()
            .any(|s| s.name.eq_ignore_ascii_case(name))
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

static YEARS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{1,2})\s*\+?\s*(?:years?|yrs?)").unwrap());
static MONTHS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d{1,2})\s*months?").unwrap());

const EXPERT_MARKERS: &[&str] = &["expert", "advanced", "proficient", "mastery", "specialized"];
const STRONG_MARKERS: &[&str] = &["strong", "extensive", "solid", "deep knowledge"];
const EXPERIENCED_MARKERS: &[&str] = &["experienced", "familiar", "working knowledge", "hands-on"];
const BASIC_MARKERS: &[&str] = &["basic", "beginner", "learning", "exposure to"];

/// Half-width of the annotation window around a skill mention, in bytes.
const DEPTH_WINDOW: usize = 120;

/// Extracts the skills present in `text`. Empty or whitespace-only text is a
/// valid "no skills found" outcome, not an error. Pure function; calling
/// twice with identical input yields identical, identically ordered output.
pub fn extract(text: &str, taxonomy: &SkillTaxonomy) -> ExtractedSkillSet {
    if text.trim().is_empty() {
        return ExtractedSkillSet::default();
    }

    let mut seen = std::collections::HashSet::new();
    let mut skills = Vec::new();

    for skill in taxonomy.skills() {
        if !seen.insert(skill.name.as_str()) {
            continue;
        }
        if let Some((start, end)) = skill.first_match(text) {
            let depth = annotate_depth(text, start, end);
            skills.push(DetectedSkill {
                name: skill.name.clone(),
                category: skill.category.clone(),
                depth,
            });
        }
    }

    tracing::debug!(detected = skills.len(), "skill extraction complete");
    ExtractedSkillSet { skills }
}

/// Looks for proficiency, duration, and certification language in a window
/// around the match site. The window is clipped to char boundaries.
fn annotate_depth(text: &str, start: usize, end: usize) -> Option<DepthSignal> {
    let lo = floor_char_boundary(text, start.saturating_sub(DEPTH_WINDOW));
    let hi = ceil_char_boundary(text, (end + DEPTH_WINDOW).min(text.len()));
    let window = text[lo..hi].to_lowercase();

    let proficiency = strongest_tier(&window);
    let years = YEARS_RE
        .captures_iter(&window)
        .filter_map(|c| c[1].parse::<f64>().ok())
        .chain(
            MONTHS_RE
                .captures_iter(&window)
                .filter_map(|c| c[1].parse::<f64>().ok().map(|m| m / 12.0)),
        )
        .fold(None, |acc: Option<f64>, y| {
            Some(acc.map_or(y, |a| a.max(y)))
        });
    let certified = window.contains("certif");

    let signal = DepthSignal {
        proficiency,
        years,
        certified,
    };
    if signal.is_empty() {
        None
    } else {
        Some(signal)
    }
}

fn strongest_tier(window: &str) -> Option<ProficiencyTier> {
    let tiers: [(&[&str], ProficiencyTier); 4] = [
        (EXPERT_MARKERS, ProficiencyTier::Expert),
        (STRONG_MARKERS, ProficiencyTier::Strong),
        (EXPERIENCED_MARKERS, ProficiencyTier::Experienced),
        (BASIC_MARKERS, ProficiencyTier::Basic),
    ];
    for (markers, tier) in tiers {
        if markers.iter().any(|m| window.contains(m)) {
            return Some(tier);
        }
    }
    None
}

fn floor_char_boundary(text: &str, mut idx: usize) -> usize {
    while idx > 0 && !text.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}

fn ceil_char_boundary(text: &str, mut idx: usize) -> usize {
    while idx < text.len() && !text.is_char_boundary(idx) {
        idx += 1;
    }
    idx
}

#[cfg(test)]
mod tests {
    use super::*;

    fn taxonomy() -> SkillTaxonomy {
        SkillTaxonomy::builtin().unwrap()
    }

    #[test]
    fn test_empty_text_returns_empty_set_not_error() {
        let set = extract("", &taxonomy());
        assert!(set.is_empty());
        let set = extract("   \n\t  ", &taxonomy());
        assert!(set.is_empty());
    }

    #[test]
    fn test_detects_skills_by_variant() {
        let set = extract("Built services with k8s and postgres.", &taxonomy());
        assert!(set.contains("Kubernetes"), "k8s variant maps to Kubernetes");
        assert!(set.contains("PostgreSQL"), "postgres variant maps to PostgreSQL");
    }

    #[test]
    fn test_output_is_taxonomy_order_not_discovery_order() {
        // Docker appears last in the text but earlier in the taxonomy than
        // Leadership; order must follow the taxonomy.
        let set = extract("Leadership of a platform team using Docker.", &taxonomy());
        let names = set.names();
        let docker = names.iter().position(|n| *n == "Docker").unwrap();
        let leadership = names.iter().position(|n| *n == "Leadership").unwrap();
        assert!(
            docker < leadership,
            "expected taxonomy order, got {names:?}"
        );
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let text = "Python, Java, SQL, AWS, Docker. Led team of 5.";
        let first = extract(text, &taxonomy());
        let second = extract(text, &taxonomy());
        assert_eq!(first.names(), second.names());
    }

    #[test]
    fn test_word_boundary_prevents_java_in_javascript() {
        let set = extract("Five years of JavaScript.", &taxonomy());
        assert!(set.contains("JavaScript"));
        assert!(!set.contains("Java"));
    }

    #[test]
    fn test_depth_years_annotation() {
        let set = extract("6 years of Python in production.", &taxonomy());
        let python = set.skills.iter().find(|s| s.name == "Python").unwrap();
        let depth = python.depth.as_ref().expect("years mention near skill");
        assert_eq!(depth.years, Some(6.0));
    }

    #[test]
    fn test_depth_proficiency_annotation_picks_strongest() {
        let set = extract("Expert in Rust with strong systems background.", &taxonomy());
        let rust = set.skills.iter().find(|s| s.name == "Rust").unwrap();
        assert_eq!(
            rust.depth.as_ref().unwrap().proficiency,
            Some(ProficiencyTier::Expert)
        );
    }

    #[test]
    fn test_depth_certification_annotation() {
        let set = extract("AWS Certified Solutions Architect.", &taxonomy());
        let aws = set.skills.iter().find(|s| s.name == "AWS").unwrap();
        assert!(aws.depth.as_ref().unwrap().certified);
    }

    #[test]
    fn test_bare_mention_has_no_depth_signal() {
        let set = extract("Tools: Docker", &taxonomy());
        let docker = set.skills.iter().find(|s| s.name == "Docker").unwrap();
        assert_eq!(docker.depth, None);
    }

    #[test]
    fn test_window_clipping_survives_multibyte_text() {
        // Multibyte chars near the window edges must not panic the slice.
        let text = "résumé — développeur Python — équipe données 5 years";
        let set = extract(text, &taxonomy());
        assert!(set.contains("Python"));
    }
}
