//! The engine facade — an immutable service struct holding the validated
//! registries and exposing the analysis operations.
//!
//! Construction validates every configuration invariant (weight tables,
//! taxonomy variant uniqueness, field keyword disjointness) and fails fast;
//! a bad registry must never be observable per-request. After construction
//! the engine is read-only and safe to share across threads.

use chrono::{Datelike, NaiveDate, Utc};
use tracing::info;

use crate::analysis::ats::{AtsAnalyzer, AtsReport, ATS_WEIGHTS};
use crate::analysis::experience::{ExperienceAnalyzer, ExperienceReport, EXPERIENCE_WEIGHTS};
use crate::analysis::readiness::{self, ReadinessComponents};
use crate::analysis::recommend::{self, RoleRecommendation};
use crate::analysis::report::{
    synthesize, AnalysisMetadata, ReadinessReport, ANALYSIS_VERSION, BLEND_WEIGHTS,
};
use crate::analysis::skills::{SkillsAnalyzer, SkillsReport, SKILLS_WEIGHTS};
use crate::errors::EngineError;
use crate::extraction::{extract, ExtractedSkillSet};
use crate::fields::FieldRegistry;
use crate::levels::{ExperienceLevel, RoleLevel};
use crate::roles::RoleCatalog;
use crate::score::validate_weights;
use crate::taxonomy::SkillTaxonomy;

/// Text shorter than this cannot be analyzed meaningfully.
pub const MIN_TEXT_LEN: usize = 50;

/// One analysis request. `extraction_warnings` come from the (external)
/// document-extraction step and are informational: they are carried into
/// the report metadata and never cause a failure by themselves.
#[derive(Debug, Clone, Default)]
pub struct AnalysisRequest<'a> {
    pub text: &'a str,
    pub field_key: &'a str,
    pub level: ExperienceLevel,
    /// Optional target role as (interest key, ladder level).
    pub target_role: Option<(&'a str, RoleLevel)>,
    pub extraction_warnings: Vec<String>,
}

/// Immutable analysis engine. Cheap to share behind an `Arc`; every method
/// is a pure function of the request and the frozen registries.
#[derive(Debug, Clone)]
pub struct Engine {
    taxonomy: SkillTaxonomy,
    fields: FieldRegistry,
    roles: RoleCatalog,
}

impl Engine {
    /// Builds an engine from explicit registries, validating all
    /// configuration invariants up front.
    pub fn new(
        taxonomy: SkillTaxonomy,
        fields: FieldRegistry,
        roles: RoleCatalog,
    ) -> Result<Self, EngineError> {
        validate_weights("ats", &ATS_WEIGHTS)?;
        validate_weights("skills", &SKILLS_WEIGHTS)?;
        validate_weights("experience", &EXPERIENCE_WEIGHTS)?;
        validate_weights("blend", &BLEND_WEIGHTS)?;

        info!(
            skills = taxonomy.len(),
            fields = fields.len(),
            roles = roles.len(),
            "analysis engine initialized"
        );

        Ok(Self {
            taxonomy,
            fields,
            roles,
        })
    }

    /// Builds an engine with the built-in registries.
    pub fn with_defaults() -> Result<Self, EngineError> {
        Self::new(
            SkillTaxonomy::builtin()?,
            FieldRegistry::builtin()?,
            RoleCatalog::builtin()?,
        )
    }

    pub fn taxonomy(&self) -> &SkillTaxonomy {
        &self.taxonomy
    }

    pub fn fields(&self) -> &FieldRegistry {
        &self.fields
    }

    pub fn roles(&self) -> &RoleCatalog {
        &self.roles
    }

    /// Extracts skills from resume text. Empty text is a valid empty
    /// result, not an error.
    pub fn extract_skills(&self, text: &str) -> ExtractedSkillSet {
        extract(text, &self.taxonomy)
    }

    /// Scores ATS compatibility. Total: garbage text yields low scores,
    /// never an error; unknown field keys fall back with a warning.
    pub fn score_ats(&self, text: &str, field_key: &str, level: ExperienceLevel) -> AtsReport {
        let lookup = self.fields.resolve(field_key);
        AtsAnalyzer::new(lookup.config, level).analyze(text)
    }

    /// Scores skills depth against a field rubric, as of today.
    pub fn score_depth(
        &self,
        text: &str,
        extracted: &ExtractedSkillSet,
        field_key: &str,
        level: ExperienceLevel,
    ) -> SkillsReport {
        let lookup = self.fields.resolve(field_key);
        SkillsAnalyzer::new(lookup.config, level).analyze(text, extracted, current_year())
    }

    /// Scores experience quality against a field rubric, as of today.
    pub fn score_experience(
        &self,
        text: &str,
        field_key: &str,
        level: ExperienceLevel,
    ) -> ExperienceReport {
        let lookup = self.fields.resolve(field_key);
        ExperienceAnalyzer::new(lookup.config, level).analyze(text, current_year())
    }

    /// Calculates readiness for the (interest, level) role against the
    /// user's skills. Unknown interests resolve to the placeholder role.
    pub fn calculate_readiness(
        &self,
        interest: &str,
        level: RoleLevel,
        user_skills: &[String],
    ) -> ReadinessComponents {
        let lookup = self.roles.resolve(interest, level);
        readiness::calculate(lookup.profile, user_skills)
    }

    /// Recommends the (interest, level) role with confidence and reasoning.
    pub fn recommend_role(
        &self,
        interest: &str,
        level: RoleLevel,
        user_skills: &[String],
    ) -> RoleRecommendation {
        let lookup = self.roles.resolve(interest, level);
        recommend::recommend(&lookup, user_skills)
    }

    /// Runs the full pipeline with today's date as the recency reference.
    pub fn analyze(&self, request: AnalysisRequest<'_>) -> Result<ReadinessReport, EngineError> {
        self.analyze_as_of(request, Utc::now().date_naive())
    }

    /// Runs the full pipeline with an explicit as-of date, so a given
    /// (text, date) pair always produces the identical report.
    pub fn analyze_as_of(
        &self,
        request: AnalysisRequest<'_>,
        as_of: NaiveDate,
    ) -> Result<ReadinessReport, EngineError> {
        let text = request.text.trim();
        if text.len() < MIN_TEXT_LEN {
            return Err(EngineError::InvalidInput(format!(
                "resume text is {} characters, minimum is {MIN_TEXT_LEN}",
                text.len()
            )));
        }

        let lookup = self.fields.resolve(request.field_key);
        let year = as_of.year();

        let extracted = extract(text, &self.taxonomy);
        let ats = AtsAnalyzer::new(lookup.config, request.level).analyze(text);
        let skills =
            SkillsAnalyzer::new(lookup.config, request.level).analyze(text, &extracted, year);
        let experience =
            ExperienceAnalyzer::new(lookup.config, request.level).analyze(text, year);

        let role_readiness = request.target_role.map(|(interest, role_level)| {
            let role_lookup = self.roles.resolve(interest, role_level);
            let user_skills: Vec<String> =
                extracted.names().iter().map(|n| n.to_string()).collect();
            readiness::calculate(role_lookup.profile, &user_skills)
        });

        let metadata = AnalysisMetadata {
            field: lookup.config.name.clone(),
            field_key: lookup.key,
            experience_level: request.level,
            fallback_field: lookup
                .fallback
                .then(|| request.field_key.to_string()),
            extraction_warnings: request.extraction_warnings,
            analysis_version: ANALYSIS_VERSION.to_string(),
        };

        Ok(synthesize(
            ats,
            skills,
            experience,
            extracted,
            role_readiness,
            lookup.config,
            request.level,
            metadata,
        ))
    }
}

fn current_year() -> i32 {
    Utc::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::report::Grade;

    fn engine() -> Engine {
        Engine::with_defaults().unwrap()
    }

    fn request(text: &str) -> AnalysisRequest<'_> {
        AnalysisRequest {
            text,
            field_key: "software_backend",
            level: ExperienceLevel::Mid,
            target_role: None,
            extraction_warnings: Vec::new(),
        }
    }

    const RESUME: &str = "\
jane@corp.io | (555) 123-4567 | linkedin.com/in/jane | github.com/jane | Austin, TX

EXPERIENCE
Senior Backend Engineer, Acme, 2021 - 2025
- built python microservices with postgresql and redis, reduced latency 40%
- led docker and kubernetes rollout for 3M users

EDUCATION
BS Computer Science, 2016

SKILLS
python, java, sql, aws, docker, git, testing, agile
";

    #[test]
    fn test_with_defaults_validates_and_builds() {
        assert!(Engine::with_defaults().is_ok());
    }

    #[test]
    fn test_short_text_is_invalid_input() {
        let err = engine()
            .analyze(request("Hi, I am looking for a job."))
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidInput(_)));
        assert!(err.to_string().contains("minimum is 50"));
    }

    #[test]
    fn test_component_scorers_stay_total_on_short_text() {
        // The typed failure applies to the full pipeline; individual
        // scorers still return valid clamped scores for short text.
        let engine = engine();
        let short = "Hi, I am looking for a job.";
        let ats = engine.score_ats(short, "software_backend", ExperienceLevel::Mid);
        assert!(ats.score <= 100);
        let extracted = engine.extract_skills(short);
        let depth = engine.score_depth(short, &extracted, "software_backend", ExperienceLevel::Mid);
        assert!(depth.score <= 100);
    }

    #[test]
    fn test_analyze_produces_full_report() {
        let report = engine().analyze(request(RESUME)).unwrap();
        assert!(report.overall_score <= 100);
        assert!(report.matched_skills.contains("Python"));
        assert!(report.metadata.fallback_field.is_none());
        assert_eq!(report.metadata.analysis_version, "2.0");
    }

    #[test]
    fn test_analyze_as_of_is_deterministic() {
        let as_of = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        let engine = engine();
        let first = engine.analyze_as_of(request(RESUME), as_of).unwrap();
        let second = engine.analyze_as_of(request(RESUME), as_of).unwrap();
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_unknown_field_key_marks_fallback_in_metadata() {
        let mut req = request(RESUME);
        req.field_key = "xyz_unknown_field";
        let report = engine().analyze(req).unwrap();
        assert_eq!(
            report.metadata.fallback_field.as_deref(),
            Some("xyz_unknown_field")
        );
        assert_eq!(report.metadata.field, "Software Engineering (Backend)");
    }

    #[test]
    fn test_extraction_warnings_carried_not_fatal() {
        let mut req = request(RESUME);
        req.extraction_warnings = vec!["Page 2 returned empty text".to_string()];
        let report = engine().analyze(req).unwrap();
        assert_eq!(report.metadata.extraction_warnings.len(), 1);
    }

    #[test]
    fn test_target_role_adds_readiness_components() {
        let mut req = request(RESUME);
        req.target_role = Some(("backend", RoleLevel::Junior));
        let report = engine().analyze(req).unwrap();
        let readiness = report.role_readiness.expect("target role was supplied");
        assert!(readiness.readiness_score >= 5);
    }

    #[test]
    fn test_one_line_backend_resume_scores_each_component() {
        let text = "Python, Java, SQL, AWS, Docker, led team of 5, increased throughput by 40%, \
                    BS Computer Science, email john@x.com, linkedin.com/in/john";
        let as_of = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        let report = engine()
            .analyze_as_of(request(text), as_of)
            .unwrap();
        assert!(
            report.ats.breakdown.contact >= 25,
            "email + linkedin present, got {}",
            report.ats.breakdown.contact
        );
        assert!(report.skills.breakdown.core_coverage > 0);
        assert!(report.experience.breakdown.impact > 0);
        assert!(
            report.overall_score >= 20,
            "single-line resume still earns real credit"
        );
        assert_eq!(report.grade, Grade::from_score(report.overall_score));
    }
}
