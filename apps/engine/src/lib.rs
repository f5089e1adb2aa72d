//! Resume-to-career scoring engine.
//!
//! Deterministic pipeline: free-form resume text goes in, a synthesized
//! [`ReadinessReport`] comes out — structured skill signals, field-calibrated
//! ATS and depth scores, role readiness against a progression model, and
//! prioritized, explainable recommendations. All matching is keyword and
//! regex based; there are no model calls and no hidden state, so identical
//! inputs always produce identical reports.
//!
//! The engine is computation-only. Document text extraction, persistence,
//! sessions, and the HTTP surface are the caller's concern; every type a
//! caller would serialize derives `Serialize` with stable snake_case names.
//!
//! ```
//! use engine::{AnalysisRequest, Engine, ExperienceLevel};
//!
//! let engine = Engine::with_defaults()?;
//! let report = engine.analyze(AnalysisRequest {
//!     text: "jane@corp.io | EXPERIENCE | built python services on aws, \
//!            reduced latency 40% | SKILLS | python, sql, docker",
//!     field_key: "software_backend",
//!     level: ExperienceLevel::Mid,
//!     ..Default::default()
//! })?;
//! assert!(report.overall_score <= 100);
//! # Ok::<(), engine::EngineError>(())
//! ```

pub mod analysis;
pub mod engine;
pub mod errors;
pub mod extraction;
pub mod fields;
pub mod levels;
pub mod roles;
pub mod score;
pub mod taxonomy;

pub use analysis::ats::{AtsBreakdown, AtsReport};
pub use analysis::experience::{ExperienceBreakdown, ExperienceReport};
pub use analysis::readiness::{ReadinessComponents, ReadinessStatus};
pub use analysis::recommend::{ConfidenceLevel, RoleRecommendation, WhyReasoning};
pub use analysis::report::{
    AnalysisMetadata, ComponentScores, Grade, Improvement, Priority, ReadinessReport, Summary,
};
pub use analysis::skills::{SkillsBreakdown, SkillsReport};
pub use engine::{AnalysisRequest, Engine, MIN_TEXT_LEN};
pub use errors::EngineError;
pub use extraction::{DepthSignal, DetectedSkill, ExtractedSkillSet, ProficiencyTier};
pub use fields::{FieldConfig, FieldKey, FieldRegistry, ResumeSection};
pub use levels::{ExperienceLevel, RoleLevel};
pub use roles::{Interest, RoleCatalog, RoleProfile, SkillRequirements};
pub use taxonomy::SkillTaxonomy;
