//! Field configuration registry — per-career-field scoring rubrics.
//!
//! One [`FieldConfig`] per supported field, validated and frozen at engine
//! construction. Lookup goes through [`FieldRegistry::resolve`], which falls
//! back to the backend-engineering config for unknown keys and *says so* —
//! the fallback flag travels all the way into the final report metadata.

mod data;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::EngineError;
use crate::levels::ExperienceLevel;

/// Canonical key for a supported career field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKey {
    SoftwareBackend,
    SoftwareFrontend,
    DataScience,
    ProductManagement,
    UxUiDesign,
    Marketing,
}

impl FieldKey {
    pub const ALL: [FieldKey; 6] = [
        Self::SoftwareBackend,
        Self::SoftwareFrontend,
        Self::DataScience,
        Self::ProductManagement,
        Self::UxUiDesign,
        Self::Marketing,
    ];

    /// The documented fallback for unknown field keys.
    pub const DEFAULT: FieldKey = Self::SoftwareBackend;

    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "software_backend" => Some(Self::SoftwareBackend),
            "software_frontend" => Some(Self::SoftwareFrontend),
            "data_science" => Some(Self::DataScience),
            "product_management" => Some(Self::ProductManagement),
            "ux_ui_design" => Some(Self::UxUiDesign),
            "marketing" => Some(Self::Marketing),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::SoftwareBackend => "software_backend",
            Self::SoftwareFrontend => "software_frontend",
            Self::DataScience => "data_science",
            Self::ProductManagement => "product_management",
            Self::UxUiDesign => "ux_ui_design",
            Self::Marketing => "marketing",
        }
    }
}

/// Broad category a field belongs to. Drives the contact-link rubric
/// (GitHub vs portfolio) and the synthesizer's weight adjustments, replacing
/// the name-substring dispatch the scoring rules are usually written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldCategory {
    Software,
    DataScience,
    Product,
    Design,
    Marketing,
}

/// Fixed vocabulary of resume sections an ATS looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResumeSection {
    Contact,
    Summary,
    Experience,
    Education,
    Skills,
    Projects,
}

impl ResumeSection {
    /// Header spellings ATS systems (and this engine) recognize for the
    /// section.
    pub fn headers(self) -> &'static [&'static str] {
        match self {
            Self::Contact => &["contact", "personal information"],
            Self::Summary => &["summary", "profile", "objective", "about"],
            Self::Experience => &[
                "experience",
                "work history",
                "employment",
                "professional experience",
            ],
            Self::Education => &["education", "academic", "qualifications"],
            Self::Skills => &["skills", "technical skills", "competencies", "expertise"],
            Self::Projects => &["projects", "portfolio", "work samples"],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Contact => "contact",
            Self::Summary => "summary",
            Self::Experience => "experience",
            Self::Education => "education",
            Self::Skills => "skills",
            Self::Projects => "projects",
        }
    }

    /// Title-case display name for caller-facing messages.
    pub fn title(self) -> &'static str {
        match self {
            Self::Contact => "Contact",
            Self::Summary => "Summary",
            Self::Experience => "Experience",
            Self::Education => "Education",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
        }
    }
}

/// What a recruiter expects to see at each career stage in this field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExperienceExpectations {
    pub entry: Vec<String>,
    pub mid: Vec<String>,
    pub senior: Vec<String>,
}

impl ExperienceExpectations {
    pub fn for_level(&self, level: ExperienceLevel) -> &[String] {
        match level {
            ExperienceLevel::Entry => &self.entry,
            ExperienceLevel::Mid => &self.mid,
            ExperienceLevel::Senior => &self.senior,
        }
    }
}

/// Scoring rubric for one career field. Keyword lists are ordered — the
/// order is the "importance" order used when suggesting missing skills.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldConfig {
    pub name: String,
    pub category: FieldCategory,
    pub core_keywords: Vec<String>,
    pub supporting_keywords: Vec<String>,
    pub required_sections: Vec<ResumeSection>,
    pub impact_metrics: Vec<String>,
    pub red_flags: Vec<String>,
    pub expectations: ExperienceExpectations,
}

impl FieldConfig {
    /// Core and supporting keyword sets must be disjoint; a keyword in both
    /// would be double-counted by the coverage rubrics.
    fn validate(&self) -> Result<(), EngineError> {
        let core: std::collections::HashSet<&str> =
            self.core_keywords.iter().map(String::as_str).collect();
        for kw in &self.supporting_keywords {
            if core.contains(kw.as_str()) {
                return Err(EngineError::Config(format!(
                    "field '{}': keyword '{kw}' appears in both core and supporting sets",
                    self.name
                )));
            }
        }
        if self.required_sections.is_empty() {
            return Err(EngineError::Config(format!(
                "field '{}': required section list is empty",
                self.name
            )));
        }
        Ok(())
    }
}

/// A resolved field lookup. `fallback` is true when the requested key was
/// unknown and the default config was substituted.
#[derive(Debug, Clone, Copy)]
pub struct FieldLookup<'a> {
    pub key: FieldKey,
    pub config: &'a FieldConfig,
    pub fallback: bool,
}

/// A (key, display name) pair for UI field selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldListing {
    pub key: FieldKey,
    pub name: String,
}

/// Immutable registry of all field configs.
#[derive(Debug, Clone)]
pub struct FieldRegistry {
    configs: std::collections::BTreeMap<FieldKey, FieldConfig>,
}

impl FieldRegistry {
    pub fn new(
        configs: Vec<(FieldKey, FieldConfig)>,
    ) -> Result<Self, EngineError> {
        let mut map = std::collections::BTreeMap::new();
        for (key, config) in configs {
            config.validate()?;
            if map.insert(key, config).is_some() {
                return Err(EngineError::Config(format!(
                    "duplicate field config for key '{}'",
                    key.as_str()
                )));
            }
        }
        if !map.contains_key(&FieldKey::DEFAULT) {
            return Err(EngineError::Config(format!(
                "registry must contain the fallback field '{}'",
                FieldKey::DEFAULT.as_str()
            )));
        }
        Ok(Self { configs: map })
    }

    pub fn builtin() -> Result<Self, EngineError> {
        Self::new(data::builtin_configs())
    }

    pub fn from_json_str(json: &str) -> Result<Self, EngineError> {
        let configs: Vec<(FieldKey, FieldConfig)> = serde_json::from_str(json)?;
        Self::new(configs)
    }

    /// Resolves a raw field key string, falling back to the default field
    /// for unknown keys. The fallback is flagged, never silent.
    pub fn resolve(&self, raw_key: &str) -> FieldLookup<'_> {
        match FieldKey::parse(raw_key).and_then(|key| self.configs.get(&key).map(|c| (key, c))) {
            Some((key, config)) => FieldLookup {
                key,
                config,
                fallback: false,
            },
            None => {
                warn!(requested = raw_key, "unknown field key, using default field config");
                FieldLookup {
                    key: FieldKey::DEFAULT,
                    config: &self.configs[&FieldKey::DEFAULT],
                    fallback: true,
                }
            }
        }
    }

    pub fn get(&self, key: FieldKey) -> Option<&FieldConfig> {
        self.configs.get(&key)
    }

    pub fn len(&self) -> usize {
        self.configs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }

    /// Fields available for UI selection, in key order.
    pub fn available(&self) -> Vec<FieldListing> {
        self.configs
            .iter()
            .map(|(key, config)| FieldListing {
                key: *key,
                name: config.name.clone(),
            })
            .collect()
    }
}
