//! Skill taxonomy — static mapping of canonical skill name → recognized text
//! variants, grouped by category.
//!
//! Loaded once at engine construction and read-only afterward. Variant
//! matching is case-insensitive on word boundaries; because several variants
//! start or end with non-word characters ("c++", "c#", ".net"), the boundary
//! anchors are attached conditionally — a bare `\b` after `+` would invert
//! the boundary test and reject "C++ developer".

mod data;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::EngineError;

/// One canonical skill and the text variants that identify it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillEntry {
    pub name: String,
    pub variants: Vec<String>,
}

/// A named group of skills, in declaration order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<SkillEntry>,
}

/// A skill with its variant matchers compiled. Declaration order is the
/// canonical output order for extraction.
#[derive(Debug, Clone)]
pub struct CompiledSkill {
    pub category: String,
    pub name: String,
    matchers: Vec<Regex>,
}

impl CompiledSkill {
    /// Byte range of the first variant match in `text`, if any. The first
    /// matching variant is sufficient — variants are not counted or ranked.
    pub fn first_match(&self, text: &str) -> Option<(usize, usize)> {
        for matcher in &self.matchers {
            if let Some(m) = matcher.find(text) {
                return Some((m.start(), m.end()));
            }
        }
        None
    }
}

/// Immutable, validated skill taxonomy.
#[derive(Debug, Clone)]
pub struct SkillTaxonomy {
    categories: Vec<SkillCategory>,
    compiled: Vec<CompiledSkill>,
}

impl SkillTaxonomy {
    /// Builds and validates a taxonomy. Rejects the same variant appearing
    /// under two different canonical names — extraction would otherwise
    /// depend on declaration order in a way callers cannot see.
    pub fn new(categories: Vec<SkillCategory>) -> Result<Self, EngineError> {
        let mut variant_owner: std::collections::HashMap<String, String> =
            std::collections::HashMap::new();
        let mut compiled = Vec::new();

        for category in &categories {
            for skill in &category.skills {
                if skill.variants.is_empty() {
                    return Err(EngineError::Config(format!(
                        "skill '{}' has no variants",
                        skill.name
                    )));
                }
                let mut matchers = Vec::with_capacity(skill.variants.len());
                for variant in &skill.variants {
                    let lowered = variant.trim().to_lowercase();
                    if lowered.is_empty() {
                        return Err(EngineError::Config(format!(
                            "skill '{}' has an empty variant",
                            skill.name
                        )));
                    }
                    if let Some(owner) = variant_owner.get(&lowered) {
                        if owner != &skill.name {
                            return Err(EngineError::Config(format!(
                                "variant '{lowered}' is claimed by both '{owner}' and '{}'",
                                skill.name
                            )));
                        }
                    }
                    variant_owner.insert(lowered.clone(), skill.name.clone());
                    let pattern = variant_pattern(&lowered);
                    let regex = Regex::new(&pattern).map_err(|e| {
                        EngineError::Config(format!(
                            "variant '{lowered}' compiles to invalid pattern: {e}"
                        ))
                    })?;
                    matchers.push(regex);
                }
                compiled.push(CompiledSkill {
                    category: category.name.clone(),
                    name: skill.name.clone(),
                    matchers,
                });
            }
        }

        Ok(Self {
            categories,
            compiled,
        })
    }

    /// The built-in taxonomy shipped with the engine.
    pub fn builtin() -> Result<Self, EngineError> {
        Self::new(data::builtin_categories())
    }

    /// Loads a taxonomy from a JSON array of categories.
    pub fn from_json_str(json: &str) -> Result<Self, EngineError> {
        let categories: Vec<SkillCategory> = serde_json::from_str(json)?;
        Self::new(categories)
    }

    /// Compiled skills in declaration order.
    pub fn skills(&self) -> &[CompiledSkill] {
        &self.compiled
    }

    pub fn categories(&self) -> &[SkillCategory] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.compiled.len()
    }

    pub fn is_empty(&self) -> bool {
        self.compiled.is_empty()
    }
}

/// Builds the case-insensitive whole-word pattern for one variant.
///
/// `\b` is anchored only against ends of the variant that are word
/// characters: `c++` becomes `\bc\+\+` (a trailing `\b` after `+` would
/// require the *next* character to be a word character, rejecting
/// "worked with C++ daily").
fn variant_pattern(variant_lower: &str) -> String {
    let escaped = regex::escape(variant_lower);
    let leading = variant_lower
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_');
    let trailing = variant_lower
        .chars()
        .last()
        .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_');
    format!(
        "(?i){}{}{}",
        if leading { r"\b" } else { "" },
        escaped,
        if trailing { r"\b" } else { "" },
    )
}
