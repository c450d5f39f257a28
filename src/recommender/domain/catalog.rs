//! Static skill categories.
//!
//! A [`CategoryGrouping`] is the hand-curated table (category → skills). It is
//! inverted once, offline, into the ordered skill vocabulary and a
//! [`CategoryMap`] (skill → category) that the engine consults read-only.

use crate::recommender::domain::skills::{UNKNOWN_CATEGORY, normalize_skill};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use tracing::warn;

/// Errors raised while reading or inverting a category grouping.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The grouping file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The grouping document is not a mapping of category to skill list.
    #[error("Invalid grouping document: {0}")]
    Parse(String),

    /// A skill is listed under two different categories.
    #[error("Skill '{skill}' is assigned to both '{first}' and '{second}'")]
    ConflictingCategory {
        skill: String,
        first: String,
        second: String,
    },

    /// The grouping contains no usable skills.
    #[error("Category grouping contains no skills")]
    Empty,
}

/// How [`CategoryGrouping::invert`] treats a skill listed under two categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Fail the build.
    #[default]
    Reject,
    /// Keep the category seen last and log a warning.
    LastWriteWins,
}

/// One named group of skills.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup {
    pub name: String,
    pub skills: Vec<String>,
}

/// Ordered category → skills table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryGrouping {
    groups: Vec<CategoryGroup>,
}

/// Result of inverting a grouping.
#[derive(Debug, Clone)]
pub struct InvertedCatalog {
    /// Normalized skills in first-seen order.
    pub skills: Vec<String>,
    pub categories: CategoryMap,
}

impl CategoryGrouping {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_group<I, S>(mut self, name: &str, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groups.push(CategoryGroup {
            name: name.trim().to_string(),
            skills: skills.into_iter().map(Into::into).collect(),
        });
        self
    }

    pub fn groups(&self) -> &[CategoryGroup] {
        &self.groups
    }

    /// Parses a YAML (or JSON) mapping of category name to skill list.
    /// Key order is preserved.
    pub fn from_yaml_str(src: &str) -> Result<Self, CatalogError> {
        let mapping: serde_yaml::Mapping =
            serde_yaml::from_str(src).map_err(|e| CatalogError::Parse(e.to_string()))?;

        let mut grouping = Self::new();
        for (key, value) in mapping {
            let name = key
                .as_str()
                .ok_or_else(|| CatalogError::Parse(format!("category key {key:?} is not a string")))?
                .to_string();
            let skills: Vec<String> = serde_yaml::from_value(value)
                .map_err(|e| CatalogError::Parse(format!("category '{name}': {e}")))?;
            grouping = grouping.with_group(&name, skills);
        }
        Ok(grouping)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let txt = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&txt)
    }

    /// Inverts the table into the skill vocabulary and the skill → category
    /// map.
    pub fn invert(&self, policy: DuplicatePolicy) -> Result<InvertedCatalog, CatalogError> {
        let mut skills = Vec::new();
        let mut categories = CategoryMap::default();

        for group in &self.groups {
            for raw in &group.skills {
                let skill = normalize_skill(raw);
                if skill.is_empty() {
                    warn!(category = %group.name, "Skipping blank skill entry");
                    continue;
                }

                match categories.insert(skill.clone(), group.name.clone()) {
                    None => skills.push(skill),
                    Some(previous) if previous == group.name => {}
                    Some(previous) => match policy {
                        DuplicatePolicy::Reject => {
                            return Err(CatalogError::ConflictingCategory {
                                skill,
                                first: previous,
                                second: group.name.clone(),
                            });
                        }
                        DuplicatePolicy::LastWriteWins => {
                            warn!(
                                skill = %skill,
                                dropped = %previous,
                                kept = %group.name,
                                "Skill listed under two categories"
                            );
                        }
                    },
                }
            }
        }

        if skills.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(InvertedCatalog { skills, categories })
    }
}

/// Read-only skill → category lookup.
pub trait CategoryStore: Send + Sync + std::fmt::Debug {
    /// Category of a normalized skill, `None` when the skill is not mapped.
    fn category_of(&self, skill: &str) -> Option<&str>;

    /// Sorted distinct category names.
    fn categories(&self) -> Vec<String>;

    fn category_or_unknown(&self, skill: &str) -> &str {
        self.category_of(skill).unwrap_or(UNKNOWN_CATEGORY)
    }
}

/// Flat skill → category map, persisted as `categories.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryMap {
    entries: BTreeMap<String, String>,
}

impl CategoryMap {
    /// Inserts a mapping and returns the category previously held by the skill.
    pub fn insert(&mut self, skill: String, category: String) -> Option<String> {
        self.entries.insert(skill, category)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.entries.contains_key(skill)
    }

    /// Mapped skills in sorted order.
    pub fn skills(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl CategoryStore for CategoryMap {
    fn category_of(&self, skill: &str) -> Option<&str> {
        self.entries.get(skill).map(String::as_str)
    }

    fn categories(&self) -> Vec<String> {
        self.entries
            .values()
            .map(String::as_str)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}
