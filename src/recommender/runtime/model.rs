use crate::recommender::domain::catalog::CategoryMap;
use crate::recommender::domain::vector::SparseVector;
use crate::recommender::runtime::vectorizer::TfidfVectorizer;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Version written into every persisted model. Bumped whenever the layout
/// or the vectorizer weighting changes.
pub const MODEL_FORMAT_VERSION: u32 = 1;

/// Reasons a fitted model cannot be served.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    #[error("Unsupported model format version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("Vectorizer vocabulary is empty")]
    EmptyVocabulary,

    #[error("Vectorizer terms and weights are inconsistent")]
    InconsistentVectorizer,

    #[error("Skill list is empty")]
    EmptySkillList,

    #[error("Skill list has {skills} entries but vector table has {rows} rows")]
    RowCountMismatch { skills: usize, rows: usize },

    #[error("Skill '{0}' appears more than once")]
    DuplicateSkill(String),

    #[error("Row {row} references term {index} outside a vocabulary of {vocabulary}")]
    IndexOutOfVocabulary {
        row: usize,
        index: usize,
        vocabulary: usize,
    },

    #[error("Skill '{0}' has no entry in the category map")]
    UncategorizedSkill(String),

    #[error("Category map lists '{0}', which is not in the model")]
    StrayCategoryEntry(String),
}

/// The three mutually consistent artifacts produced by the offline fit:
/// vectorizer, skill list, and vector table (row `i` belongs to skill `i`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifacts {
    pub format_version: u32,
    pub built_at: DateTime<Utc>,
    pub vectorizer: TfidfVectorizer,
    pub skills: Vec<String>,
    pub vectors: Vec<SparseVector>,
}

impl ModelArtifacts {
    pub fn new(
        vectorizer: TfidfVectorizer,
        skills: Vec<String>,
        vectors: Vec<SparseVector>,
    ) -> Result<Self, ModelError> {
        let artifacts = Self {
            format_version: MODEL_FORMAT_VERSION,
            built_at: Utc::now(),
            vectorizer,
            skills,
            vectors,
        };
        artifacts.validate()?;
        Ok(artifacts)
    }

    /// Checks every cross-artifact invariant. Run after building and after
    /// loading, never per query.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.format_version != MODEL_FORMAT_VERSION {
            return Err(ModelError::UnsupportedVersion {
                found: self.format_version,
                expected: MODEL_FORMAT_VERSION,
            });
        }
        if self.vectorizer.vocabulary_size() == 0 {
            return Err(ModelError::EmptyVocabulary);
        }
        if !self.vectorizer.is_consistent() {
            return Err(ModelError::InconsistentVectorizer);
        }
        if self.skills.is_empty() {
            return Err(ModelError::EmptySkillList);
        }
        if self.skills.len() != self.vectors.len() {
            return Err(ModelError::RowCountMismatch {
                skills: self.skills.len(),
                rows: self.vectors.len(),
            });
        }

        let mut seen = HashSet::with_capacity(self.skills.len());
        for skill in &self.skills {
            if !seen.insert(skill.as_str()) {
                return Err(ModelError::DuplicateSkill(skill.clone()));
            }
        }

        let vocabulary = self.vectorizer.vocabulary_size();
        for (row, vector) in self.vectors.iter().enumerate() {
            if let Some(index) = vector.max_index().filter(|&i| i >= vocabulary) {
                return Err(ModelError::IndexOutOfVocabulary {
                    row,
                    index,
                    vocabulary,
                });
            }
        }
        Ok(())
    }

    /// Checks that `categories` was produced by the same build: its keys are
    /// exactly the model's skills.
    pub fn validate_categories(&self, categories: &CategoryMap) -> Result<(), ModelError> {
        if let Some(skill) = self.skills.iter().find(|s| !categories.contains(s.as_str())) {
            return Err(ModelError::UncategorizedSkill(skill.clone()));
        }
        // Every skill is mapped and skills are distinct, so equal sizes mean
        // equal key sets.
        if categories.len() != self.skills.len() {
            let known: HashSet<&str> = self.skills.iter().map(String::as_str).collect();
            if let Some(stray) = categories.skills().find(|s| !known.contains(s)) {
                return Err(ModelError::StrayCategoryEntry(stray.to_string()));
            }
        }
        Ok(())
    }
}
