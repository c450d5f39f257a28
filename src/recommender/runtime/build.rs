//! Offline build pipeline: category grouping in, servable artifacts out.
//!
//! This is the only code path that fits a vectorizer. The query path only
//! ever loads what this produces.

use crate::recommender::domain::catalog::{
    CatalogError, CategoryGrouping, CategoryMap, DuplicatePolicy,
};
use crate::recommender::runtime::model::{ModelArtifacts, ModelError};
use crate::recommender::runtime::vectorizer::TfidfVectorizer;
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Category grouping rejected: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Fitted model rejected: {0}")]
    Model(#[from] ModelError),
}

/// Everything a serving process needs to load.
#[derive(Debug, Clone)]
pub struct BuiltArtifacts {
    pub model: ModelArtifacts,
    pub categories: CategoryMap,
}

/// Inverts `grouping`, fits the vectorizer on the resulting skill list, and
/// vectorizes every skill.
pub fn build_artifacts(
    grouping: &CategoryGrouping,
    policy: DuplicatePolicy,
) -> Result<BuiltArtifacts, BuildError> {
    let inverted = grouping.invert(policy)?;
    let (vectorizer, vectors) = TfidfVectorizer::fit_transform(&inverted.skills);

    info!(
        name: "build.fitted",
        skills = inverted.skills.len(),
        vocabulary = vectorizer.vocabulary_size(),
        categories = inverted.categories.len(),
        "Vectorizer fitted"
    );

    let model = ModelArtifacts::new(vectorizer, inverted.skills, vectors)?;
    model.validate_categories(&inverted.categories)?;
    Ok(BuiltArtifacts {
        model,
        categories: inverted.categories,
    })
}
