//! Storage for the artifacts produced by the offline build.
//!
//! # Providers
//!
//! - [`FileSystemStore`](providers::filesystem::FileSystemStore) - JSON files in
//!   a directory, written atomically.

use crate::recommender::domain::catalog::CategoryMap;
use crate::recommender::runtime::model::{ModelArtifacts, ModelError};
use async_trait::async_trait;

pub mod providers;

/// Errors raised while reading or writing artifacts.
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    /// An artifact file is missing or unreadable.
    #[error("IO error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// An artifact could not be encoded or decoded.
    #[error("Malformed artifact {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// The artifacts decoded but do not describe a servable model.
    #[error("Inconsistent model artifact: {0}")]
    Inconsistent(#[from] ModelError),
}

#[async_trait]
pub trait ArtifactStore: Send + Sync + std::fmt::Debug {
    /// Persists a fitted model. The model is validated first.
    async fn save_model(&self, model: &ModelArtifacts) -> Result<(), ArtifactError>;

    /// Loads and validates a fitted model.
    async fn load_model(&self) -> Result<ModelArtifacts, ArtifactError>;

    async fn save_categories(&self, categories: &CategoryMap) -> Result<(), ArtifactError>;

    async fn load_categories(&self) -> Result<CategoryMap, ArtifactError>;
}
