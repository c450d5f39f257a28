//! Directory-backed artifact store.
//!
//! Layout:
//! - `model.json` - vectorizer, skill list and vector table
//! - `categories.json` - flat skill → category map

use crate::recommender::domain::catalog::CategoryMap;
use crate::recommender::persistence::{ArtifactError, ArtifactStore};
use crate::recommender::runtime::model::ModelArtifacts;
use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::info;

pub const MODEL_FILE: &str = "model.json";
pub const CATEGORIES_FILE: &str = "categories.json";

#[derive(Debug, Clone)]
pub struct FileSystemStore {
    dir: PathBuf,
}

impl FileSystemStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn model_path(&self) -> PathBuf {
        self.dir.join(MODEL_FILE)
    }

    pub fn categories_path(&self) -> PathBuf {
        self.dir.join(CATEGORIES_FILE)
    }

    async fn write_json<T: Serialize + Sync>(
        &self,
        path: PathBuf,
        value: &T,
    ) -> Result<(), ArtifactError> {
        let bytes = serde_json::to_vec_pretty(value).map_err(|source| ArtifactError::Json {
            path: path.display().to_string(),
            source,
        })?;

        let dir = self.dir.clone();
        let display = path.display().to_string();
        tokio::task::spawn_blocking(move || write_atomic(&dir, &path, &bytes))
            .await
            .map_err(std::io::Error::other)
            .and_then(|res| res)
            .map_err(|source| ArtifactError::Io {
                path: display,
                source,
            })
    }

    async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| ArtifactError::Io {
                path: path.display().to_string(),
                source,
            })?;
        serde_json::from_slice(&bytes).map_err(|source| ArtifactError::Json {
            path: path.display().to_string(),
            source,
        })
    }
}

/// Writes through a temp file in the target directory and renames it into
/// place, so readers never observe a partial artifact.
fn write_atomic(dir: &Path, path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    std::fs::create_dir_all(dir)?;
    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(bytes)?;
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[async_trait]
impl ArtifactStore for FileSystemStore {
    async fn save_model(&self, model: &ModelArtifacts) -> Result<(), ArtifactError> {
        model.validate()?;
        self.write_json(self.model_path(), model).await?;
        info!(
            name: "artifacts.model.saved",
            path = %self.model_path().display(),
            skills = model.skills.len(),
            "Model artifact written"
        );
        Ok(())
    }

    async fn load_model(&self) -> Result<ModelArtifacts, ArtifactError> {
        let model: ModelArtifacts = Self::read_json(&self.model_path()).await?;
        model.validate()?;
        info!(
            name: "artifacts.model.loaded",
            skills = model.skills.len(),
            vocabulary = model.vectorizer.vocabulary_size(),
            built_at = %model.built_at,
            "Model artifact loaded"
        );
        Ok(model)
    }

    async fn save_categories(&self, categories: &CategoryMap) -> Result<(), ArtifactError> {
        self.write_json(self.categories_path(), categories).await?;
        info!(
            name: "artifacts.categories.saved",
            path = %self.categories_path().display(),
            skills = categories.len(),
            "Category map written"
        );
        Ok(())
    }

    async fn load_categories(&self) -> Result<CategoryMap, ArtifactError> {
        Self::read_json(&self.categories_path()).await
    }
}
