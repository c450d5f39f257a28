//! Entry points behind the `build` and `recommend` subcommands.

use crate::config::AppConfig;
use crate::recommender::api::types::{RecommendResponse, SkillsInput, resolve_top_n};
use crate::recommender::defaults::default_grouping;
use crate::recommender::domain::catalog::{CategoryGrouping, DuplicatePolicy};
use crate::recommender::persistence::ArtifactStore;
use crate::recommender::persistence::providers::filesystem::FileSystemStore;
use crate::recommender::runtime::{BuiltArtifacts, build_artifacts};
use crate::server::load_recommender;
use anyhow::Context;
use tracing::info;

/// Picks the grouping table: explicit path, then the configured file, then
/// the built-in table.
pub fn resolve_grouping(
    config: &AppConfig,
    grouping_override: Option<&str>,
) -> anyhow::Result<CategoryGrouping> {
    match grouping_override.or(config.catalog.grouping_file.as_deref()) {
        Some(path) => CategoryGrouping::from_file(path)
            .with_context(|| format!("Failed to read category grouping {path}")),
        None => Ok(default_grouping()),
    }
}

/// Runs the offline pipeline and persists its artifacts into
/// `artifacts.dir`.
pub async fn build(
    config: &AppConfig,
    grouping_override: Option<&str>,
    allow_duplicates: bool,
) -> anyhow::Result<BuiltArtifacts> {
    let grouping = resolve_grouping(config, grouping_override)?;
    let policy = if allow_duplicates || !config.catalog.reject_duplicates {
        DuplicatePolicy::LastWriteWins
    } else {
        DuplicatePolicy::Reject
    };

    let built = build_artifacts(&grouping, policy)?;

    let store = FileSystemStore::new(&config.artifacts.dir);
    store.save_model(&built.model).await?;
    store.save_categories(&built.categories).await?;

    info!(
        name: "build.completed",
        dir = %store.dir().display(),
        skills = built.model.skills.len(),
        "Artifacts built"
    );
    Ok(built)
}

/// Loads the artifacts and answers a single query.
pub async fn recommend_once(
    config: &AppConfig,
    top_n: Option<i64>,
    skills: Vec<String>,
) -> anyhow::Result<RecommendResponse> {
    let store = FileSystemStore::new(&config.artifacts.dir);
    let recommender = load_recommender(&store).await?;

    let input = SkillsInput::Many(skills);
    let top_n = resolve_top_n(top_n, config.recommend.default_top_n);
    let recommended = recommender.recommend(&input.to_query(), top_n);

    Ok(RecommendResponse { input, recommended })
}
