//! The offline build and the query path connected only through the artifact
//! directory.

use skill_swap_recommender::commands;
use skill_swap_recommender::config::AppConfig;
use skill_swap_recommender::recommender::persistence::providers::filesystem::{
    CATEGORIES_FILE, MODEL_FILE,
};
use std::fs;
use tempfile::TempDir;

// An explicit config file keeps a stray ./config.yaml out of the picture.
fn config_for(dir: &TempDir) -> AppConfig {
    let config_path = dir.path().join("recommender.yaml");
    fs::write(&config_path, "recommend:\n  default_top_n: 3\n").unwrap();

    let artifacts = dir.path().join("artifacts");
    AppConfig::load_from_args([
        "skill-swap-recommender",
        "--config",
        config_path.to_str().unwrap(),
        "--artifacts-dir",
        artifacts.to_str().unwrap(),
    ])
    .expect("config should load")
}

#[tokio::test]
async fn test_build_then_recommend() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&dir);

    let built = commands::build(&config, None, false).await.unwrap();
    assert_eq!(built.model.skills.len(), 121);
    assert!(dir.path().join("artifacts").join(MODEL_FILE).exists());
    assert!(dir.path().join("artifacts").join(CATEGORIES_FILE).exists());

    let response = commands::recommend_once(&config, Some(5), vec!["Notion".to_string()])
        .await
        .unwrap();
    let skills: Vec<&str> = response.recommended.iter().map(|r| r.skill.as_str()).collect();
    assert_eq!(skills, ["trello", "asana", "slack", "figjam"]);
}

#[tokio::test]
async fn test_recommend_without_artifacts_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&dir);

    let err = commands::recommend_once(&config, None, vec!["python".to_string()])
        .await
        .unwrap_err();
    assert!(format!("{err:#}").contains("model"));
}

#[tokio::test]
async fn test_build_from_grouping_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&dir);
    let grouping = dir.path().join("groups.yaml");
    fs::write(
        &grouping,
        "languages: [rust, go, python]\nops: [docker, kubernetes]\n",
    )
    .unwrap();

    let built = commands::build(&config, grouping.to_str(), false)
        .await
        .unwrap();
    assert_eq!(built.model.skills, ["rust", "go", "python", "docker", "kubernetes"]);

    let response = commands::recommend_once(&config, None, vec!["rust".to_string()])
        .await
        .unwrap();
    assert!(response.recommended.iter().all(|r| r.category == "languages"));
    assert_eq!(response.recommended.len(), 2);
}

#[tokio::test]
async fn test_build_conflicting_grouping() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&dir);
    let grouping = dir.path().join("groups.json");
    fs::write(&grouping, r#"{"design": ["figma"], "tools": ["figma", "slack"]}"#).unwrap();

    assert!(
        commands::build(&config, grouping.to_str(), false)
            .await
            .is_err()
    );

    let built = commands::build(&config, grouping.to_str(), true)
        .await
        .unwrap();
    assert_eq!(built.model.skills, ["figma", "slack"]);
}

#[tokio::test]
async fn test_recommend_refuses_categories_from_another_build() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&dir);
    commands::build(&config, None, false).await.unwrap();

    // Replace the category map with one fitted on a different grouping.
    let categories = dir.path().join("artifacts").join(CATEGORIES_FILE);
    fs::write(&categories, r#"{"docker": "ops"}"#).unwrap();

    let err = commands::recommend_once(&config, Some(3), vec!["notion".to_string()])
        .await
        .unwrap_err();
    assert!(format!("{err:#}").contains("category map"));
}
