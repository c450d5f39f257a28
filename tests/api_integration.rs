//! HTTP-level tests for the recommendation API.

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{Value, json};
use skill_swap_recommender::AppState;
use skill_swap_recommender::config::{
    AppConfig, ArtifactsConfig, CatalogConfig, LogFormat, RecommendConfig, ResilienceConfig,
    ServerConfig, TelemetryConfig,
};
use skill_swap_recommender::recommender::defaults::default_grouping;
use skill_swap_recommender::recommender::domain::catalog::DuplicatePolicy;
use skill_swap_recommender::recommender::runtime::{Recommender, build_artifacts};
use skill_swap_recommender::recommender::security::rate_limit::build_rate_limiter;
use skill_swap_recommender::server::build_router;
use std::sync::Arc;

fn test_config(rate_limit_enabled: bool) -> AppConfig {
    AppConfig {
        server: ServerConfig {
            port: 0,
            host: "127.0.0.1".to_string(),
            cors_enabled: true,
        },
        artifacts: ArtifactsConfig {
            dir: "artifacts".to_string(),
        },
        catalog: CatalogConfig {
            grouping_file: None,
            reject_duplicates: true,
        },
        recommend: RecommendConfig { default_top_n: 3 },
        resilience: ResilienceConfig {
            rate_limit_enabled,
            requests_per_second: 1,
            burst_size: 1,
            timeout_secs: 30,
            timeout_disabled: false,
        },
        telemetry: TelemetryConfig {
            log_format: LogFormat::Compact,
        },
    }
}

fn setup_server(rate_limit_enabled: bool) -> TestServer {
    let built = build_artifacts(&default_grouping(), DuplicatePolicy::Reject).unwrap();
    let recommender = Recommender::new(built.model, Arc::new(built.categories)).unwrap();
    let config = test_config(rate_limit_enabled);

    let state = AppState {
        recommender: Arc::new(recommender),
        rate_limiter: build_rate_limiter(&config.resilience),
        config: Arc::new(config),
    };
    TestServer::new(build_router(state)).unwrap()
}

#[tokio::test]
async fn test_root_and_health() {
    let server = setup_server(false);

    let root = server.get("/").await;
    root.assert_status_ok();
    assert!(root.json::<Value>()["message"].as_str().unwrap().contains("/recommend"));

    let health = server.get("/health").await;
    health.assert_status_ok();
    health.assert_json(&json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_categories_sorted() {
    let server = setup_server(false);

    let response = server.get("/categories").await;
    response.assert_status_ok();
    response.assert_json(&json!({
        "categories": ["business", "data", "design", "programming", "soft", "tools"]
    }));
}

#[tokio::test]
async fn test_recommend_list_input() {
    let server = setup_server(false);

    let response = server
        .post("/recommend")
        .json(&json!({ "skills": ["notion"], "top_n": 5 }))
        .await;
    response.assert_status_ok();
    response.assert_json(&json!({
        "input": ["notion"],
        "recommended": [
            { "skill": "trello", "category": "tools" },
            { "skill": "asana", "category": "tools" },
            { "skill": "slack", "category": "tools" },
            { "skill": "figjam", "category": "tools" }
        ]
    }));
}

#[tokio::test]
async fn test_recommend_default_top_n_and_string_input() {
    let server = setup_server(false);

    let response = server
        .post("/recommend")
        .json(&json!({ "skills": "HTML CSS javascript" }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["input"], json!("HTML CSS javascript"));
    let recommended = body["recommended"].as_array().unwrap();
    assert_eq!(recommended.len(), 3);
    assert!(recommended.iter().all(|r| r["category"] == "programming"));
}

#[tokio::test]
async fn test_recommend_non_positive_top_n() {
    let server = setup_server(false);

    for top_n in [0, -3] {
        let response = server
            .post("/recommend")
            .json(&json!({ "skills": ["python"], "top_n": top_n }))
            .await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["recommended"], json!([]));
    }
}

#[tokio::test]
async fn test_recommend_rejects_malformed_body() {
    let server = setup_server(false);

    let response = server
        .post("/recommend")
        .json(&json!({ "top_n": 3 }))
        .expect_failure()
        .await;
    assert!(response.status_code().is_client_error());
}

#[tokio::test]
async fn test_rate_limit_returns_429() {
    let server = setup_server(true);

    server.get("/health").await.assert_status_ok();
    server
        .get("/health")
        .expect_failure()
        .await
        .assert_status(StatusCode::TOO_MANY_REQUESTS);
}
