use axum::{
    Router,
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::IntoResponse,
};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use anyhow::Context;
use tracing::info;

use crate::AppState;
use crate::config::AppConfig;
use crate::recommender::{
    self,
    persistence::{ArtifactStore, providers::filesystem::FileSystemStore},
    runtime::Recommender,
    security::rate_limit::{build_rate_limiter, rate_limit_middleware},
};

/// Loads the persisted artifacts into a ready engine. Any missing, malformed
/// or inconsistent artifact is an error; nothing is served from a degenerate
/// model.
pub async fn load_recommender(store: &dyn ArtifactStore) -> anyhow::Result<Recommender> {
    let model = store
        .load_model()
        .await
        .context("Failed to load model artifact")?;
    let categories = store
        .load_categories()
        .await
        .context("Failed to load category map")?;
    model
        .validate_categories(&categories)
        .context("Model and category map come from different builds")?;

    let recommender = Recommender::new(model, Arc::new(categories))?;
    info!(
        name: "recommender.ready",
        skills = recommender.skills().len(),
        vocabulary = recommender.vocabulary_size(),
        "Recommender ready"
    );
    Ok(recommender)
}

/// Assemble the API router with its middleware stack.
pub fn build_router(state: AppState) -> Router {
    // A disabled timeout is a very long one so the layer types stay the same.
    let timeout_duration = if state.config.resilience.timeout_disabled {
        Duration::from_secs(365 * 24 * 60 * 60) // 1 year
    } else {
        Duration::from_secs(state.config.resilience.timeout_secs)
    };

    let cors = if state.config.server.cors_enabled {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
    };

    recommender::api::build_router()
        .layer(axum::middleware::from_fn(
            move |req: Request, next: Next| {
                let duration = timeout_duration;
                async move {
                    match tokio::time::timeout(duration, next.run(req)).await {
                        Ok(res) => res,
                        Err(_) => {
                            (StatusCode::REQUEST_TIMEOUT, "Request timed out").into_response()
                        }
                    }
                }
            },
        ))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            rate_limit_middleware,
        ))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> anyhow::Result<()> {
    let store = FileSystemStore::new(&config.artifacts.dir);
    let recommender = Arc::new(
        load_recommender(&store)
            .await
            .with_context(|| format!("Cannot serve from {}", store.dir().display()))?,
    );

    let state = AppState {
        recommender,
        rate_limiter: build_rate_limiter(&config.resilience),
        config: config.clone(),
    };
    let app = build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        name: "server.started",
        address = %addr,
        "Server started"
    );

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!(name: "server.stopping", "Shutdown signal received");
}
