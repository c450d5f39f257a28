use crate::AppState;
use crate::recommender::api::types::{
    CategoriesResponse, HealthResponse, RecommendRequest, RecommendResponse, RootResponse,
    resolve_top_n,
};
use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use tracing::info;

pub fn build_router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/categories", get(list_categories))
        .route("/recommend", post(recommend))
}

/// GET / - Service banner.
async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Skill Swap Recommender API is live! Use POST /recommend".to_string(),
    })
}

/// GET /health - Liveness probe.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// GET /categories - Sorted distinct category names.
async fn list_categories(State(state): State<AppState>) -> Json<CategoriesResponse> {
    Json(CategoriesResponse {
        categories: state.recommender.categories(),
    })
}

/// POST /recommend - Recommend skills related to the ones sent.
async fn recommend(
    State(state): State<AppState>,
    Json(req): Json<RecommendRequest>,
) -> Json<RecommendResponse> {
    let top_n = resolve_top_n(req.top_n, state.config.recommend.default_top_n);
    let query = req.skills.to_query();
    let recommended = state.recommender.recommend(&query, top_n);

    info!(
        name: "recommend.served",
        held = query.held().len(),
        top_n,
        returned = recommended.len(),
        "Recommendations served"
    );

    Json(RecommendResponse {
        input: req.skills,
        recommended,
    })
}
