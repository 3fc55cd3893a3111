use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use std::net::SocketAddr;
use std::sync::Arc;

use crate::api::{ApiRankRequest, ApiRankResponse};
use edgerank::config::AlgorithmConfig;
use edgerank::scoring::DiversityConfig;
use edgerank::{current_timestamp, rank_detailed_at, ranked_items};

#[derive(Clone)]
struct AppState {
    config: Arc<AlgorithmConfig>,
}

pub async fn serve(args: crate::ServeArgs) -> Result<(), String> {
    let (config, config_path) = AlgorithmConfig::load(args.config.clone())?;
    if let Some(path) = config_path.as_ref().filter(|path| path.exists()) {
        tracing::info!(path = %path.display(), "loaded ranking config");
    }

    let state = AppState {
        config: Arc::new(config),
    };

    let app = Router::new()
        .route("/api/health", get(health))
        .route("/api/rank", post(rank_handler))
        .route("/api/config", get(config_handler))
        .with_state(state);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|err| format!("invalid bind address: {}", err))?;

    tracing::info!(%addr, "edgerank listening");
    axum::serve(
        tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|err| format!("failed to bind server: {}", err))?,
        app,
    )
    .await
    .map_err(|err| format!("server error: {}", err))?;

    Ok(())
}

async fn health() -> impl IntoResponse {
    StatusCode::OK
}

async fn rank_handler(
    State(state): State<AppState>,
    Json(request): Json<ApiRankRequest>,
) -> Result<Json<ApiRankResponse>, (StatusCode, String)> {
    let mut config = (*state.config).clone();
    if let Some(overrides) = request.tenant_overrides.as_ref() {
        config.apply_tenant_overrides(overrides);
    }

    let now = request.now.unwrap_or_else(current_timestamp);
    let scored = rank_detailed_at(&request.candidates, &request.viewer, &config, now);
    let ranked = ranked_items(&scored);

    tracing::debug!(
        viewer = %request.viewer.viewer_id,
        candidates = request.candidates.len(),
        "served ranking request"
    );

    let detailed = request.include_factors.unwrap_or(false).then_some(scored);
    Ok(Json(ApiRankResponse::new(ranked, detailed)))
}

/// Admin-preview view of the active diversity settings, including the
/// informational penalty value.
async fn config_handler(State(state): State<AppState>) -> Json<DiversityConfig> {
    Json(state.config.diversity.clone())
}
