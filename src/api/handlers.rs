use axum::{
    extract::{Query, State},
    Extension, Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::RequestId;
use crate::models::DisplayRecord;
use crate::services::title_search;

use super::AppState;

// Request/Response types

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub movies: usize,
    pub loaded_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct TitleQuery {
    pub q: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct RecommendationQuery {
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub title: String,
    pub recommendations: Vec<DisplayRecord>,
}

// Handlers

/// Health check endpoint, reporting the loaded model size
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let model = state.recommender.model();
    Json(HealthResponse {
        status: "healthy".to_string(),
        movies: model.catalog().len(),
        loaded_at: model.loaded_at(),
    })
}

/// List catalog titles, optionally filtered by `q`
pub async fn list_titles(
    State(state): State<AppState>,
    Query(params): Query<TitleQuery>,
) -> Json<Vec<String>> {
    let catalog = state.recommender.model().catalog();
    Json(title_search::list_titles(
        catalog,
        params.q.as_deref(),
        params.limit,
    ))
}

/// Recommend movies similar to `title`
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(params): Query<RecommendationQuery>,
) -> AppResult<Json<RecommendationResponse>> {
    if params.title.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "Query parameter 'title' is required".to_string(),
        ));
    }

    tracing::info!(
        request_id = %request_id,
        title = %params.title,
        "Processing recommendation request"
    );

    let recommendations = state.recommender.recommend(&params.title).await?;

    tracing::info!(
        request_id = %request_id,
        results = recommendations.len(),
        "Recommendations completed"
    );

    Ok(Json(RecommendationResponse {
        title: params.title,
        recommendations,
    }))
}
