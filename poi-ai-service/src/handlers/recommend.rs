use crate::dtos::{RecommendRequest, RecommendResponse};
use crate::startup::AppState;
use axum::{extract::State, Json};
use service_core::error::AppError;
use validator::Validate;

#[tracing::instrument(
    skip(state, request),
    fields(history_len = request.user_history.len())
)]
pub async fn recommend_poi(
    State(state): State<AppState>,
    Json(request): Json<RecommendRequest>,
) -> Result<Json<RecommendResponse>, AppError> {
    request.validate()?;

    tracing::debug!(
        lat = request.current_location.lat,
        lon = request.current_location.lon,
        "Recommending POIs"
    );

    let recommendations = state
        .recommender
        .recommend(&request.user_history, request.preferences.as_ref());

    Ok(Json(RecommendResponse { recommendations }))
}
