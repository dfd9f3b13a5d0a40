use crate::dtos::{DescribeRequest, DescribeResponse};
use crate::startup::AppState;
use axum::{extract::State, Json};
use service_core::error::AppError;
use validator::Validate;

#[tracing::instrument(skip(state, request), fields(poi_type = %request.poi_type))]
pub async fn describe_poi(
    State(state): State<AppState>,
    Json(request): Json<DescribeRequest>,
) -> Result<Json<DescribeResponse>, AppError> {
    request.validate()?;

    let description = state
        .assistant
        .describe(
            &request.poi_name,
            &request.poi_type,
            request.location.as_deref(),
        )
        .await;

    Ok(Json(description.into()))
}
