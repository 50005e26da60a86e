//! Prediction endpoint handlers

use axum::extract::State;
use tracing::debug;
use validator::Validate;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, PredictRequest, PredictResponse};
use crate::infrastructure::predictor::InputSchema;

/// POST /v1/predict
pub async fn create_prediction(
    State(state): State<AppState>,
    Json(request): Json<PredictRequest>,
) -> Result<Json<PredictResponse>, ApiError> {
    request
        .validate()
        .map_err(|errors| ApiError::from_validation(&errors))?;

    debug!(store_id = request.store_id, "Handling prediction request");

    let prediction = state
        .predictor
        .predict(request.into_domain())
        .await
        .map_err(ApiError::from)?;

    Ok(Json(PredictResponse {
        predicted_sales: prediction.sales,
    }))
}

/// GET /v1/schema
pub async fn get_input_schema(State(state): State<AppState>) -> Json<InputSchema> {
    Json(state.predictor.input_schema())
}
