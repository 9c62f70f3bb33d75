use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use serde::Serialize;

use crate::error::ApiError;
use crate::models::{NewSwapRequest, SwapRequest};
use crate::AppState;

#[derive(Serialize)]
pub struct CreateSwapRequestResponse {
    pub message: String,
    pub request: SwapRequest,
}

pub async fn create_swap_request(
    State(state): State<AppState>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Json<CreateSwapRequestResponse>, ApiError> {
    let Json(body) = payload?;

    // Validate before anything touches the ledger
    let new_request = NewSwapRequest::from_json(&body)?;
    let request = state.ledger.create(new_request).await;

    Ok(Json(CreateSwapRequestResponse {
        message: "Swap request created".to_string(),
        request,
    }))
}

// All swap requests in creation order
pub async fn list_swap_requests(State(state): State<AppState>) -> Json<Vec<SwapRequest>> {
    Json(state.ledger.list().await)
}
