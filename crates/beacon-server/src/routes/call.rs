//! Call Intake Routes
//!
//! HTTP handlers that delegate to CallService for the creation workflow.

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use beacon::CallIntake;

use crate::models::{CallResponse, CreateCallRequest, CreateTrafficStopRequest};
use crate::routes::error_response;
use crate::AppState;

/// Create a call from dispatch intake
#[utoipa::path(
    post,
    path = "/calls",
    request_body = CreateCallRequest,
    responses(
        (status = 200, description = "Call created", body = CallResponse),
        (status = 400, description = "Request contains invalid data"),
        (status = 409, description = "Call could not be written")
    ),
    tag = "Calls"
)]
pub async fn create_call(
    State(state): State<AppState>,
    Json(payload): Json<CreateCallRequest>,
) -> Result<Json<CallResponse>, (StatusCode, String)> {
    let call = state
        .call_service
        .create_call(CallIntake::Standard(payload.into()))
        .await
        .map_err(error_response)?;

    Ok(Json(call.into()))
}

/// Create a call from a traffic stop
#[utoipa::path(
    post,
    path = "/calls/traffic-stops",
    request_body = CreateTrafficStopRequest,
    responses(
        (status = 200, description = "Call created", body = CallResponse),
        (status = 409, description = "Call could not be written")
    ),
    tag = "Calls"
)]
pub async fn create_traffic_stop(
    State(state): State<AppState>,
    Json(payload): Json<CreateTrafficStopRequest>,
) -> Result<Json<CallResponse>, (StatusCode, String)> {
    let call = state
        .call_service
        .create_call(CallIntake::TrafficStop(payload.into()))
        .await
        .map_err(error_response)?;

    Ok(Json(call.into()))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/calls", post(create_call))
        .route("/calls/traffic-stops", post(create_traffic_stop))
}
