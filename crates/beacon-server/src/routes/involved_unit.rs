//! Involved Unit Routes
//!
//! HTTP handlers for the units responding to a call. Pagination parameter
//! defaults are owned here, not by the workflow.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::models::{
    CreateInvolvedUnitRequest, InvolvedUnitPageResponse, InvolvedUnitResponse,
    UpdateInvolvedUnitRequest,
};
use crate::routes::error_response;
use crate::AppState;

const DEFAULT_PAGE: u32 = 1;
const DEFAULT_COUNT: u32 = 20;

/// Listing window, 1-based
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListUnitsQuery {
    pub page: Option<u32>,
    pub count: Option<u32>,
}

/// Add a unit to a call
#[utoipa::path(
    post,
    path = "/calls/{call_id}/involved-units",
    request_body = CreateInvolvedUnitRequest,
    params(("call_id" = Uuid, Path, description = "The id of the call for service")),
    responses(
        (status = 200, description = "Unit attached", body = InvolvedUnitResponse),
        (status = 404, description = "Call does not exist"),
        (status = 409, description = "Unit already attached")
    ),
    tag = "Involved Units"
)]
pub async fn add_involved_unit(
    State(state): State<AppState>,
    Path(call_id): Path<Uuid>,
    Json(payload): Json<CreateInvolvedUnitRequest>,
) -> Result<Json<InvolvedUnitResponse>, (StatusCode, String)> {
    let unit = state
        .involved_unit_service
        .add_unit(call_id, payload.unit_number, payload.officer_name)
        .await
        .map_err(error_response)?;

    Ok(Json(unit.into()))
}

/// List the units involved in a call
#[utoipa::path(
    get,
    path = "/calls/{call_id}/involved-units",
    params(
        ("call_id" = Uuid, Path, description = "The id of the call for service"),
        ListUnitsQuery
    ),
    responses(
        (status = 200, description = "One page of units", body = InvolvedUnitPageResponse),
        (status = 404, description = "Call does not exist")
    ),
    tag = "Involved Units"
)]
pub async fn list_involved_units(
    State(state): State<AppState>,
    Path(call_id): Path<Uuid>,
    Query(query): Query<ListUnitsQuery>,
) -> Result<Json<InvolvedUnitPageResponse>, (StatusCode, String)> {
    let page = state
        .involved_unit_service
        .list_units(
            call_id,
            query.page.unwrap_or(DEFAULT_PAGE),
            query.count.unwrap_or(DEFAULT_COUNT),
        )
        .await
        .map_err(error_response)?;

    Ok(Json(page.into()))
}

/// Update an involved unit
#[utoipa::path(
    put,
    path = "/calls/{call_id}/involved-units",
    request_body = UpdateInvolvedUnitRequest,
    params(("call_id" = Uuid, Path, description = "The id of the call for service")),
    responses(
        (status = 200, description = "Unit updated", body = InvolvedUnitResponse),
        (status = 404, description = "Call or unit does not exist"),
        (status = 409, description = "Concurrent update detected")
    ),
    tag = "Involved Units"
)]
pub async fn update_involved_unit(
    State(state): State<AppState>,
    Path(call_id): Path<Uuid>,
    Json(payload): Json<UpdateInvolvedUnitRequest>,
) -> Result<Json<InvolvedUnitResponse>, (StatusCode, String)> {
    let unit = state
        .involved_unit_service
        .update_unit(call_id, payload.id, payload.unit_number, payload.officer_name)
        .await
        .map_err(error_response)?;

    Ok(Json(unit.into()))
}

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/calls/:call_id/involved-units",
        post(add_involved_unit)
            .get(list_involved_units)
            .put(update_involved_unit),
    )
}
