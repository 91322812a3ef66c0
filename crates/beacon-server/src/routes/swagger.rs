//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{
    AddressResponse, CallResponse, CreateCallRequest, CreateInvolvedUnitRequest,
    CreateTrafficStopRequest, InvolvedUnitPageResponse, InvolvedUnitResponse, LocationResponse,
    UpdateInvolvedUnitRequest,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Call endpoints
        super::call::create_call,
        super::call::create_traffic_stop,
        // Involved unit endpoints
        super::involved_unit::add_involved_unit,
        super::involved_unit::list_involved_units,
        super::involved_unit::update_involved_unit,
    ),
    components(schemas(
        CreateCallRequest,
        CreateTrafficStopRequest,
        CallResponse,
        LocationResponse,
        AddressResponse,
        CreateInvolvedUnitRequest,
        UpdateInvolvedUnitRequest,
        InvolvedUnitResponse,
        InvolvedUnitPageResponse,
    )),
    tags(
        (name = "Calls", description = "Call-for-service intake"),
        (name = "Involved Units", description = "Units responding to a call")
    ),
    info(
        title = "Beacon API",
        description = "Records management backend for public-safety calls for service"
    )
)]
pub struct ApiDoc;
