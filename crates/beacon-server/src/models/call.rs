//! Call intake and view models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use beacon::domain::mapping::status_display;
use beacon::{Address, Call, Location, NewCall, NewTrafficStop};

// ============================================
// Request DTOs
// ============================================

/// Standard-call intake from dispatch
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCallRequest {
    pub call_type_id: i32,
    pub originated_from_id: i32,
    pub dispatcher_id: Option<Uuid>,
    pub received_time: DateTime<Utc>,
    pub location_summary: String,
    pub city: Option<String>,
    pub county: Option<String>,
    pub zip_code: Option<String>,
    pub street_number: Option<String>,
}

/// Traffic-stop intake logged from the field
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTrafficStopRequest {
    pub call_type_id: i32,
    pub originated_from_id: i32,
    pub dispatcher_id: Option<Uuid>,
    pub received_time: DateTime<Utc>,
    pub location_summary: String,
}

impl From<CreateCallRequest> for NewCall {
    fn from(req: CreateCallRequest) -> Self {
        Self {
            call_type_id: req.call_type_id,
            originated_from_id: req.originated_from_id,
            dispatcher_id: req.dispatcher_id,
            received_time: req.received_time,
            location_summary: req.location_summary,
            city: req.city,
            county: req.county,
            zip_code: req.zip_code,
            street_number: req.street_number,
        }
    }
}

impl From<CreateTrafficStopRequest> for NewTrafficStop {
    fn from(req: CreateTrafficStopRequest) -> Self {
        Self {
            call_type_id: req.call_type_id,
            originated_from_id: req.originated_from_id,
            dispatcher_id: req.dispatcher_id,
            received_time: req.received_time,
            location_summary: req.location_summary,
        }
    }
}

// ============================================
// Response DTOs
// ============================================

/// Call view returned to the transport boundary
#[derive(Debug, Serialize, ToSchema)]
pub struct CallResponse {
    pub id: Uuid,
    pub call_number: i32,
    pub call_type_id: i32,
    pub origination_id: i32,
    pub dispatcher_id: Option<Uuid>,
    pub received_time: DateTime<Utc>,
    /// Display label; absent for status codes outside the fixed set
    pub status: Option<String>,
    pub location: LocationResponse,
    /// "first last" when a complainant is attached
    pub complainant: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LocationResponse {
    pub description: String,
    pub address: AddressResponse,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AddressResponse {
    pub city: Option<String>,
    pub county: Option<String>,
    pub zip_code: Option<String>,
    pub street_number: Option<String>,
}

impl From<Address> for AddressResponse {
    fn from(address: Address) -> Self {
        Self {
            city: address.city,
            county: address.county,
            zip_code: address.zip_code,
            street_number: address.street_number,
        }
    }
}

impl From<Location> for LocationResponse {
    fn from(location: Location) -> Self {
        Self {
            description: location.description,
            address: location.address.into(),
        }
    }
}

impl From<Call> for CallResponse {
    fn from(call: Call) -> Self {
        Self {
            id: call.id,
            call_number: call.call_number,
            call_type_id: call.call_type_id,
            origination_id: call.origination_id,
            dispatcher_id: call.dispatcher_id,
            received_time: call.received_time,
            status: status_display(call.status.code()).map(str::to_string),
            complainant: call
                .complainant
                .as_ref()
                .map(|c| format!("{} {}", c.first_name, c.last_name)),
            location: call.location.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use beacon::{CallStatus, Complainant};

    fn stored_call() -> Call {
        Call {
            id: Uuid::new_v4(),
            call_number: 1122,
            call_type_id: 3,
            origination_id: 1,
            dispatcher_id: None,
            received_time: Utc::now(),
            status: CallStatus::Closed,
            location: Location {
                description: "Front lobby".to_string(),
                address: Address {
                    city: Some("Springfield".to_string()),
                    county: Some("Greene".to_string()),
                    zip_code: Some("65801".to_string()),
                    street_number: Some("12".to_string()),
                },
            },
            complainant: Some(Complainant {
                first_name: "Jane".to_string(),
                last_name: "Doe".to_string(),
            }),
        }
    }

    #[test]
    fn view_derives_display_fields() {
        let view = CallResponse::from(stored_call());
        assert_eq!(view.status.as_deref(), Some("Closed"));
        assert_eq!(view.complainant.as_deref(), Some("Jane Doe"));
        assert_eq!(view.location.address.city.as_deref(), Some("Springfield"));
    }

    #[test]
    fn view_mapping_is_idempotent() {
        let call = stored_call();
        let first = CallResponse::from(call.clone());
        let second = CallResponse::from(call);
        assert_eq!(
            serde_json::to_value(&first).unwrap(),
            serde_json::to_value(&second).unwrap()
        );
    }

    #[test]
    fn absent_complainant_stays_absent() {
        let mut call = stored_call();
        call.complainant = None;
        let view = CallResponse::from(call);
        assert_eq!(view.complainant, None);
    }
}
