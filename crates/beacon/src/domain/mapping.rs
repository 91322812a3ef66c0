//! Intake Mapping
//!
//! Declarative, side-effect-free construction of a call record from an
//! intake payload, plus the display conversions used by the view layer.
//! Mapping is total over well-formed inputs: missing optional fields map
//! to absent values, never to errors.

use uuid::Uuid;

use crate::domain::entities::{Call, CallIntake, NewCall, NewTrafficStop};
use crate::domain::value_objects::{Address, CallStatus, Location};

// TODO: replace with sequence-backed call number assignment
pub const PLACEHOLDER_CALL_NUMBER: i32 = 1122;

/// Build the persisted call shape from either intake variant.
/// Status is forced to `New` and the call number to the placeholder policy
/// regardless of variant.
pub fn call_from_intake(intake: CallIntake) -> Call {
    match intake {
        CallIntake::Standard(new_call) => call_from_new_call(new_call),
        CallIntake::TrafficStop(traffic_stop) => call_from_traffic_stop(traffic_stop),
    }
}

fn call_from_new_call(intake: NewCall) -> Call {
    let location = location_from_new_call(&intake);
    Call {
        id: Uuid::new_v4(),
        call_number: PLACEHOLDER_CALL_NUMBER,
        call_type_id: intake.call_type_id,
        origination_id: intake.originated_from_id,
        dispatcher_id: intake.dispatcher_id,
        received_time: intake.received_time,
        status: CallStatus::New,
        location,
        complainant: None,
    }
}

fn call_from_traffic_stop(intake: NewTrafficStop) -> Call {
    Call {
        id: Uuid::new_v4(),
        call_number: PLACEHOLDER_CALL_NUMBER,
        call_type_id: intake.call_type_id,
        origination_id: intake.originated_from_id,
        dispatcher_id: intake.dispatcher_id,
        received_time: intake.received_time,
        status: CallStatus::New,
        location: location_from_traffic_stop(&intake),
        complainant: None,
    }
}

fn location_from_new_call(intake: &NewCall) -> Location {
    Location {
        description: intake.location_summary.clone(),
        address: Address {
            city: intake.city.clone(),
            county: intake.county.clone(),
            zip_code: intake.zip_code.clone(),
            street_number: intake.street_number.clone(),
        },
    }
}

// Traffic stops carry no structured address, only the summary.
fn location_from_traffic_stop(intake: &NewTrafficStop) -> Location {
    Location {
        description: intake.location_summary.clone(),
        address: Address::default(),
    }
}

/// Display label for a raw status code. Codes outside the fixed status set
/// map to an absent label, never an error.
pub fn status_display(code: i16) -> Option<&'static str> {
    CallStatus::from_code(code).map(CallStatus::display)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn springfield_intake() -> NewCall {
        NewCall {
            call_type_id: 3,
            originated_from_id: 1,
            dispatcher_id: None,
            received_time: Utc::now(),
            location_summary: "Front lobby".to_string(),
            city: Some("Springfield".to_string()),
            county: Some("Greene".to_string()),
            zip_code: Some("65801".to_string()),
            street_number: Some("12".to_string()),
        }
    }

    #[test]
    fn standard_intake_maps_to_new_call_with_address() {
        let call = call_from_intake(CallIntake::Standard(springfield_intake()));

        assert_eq!(call.status, CallStatus::New);
        assert_eq!(call.call_number, PLACEHOLDER_CALL_NUMBER);
        assert_eq!(call.location.description, "Front lobby");
        assert_eq!(call.location.address.city.as_deref(), Some("Springfield"));
        assert_eq!(call.location.address.county.as_deref(), Some("Greene"));
        assert_eq!(call.location.address.zip_code.as_deref(), Some("65801"));
        assert_eq!(call.location.address.street_number.as_deref(), Some("12"));
        assert!(call.complainant.is_none());
    }

    #[test]
    fn traffic_stop_maps_to_new_call_with_empty_address() {
        let intake = NewTrafficStop {
            call_type_id: 7,
            originated_from_id: 2,
            dispatcher_id: None,
            received_time: Utc::now(),
            location_summary: "I-44 westbound, mile 82".to_string(),
        };
        let call = call_from_intake(CallIntake::TrafficStop(intake));

        assert_eq!(call.status, CallStatus::New);
        assert_eq!(call.location.description, "I-44 westbound, mile 82");
        assert!(call.location.address.is_empty());
    }

    #[test]
    fn status_display_covers_the_fixed_set() {
        assert_eq!(status_display(CallStatus::Closed.code()), Some("Closed"));
        assert_eq!(status_display(CallStatus::OnScene.code()), Some("On Scene"));
        assert_eq!(status_display(CallStatus::OnHold.code()), Some("On Hold"));
    }

    #[test]
    fn status_display_of_unknown_code_is_absent() {
        assert_eq!(status_display(42), None);
    }
}
