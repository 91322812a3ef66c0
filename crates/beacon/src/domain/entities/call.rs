//! Call - Call-for-Service Aggregate
//!
//! A logged incident requiring a response. Created once through the call
//! creation workflow and mutated only through narrower operations afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::{CallStatus, Location};

/// Call for service - the aggregate root
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Call {
    pub id: Uuid,
    /// Dispatch-facing numeric identifier, assigned at creation
    pub call_number: i32,
    pub call_type_id: i32,
    pub origination_id: i32,
    pub dispatcher_id: Option<Uuid>,
    pub received_time: DateTime<Utc>,
    pub status: CallStatus,
    pub location: Location,
    pub complainant: Option<Complainant>,
}

/// Complainant attached to a call, when one is known
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Complainant {
    pub first_name: String,
    pub last_name: String,
}

/// Dispatch intake for a standard call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCall {
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

/// Intake logged from a traffic stop. Carries no structured address,
/// only the officer's free-text location summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTrafficStop {
    pub call_type_id: i32,
    pub originated_from_id: i32,
    pub dispatcher_id: Option<Uuid>,
    pub received_time: DateTime<Utc>,
    pub location_summary: String,
}

/// The intake variants that can originate a call, dispatched through a
/// single creation workflow entry point.
#[derive(Debug, Clone)]
pub enum CallIntake {
    Standard(NewCall),
    TrafficStop(NewTrafficStop),
}
