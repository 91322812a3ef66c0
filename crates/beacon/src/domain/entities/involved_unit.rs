//! InvolvedUnit - Responding Unit Record
//!
//! A unit (vehicle/person) associated with exactly one call. Created,
//! updated, and listed independently of the call's own field set.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unit involved in a call for service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvolvedUnit {
    pub id: Uuid,
    pub call_id: Uuid,
    pub unit_number: String,
    pub officer_name: Option<String>,
    pub assigned_at: DateTime<Utc>,
}

impl InvolvedUnit {
    /// Create a new unit record scoped to a call
    pub fn new(call_id: Uuid, unit_number: String, officer_name: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            call_id,
            unit_number,
            officer_name,
            assigned_at: Utc::now(),
        }
    }
}
