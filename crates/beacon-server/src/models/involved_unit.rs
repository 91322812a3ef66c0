//! Involved-unit request/response models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use beacon::{InvolvedUnit, Page};

/// Attach a unit to a call
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateInvolvedUnitRequest {
    pub unit_number: String,
    pub officer_name: Option<String>,
}

/// Full-record update of an existing unit; the body carries the unit id
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateInvolvedUnitRequest {
    pub id: Uuid,
    pub unit_number: String,
    pub officer_name: Option<String>,
}

/// Unit view returned to the transport boundary
#[derive(Debug, Serialize, ToSchema)]
pub struct InvolvedUnitResponse {
    pub id: Uuid,
    pub call_id: Uuid,
    pub unit_number: String,
    pub officer_name: Option<String>,
    pub assigned_at: DateTime<Utc>,
}

impl From<InvolvedUnit> for InvolvedUnitResponse {
    fn from(unit: InvolvedUnit) -> Self {
        Self {
            id: unit.id,
            call_id: unit.call_id,
            unit_number: unit.unit_number,
            officer_name: unit.officer_name,
            assigned_at: unit.assigned_at,
        }
    }
}

/// One page of a call's units
#[derive(Debug, Serialize, ToSchema)]
pub struct InvolvedUnitPageResponse {
    pub items: Vec<InvolvedUnitResponse>,
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
}

impl From<Page<InvolvedUnit>> for InvolvedUnitPageResponse {
    fn from(page: Page<InvolvedUnit>) -> Self {
        let window = page.map(InvolvedUnitResponse::from);
        Self {
            items: window.items,
            page: window.page,
            page_size: window.page_size,
            total: window.total,
        }
    }
}
