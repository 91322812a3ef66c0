//! Involved Unit Repository Port
//!
//! Abstract interface for the units attached to a call. Records are keyed
//! by `(call_id, unit_id)`; every operation is scoped to one call.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{DomainError, InvolvedUnit, Page};

/// Repository interface for InvolvedUnit records
#[async_trait]
pub trait InvolvedUnitRepository: Send + Sync {
    /// Attach a unit to a call. `NotFound` if the call does not exist,
    /// `Conflict` if a concurrent writer attached the same unit.
    async fn add(&self, call_id: Uuid, unit: &InvolvedUnit) -> Result<InvolvedUnit, DomainError>;

    /// Find one unit scoped to a call
    async fn find_by_id(
        &self,
        call_id: Uuid,
        unit_id: Uuid,
    ) -> Result<Option<InvolvedUnit>, DomainError>;

    /// Windowed listing in insertion order. Pages are 1-based.
    /// `NotFound` if the call does not exist.
    async fn list(
        &self,
        call_id: Uuid,
        page: u32,
        page_size: u32,
    ) -> Result<Page<InvolvedUnit>, DomainError>;

    /// Full-record update of a unit scoped to a call. `NotFound` if the
    /// unit does not exist under that call.
    async fn update(&self, call_id: Uuid, unit: &InvolvedUnit)
        -> Result<InvolvedUnit, DomainError>;
}
