//! Involved-Unit Workflow
//!
//! Add, list, and update the units responding to a call. Each operation is
//! independent and scoped to one call; concurrent writes to the same record
//! are resolved by the store's conflict detection.

use std::sync::Arc;

use beacon::{DomainError, InvolvedUnit, InvolvedUnitRepository, Page};
use uuid::Uuid;

/// Application service for involved-unit operations
pub struct InvolvedUnitService<R: InvolvedUnitRepository> {
    repo: Arc<R>,
}

impl<R: InvolvedUnitRepository> InvolvedUnitService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Attach a unit to a call
    pub async fn add_unit(
        &self,
        call_id: Uuid,
        unit_number: String,
        officer_name: Option<String>,
    ) -> Result<InvolvedUnit, DomainError> {
        let unit = InvolvedUnit::new(call_id, unit_number, officer_name);
        let saved = self.repo.add(call_id, &unit).await?;

        tracing::info!("Attached unit {} to call {}", saved.unit_number, call_id);

        Ok(saved)
    }

    /// Windowed listing of a call's units in insertion order
    pub async fn list_units(
        &self,
        call_id: Uuid,
        page: u32,
        page_size: u32,
    ) -> Result<Page<InvolvedUnit>, DomainError> {
        self.repo.list(call_id, page, page_size).await
    }

    /// Full-record update of an existing unit. `assigned_at` is preserved
    /// from the stored record.
    pub async fn update_unit(
        &self,
        call_id: Uuid,
        unit_id: Uuid,
        unit_number: String,
        officer_name: Option<String>,
    ) -> Result<InvolvedUnit, DomainError> {
        let current = self
            .repo
            .find_by_id(call_id, unit_id)
            .await?
            .ok_or_else(|| DomainError::not_found("InvolvedUnit", unit_id))?;

        let updated = InvolvedUnit {
            id: current.id,
            call_id: current.call_id,
            unit_number,
            officer_name,
            assigned_at: current.assigned_at,
        };

        self.repo.update(call_id, &updated).await
    }
}
