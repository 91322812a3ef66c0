//! Call Repository Port
//!
//! Abstract interface for call persistence. The store must provide
//! per-record atomic writes with conflict detection.

use async_trait::async_trait;

use crate::domain::{Call, DomainError};

/// Repository interface for the Call aggregate
#[async_trait]
pub trait CallRepository: Send + Sync {
    /// Persist a new call and return it as stored.
    /// Constraint violations surface as `Conflict`, other store failures
    /// as `Repository`.
    async fn add(&self, call: &Call) -> Result<Call, DomainError>;
}
