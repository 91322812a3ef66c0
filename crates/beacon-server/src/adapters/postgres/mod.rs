//! PostgreSQL Repository Implementations

mod call_repository;
mod involved_unit_repository;

pub use call_repository::PgCallRepository;
pub use involved_unit_repository::PgInvolvedUnitRepository;

use beacon::DomainError;

/// Classify a store failure: constraint violations from concurrent writers
/// become `Conflict`, everything else stays a message-carrying
/// `Repository` error.
pub(crate) fn classify_sqlx_error(err: sqlx::Error) -> DomainError {
    match err.as_database_error() {
        Some(db) if db.is_unique_violation() => DomainError::Conflict(db.message().to_string()),
        _ => DomainError::Repository(err.to_string()),
    }
}
