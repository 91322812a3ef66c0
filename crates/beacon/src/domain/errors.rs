//! Domain Errors
//!
//! The classified failure half of every workflow result. Expected failure
//! modes never escape a workflow as anything but one of these variants.

use thiserror::Error;
use uuid::Uuid;

use crate::domain::validation::RuleViolation;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    #[error("Validation failed: {}", join_violations(.0))]
    Validation(Vec<RuleViolation>),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Repository error: {0}")]
    Repository(String),
}

impl DomainError {
    pub fn not_found<T: AsRef<str>>(entity_type: T, id: Uuid) -> Self {
        Self::NotFound {
            entity_type: entity_type.as_ref().to_string(),
            id: id.to_string(),
        }
    }

    /// Every violated rule, or an empty slice for the other variants
    pub fn violations(&self) -> &[RuleViolation] {
        match self {
            Self::Validation(violations) => violations,
            _ => &[],
        }
    }
}

fn join_violations(violations: &[RuleViolation]) -> String {
    violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_lists_every_violation() {
        let err = DomainError::Validation(vec![
            RuleViolation::new("location_summary", "location summary must not be empty"),
            RuleViolation::new("call_type_id", "call type id must be positive"),
        ]);
        let message = err.to_string();
        assert!(message.contains("location_summary"));
        assert!(message.contains("call_type_id"));
    }
}
