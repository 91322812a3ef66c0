//! Beacon API Routes
//!
//! - /calls - call intake (standard and traffic stop)
//! - /calls/:call_id/involved-units - responding unit management

pub mod call;
pub mod involved_unit;
pub mod swagger;

use axum::http::StatusCode;
use beacon::DomainError;

/// Render a classified workflow failure as a transport outcome.
/// Validation is a client data error, missing parents are not-found, and
/// both conflict and store-level failures land in the write-conflict class.
pub(crate) fn error_response(err: DomainError) -> (StatusCode, String) {
    let status = match &err {
        DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Conflict(_) | DomainError::Repository(_) => StatusCode::CONFLICT,
    };
    (status, err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use beacon::RuleViolation;
    use uuid::Uuid;

    #[test]
    fn failures_map_to_their_status_class() {
        let (status, body) = error_response(DomainError::Validation(vec![RuleViolation::new(
            "zip_code",
            "zip code must contain only digits",
        )]));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("zip_code"));

        let (status, _) = error_response(DomainError::not_found("Call", Uuid::new_v4()));
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = error_response(DomainError::Conflict("duplicate".to_string()));
        assert_eq!(status, StatusCode::CONFLICT);

        let (status, _) = error_response(DomainError::Repository("connection reset".to_string()));
        assert_eq!(status, StatusCode::CONFLICT);
    }
}
