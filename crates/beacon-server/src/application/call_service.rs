//! Call Creation Workflow
//!
//! The single choke point through which both intake variants become a
//! persisted call: validate, map, persist, return the stored record.
//! Validation failures short-circuit before any mapping or write; store
//! failures come back as classified errors, never as panics. No step is
//! retried.

use std::sync::Arc;

use beacon::domain::{mapping, validation};
use beacon::{Call, CallIntake, CallRepository, DomainError};

/// Application service for call creation
pub struct CallService<R: CallRepository> {
    repo: Arc<R>,
}

impl<R: CallRepository> CallService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Create a call from either intake variant
    pub async fn create_call(&self, intake: CallIntake) -> Result<Call, DomainError> {
        match &intake {
            CallIntake::Standard(new_call) => {
                validation::validate(validation::CREATE_CALL_RULE_SET, new_call)?;
            }
            // TODO: add a traffic-stop rule set; these payloads are
            // currently persisted unvalidated
            CallIntake::TrafficStop(_) => {}
        }

        let record = mapping::call_from_intake(intake);
        let saved = self.repo.add(&record).await?;

        tracing::info!(
            "Created call {} (call number {})",
            saved.id,
            saved.call_number
        );

        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use beacon::{CallStatus, NewCall, NewTrafficStop};
    use chrono::Utc;
    use std::sync::Mutex;

    /// In-memory stand-in for the call store
    struct FakeCallRepository {
        saved: Mutex<Vec<Call>>,
        conflict: bool,
    }

    impl FakeCallRepository {
        fn new() -> Self {
            Self {
                saved: Mutex::new(Vec::new()),
                conflict: false,
            }
        }

        fn conflicting() -> Self {
            Self {
                saved: Mutex::new(Vec::new()),
                conflict: true,
            }
        }

        fn saved_count(&self) -> usize {
            self.saved.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl CallRepository for FakeCallRepository {
        async fn add(&self, call: &Call) -> Result<Call, DomainError> {
            if self.conflict {
                return Err(DomainError::Conflict("duplicate call number".to_string()));
            }
            self.saved.lock().unwrap().push(call.clone());
            Ok(call.clone())
        }
    }

    fn standard_intake() -> NewCall {
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

    #[tokio::test]
    async fn valid_standard_intake_is_persisted_as_new() {
        let repo = Arc::new(FakeCallRepository::new());
        let service = CallService::new(repo.clone());

        let call = service
            .create_call(CallIntake::Standard(standard_intake()))
            .await
            .unwrap();

        assert_eq!(call.status, CallStatus::New);
        assert_eq!(call.location.address.city.as_deref(), Some("Springfield"));
        assert_eq!(repo.saved_count(), 1);
    }

    #[tokio::test]
    async fn invalid_standard_intake_never_reaches_the_store() {
        let repo = Arc::new(FakeCallRepository::new());
        let service = CallService::new(repo.clone());

        let mut bad = standard_intake();
        bad.location_summary = String::new();
        bad.call_type_id = 0;

        let err = service
            .create_call(CallIntake::Standard(bad))
            .await
            .unwrap_err();

        assert_eq!(err.violations().len(), 2);
        assert_eq!(repo.saved_count(), 0);
    }

    #[tokio::test]
    async fn traffic_stop_bypasses_validation() {
        let repo = Arc::new(FakeCallRepository::new());
        let service = CallService::new(repo.clone());

        // An empty location summary would fail the create-call rule set
        let intake = NewTrafficStop {
            call_type_id: 0,
            originated_from_id: 2,
            dispatcher_id: None,
            received_time: Utc::now(),
            location_summary: String::new(),
        };

        let call = service
            .create_call(CallIntake::TrafficStop(intake))
            .await
            .unwrap();

        assert_eq!(call.status, CallStatus::New);
        assert!(call.location.address.is_empty());
        assert_eq!(repo.saved_count(), 1);
    }

    #[tokio::test]
    async fn store_conflict_is_propagated_unretried() {
        let service = CallService::new(Arc::new(FakeCallRepository::conflicting()));

        let err = service
            .create_call(CallIntake::Standard(standard_intake()))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Conflict(_)));
    }
}
