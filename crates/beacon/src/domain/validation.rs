//! Intake Validation
//!
//! Rule-set-scoped validation of standard-call intake. Runs strictly before
//! mapping and persistence; a failing payload never reaches the store.
//! Every violated rule is reported, not just the first.

use std::fmt;

use crate::domain::entities::NewCall;
use crate::domain::errors::DomainError;

/// Rule set applied to standard-call intake before creation
pub const CREATE_CALL_RULE_SET: &str = "create-call";

/// One violated rule: the offending field plus a dispatcher-readable message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleViolation {
    pub field: String,
    pub message: String,
}

impl RuleViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for RuleViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

type Rule = fn(&NewCall) -> Option<RuleViolation>;

const CREATE_CALL_RULES: &[Rule] =
    &[location_summary_present, call_type_positive, zip_code_digits];

/// Rule-set lookup by name. Unknown names resolve to the empty rule list.
fn rule_set(name: &str) -> &'static [Rule] {
    match name {
        CREATE_CALL_RULE_SET => CREATE_CALL_RULES,
        _ => &[],
    }
}

/// Validate an intake payload against a named rule set, collecting every
/// violation into a single `Validation` error.
pub fn validate(rule_set_name: &str, intake: &NewCall) -> Result<(), DomainError> {
    let violations: Vec<RuleViolation> = rule_set(rule_set_name)
        .iter()
        .filter_map(|rule| rule(intake))
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(DomainError::Validation(violations))
    }
}

fn location_summary_present(intake: &NewCall) -> Option<RuleViolation> {
    if intake.location_summary.trim().is_empty() {
        Some(RuleViolation::new(
            "location_summary",
            "location summary must not be empty",
        ))
    } else {
        None
    }
}

fn call_type_positive(intake: &NewCall) -> Option<RuleViolation> {
    if intake.call_type_id <= 0 {
        Some(RuleViolation::new(
            "call_type_id",
            "call type id must be positive",
        ))
    } else {
        None
    }
}

fn zip_code_digits(intake: &NewCall) -> Option<RuleViolation> {
    match &intake.zip_code {
        Some(zip) if zip.is_empty() || !zip.chars().all(|c| c.is_ascii_digit()) => Some(
            RuleViolation::new("zip_code", "zip code must contain only digits"),
        ),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn intake() -> NewCall {
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

    #[test]
    fn well_formed_intake_passes() {
        assert!(validate(CREATE_CALL_RULE_SET, &intake()).is_ok());
    }

    #[test]
    fn every_violation_is_reported() {
        let mut bad = intake();
        bad.location_summary = "  ".to_string();
        bad.call_type_id = 0;
        bad.zip_code = Some("6580a".to_string());

        let err = validate(CREATE_CALL_RULE_SET, &bad).unwrap_err();
        let fields: Vec<&str> = err.violations().iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["location_summary", "call_type_id", "zip_code"]);
    }

    #[test]
    fn missing_zip_code_is_not_a_violation() {
        let mut payload = intake();
        payload.zip_code = None;
        assert!(validate(CREATE_CALL_RULE_SET, &payload).is_ok());
    }

    #[test]
    fn unknown_rule_set_applies_no_rules() {
        let mut bad = intake();
        bad.location_summary = String::new();
        assert!(validate("no-such-rule-set", &bad).is_ok());
    }
}
