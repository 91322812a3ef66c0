//! Beacon Domain Library
//!
//! Core domain types and interfaces for the Beacon calls-for-service
//! records management system.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (Call, InvolvedUnit)
//!   - `value_objects/`: Immutable value types (CallStatus, Location, Page)
//!   - `mapping`: Intake-to-record construction and display conversions
//!   - `validation`: Rule-set-scoped intake validation
//!   - `errors`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!
//! Infrastructure (PostgreSQL adapters, HTTP routes) lives in
//! `beacon-server` and depends on this crate, never the other way around.

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    Address, Call, CallIntake, CallStatus, Complainant, DomainError, InvolvedUnit, Location,
    NewCall, NewTrafficStop, Page, RuleViolation,
};
pub use ports::{CallRepository, InvolvedUnitRepository};
