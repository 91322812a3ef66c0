//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between intake payloads,
//! validation, mapping, and repositories.

mod call_service;
mod involved_unit_service;

pub use call_service::CallService;
pub use involved_unit_service::InvolvedUnitService;
