//! Repository Ports
//!
//! Data access interfaces for the call-for-service aggregates.

mod call_repository;
mod involved_unit_repository;

pub use call_repository::*;
pub use involved_unit_repository::*;
