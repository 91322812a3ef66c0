//! Infrastructure Adapters
//!
//! Concrete implementations of the domain's repository ports.

mod postgres;

pub use postgres::{PgCallRepository, PgInvolvedUnitRepository};
