//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Call: the call-for-service aggregate and its intake variants
//! - InvolvedUnit: a responding unit attached to a call

mod call;
mod involved_unit;

pub use call::*;
pub use involved_unit::*;
