//! Beacon API Models
//!
//! Request/response shapes for the HTTP surface, converted to and from the
//! domain types by plain `From` impls.

mod call;
mod involved_unit;

pub use call::*;
pub use involved_unit::*;
