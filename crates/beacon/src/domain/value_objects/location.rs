//! Location
//!
//! Where a call happened: a free-text description plus an optional
//! structured address. Traffic stops carry the description only.

use serde::{Deserialize, Serialize};

/// Location of a call for service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub description: String,
    pub address: Address,
}

/// Structured street address; all fields optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub city: Option<String>,
    pub county: Option<String>,
    pub zip_code: Option<String>,
    pub street_number: Option<String>,
}

impl Address {
    pub fn is_empty(&self) -> bool {
        self.city.is_none()
            && self.county.is_none()
            && self.zip_code.is_none()
            && self.street_number.is_none()
    }
}
