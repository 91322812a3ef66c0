//! Call Status
//!
//! The fixed, ordered lifecycle states of a call for service. Persisted as
//! a small integer code; rendered through a display label.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a call. Every call starts as `New`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CallStatus {
    New,
    Dispatched,
    Enroute,
    OnScene,
    OnHold,
    Scheduled,
    Closed,
}

impl CallStatus {
    /// Stable wire/storage code
    pub fn code(self) -> i16 {
        match self {
            CallStatus::New => 0,
            CallStatus::Dispatched => 1,
            CallStatus::Enroute => 2,
            CallStatus::OnScene => 3,
            CallStatus::OnHold => 4,
            CallStatus::Scheduled => 5,
            CallStatus::Closed => 6,
        }
    }

    /// Decode a storage code. Codes outside the fixed set yield `None`.
    pub fn from_code(code: i16) -> Option<Self> {
        match code {
            0 => Some(CallStatus::New),
            1 => Some(CallStatus::Dispatched),
            2 => Some(CallStatus::Enroute),
            3 => Some(CallStatus::OnScene),
            4 => Some(CallStatus::OnHold),
            5 => Some(CallStatus::Scheduled),
            6 => Some(CallStatus::Closed),
            _ => None,
        }
    }

    /// Dispatch-facing display label
    pub fn display(self) -> &'static str {
        match self {
            CallStatus::New => "New",
            CallStatus::Dispatched => "Dispatched",
            CallStatus::Enroute => "Enroute",
            CallStatus::OnScene => "On Scene",
            CallStatus::OnHold => "On Hold",
            CallStatus::Scheduled => "Scheduled",
            CallStatus::Closed => "Closed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_round_trips_for_every_status() {
        for status in [
            CallStatus::New,
            CallStatus::Dispatched,
            CallStatus::Enroute,
            CallStatus::OnScene,
            CallStatus::OnHold,
            CallStatus::Scheduled,
            CallStatus::Closed,
        ] {
            assert_eq!(CallStatus::from_code(status.code()), Some(status));
        }
    }

    #[test]
    fn unknown_code_is_absent() {
        assert_eq!(CallStatus::from_code(99), None);
        assert_eq!(CallStatus::from_code(-1), None);
    }
}
