//! Booking status enumeration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle status of a booking.
///
/// There is no automatic Confirmed → Completed transition in-process;
/// Completed is set by an external batch process, if at all. Confirmed
/// and Completed bookings both occupy their date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "booking_status", rename_all = "lowercase")]
#[serde(rename_all = "UPPERCASE")]
pub enum BookingStatus {
    /// Active reservation occupying its date range.
    Confirmed,
    /// Cancelled; no longer occupies its date range.
    Cancelled,
    /// Stay completed; still occupies its (past) date range.
    Completed,
}

impl BookingStatus {
    /// Whether a booking in this status occupies its date range.
    pub fn occupies(&self) -> bool {
        matches!(self, Self::Confirmed | Self::Completed)
    }

    /// Return the status as an uppercase string (wire format).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Confirmed => "CONFIRMED",
            Self::Cancelled => "CANCELLED",
            Self::Completed => "COMPLETED",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_occupies() {
        assert!(BookingStatus::Confirmed.occupies());
        assert!(BookingStatus::Completed.occupies());
        assert!(!BookingStatus::Cancelled.occupies());
    }
}
