//! Room type enumeration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use stayhub_core::AppError;

/// Category of a hotel room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "room_type", rename_all = "lowercase")]
#[serde(rename_all = "UPPERCASE")]
pub enum RoomType {
    /// Standard room.
    Standard,
    /// Deluxe room.
    Deluxe,
    /// Suite.
    Suite,
}

impl RoomType {
    /// Return the room type as an uppercase string (wire format).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "STANDARD",
            Self::Deluxe => "DELUXE",
            Self::Suite => "SUITE",
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RoomType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "STANDARD" => Ok(Self::Standard),
            "DELUXE" => Ok(Self::Deluxe),
            "SUITE" => Ok(Self::Suite),
            _ => Err(AppError::bad_request(format!(
                "Invalid room type: '{s}'. Expected one of: STANDARD, DELUXE, SUITE"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("SUITE".parse::<RoomType>().unwrap(), RoomType::Suite);
        assert_eq!("deluxe".parse::<RoomType>().unwrap(), RoomType::Deluxe);
        assert!("penthouse".parse::<RoomType>().is_err());
    }
}
