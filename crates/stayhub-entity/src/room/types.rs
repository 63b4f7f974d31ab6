//! Room type and status enumerations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Categories of rooms offered by a hotel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "room_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    /// Standard room.
    Standard,
    /// Deluxe room.
    Deluxe,
}

impl RoomType {
    /// Return the type as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Deluxe => "deluxe",
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RoomType {
    type Err = stayhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "deluxe" => Ok(Self::Deluxe),
            _ => Err(stayhub_core::AppError::validation(format!(
                "Invalid room type: '{s}'. Expected one of: standard, deluxe"
            ))),
        }
    }
}

/// Coarse booked/loose flag on a room.
///
/// This is a display hint only: a room flips to `Booked` on its first
/// successful booking and never reverts. Actual availability is always
/// derived from the booking range set, not from this flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "room_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    /// Never booked.
    Loose,
    /// Has at least one booking.
    Booked,
}

impl RoomStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Loose => "loose",
            Self::Booked => "booked",
        }
    }
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_type_from_str() {
        assert_eq!("standard".parse::<RoomType>().unwrap(), RoomType::Standard);
        assert_eq!("DELUXE".parse::<RoomType>().unwrap(), RoomType::Deluxe);
        assert!("suite".parse::<RoomType>().is_err());
    }
}
