use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle of an owner upgrade request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "owner_request_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OwnerRequestStatus {
    /// Awaiting a staff decision.
    Pending,
    /// Granted; the user was promoted to owner.
    Approved,
    /// Denied.
    Rejected,
}

impl OwnerRequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for OwnerRequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OwnerRequestStatus {
    type Err = stayhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            _ => Err(stayhub_core::AppError::validation(format!(
                "Invalid owner request status: '{s}'"
            ))),
        }
    }
}
