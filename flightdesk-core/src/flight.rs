use serde::{Deserialize, Serialize};

use crate::{CoreError, CoreResult};

pub type FlightId = i64;

/// A flight record as owned by the store.
///
/// `delete_at` is zero while the flight is active and holds the Unix
/// timestamp (seconds) of the soft delete afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flight {
    pub flight_id: FlightId,
    pub destination_from: String,
    pub destination_to: String,
    #[serde(default)]
    pub delete_at: i64,
}

impl Flight {
    pub fn is_active(&self) -> bool {
        self.delete_at == 0
    }
}

/// Body of create and update requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightPayload {
    pub destination_from: String,
    pub destination_to: String,
}

impl FlightPayload {
    pub fn new(destination_from: impl Into<String>, destination_to: impl Into<String>) -> Self {
        Self {
            destination_from: destination_from.into(),
            destination_to: destination_to.into(),
        }
    }

    /// Trims both cities and rejects blank ones.
    pub fn validate(self) -> CoreResult<Self> {
        let destination_from = self.destination_from.trim().to_string();
        let destination_to = self.destination_to.trim().to_string();

        if destination_from.is_empty() {
            return Err(CoreError::Validation("destination_from is required".to_string()));
        }
        if destination_to.is_empty() {
            return Err(CoreError::Validation("destination_to is required".to_string()));
        }

        Ok(Self {
            destination_from,
            destination_to,
        })
    }
}

/// Parses a flight id taken from a request path.
///
/// Zero is a well-formed id that no record ever carries; it is left to the
/// store to answer "not found" for it.
pub fn parse_flight_id(raw: &str) -> CoreResult<FlightId> {
    raw.trim()
        .parse::<FlightId>()
        .ok()
        .filter(|id| *id >= 0)
        .ok_or_else(|| CoreError::Validation("Invalid flight ID".to_string()))
}
