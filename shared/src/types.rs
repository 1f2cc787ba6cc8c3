//! Common domain types used across the platform

use serde::{Deserialize, Serialize};
use std::fmt;

/// Overall condition of a field.
///
/// The stored representation is free text; the four well-known values are
/// modelled explicitly and anything else round-trips through `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum HealthStatus {
    Healthy,
    Excellent,
    Optimal,
    NeedsWater,
    Other(String),
}

impl HealthStatus {
    pub fn as_str(&self) -> &str {
        match self {
            HealthStatus::Healthy => "Healthy",
            HealthStatus::Excellent => "Excellent",
            HealthStatus::Optimal => "Optimal",
            HealthStatus::NeedsWater => "Needs Water",
            HealthStatus::Other(status) => status,
        }
    }

    /// Statuses that count towards the crop-health percentage.
    pub fn is_healthy(&self) -> bool {
        matches!(
            self,
            HealthStatus::Healthy | HealthStatus::Excellent | HealthStatus::Optimal
        )
    }
}

impl From<&str> for HealthStatus {
    fn from(value: &str) -> Self {
        match value {
            "Healthy" => HealthStatus::Healthy,
            "Excellent" => HealthStatus::Excellent,
            "Optimal" => HealthStatus::Optimal,
            "Needs Water" => HealthStatus::NeedsWater,
            other => HealthStatus::Other(other.to_string()),
        }
    }
}

impl From<String> for HealthStatus {
    fn from(value: String) -> Self {
        HealthStatus::from(value.as_str())
    }
}

impl From<HealthStatus> for String {
    fn from(status: HealthStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Alert severity level.
///
/// Unknown wire values are rejected when deserializing a request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AlertPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl AlertPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertPriority::Low => "Low",
            AlertPriority::Medium => "Medium",
            AlertPriority::High => "High",
        }
    }
}

impl fmt::Display for AlertPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle state of an irrigation record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IrrigationStatus {
    Scheduled,
    Completed,
    Cancelled,
}

impl IrrigationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            IrrigationStatus::Scheduled => "Scheduled",
            IrrigationStatus::Completed => "Completed",
            IrrigationStatus::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for IrrigationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn health_status_wire_values_round_trip() {
        for value in ["Healthy", "Excellent", "Optimal", "Needs Water", "Stressed"] {
            let status = HealthStatus::from(value);
            assert_eq!(status.as_str(), value);

            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{value}\""));

            let parsed: HealthStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn healthy_statuses() {
        assert!(HealthStatus::Healthy.is_healthy());
        assert!(HealthStatus::Excellent.is_healthy());
        assert!(HealthStatus::Optimal.is_healthy());
        assert!(!HealthStatus::NeedsWater.is_healthy());
        assert!(!HealthStatus::Other("Stressed".to_string()).is_healthy());
    }

    #[test]
    fn alert_priority_defaults_to_medium() {
        assert_eq!(AlertPriority::default(), AlertPriority::Medium);
    }

    #[test]
    fn alert_priority_rejects_unknown_values() {
        let parsed: Result<AlertPriority, _> = serde_json::from_str("\"Critical\"");
        assert!(parsed.is_err());
    }

    #[test]
    fn enum_wire_values_match_storage() {
        assert_eq!(
            serde_json::to_string(&AlertPriority::High).unwrap(),
            "\"High\""
        );
        assert_eq!(
            serde_json::to_string(&IrrigationStatus::Scheduled).unwrap(),
            "\"Scheduled\""
        );
    }

    proptest! {
        /// Any stored status string survives the enum round trip unchanged.
        #[test]
        fn health_status_preserves_arbitrary_text(value in ".*") {
            let status = HealthStatus::from(value.clone());
            prop_assert_eq!(status.as_str(), value.as_str());
        }
    }
}
