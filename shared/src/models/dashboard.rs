//! Dashboard and analytics summary models

use serde::{Deserialize, Serialize};

/// Current NPK nutrient concentrations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NpkLevels {
    pub n: f64,
    pub p: f64,
    pub k: f64,
}

impl NpkLevels {
    /// Baseline shown when no reading has ever been recorded.
    pub const BASELINE: NpkLevels = NpkLevels {
        n: 68.0,
        p: 45.0,
        k: 72.0,
    };
}

/// Headline metrics for the dashboard landing view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub soil_moisture: f64,
    pub temperature: f64,
    pub npk_levels: NpkLevels,
    pub crop_health: f64,
}

/// Operational aggregates for the analytics view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    pub total_fields: i64,
    pub average_moisture: f64,
    pub scheduled_irrigations: i64,
    pub active_alerts: i64,
    pub total_area_hectares: f64,
    pub alert_types: i64,
}
