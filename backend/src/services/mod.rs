//! Domain services for the Agri Dashboard Platform
//!
//! Each service owns the connection pool and all SQL for its entity.

pub mod alert;
pub mod analytics;
pub mod dashboard;
pub mod field;
pub mod forecast;
pub mod irrigation;
pub mod nutrient;
pub mod weather;

pub use alert::AlertService;
pub use analytics::AnalyticsService;
pub use dashboard::DashboardService;
pub use field::FieldService;
pub use forecast::ForecastService;
pub use irrigation::IrrigationService;
pub use nutrient::NutrientService;
pub use weather::WeatherService;

/// Round to a fixed number of decimal places for JSON output.
pub(crate) fn round_dp(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}
