//! Yield forecast models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Forecast series for one field, as parallel date/yield sequences.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldForecastSeries {
    pub dates: Vec<NaiveDate>,
    pub yields: Vec<f64>,
}

impl FieldForecastSeries {
    pub fn push(&mut self, date: NaiveDate, predicted_yield: f64) {
        self.dates.push(date);
        self.yields.push(predicted_yield);
    }
}
