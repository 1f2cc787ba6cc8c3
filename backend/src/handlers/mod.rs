//! HTTP handlers for the Agri Dashboard Platform

pub mod alert;
pub mod analytics;
pub mod dashboard;
pub mod field;
pub mod forecast;
pub mod health;
pub mod irrigation;
pub mod nutrient;
pub mod weather;

pub use alert::*;
pub use analytics::*;
pub use dashboard::*;
pub use field::*;
pub use forecast::*;
pub use health::*;
pub use irrigation::*;
pub use nutrient::*;
pub use weather::*;
