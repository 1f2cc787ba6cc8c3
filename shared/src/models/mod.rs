//! Wire models for the Agri Dashboard Platform

mod dashboard;
mod forecast;
mod response;

pub use dashboard::*;
pub use forecast::*;
pub use response::*;
