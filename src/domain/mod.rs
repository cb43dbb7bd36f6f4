//! Domain layer: Core business types and logic.
//!
//! This module contains pure Rust types with no I/O. The risk engine in
//! `risk` is a set of pure functions over these types.

mod assessment;
mod health;
pub mod risk;
pub mod trends;

pub use assessment::{
    AssessmentResult, BmiCategory, BpCategory, GlucoseStatus, HealthMetrics, RiskLevel,
    ERROR_RECOMMENDATION,
};
pub use health::{
    FamilyHistory, Gender, HealthInput, ValidationError, ValidationErrors, MAX_AGE, MIN_AGE,
};
pub use risk::{assess, ComputationError};
pub use trends::{trend_series, TrendPoint, TrendSeries};
