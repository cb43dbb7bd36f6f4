//! Application layer: Use cases and services.
//!
//! This module orchestrates the pure risk engine with the notifier port,
//! and holds the JSON boundary used by the command-line front end.

mod assessment;
pub mod json;

pub use assessment::{
    AssessmentService, PREDICTION_ERROR_DESCRIPTION, PREDICTION_ERROR_TITLE, SUBMITTED_DESCRIPTION,
    SUBMITTED_TITLE, VALIDATION_ERROR_TITLE,
};
