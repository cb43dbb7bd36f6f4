//! Assessment service: Orchestrates risk assessment for the dashboard.
//!
//! This service coordinates:
//! - Form checks on submitted data
//! - The pure risk engine
//! - Mapping engine failures to the safe fallback result
//! - User-facing notifications

use std::sync::Arc;

use crate::domain::{self, AssessmentResult, HealthInput, TrendPoint, ValidationErrors};
use crate::ports::{Notification, Notifier};

pub const PREDICTION_ERROR_TITLE: &str = "Prediction Error";
pub const PREDICTION_ERROR_DESCRIPTION: &str =
    "Failed to calculate health risk assessment. Please try again.";
pub const VALIDATION_ERROR_TITLE: &str = "Validation Error";
pub const SUBMITTED_TITLE: &str = "Data Submitted";
pub const SUBMITTED_DESCRIPTION: &str = "Your health data has been processed successfully.";

/// Service running assessments on behalf of the display layer.
pub struct AssessmentService<N>
where
    N: Notifier,
{
    notifier: Arc<N>,
}

impl<N> Clone for AssessmentService<N>
where
    N: Notifier,
{
    fn clone(&self) -> Self {
        Self {
            notifier: Arc::clone(&self.notifier),
        }
    }
}

impl<N> AssessmentService<N>
where
    N: Notifier,
{
    /// Create a new assessment service.
    pub fn new(notifier: Arc<N>) -> Self {
        Self { notifier }
    }

    /// Run the risk engine.
    ///
    /// Never fails: a computation error is logged, reported through the
    /// notifier, and replaced by `AssessmentResult::fallback()`.
    #[must_use]
    pub fn assess(&self, input: &HealthInput) -> AssessmentResult {
        match domain::assess(input) {
            Ok(result) => {
                tracing::info!(
                    bmi_category = %result.metrics.bmi_category,
                    glucose_status = %result.metrics.blood_glucose_status,
                    bp_category = %result.metrics.bp_category,
                    diabetes_risk = result.diabetes_risk,
                    hypertension_risk = result.hypertension_risk,
                    "Assessment complete"
                );
                result
            }
            Err(e) => {
                tracing::error!("Error in health prediction: {}", e);
                self.notifier.notify(&Notification::destructive(
                    PREDICTION_ERROR_TITLE,
                    PREDICTION_ERROR_DESCRIPTION,
                ));
                AssessmentResult::fallback()
            }
        }
    }

    /// Handle a data-entry form submission.
    ///
    /// Runs the form checks first; rejected input is reported through the
    /// notifier and never reaches the engine.
    ///
    /// # Errors
    /// Returns the rejected fields if the form checks fail.
    pub fn submit(&self, input: &HealthInput) -> Result<AssessmentResult, ValidationErrors> {
        if let Err(errors) = input.validate() {
            tracing::warn!("Rejected submission with {} invalid field(s)", errors.0.len());
            self.notifier.notify(&Notification::destructive(
                VALIDATION_ERROR_TITLE,
                errors.first_message(),
            ));
            return Err(errors);
        }

        let result = self.assess(input);
        if !result.is_fallback() {
            self.notifier
                .notify(&Notification::info(SUBMITTED_TITLE, SUBMITTED_DESCRIPTION));
        }
        Ok(result)
    }

    /// Points for a trend chart; unknown keys give an empty series.
    #[must_use]
    pub fn trend(&self, key: &str) -> Vec<TrendPoint> {
        let points = domain::trend_series(key);
        if points.is_empty() {
            tracing::debug!("No trend data for key {:?}", key);
        }
        points
    }
}
