//! Rule-based risk engine for diabetes and hypertension.
//!
//! A fixed, transparent heuristic (not a clinically validated model).
//! Every function here is pure: no I/O, no logging, no shared state.

use super::assessment::{AssessmentResult, BmiCategory, BpCategory, GlucoseStatus, HealthMetrics};
use super::health::{Gender, HealthInput};

pub const WEIGHT_MANAGEMENT: &str = "Consider weight management through diet and exercise.";
pub const MONITOR_GLUCOSE: &str = "Monitor blood glucose levels regularly.";
pub const CONSULT_DIABETES: &str = "Consult a healthcare provider for diabetes risk.";
pub const MONITOR_BP: &str = "Monitor blood pressure regularly.";
pub const REDUCE_SODIUM: &str = "Consider reducing sodium intake.";
pub const REGULAR_CHECKUPS: &str = "Regular health check-ups recommended.";
pub const HEALTHY_LIFESTYLE: &str = "Continue maintaining your healthy lifestyle.";

/// Highest value a risk score can take.
pub const MAX_RISK: f64 = 100.0;

/// Scores above this trigger the check-up recommendation.
const CHECKUP_THRESHOLD: u8 = 30;

/// Failure to compute an assessment.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ComputationError {
    #[error("{field} is not a finite number")]
    NonFiniteInput { field: &'static str },

    #[error("derived {metric} is not a finite number")]
    NonFiniteMetric { metric: &'static str },
}

/// Real-valued risk totals before rounding.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RiskTotals {
    pub diabetes: f64,
    pub hypertension: f64,
}

impl RiskTotals {
    /// Round each total and clamp it into 0..=100.
    #[must_use]
    pub fn to_scores(self) -> (u8, u8) {
        (clamp_score(self.diabetes), clamp_score(self.hypertension))
    }
}

fn clamp_score(total: f64) -> u8 {
    // Totals built by `accumulate` are non-negative, but `RiskTotals` is
    // public, so both ends are clamped.
    total.round().clamp(0.0, MAX_RISK) as u8
}

/// Body mass index from weight in kg and height in cm.
#[must_use]
pub fn bmi(weight: f64, height: f64) -> f64 {
    let meters = height / 100.0;
    weight / (meters * meters)
}

/// Sum the weighted risk factors for both conditions.
#[must_use]
pub fn accumulate(input: &HealthInput, bmi: f64) -> RiskTotals {
    let mut diabetes = 0.0;
    let mut hypertension = 0.0;

    if input.age > 40 {
        let years = f64::from(input.age - 40);
        diabetes += years * 0.5;
        hypertension += years * 0.5;
    }

    if bmi >= 25.0 {
        diabetes += (bmi - 25.0) * 2.0;
        hypertension += (bmi - 25.0) * 1.5;
    }

    if input.blood_glucose >= 100.0 {
        diabetes += (input.blood_glucose - 100.0) * 1.5;
    }

    if input.systolic_bp >= 120.0 {
        hypertension += (input.systolic_bp - 120.0) * 0.5;
    }
    if input.diastolic_bp >= 80.0 {
        hypertension += (input.diastolic_bp - 80.0) * 0.7;
    }

    let family = input.family_history;
    if family.diabetes {
        diabetes += 15.0;
    }
    if family.hypertension {
        hypertension += 15.0;
    }
    if family.heart_disease {
        diabetes += 10.0;
        hypertension += 10.0;
    }

    if input.gender == Gender::Male {
        diabetes += 2.0;
        hypertension += 3.0;
    }

    RiskTotals {
        diabetes,
        hypertension,
    }
}

/// Advice for the given input, derived metric and final scores.
#[must_use]
pub fn recommendations(
    input: &HealthInput,
    bmi: f64,
    diabetes_risk: u8,
    hypertension_risk: u8,
) -> Vec<String> {
    let mut out = Vec::new();

    if bmi >= 25.0 {
        out.push(WEIGHT_MANAGEMENT);
    }

    if input.blood_glucose >= 100.0 {
        out.push(MONITOR_GLUCOSE);
        if input.blood_glucose >= 126.0 {
            out.push(CONSULT_DIABETES);
        }
    }

    if input.systolic_bp >= 130.0 || input.diastolic_bp >= 80.0 {
        out.push(MONITOR_BP);
        out.push(REDUCE_SODIUM);
    }

    if diabetes_risk > CHECKUP_THRESHOLD || hypertension_risk > CHECKUP_THRESHOLD {
        out.push(REGULAR_CHECKUPS);
    }

    if out.is_empty() {
        out.push(HEALTHY_LIFESTYLE);
    }

    out.into_iter().map(String::from).collect()
}

/// Assess one health record.
///
/// # Errors
/// Returns `ComputationError` if a measurement or the derived BMI is NaN or
/// infinite. Finite but implausible values (negative height) are accepted.
pub fn assess(input: &HealthInput) -> Result<AssessmentResult, ComputationError> {
    for (field, value) in input.measurements() {
        if !value.is_finite() {
            return Err(ComputationError::NonFiniteInput { field });
        }
    }

    let bmi = bmi(input.weight, input.height);
    if !bmi.is_finite() {
        return Err(ComputationError::NonFiniteMetric { metric: "BMI" });
    }

    let metrics = HealthMetrics {
        bmi,
        bmi_category: BmiCategory::classify(bmi),
        blood_glucose_status: GlucoseStatus::classify(input.blood_glucose),
        bp_category: BpCategory::classify(input.systolic_bp, input.diastolic_bp),
    };

    let (diabetes_risk, hypertension_risk) = accumulate(input, bmi).to_scores();
    let recommendations = recommendations(input, bmi, diabetes_risk, hypertension_risk);

    Ok(AssessmentResult {
        diabetes_risk,
        hypertension_risk,
        recommendations,
        metrics,
    })
}
