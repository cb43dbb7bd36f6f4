//! Health input types collected by the data-entry form.
//!
//! Field names serialize in camelCase so the JSON produced by the form
//! collaborator deserializes without a mapping layer.

use serde::{Deserialize, Serialize};

/// Lowest age the data-entry form accepts.
pub const MIN_AGE: u32 = 18;

/// Highest age the data-entry form accepts.
pub const MAX_AGE: u32 = 120;

/// Self-reported gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Male => write!(f, "male"),
            Self::Female => write!(f, "female"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// Conditions present in first-degree relatives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyHistory {
    pub diabetes: bool,
    pub hypertension: bool,
    pub heart_disease: bool,
}

impl FamilyHistory {
    /// All three conditions present.
    #[must_use]
    pub fn all() -> Self {
        Self {
            diabetes: true,
            hypertension: true,
            heart_disease: true,
        }
    }
}

/// Biometric record for a single assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthInput {
    /// Age in whole years
    pub age: u32,

    pub gender: Gender,

    /// Body weight in kilograms
    pub weight: f64,

    /// Height in centimeters
    pub height: f64,

    /// Fasting blood glucose in mg/dL
    pub blood_glucose: f64,

    /// Systolic blood pressure in mmHg
    #[serde(rename = "systolicBP")]
    pub systolic_bp: f64,

    /// Diastolic blood pressure in mmHg
    #[serde(rename = "diastolicBP")]
    pub diastolic_bp: f64,

    #[serde(default)]
    pub family_history: FamilyHistory,
}

/// A single rejected form field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct ValidationError(pub String);

/// All rejected fields of one submission, in field order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", join_messages(.0))]
pub struct ValidationErrors(pub Vec<ValidationError>);

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.0.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    /// The message shown to the user when only one can be displayed.
    #[must_use]
    pub fn first_message(&self) -> &str {
        self.0.first().map_or("Invalid health data", |e| e.0.as_str())
    }
}

impl HealthInput {
    /// Range checks the data-entry form applies before calling the engine.
    ///
    /// The engine itself never calls this; it accepts any finite input.
    ///
    /// # Errors
    /// Returns every violated rule.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = Vec::new();

        if !(MIN_AGE..=MAX_AGE).contains(&self.age) {
            errors.push(ValidationError(format!(
                "Age must be between {MIN_AGE} and {MAX_AGE}"
            )));
        }

        for (name, value) in self.measurements() {
            if !value.is_finite() || value <= 0.0 {
                errors.push(ValidationError(format!("{name} must be a positive number")));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(errors))
        }
    }

    /// Numeric measurements paired with their user-facing names.
    pub(crate) fn measurements(&self) -> [(&'static str, f64); 5] {
        [
            ("Weight", self.weight),
            ("Height", self.height),
            ("Blood glucose", self.blood_glucose),
            ("Systolic blood pressure", self.systolic_bp),
            ("Diastolic blood pressure", self.diastolic_bp),
        ]
    }
}

impl Default for HealthInput {
    /// Initial values of the data-entry form.
    fn default() -> Self {
        Self {
            age: 35,
            gender: Gender::Male,
            weight: 70.0,
            height: 170.0,
            blood_glucose: 95.0,
            systolic_bp: 120.0,
            diastolic_bp: 80.0,
            family_history: FamilyHistory::default(),
        }
    }
}
