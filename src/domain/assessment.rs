//! Assessment result types.
//!
//! Represents the output of the rule-based risk engine and the
//! classifications the dashboard gauges and metric cards display.

use serde::{Deserialize, Serialize};

/// Message returned when the engine could not compute an assessment.
pub const ERROR_RECOMMENDATION: &str = "Error calculating health risks.";

/// Body-mass-index bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
    /// Only produced by the error fallback
    Unknown,
}

impl BmiCategory {
    /// Classify a BMI value.
    ///
    /// Only the Underweight, Overweight and Obese ranges are tested; every
    /// other value, NaN included, falls through to `Normal`.
    #[must_use]
    pub fn classify(bmi: f64) -> Self {
        if bmi < 18.5 {
            Self::Underweight
        } else if (25.0..30.0).contains(&bmi) {
            Self::Overweight
        } else if bmi >= 30.0 {
            Self::Obese
        } else {
            Self::Normal
        }
    }
}

impl std::fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
            Self::Unknown => "Unknown",
        };
        f.write_str(s)
    }
}

/// Fasting blood glucose status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlucoseStatus {
    Normal,
    Warning,
    Danger,
}

impl GlucoseStatus {
    /// Classify a glucose reading in mg/dL. 126 and above is `Danger`.
    #[must_use]
    pub fn classify(blood_glucose: f64) -> Self {
        if blood_glucose >= 126.0 {
            Self::Danger
        } else if blood_glucose >= 100.0 {
            Self::Warning
        } else {
            Self::Normal
        }
    }

    /// Label shown on the glucose metric card.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Warning => "Elevated",
            Self::Danger => "High Risk",
        }
    }
}

impl std::fmt::Display for GlucoseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::Warning => write!(f, "warning"),
            Self::Danger => write!(f, "danger"),
        }
    }
}

/// Blood pressure stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BpCategory {
    #[serde(rename = "normal")]
    Normal,
    #[serde(rename = "elevated")]
    Elevated,
    #[serde(rename = "hypertension-1")]
    Hypertension1,
    #[serde(rename = "hypertension-2")]
    Hypertension2,
    #[serde(rename = "crisis")]
    Crisis,
}

impl BpCategory {
    /// Classify a reading with an ordered chain where the first match wins.
    ///
    /// The crisis check sits after the stage 2 check, which already matches
    /// every crisis reading, so `Crisis` is never returned. Readings that fall
    /// between the integer ranges (e.g. 129.5/79) match nothing and stay
    /// `Normal`.
    #[must_use]
    pub fn classify(systolic: f64, diastolic: f64) -> Self {
        if systolic < 120.0 && diastolic < 80.0 {
            Self::Normal
        } else if (120.0..=129.0).contains(&systolic) && diastolic < 80.0 {
            Self::Elevated
        } else if (130.0..=139.0).contains(&systolic) || (80.0..=89.0).contains(&diastolic) {
            Self::Hypertension1
        } else if systolic >= 140.0 || diastolic >= 90.0 {
            Self::Hypertension2
        } else if systolic > 180.0 || diastolic > 120.0 {
            Self::Crisis
        } else {
            Self::Normal
        }
    }
}

impl std::fmt::Display for BpCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Normal => "normal",
            Self::Elevated => "elevated",
            Self::Hypertension1 => "hypertension-1",
            Self::Hypertension2 => "hypertension-2",
            Self::Crisis => "crisis",
        };
        f.write_str(s)
    }
}

/// Risk band used by the dashboard gauges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    /// Score below 30
    Low,
    /// Score from 30 up to 69
    Moderate,
    /// Score of 70 or more
    High,
}

impl RiskLevel {
    /// Band for a 0-100 risk score.
    #[must_use]
    pub fn from_score(score: u8) -> Self {
        if score < 30 {
            Self::Low
        } else if score < 70 {
            Self::Moderate
        } else {
            Self::High
        }
    }

    /// Gauge caption.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low Risk",
            Self::Moderate => "Moderate Risk",
            Self::High => "High Risk",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "LOW"),
            Self::Moderate => write!(f, "MODERATE"),
            Self::High => write!(f, "HIGH"),
        }
    }
}

/// Derived metrics shown on the metric cards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthMetrics {
    /// Unrounded body mass index
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    pub blood_glucose_status: GlucoseStatus,
    pub bp_category: BpCategory,
}

/// Output of one assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    /// Diabetes risk score (0 to 100)
    pub diabetes_risk: u8,

    /// Hypertension risk score (0 to 100)
    pub hypertension_risk: u8,

    /// Advice in the order it was generated, never empty
    pub recommendations: Vec<String>,

    pub metrics: HealthMetrics,
}

impl AssessmentResult {
    /// Safe result returned when the engine reports a computation error.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            diabetes_risk: 0,
            hypertension_risk: 0,
            recommendations: vec![ERROR_RECOMMENDATION.to_string()],
            metrics: HealthMetrics {
                bmi: 0.0,
                bmi_category: BmiCategory::Unknown,
                blood_glucose_status: GlucoseStatus::Normal,
                bp_category: BpCategory::Normal,
            },
        }
    }

    /// Gauge band for the diabetes score.
    #[must_use]
    pub fn diabetes_level(&self) -> RiskLevel {
        RiskLevel::from_score(self.diabetes_risk)
    }

    /// Gauge band for the hypertension score.
    #[must_use]
    pub fn hypertension_level(&self) -> RiskLevel {
        RiskLevel::from_score(self.hypertension_risk)
    }

    /// Whether this is the error fallback.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.metrics.bmi_category == BmiCategory::Unknown
    }
}
