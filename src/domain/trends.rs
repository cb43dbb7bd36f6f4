//! Mock trend series for the metrics page charts.

use serde::{Deserialize, Serialize};

/// One labelled point of a trend chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub name: String,
    pub value: f64,
}

/// Series the dashboard knows how to chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TrendSeries {
    BloodGlucose,
    BloodPressure,
    Weight,
}

const BLOOD_GLUCOSE: [(&str, f64); 7] = [
    ("Mon", 95.0),
    ("Tue", 98.0),
    ("Wed", 102.0),
    ("Thu", 99.0),
    ("Fri", 97.0),
    ("Sat", 95.0),
    ("Sun", 96.0),
];

const BLOOD_PRESSURE: [(&str, f64); 7] = [
    ("Mon", 120.0),
    ("Tue", 122.0),
    ("Wed", 126.0),
    ("Thu", 125.0),
    ("Fri", 121.0),
    ("Sat", 118.0),
    ("Sun", 119.0),
];

const WEIGHT: [(&str, f64); 4] = [
    ("Week 1", 72.0),
    ("Week 2", 71.5),
    ("Week 3", 71.0),
    ("Week 4", 70.5),
];

impl TrendSeries {
    pub const ALL: [TrendSeries; 3] = [Self::BloodGlucose, Self::BloodPressure, Self::Weight];

    /// Look up a series by its dashboard key (`bloodGlucose`, ...).
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "bloodGlucose" => Some(Self::BloodGlucose),
            "bloodPressure" => Some(Self::BloodPressure),
            "weight" => Some(Self::Weight),
            _ => None,
        }
    }

    /// Dashboard key of this series.
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            Self::BloodGlucose => "bloodGlucose",
            Self::BloodPressure => "bloodPressure",
            Self::Weight => "weight",
        }
    }

    /// Unit of the charted values.
    #[must_use]
    pub fn unit(&self) -> &'static str {
        match self {
            Self::BloodGlucose => "mg/dL",
            Self::BloodPressure => "mmHg",
            Self::Weight => "kg",
        }
    }

    /// The fixed points of this series, oldest first.
    #[must_use]
    pub fn points(&self) -> Vec<TrendPoint> {
        let raw: &[(&str, f64)] = match self {
            Self::BloodGlucose => &BLOOD_GLUCOSE,
            Self::BloodPressure => &BLOOD_PRESSURE,
            Self::Weight => &WEIGHT,
        };
        raw.iter()
            .map(|&(name, value)| TrendPoint {
                name: name.to_string(),
                value,
            })
            .collect()
    }
}

/// Points for a dashboard key; unknown keys yield an empty series.
#[must_use]
pub fn trend_series(key: &str) -> Vec<TrendPoint> {
    TrendSeries::from_key(key)
        .map(|series| series.points())
        .unwrap_or_default()
}
