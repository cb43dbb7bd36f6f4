//! End-to-end checks through the public API: JSON in, service, JSON out.

use std::io::{Seek, SeekFrom, Write};
use std::sync::Arc;

use vitalcheck::adapters::MemoryNotifier;
use vitalcheck::application::{json, PREDICTION_ERROR_TITLE, SUBMITTED_TITLE};
use vitalcheck::domain::{BpCategory, GlucoseStatus, RiskLevel};
use vitalcheck::AssessmentService;

const HIGH_RISK_RECORD: &str = r#"{
    "age": 60,
    "gender": "male",
    "weight": 32,
    "height": 100,
    "bloodGlucose": 140,
    "systolicBP": 150,
    "diastolicBP": 95,
    "familyHistory": { "diabetes": true, "hypertension": true, "heartDisease": true }
}"#;

fn service() -> (AssessmentService<MemoryNotifier>, Arc<MemoryNotifier>) {
    let notifier = Arc::new(MemoryNotifier::new());
    (AssessmentService::new(Arc::clone(&notifier)), notifier)
}

#[test]
fn test_record_from_file() {
    let mut file = tempfile::tempfile().expect("Should create temp file");
    file.write_all(HIGH_RISK_RECORD.as_bytes()).expect("Should write");
    file.seek(SeekFrom::Start(0)).expect("Should rewind");

    let input = json::read_input(file).expect("Should parse record");
    let (service, notifier) = service();
    let result = service.submit(&input).expect("Should submit");

    assert_eq!(result.diabetes_risk, 100);
    assert_eq!(result.hypertension_risk, 74);
    assert_eq!(result.diabetes_level(), RiskLevel::High);
    assert_eq!(result.hypertension_level(), RiskLevel::High);
    assert_eq!(result.metrics.blood_glucose_status, GlucoseStatus::Danger);
    assert_eq!(result.metrics.bp_category, BpCategory::Hypertension2);
    assert_eq!(result.recommendations.len(), 6);

    let sent = notifier.notifications();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].title, SUBMITTED_TITLE);
}

#[test]
fn test_result_json_shape() {
    let input = json::read_input(HIGH_RISK_RECORD.as_bytes()).expect("Should parse record");
    let (service, _) = service();
    let result = service.assess(&input);

    let mut out = Vec::new();
    json::write_pretty(&mut out, &result).expect("Should write");
    let value: serde_json::Value = serde_json::from_slice(&out).expect("Should be JSON");

    assert_eq!(value["diabetesRisk"], 100);
    assert_eq!(value["hypertensionRisk"], 74);
    assert_eq!(value["metrics"]["bmi"], 32.0);
    assert_eq!(value["metrics"]["bmiCategory"], "Obese");
    assert_eq!(value["metrics"]["bloodGlucoseStatus"], "danger");
    assert_eq!(value["metrics"]["bpCategory"], "hypertension-2");
    assert_eq!(
        value["recommendations"][0],
        "Consider weight management through diet and exercise."
    );
}

#[test]
fn test_zero_height_falls_back() {
    let record = HIGH_RISK_RECORD.replace("\"height\": 100", "\"height\": 0");
    let input = json::read_input(record.as_bytes()).expect("Should parse record");

    let (service, notifier) = service();
    let result = service.assess(&input);

    assert!(result.is_fallback());
    assert_eq!(result.recommendations, vec!["Error calculating health risks."]);
    assert_eq!(notifier.notifications()[0].title, PREDICTION_ERROR_TITLE);
}

#[test]
fn test_concurrent_callers_agree() {
    let input = json::read_input(HIGH_RISK_RECORD.as_bytes()).expect("Should parse record");
    let (service, _) = service();
    let expected = service.assess(&input);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let service = service.clone();
            let input = input.clone();
            std::thread::spawn(move || service.assess(&input))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().expect("thread should not panic"), expected);
    }
}
