//! Command-line front end: argument parsing and command dispatch.
//!
//! Command output is JSON on the writer handed to [`run`]; notifications go
//! through the service's notifier, which the binary points at stderr.

use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::application::{json, AssessmentService};
use crate::config::{AppConfig, LogMode};
use crate::domain::{AssessmentResult, TrendPoint, TrendSeries};
use crate::ports::Notifier;
use crate::VitalcheckError;

#[derive(Debug, Parser)]
#[command(name = "vitalcheck", version, about = "Diabetes and hypertension risk assessment")]
pub struct Cli {
    /// Where logs go: "stderr" or "file" (overrides VITALCHECK_LOG_MODE)
    #[arg(long, global = true)]
    pub log_mode: Option<LogMode>,

    /// Log file used with --log-mode file (overrides VITALCHECK_LOG_FILE)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Assess a health record given as JSON
    Assess {
        /// JSON file to read; standard input when omitted
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Print a mock trend series (bloodGlucose, bloodPressure, weight)
    Trend { key: String },
}

impl Cli {
    /// Apply command-line flags on top of the environment config.
    pub fn apply_overrides(&self, cfg: &mut AppConfig) {
        if let Some(mode) = self.log_mode {
            cfg.log_mode = mode;
        }
        if let Some(path) = &self.log_file {
            cfg.log_file = path.clone();
        }
    }
}

/// Assessment output with the gauge caption for each score.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentReport<'a> {
    #[serde(flatten)]
    pub result: &'a AssessmentResult,
    pub diabetes_level: &'static str,
    pub hypertension_level: &'static str,
}

impl<'a> AssessmentReport<'a> {
    #[must_use]
    pub fn new(result: &'a AssessmentResult) -> Self {
        Self {
            result,
            diabetes_level: result.diabetes_level().label(),
            hypertension_level: result.hypertension_level().label(),
        }
    }
}

/// A trend series as printed by `vitalcheck trend`.
#[derive(Debug, Serialize)]
pub struct TrendReport<'a> {
    pub key: &'a str,
    /// Absent for keys the dashboard does not chart
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<&'static str>,
    pub points: Vec<TrendPoint>,
}

/// Execute one command.
///
/// `stdin` is read only by `assess` without `--input`.
///
/// # Errors
/// Returns an error if the record cannot be read or parsed, fails the form
/// checks, or the output cannot be written.
pub fn run<N, R, W>(
    command: &Command,
    service: &AssessmentService<N>,
    stdin: R,
    stdout: W,
) -> crate::Result<()>
where
    N: Notifier,
    R: Read,
    W: Write,
{
    match command {
        Command::Assess { input } => {
            let record = match input {
                Some(path) => {
                    let file = File::open(path).map_err(|source| VitalcheckError::InputFile {
                        path: path.clone(),
                        source,
                    })?;
                    json::read_input(BufReader::new(file))?
                }
                None => json::read_input(stdin)?,
            };

            let result = service.submit(&record)?;
            json::write_pretty(stdout, &AssessmentReport::new(&result))
        }
        Command::Trend { key } => {
            let report = TrendReport {
                key: key.as_str(),
                unit: TrendSeries::from_key(key).map(|series| series.unit()),
                points: service.trend(key),
            };
            json::write_pretty(stdout, &report)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryNotifier;
    use crate::application::{SUBMITTED_TITLE, VALIDATION_ERROR_TITLE};
    use std::sync::Arc;

    const RECORD: &str = r#"{"age":58,"gender":"male","weight":98,"height":175,
        "bloodGlucose":132,"systolicBP":146,"diastolicBP":94,
        "familyHistory":{"diabetes":true,"hypertension":true,"heartDisease":false}}"#;

    fn create_test_service() -> (AssessmentService<MemoryNotifier>, Arc<MemoryNotifier>) {
        let notifier = Arc::new(MemoryNotifier::new());
        (AssessmentService::new(Arc::clone(&notifier)), notifier)
    }

    fn assess_stdin() -> Command {
        Command::Assess { input: None }
    }

    #[test]
    fn test_assess_prints_report() {
        let (service, notifier) = create_test_service();
        let mut out = Vec::new();

        run(&assess_stdin(), &service, RECORD.as_bytes(), &mut out).expect("Should run");

        let text = String::from_utf8(out).expect("UTF-8 output");
        assert!(text.starts_with("{\n  "), "expected pretty JSON: {text}");
        let json: serde_json::Value = serde_json::from_str(&text).expect("Should parse");
        assert_eq!(json["diabetesRisk"], 88);
        assert_eq!(json["hypertensionRisk"], 60);
        assert_eq!(json["diabetesLevel"], "High Risk");
        assert_eq!(json["hypertensionLevel"], "Moderate Risk");
        assert_eq!(json["metrics"]["bpCategory"], "hypertension-2");

        let sent = notifier.notifications();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].title, SUBMITTED_TITLE);
    }

    #[test]
    fn test_assess_low_risk_levels() {
        let (service, _) = create_test_service();
        let record = serde_json::to_string(&crate::HealthInput::default()).expect("Should serialize");
        let mut out = Vec::new();

        run(&assess_stdin(), &service, record.as_bytes(), &mut out).expect("Should run");

        let json: serde_json::Value = serde_json::from_slice(&out).expect("Should parse");
        assert_eq!(json["diabetesLevel"], "Low Risk");
        assert_eq!(json["hypertensionLevel"], "Low Risk");
    }

    #[test]
    fn test_assess_rejects_invalid_record() {
        let (service, notifier) = create_test_service();
        let record = RECORD.replace("\"age\":58", "\"age\":10");
        let mut out = Vec::new();

        let err = run(&assess_stdin(), &service, record.as_bytes(), &mut out)
            .expect_err("age 10 should be rejected");
        assert!(matches!(err, VitalcheckError::Validation(_)));
        assert!(out.is_empty());

        let sent = notifier.notifications();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].title, VALIDATION_ERROR_TITLE);
        assert!(sent[0].is_destructive());
    }

    #[test]
    fn test_assess_malformed_json() {
        let (service, notifier) = create_test_service();
        let mut out = Vec::new();

        let err = run(&assess_stdin(), &service, &b"{\"age\": 40,"[..], &mut out)
            .expect_err("truncated JSON should fail");
        assert!(matches!(err, VitalcheckError::Serialization(_)));
        assert!(out.is_empty());
        assert!(notifier.is_empty());
    }

    #[test]
    fn test_assess_missing_input_file() {
        let (service, _) = create_test_service();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let command = Command::Assess {
            input: Some(path.clone()),
        };

        let err = run(&command, &service, std::io::empty(), Vec::new())
            .expect_err("missing file should fail");
        match err {
            VitalcheckError::InputFile { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_trend_report() {
        let (service, _) = create_test_service();
        let mut out = Vec::new();
        let command = Command::Trend {
            key: "bloodGlucose".to_string(),
        };

        run(&command, &service, std::io::empty(), &mut out).expect("Should run");

        let json: serde_json::Value = serde_json::from_slice(&out).expect("Should parse");
        assert_eq!(json["key"], "bloodGlucose");
        assert_eq!(json["unit"], "mg/dL");
        assert_eq!(json["points"].as_array().map(Vec::len), Some(7));
        assert_eq!(json["points"][0]["name"], "Mon");
    }

    #[test]
    fn test_trend_unknown_key() {
        let (service, _) = create_test_service();
        let mut out = Vec::new();
        let command = Command::Trend {
            key: "heartRate".to_string(),
        };

        run(&command, &service, std::io::empty(), &mut out).expect("Should run");

        let json: serde_json::Value = serde_json::from_slice(&out).expect("Should parse");
        assert!(json.get("unit").is_none());
        assert_eq!(json["points"], serde_json::json!([]));
    }

    #[test]
    fn test_flags_override_environment() {
        let cli = Cli::try_parse_from([
            "vitalcheck",
            "trend",
            "weight",
            "--log-mode",
            "file",
            "--log-file",
            "/tmp/vitalcheck-cli.log",
        ])
        .expect("Should parse");
        assert_eq!(
            cli.command,
            Command::Trend {
                key: "weight".to_string()
            }
        );

        let (mut cfg, _) = AppConfig::from_lookup(|key: &str| {
            (key == "VITALCHECK_LOG_MODE").then(|| "stderr".to_string())
        });
        assert_eq!(cfg.log_mode, LogMode::Stderr);

        cli.apply_overrides(&mut cfg);
        assert_eq!(cfg.log_mode, LogMode::File);
        assert_eq!(cfg.log_file, PathBuf::from("/tmp/vitalcheck-cli.log"));
    }

    #[test]
    fn test_invalid_log_mode_flag() {
        let parsed = Cli::try_parse_from(["vitalcheck", "--log-mode", "syslog", "trend", "weight"]);
        assert!(parsed.is_err());
    }
}
