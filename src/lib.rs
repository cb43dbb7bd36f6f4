//! # Vitalcheck
//!
//! Rule-based diabetes and hypertension risk assessment for a personal
//! health dashboard.
//!
//! This crate provides:
//! - A pure, deterministic risk engine over biometric input
//! - Form checks, notifications and trend series for the dashboard
//! - A command-line front end that speaks JSON
//!
//! The scores are a fixed heuristic, not a clinically validated model.
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture:
//! - `domain`: Core types and the risk engine (no I/O)
//! - `ports`: Trait definitions for display collaborators
//! - `adapters`: Concrete notifiers and log sanitization
//! - `application`: Use cases orchestrating domain and ports
//! - `config`: Environment-driven runtime configuration
//! - `cli`: Command-line arguments and command dispatch

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod ports;

pub use application::AssessmentService;
pub use domain::{assess, AssessmentResult, ComputationError, HealthInput, RiskLevel};

/// Result type for Vitalcheck operations
pub type Result<T> = std::result::Result<T, VitalcheckError>;

/// Main error type for Vitalcheck
#[derive(Debug, thiserror::Error)]
pub enum VitalcheckError {
    #[error("Invalid health data: {0}")]
    Validation(#[from] domain::ValidationErrors),

    #[error("Cannot read {}: {source}", path.display())]
    InputFile {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
