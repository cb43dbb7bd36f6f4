//! Vitalcheck: rule-based health risk assessment.
//!
//! Command-line entry point. Results are printed as JSON on stdout;
//! notifications and logs go to stderr (or a log file).

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use vitalcheck::adapters::sanitize::SanitizingMakeWriter;
use vitalcheck::adapters::ConsoleNotifier;
use vitalcheck::cli::{self, Cli};
use vitalcheck::config::{AppConfig, LogMode};
use vitalcheck::AssessmentService;

fn init_logging(cfg: &AppConfig) -> Result<tracing_appender::non_blocking::WorkerGuard> {
    let (writer, guard) = match cfg.log_mode {
        LogMode::File => {
            if let Some(parent) = cfg.log_file.parent() {
                // Best-effort: opening the file below reports the real error.
                let _ = std::fs::create_dir_all(parent);
            }
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&cfg.log_file)
                .with_context(|| format!("opening log file {}", cfg.log_file.display()))?;
            tracing_appender::non_blocking(file)
        }
        LogMode::Stderr => tracing_appender::non_blocking(std::io::stderr()),
    };

    let (filter, bad_filter) = match EnvFilter::try_new(&cfg.log_filter) {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::new("info"), Some(e)),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(SanitizingMakeWriter::new(writer)),
        )
        .init();

    if let Some(e) = bad_filter {
        tracing::warn!("Ignoring log filter {:?}: {}", cfg.log_filter, e);
    }

    Ok(guard)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (mut cfg, rejected) = AppConfig::from_env_or_default();
    cli.apply_overrides(&mut cfg);

    let _guard = init_logging(&cfg)?;
    for setting in &rejected {
        tracing::warn!("Ignoring {}", setting);
    }
    tracing::debug!(?cfg, "Starting vitalcheck");

    let service = AssessmentService::new(Arc::new(ConsoleNotifier::stderr()));
    cli::run(
        &cli.command,
        &service,
        std::io::stdin().lock(),
        std::io::stdout().lock(),
    )?;

    Ok(())
}
