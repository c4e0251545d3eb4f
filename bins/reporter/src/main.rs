//! SYSCOHADA report runner
//!
//! Reads ledger documents and saved settings, produces the configured
//! statement and writes it to stdout as JSON.

use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use serde::Serialize;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use syscohada_core::ledger::LedgerDocument;
use syscohada_core::report::{
    FinancialReport, HostEnvironment, RenderCell, ReportRequest, ReportService, RowCollector,
    StatementKind, render,
};
use syscohada_core::settings::ReportSettings;
use syscohada_core::statement::{CASH_FLOW, LineKey, PROFIT_LOSS, StatementDefinition};
use syscohada_shared::{AppConfig, AppError};

/// What the runner prints.
#[derive(Serialize)]
struct Output<'a> {
    report: &'a FinancialReport,
    rows: &'a [Vec<RenderCell>],
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "syscohada=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let app_error = err.downcast_ref::<AppError>();
            let code = app_error.map_or(70, AppError::exit_code);
            error!(
                error_code = app_error.map_or("INTERNAL_ERROR", AppError::error_code),
                "{err:#}"
            );
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

fn run() -> anyhow::Result<()> {
    let config = AppConfig::load().map_err(AppError::from)?;
    let statement: StatementKind = config
        .report
        .statement
        .parse()
        .map_err(AppError::Configuration)?;

    let current = read_document(&config.input.current_document)?;
    let previous = config
        .input
        .previous_document
        .as_deref()
        .map(read_document)
        .transpose()?;
    let settings = match config.input.settings_file.as_deref() {
        Some(path) => {
            let text = read_text(path)?;
            ReportSettings::from_json(&text)
                .map_err(|e| AppError::Input(e.to_string()))
                .with_context(|| format!("reading settings {}", path.display()))?
        }
        None => ReportSettings::default(),
    };
    let host = HostEnvironment::new(config.host.application_version, config.host.license);

    info!(%statement, column = %settings.column, previous = previous.is_some(), "Running report");

    let request = ReportRequest {
        current: &current,
        previous: previous.as_ref(),
        settings: &settings,
        host: &host,
    };
    match statement {
        StatementKind::CashFlow => produce(&CASH_FLOW, &request),
        StatementKind::ProfitLoss => produce(&PROFIT_LOSS, &request),
    }
}

fn produce<L: LineKey>(
    definition: &StatementDefinition<L>,
    request: &ReportRequest<'_, LedgerDocument>,
) -> anyhow::Result<()> {
    let report = ReportService::generate(definition, request)
        .map_err(AppError::from)?
        .into_report()?;

    let mut rows = RowCollector::default();
    render(&report, request.settings, &mut rows);

    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(
        &mut stdout,
        &Output {
            report: &report,
            rows: &rows.rows,
        },
    )
    .map_err(|e| AppError::Internal(e.to_string()))?;
    writeln!(stdout).context("writing report")?;

    info!(run_id = %report.run_id, warnings = report.warnings.len(), "Report written");
    Ok(())
}

fn read_text(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path)
        .map_err(|e| AppError::Input(e.to_string()))
        .with_context(|| format!("reading {}", path.display()))
}

fn read_document(path: &Path) -> anyhow::Result<LedgerDocument> {
    let text = read_text(path)?;
    LedgerDocument::from_json(&text)
        .map_err(|e| AppError::Input(e.to_string()))
        .with_context(|| format!("reading ledger document {}", path.display()))
}
