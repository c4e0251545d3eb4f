//! Report generation service.

use rust_decimal::Decimal;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::environment::HostEnvironment;
use super::error::ReportError;
use super::types::{FinancialReport, ReportHeader, ReportOutcome};
use super::warning::ReportWarning;
use crate::balance::{self, BalanceAggregator, PriorLookup};
use crate::fiscal::{PeriodResolver, PriorSource};
use crate::ledger::{AmountField, BalanceSource, FiscalWindow, GroupSelector};
use crate::settings::ReportSettings;
use crate::statement::{FormulaEngine, LineKey, StatementDefinition, sequence};

/// Group column holding the balance sheet side of every account.
pub const SIDE_COLUMN: &str = "Gr";

/// Inputs of one report run.
pub struct ReportRequest<'a, S: BalanceSource> {
    /// Document reported on.
    pub current: &'a S,
    /// Previous-year document, if the user opened one.
    pub previous: Option<&'a S>,
    /// User settings.
    pub settings: &'a ReportSettings,
    /// Host application description.
    pub host: &'a HostEnvironment,
}

/// Service for generating financial statements.
pub struct ReportService;

impl ReportService {
    /// Produces `definition` for the request.
    ///
    /// Host precondition failures cancel the run. Lookup failures, overflows,
    /// failed cross-checks and an unbalanced ledger are recorded as warnings
    /// on the report.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::InvalidDateRange` when the selected end date is
    /// not after its start, and `ReportError::Definition` for a malformed
    /// statement table.
    pub fn generate<L: LineKey, S: BalanceSource>(
        definition: &StatementDefinition<L>,
        request: &ReportRequest<'_, S>,
    ) -> Result<ReportOutcome, ReportError> {
        let run_id = Uuid::new_v4();
        info!(%run_id, statement = definition.title, "Generating report");

        if let Err(err) = request.host.check() {
            warn!(%run_id, error = %err, "Report cancelled");
            return Ok(ReportOutcome::Cancelled {
                reason: err.to_string(),
            });
        }

        let info = request.current.document_info();
        let window = request.settings.window(info);
        let period = PeriodResolver::resolve(
            window,
            info,
            request.previous.map(S::document_info),
        )?;

        let mut warnings = Vec::new();
        if !period.is_resolved() {
            warnings.push(ReportWarning::PeriodUnresolved {
                start_month: window.start_month(),
                end_month: window.end_month(),
            });
        }

        let column = request.settings.column.as_str();
        let current = BalanceAggregator::new(request.current, column);
        let previous = request.previous.map(|document| BalanceAggregator::new(document, column));
        let prior = period.prior.as_ref().and_then(|prior| {
            let aggregator = match prior.source {
                PriorSource::CurrentDocument => Some(&current),
                PriorSource::PreviousYearDocument => previous.as_ref(),
            };
            aggregator.map(|aggregator| PriorLookup {
                aggregator,
                window: prior.window,
            })
        });

        let (snapshot, lookup_warnings) = balance::load(&definition.group_codes(), &current, &window, prior);
        warnings.extend(lookup_warnings);

        let (mut current_values, mut previous_values) = FormulaEngine::evaluate_columns(definition, &snapshot)?;
        warnings.append(&mut current_values.warnings);
        warnings.extend(FormulaEngine::cross_check(definition, &current_values));
        if let Some(previous_values) = previous_values.as_mut() {
            warnings.append(&mut previous_values.warnings);
            warnings.extend(FormulaEngine::cross_check(definition, previous_values));
        }

        if let Some(warning) = Self::check_assets_liabilities(&current, &window) {
            warnings.push(warning);
        }

        let lines = sequence(definition, &current_values, previous_values.as_ref());
        let header = ReportHeader::new(info, &period, definition.title);

        info!(
            %run_id,
            lines = lines.len(),
            warnings = warnings.len(),
            lookups = current.cached_lookups(),
            "Report produced"
        );

        Ok(ReportOutcome::Produced(Box::new(FinancialReport {
            run_id,
            header,
            period,
            lines,
            warnings,
        })))
    }

    /// Assets (`Gr=A`) and liabilities (`Gr=P`) must net to zero.
    ///
    /// A document without the side column is not checked.
    fn check_assets_liabilities<S: BalanceSource>(
        aggregator: &BalanceAggregator<'_, S>,
        window: &FiscalWindow,
    ) -> Option<ReportWarning> {
        let side = |code: &str| {
            aggregator
                .fetch_selector(&GroupSelector::new(SIDE_COLUMN, code), AmountField::Current, window)
                .inspect_err(|err| debug!(side = code, error = %err, "Side balance read as zero"))
                .unwrap_or_default()
        };

        let Some(difference) = side("A").checked_add(side("P")) else {
            return Some(ReportWarning::ArithmeticOverflow {
                item: format!("{SIDE_COLUMN}=A + {SIDE_COLUMN}=P"),
            });
        };

        if difference == Decimal::ZERO {
            None
        } else {
            warn!(%difference, "Différence entre l'actif et le passif.");
            Some(ReportWarning::AssetsLiabilitiesMismatch { difference })
        }
    }
}
