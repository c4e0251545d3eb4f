//! Cached group balance lookups.

use std::collections::BTreeSet;

use moka::sync::Cache;
use rust_decimal::Decimal;
use syscohada_shared::amount;
use tracing::{debug, warn};

use super::snapshot::{AccountGroupBalance, BalanceSnapshot, GroupAmounts};
use crate::ledger::{AmountField, BalanceSource, FiscalWindow, GroupSelector, LedgerError};
use crate::report::ReportWarning;

/// Default grouping column for statement groups.
pub const DEFAULT_COLUMN: &str = "Gr2";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct BalanceKey {
    selector: GroupSelector,
    field: AmountField,
    window: FiscalWindow,
}

/// Reads group balances from one document, caching each lookup for the run.
///
/// Failed lookups are cached too, so a missing group is asked for once.
pub struct BalanceAggregator<'a, S: BalanceSource> {
    source: &'a S,
    column: String,
    cache: Cache<BalanceKey, Result<Decimal, LedgerError>>,
}

impl<'a, S: BalanceSource> BalanceAggregator<'a, S> {
    /// Creates an aggregator over `source` selecting groups in `column`.
    pub fn new(source: &'a S, column: impl Into<String>) -> Self {
        Self {
            source,
            column: column.into(),
            cache: Cache::builder().build(),
        }
    }

    /// The document balances are read from.
    #[must_use]
    pub const fn source(&self) -> &'a S {
        self.source
    }

    /// Grouping column used for statement groups.
    #[must_use]
    pub fn column(&self) -> &str {
        &self.column
    }

    /// Balance of `code` in the configured column.
    ///
    /// # Errors
    ///
    /// Returns the source's `LedgerError`, or `LedgerError::Decimal` when the
    /// returned text is not a decimal.
    pub fn fetch(&self, code: &str, field: AmountField, window: &FiscalWindow) -> Result<Decimal, LedgerError> {
        let selector = GroupSelector::new(self.column.as_str(), code);
        self.fetch_selector(&selector, field, window)
    }

    /// Balance for an explicit selector, possibly in another column.
    ///
    /// # Errors
    ///
    /// Same as [`Self::fetch`].
    pub fn fetch_selector(
        &self,
        selector: &GroupSelector,
        field: AmountField,
        window: &FiscalWindow,
    ) -> Result<Decimal, LedgerError> {
        let key = BalanceKey {
            selector: selector.clone(),
            field,
            window: *window,
        };

        if let Some(cached) = self.cache.get(&key) {
            debug!(%selector, %field, %window, "Balance cache hit");
            return cached;
        }

        debug!(%selector, %field, %window, "Balance cache miss");
        let result = self
            .source
            .balance(selector, field, window)
            .and_then(|raw| amount::parse(&raw).map_err(LedgerError::from));
        self.cache.insert(key, result.clone());
        result
    }

    /// Like [`Self::fetch_selector`], absorbing failures as zero.
    ///
    /// The absorbed failure is pushed to `warnings` unless an identical
    /// warning is already there.
    pub fn balance_or_zero(
        &self,
        selector: &GroupSelector,
        field: AmountField,
        window: &FiscalWindow,
        warnings: &mut Vec<ReportWarning>,
    ) -> Decimal {
        match self.fetch_selector(selector, field, window) {
            Ok(value) => value,
            Err(err) => {
                let warning = ReportWarning::from_lookup(selector.to_string(), field, *window, &err);
                if !warnings.contains(&warning) {
                    warn!(%selector, %field, %window, error = %err, "Balance read as zero");
                    warnings.push(warning);
                }
                Decimal::ZERO
            }
        }
    }

    /// All four amounts of `code` over a window.
    pub fn amounts(&self, code: &str, window: &FiscalWindow, warnings: &mut Vec<ReportWarning>) -> GroupAmounts {
        let selector = GroupSelector::new(self.column.as_str(), code);
        AmountField::ALL.into_iter().fold(GroupAmounts::default(), |amounts, field| {
            amounts.with(field, self.balance_or_zero(&selector, field, window, warnings))
        })
    }

    /// Number of cached lookups.
    #[must_use]
    pub fn cached_lookups(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }
}

/// Where the prior-window amounts are read from.
pub struct PriorLookup<'r, 'a, S: BalanceSource> {
    /// Aggregator over the document holding the prior window.
    pub aggregator: &'r BalanceAggregator<'a, S>,
    /// The prior window.
    pub window: FiscalWindow,
}

/// Loads the snapshot of every group in `codes`.
///
/// Returns the snapshot plus the warnings of absorbed lookup failures.
pub fn load<S: BalanceSource>(
    codes: &BTreeSet<&str>,
    current: &BalanceAggregator<'_, S>,
    window: &FiscalWindow,
    prior: Option<PriorLookup<'_, '_, S>>,
) -> (BalanceSnapshot, Vec<ReportWarning>) {
    let mut warnings = Vec::new();
    let mut snapshot = BalanceSnapshot::new(prior.is_some());

    for code in codes {
        let current_amounts = current.amounts(code, window, &mut warnings);
        let previous_amounts = prior
            .as_ref()
            .map(|prior| prior.aggregator.amounts(code, &prior.window, &mut warnings));
        snapshot = snapshot.with_group(AccountGroupBalance {
            code: (*code).to_string(),
            current: current_amounts,
            previous: previous_amounts,
        });
    }

    debug!(
        groups = codes.len(),
        warnings = warnings.len(),
        prior = prior.is_some(),
        "Loaded balance snapshot"
    );
    (snapshot, warnings)
}
