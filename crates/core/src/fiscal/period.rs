//! Reporting period types.

use serde::{Deserialize, Serialize};

use crate::ledger::FiscalWindow;

/// Label shown in the prior-period column when no prior window exists.
pub const UNKNOWN_PRIOR_LABEL: &str = "EXERCICE N-1";

/// Shape of a reporting period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodKind {
    /// Twelve months starting in January.
    Year,
    /// A single month.
    Month,
    /// Three consecutive months.
    Quarter,
    /// Six consecutive months.
    Semester,
}

/// How the prior window is derived for a period shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriorRule {
    /// The previous-year document's fiscal year.
    ///
    /// Applies to every window starting in January, including one-month,
    /// quarter and semester windows (kept as the host behaves; see DESIGN.md).
    PreviousYearDocument,
    /// The same document, shifted back by this many months.
    ShiftBack(u32),
}

/// Which document the prior balances are read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorSource {
    /// The previous-year document.
    PreviousYearDocument,
    /// The current document.
    CurrentDocument,
}

/// The window a report is produced for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportingPeriod {
    /// Dates covered.
    pub window: FiscalWindow,
    /// Detected shape, `None` when the window matches no supported shape.
    pub kind: Option<PeriodKind>,
    /// Fiscal year of the current document.
    pub fiscal_year: i32,
    /// Column label (e.g. "EXERCICE 2024", "EXERCICE Q2 2024").
    pub label: String,
    /// Duration in months.
    pub duration_months: u32,
}

/// The comparison window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorPeriod {
    /// Dates covered.
    pub window: FiscalWindow,
    /// Document the balances come from.
    pub source: PriorSource,
    /// Column label.
    pub label: String,
}

/// Current period plus its optional prior period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedPeriod {
    /// The reporting period.
    pub current: ReportingPeriod,
    /// The comparison period, absent when it cannot be determined.
    pub prior: Option<PriorPeriod>,
}

impl ResolvedPeriod {
    /// Label of the prior-period column.
    #[must_use]
    pub fn prior_label(&self) -> &str {
        self.prior
            .as_ref()
            .map_or(UNKNOWN_PRIOR_LABEL, |prior| prior.label.as_str())
    }

    /// Returns true if the window matched a supported shape.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        self.current.kind.is_some()
    }
}
