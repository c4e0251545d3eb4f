//! Non-fatal conditions recorded while producing a report.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ledger::{AmountField, FiscalWindow, LedgerError};
use syscohada_shared::DecimalError;

/// A condition that degraded the report without stopping it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReportWarning {
    /// The host returned a balance that is not a decimal; read as zero.
    MalformedBalance {
        /// Group selector (e.g. `Gr2=BQ`).
        selector: String,
        /// Amount field requested.
        field: AmountField,
        /// Window requested.
        window: FiscalWindow,
        /// Raw balance text.
        raw: String,
    },
    /// No account maps to the group; read as zero.
    GroupNotFound {
        /// Group selector.
        selector: String,
        /// Window requested.
        window: FiscalWindow,
    },
    /// The reporting window matches no supported period shape.
    PeriodUnresolved {
        /// Zero-based start month.
        start_month: u32,
        /// Zero-based end month.
        end_month: u32,
    },
    /// A sum exceeded the decimal range; the value was set to zero.
    ArithmeticOverflow {
        /// Line code or group selector.
        item: String,
    },
    /// A total does not equal the sum of its components.
    CrossCheckFailed {
        /// The identity checked (e.g. `ZH = ZA + ZG`).
        identity: String,
        /// Value of the total line.
        expected: Decimal,
        /// Signed sum of the components.
        actual: Decimal,
    },
    /// Assets plus liabilities do not net to zero.
    AssetsLiabilitiesMismatch {
        /// The non-zero net.
        difference: Decimal,
    },
}

impl ReportWarning {
    /// Maps an absorbed lookup failure to its warning.
    #[must_use]
    pub fn from_lookup(
        selector: String,
        field: AmountField,
        window: FiscalWindow,
        error: &LedgerError,
    ) -> Self {
        match error {
            LedgerError::Decimal(DecimalError::MalformedDecimal(raw)) => Self::MalformedBalance {
                selector,
                field,
                window,
                raw: raw.clone(),
            },
            LedgerError::Decimal(DecimalError::Overflow) => Self::ArithmeticOverflow { item: selector },
            LedgerError::GroupNotFound(_)
            | LedgerError::InvalidSelector(_)
            | LedgerError::InvalidDocument(_) => Self::GroupNotFound { selector, window },
        }
    }
}

impl fmt::Display for ReportWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedBalance {
                selector,
                field,
                window,
                raw,
            } => write!(f, "Malformed {field} balance for {selector} over {window}: {raw:?}"),
            Self::GroupNotFound { selector, window } => {
                write!(f, "Group not found: {selector} over {window}")
            }
            Self::PeriodUnresolved {
                start_month,
                end_month,
            } => write!(f, "Unsupported period shape: months {start_month}..{end_month}"),
            Self::ArithmeticOverflow { item } => write!(f, "Arithmetic overflow in {item}"),
            Self::CrossCheckFailed {
                identity,
                expected,
                actual,
            } => write!(f, "Cross-check failed: {identity} ({expected} != {actual})"),
            Self::AssetsLiabilitiesMismatch { .. } => {
                write!(f, "Différence entre l'actif et le passif.")
            }
        }
    }
}
