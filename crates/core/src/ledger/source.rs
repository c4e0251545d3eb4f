//! The balance-lookup seam between the report engine and the host ledger.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::error::LedgerError;

/// Which amount of an account group a formula reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AmountField {
    /// Balance at the start of the window.
    Opening,
    /// Balance at the end of the window (opening + debit - credit).
    Current,
    /// Debit movements within the window.
    Debit,
    /// Credit movements within the window, as a positive amount.
    Credit,
}

impl AmountField {
    /// All fields, in lookup order.
    pub const ALL: [Self; 4] = [Self::Opening, Self::Current, Self::Debit, Self::Credit];
}

impl fmt::Display for AmountField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Opening => write!(f, "opening"),
            Self::Current => write!(f, "current"),
            Self::Debit => write!(f, "debit"),
            Self::Credit => write!(f, "credit"),
        }
    }
}

/// An inclusive date range balances are computed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FiscalWindow {
    /// First day of the window.
    pub start: NaiveDate,
    /// Last day of the window.
    pub end: NaiveDate,
}

impl FiscalWindow {
    /// Creates a new window.
    #[must_use]
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Returns true if the given date falls within this window.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Zero-based month of the first day.
    #[must_use]
    pub fn start_month(&self) -> u32 {
        self.start.month0()
    }

    /// Zero-based month of the last day.
    #[must_use]
    pub fn end_month(&self) -> u32 {
        self.end.month0()
    }
}

impl fmt::Display for FiscalWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Account-group selector in the host syntax `<column>=<code>` (e.g. `Gr2=BQ`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupSelector {
    /// Grouping column (e.g. `Gr`, `Gr2`).
    pub column: String,
    /// Group code within that column.
    pub code: String,
}

impl GroupSelector {
    /// Creates a selector for `code` in `column`.
    pub fn new(column: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            code: code.into(),
        }
    }
}

impl fmt::Display for GroupSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.column, self.code)
    }
}

impl FromStr for GroupSelector {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('=') {
            Some((column, code)) if !column.trim().is_empty() && !code.trim().is_empty() => {
                Ok(Self::new(column.trim(), code.trim()))
            }
            _ => Err(LedgerError::InvalidSelector(s.to_string())),
        }
    }
}

/// Descriptive information of an accounting document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentInfo {
    /// Company name.
    #[serde(default)]
    pub company: Option<String>,
    /// Address line.
    #[serde(default)]
    pub address1: Option<String>,
    /// Postal code.
    #[serde(default)]
    pub zip: Option<String>,
    /// City.
    #[serde(default)]
    pub city: Option<String>,
    /// State or region.
    #[serde(default)]
    pub state: Option<String>,
    /// Contact email.
    #[serde(default)]
    pub email: Option<String>,
    /// Fiscal year opening date.
    pub opening_date: NaiveDate,
    /// Fiscal year closure date.
    pub closure_date: NaiveDate,
}

impl DocumentInfo {
    /// Creates document info for a fiscal year with no address data.
    #[must_use]
    pub const fn for_fiscal_year(opening_date: NaiveDate, closure_date: NaiveDate) -> Self {
        Self {
            company: None,
            address1: None,
            zip: None,
            city: None,
            state: None,
            email: None,
            opening_date,
            closure_date,
        }
    }

    /// Calendar year of the opening date.
    #[must_use]
    pub fn fiscal_year(&self) -> i32 {
        self.opening_date.year()
    }

    /// The whole fiscal year as a window.
    #[must_use]
    pub const fn fiscal_window(&self) -> FiscalWindow {
        FiscalWindow::new(self.opening_date, self.closure_date)
    }
}

/// Read-only access to an accounting document's balances.
///
/// Implemented by the host integration; [`super::LedgerDocument`] is the
/// in-memory implementation.
pub trait BalanceSource {
    /// Document description and fiscal dates.
    fn document_info(&self) -> &DocumentInfo;

    /// Signed decimal-string balance of a group for one field over a window.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::GroupNotFound` when no account maps to the selector.
    fn balance(
        &self,
        selector: &GroupSelector,
        field: AmountField,
        window: &FiscalWindow,
    ) -> Result<String, LedgerError>;
}
