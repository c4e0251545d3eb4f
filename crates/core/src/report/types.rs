//! Report data types.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use syscohada_shared::AppError;
use uuid::Uuid;

use super::warning::ReportWarning;
use crate::fiscal::ResolvedPeriod;
use crate::ledger::DocumentInfo;
use crate::statement::LineItem;

/// Which statement to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatementKind {
    /// Tableau des flux de trésorerie.
    CashFlow,
    /// Compte de résultat.
    ProfitLoss,
}

impl StatementKind {
    /// Configuration name of the statement.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CashFlow => "cash_flow",
            Self::ProfitLoss => "profit_loss",
        }
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatementKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "cash_flow" => Ok(Self::CashFlow),
            "profit_loss" => Ok(Self::ProfitLoss),
            other => Err(format!("unknown statement: {other}")),
        }
    }
}

/// Document metadata printed above the statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportHeader {
    /// Company name.
    pub company: String,
    /// Address, city and state joined by " - ".
    pub address: String,
    /// Last day of the reporting window.
    pub closing_date: NaiveDate,
    /// Length of the reporting window in months.
    pub duration_months: u32,
    /// Statement title.
    pub title: String,
    /// Label of the current column.
    pub current_label: String,
    /// Label of the prior column.
    pub previous_label: String,
}

impl ReportHeader {
    /// Builds the header for a resolved period.
    #[must_use]
    pub fn new(info: &DocumentInfo, period: &ResolvedPeriod, title: &str) -> Self {
        let address = [&info.address1, &info.city, &info.state]
            .into_iter()
            .filter_map(|part| part.as_deref().map(str::trim).filter(|part| !part.is_empty()))
            .collect::<Vec<_>>()
            .join(" - ");

        Self {
            company: info.company.clone().unwrap_or_default(),
            address,
            closing_date: period.current.window.end,
            duration_months: period.current.duration_months,
            title: title.to_string(),
            current_label: period.current.label.clone(),
            previous_label: period.prior_label().to_string(),
        }
    }

    /// "Exercice clos le 31.12.2024".
    #[must_use]
    pub fn closing_text(&self) -> String {
        format!("Exercice clos le {}", self.closing_date.format("%d.%m.%Y"))
    }

    /// "Durée (en mois) 12".
    #[must_use]
    pub fn duration_text(&self) -> String {
        format!("Durée (en mois) {}", self.duration_months)
    }
}

/// A produced statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FinancialReport {
    /// Run identifier, also attached to log events.
    pub run_id: Uuid,
    /// Header metadata.
    pub header: ReportHeader,
    /// Reporting and comparison windows.
    pub period: ResolvedPeriod,
    /// Rows in presentation order.
    pub lines: Vec<LineItem>,
    /// Conditions absorbed while producing the report.
    pub warnings: Vec<ReportWarning>,
}

impl FinancialReport {
    /// Finds a line by code.
    #[must_use]
    pub fn line(&self, code: &str) -> Option<&LineItem> {
        self.lines.iter().find(|item| !item.code.is_empty() && item.code == code)
    }
}

/// Result of a report run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ReportOutcome {
    /// The report was produced.
    Produced(Box<FinancialReport>),
    /// A host precondition stopped the run.
    Cancelled {
        /// Why the run stopped.
        reason: String,
    },
}

impl ReportOutcome {
    /// The report, if one was produced.
    #[must_use]
    pub fn report(&self) -> Option<&FinancialReport> {
        match self {
            Self::Produced(report) => Some(report),
            Self::Cancelled { .. } => None,
        }
    }

    /// Takes the produced report.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Cancelled` with the cancel reason when no report
    /// was produced.
    pub fn into_report(self) -> Result<Box<FinancialReport>, AppError> {
        match self {
            Self::Produced(report) => Ok(report),
            Self::Cancelled { reason } => Err(AppError::Cancelled(reason)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fiscal::{PeriodKind, ReportingPeriod};
    use crate::ledger::FiscalWindow;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn period() -> ResolvedPeriod {
        ResolvedPeriod {
            current: ReportingPeriod {
                window: FiscalWindow::new(date(2024, 1, 1), date(2024, 12, 31)),
                kind: Some(PeriodKind::Year),
                fiscal_year: 2024,
                label: "EXERCICE 2024".to_string(),
                duration_months: 12,
            },
            prior: None,
        }
    }

    #[test]
    fn test_statement_kind_parse() {
        assert_eq!("cash_flow".parse::<StatementKind>(), Ok(StatementKind::CashFlow));
        assert_eq!(" profit_loss ".parse::<StatementKind>(), Ok(StatementKind::ProfitLoss));
        assert!("bilan".parse::<StatementKind>().is_err());
        assert_eq!(StatementKind::ProfitLoss.to_string(), "profit_loss");
    }

    #[test]
    fn test_header_skips_missing_address_parts() {
        let info = DocumentInfo {
            company: Some("Kala SARL".to_string()),
            address1: Some("12 rue du Port".to_string()),
            state: Some("Littoral".to_string()),
            ..DocumentInfo::for_fiscal_year(date(2024, 1, 1), date(2024, 12, 31))
        };
        let header = ReportHeader::new(&info, &period(), "TABLEAU DES FLUX DE TRESORERIE");

        assert_eq!(header.company, "Kala SARL");
        assert_eq!(header.address, "12 rue du Port - Littoral");
        assert_eq!(header.closing_text(), "Exercice clos le 31.12.2024");
        assert_eq!(header.duration_text(), "Durée (en mois) 12");
        assert_eq!(header.current_label, "EXERCICE 2024");
        assert_eq!(header.previous_label, "EXERCICE N-1");
    }
}
