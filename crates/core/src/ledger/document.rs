//! In-memory accounting document.
//!
//! Accounts carry their group code per grouping column plus an opening
//! balance; postings carry a date and a debit or credit amount. Balances are
//! debit-positive: `current = opening + debit - credit`.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use syscohada_shared::amount;

use super::error::LedgerError;
use super::source::{AmountField, BalanceSource, DocumentInfo, FiscalWindow, GroupSelector};

/// A ledger account with its group mappings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerAccount {
    /// Account number (e.g. "521").
    pub number: String,
    /// Account description.
    #[serde(default)]
    pub description: String,
    /// Group code per grouping column (e.g. `{"Gr2": "BQ", "Gr": "A"}`).
    #[serde(default)]
    pub groups: BTreeMap<String, String>,
    /// Opening balance at the fiscal year opening date.
    #[serde(default)]
    pub opening: Decimal,
}

impl LedgerAccount {
    /// Creates an account with no group mapping.
    pub fn new(number: impl Into<String>, opening: Decimal) -> Self {
        Self {
            number: number.into(),
            description: String::new(),
            groups: BTreeMap::new(),
            opening,
        }
    }

    /// Maps the account to `code` in `column`.
    #[must_use]
    pub fn in_group(mut self, column: impl Into<String>, code: impl Into<String>) -> Self {
        self.groups.insert(column.into(), code.into());
        self
    }

    fn belongs_to(&self, selector: &GroupSelector) -> bool {
        self.groups
            .get(&selector.column)
            .is_some_and(|code| *code == selector.code)
    }
}

/// A single-account movement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Posting {
    /// Booking date.
    pub date: NaiveDate,
    /// Account number.
    pub account: String,
    /// Debit amount.
    #[serde(default)]
    pub debit: Decimal,
    /// Credit amount.
    #[serde(default)]
    pub credit: Decimal,
}

impl Posting {
    /// Creates a debit posting.
    pub fn debit(date: NaiveDate, account: impl Into<String>, amount: Decimal) -> Self {
        Self {
            date,
            account: account.into(),
            debit: amount,
            credit: Decimal::ZERO,
        }
    }

    /// Creates a credit posting.
    pub fn credit(date: NaiveDate, account: impl Into<String>, amount: Decimal) -> Self {
        Self {
            date,
            account: account.into(),
            debit: Decimal::ZERO,
            credit: amount,
        }
    }
}

/// Debit/credit totals of a set of accounts for one window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Movements {
    opening: Decimal,
    debit: Decimal,
    credit: Decimal,
}

/// An accounting document held in memory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerDocument {
    /// Document description and fiscal dates.
    pub info: DocumentInfo,
    /// Chart of accounts.
    #[serde(default)]
    pub accounts: Vec<LedgerAccount>,
    /// Journal movements.
    #[serde(default)]
    pub postings: Vec<Posting>,
}

impl LedgerDocument {
    /// Creates an empty document.
    #[must_use]
    pub const fn new(info: DocumentInfo) -> Self {
        Self {
            info,
            accounts: Vec::new(),
            postings: Vec::new(),
        }
    }

    /// Reads a document from its JSON representation.
    pub fn from_json(text: &str) -> Result<Self, LedgerError> {
        serde_json::from_str(text).map_err(|e| LedgerError::InvalidDocument(e.to_string()))
    }

    /// Adds an account.
    #[must_use]
    pub fn with_account(mut self, account: LedgerAccount) -> Self {
        self.accounts.push(account);
        self
    }

    /// Adds a posting.
    #[must_use]
    pub fn with_posting(mut self, posting: Posting) -> Self {
        self.postings.push(posting);
        self
    }

    fn movements(
        &self,
        selector: &GroupSelector,
        window: &FiscalWindow,
    ) -> Result<Movements, LedgerError> {
        let accounts: Vec<&LedgerAccount> = self
            .accounts
            .iter()
            .filter(|account| account.belongs_to(selector))
            .collect();
        if accounts.is_empty() {
            return Err(LedgerError::GroupNotFound(selector.to_string()));
        }

        let mut totals = Movements::default();
        for account in &accounts {
            totals.opening = amount::checked_add(totals.opening, account.opening)?;
        }

        let postings = self
            .postings
            .iter()
            .filter(|posting| accounts.iter().any(|a| a.number == posting.account));
        for posting in postings {
            if posting.date < window.start {
                totals.opening = amount::checked_add(totals.opening, posting.debit)?;
                totals.opening = amount::checked_sub(totals.opening, posting.credit)?;
            } else if window.contains(posting.date) {
                totals.debit = amount::checked_add(totals.debit, posting.debit)?;
                totals.credit = amount::checked_add(totals.credit, posting.credit)?;
            }
        }

        Ok(totals)
    }
}

impl BalanceSource for LedgerDocument {
    fn document_info(&self) -> &DocumentInfo {
        &self.info
    }

    fn balance(
        &self,
        selector: &GroupSelector,
        field: AmountField,
        window: &FiscalWindow,
    ) -> Result<String, LedgerError> {
        let totals = self.movements(selector, window)?;
        let value = match field {
            AmountField::Opening => totals.opening,
            AmountField::Debit => totals.debit,
            AmountField::Credit => totals.credit,
            AmountField::Current => {
                let after_debit = amount::checked_add(totals.opening, totals.debit)?;
                amount::checked_sub(after_debit, totals.credit)?
            }
        };
        Ok(amount::render(value))
    }
}
