//! Immutable balance snapshot consumed by the formula engine.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ledger::AmountField;

/// Which period column a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodColumn {
    /// The reporting window.
    Current,
    /// The comparison window.
    Previous,
}

/// The four amounts of a group for one window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupAmounts {
    /// Balance at the start of the window.
    pub opening: Decimal,
    /// Balance at the end of the window.
    pub current: Decimal,
    /// Debit movements.
    pub debit: Decimal,
    /// Credit movements.
    pub credit: Decimal,
}

impl GroupAmounts {
    /// Reads one field.
    #[must_use]
    pub const fn get(&self, field: AmountField) -> Decimal {
        match field {
            AmountField::Opening => self.opening,
            AmountField::Current => self.current,
            AmountField::Debit => self.debit,
            AmountField::Credit => self.credit,
        }
    }

    /// Sets one field.
    #[must_use]
    pub const fn with(mut self, field: AmountField, value: Decimal) -> Self {
        match field {
            AmountField::Opening => self.opening = value,
            AmountField::Current => self.current = value,
            AmountField::Debit => self.debit = value,
            AmountField::Credit => self.credit = value,
        }
        self
    }
}

/// Balances of one account group for the current and prior windows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountGroupBalance {
    /// Group code (e.g. "BQ").
    pub code: String,
    /// Amounts over the reporting window.
    pub current: GroupAmounts,
    /// Amounts over the prior window, when one exists.
    pub previous: Option<GroupAmounts>,
}

/// Group balances for one run.
///
/// Built once by the aggregator and read-only afterwards. A group missing from
/// the snapshot reads as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSnapshot {
    groups: BTreeMap<String, AccountGroupBalance>,
    has_prior: bool,
}

impl BalanceSnapshot {
    /// Creates an empty snapshot.
    #[must_use]
    pub const fn new(has_prior: bool) -> Self {
        Self {
            groups: BTreeMap::new(),
            has_prior,
        }
    }

    /// Adds or replaces a group.
    #[must_use]
    pub fn with_group(mut self, group: AccountGroupBalance) -> Self {
        self.groups.insert(group.code.clone(), group);
        self
    }

    /// Returns true if prior-window amounts were loaded.
    #[must_use]
    pub const fn has_prior(&self) -> bool {
        self.has_prior
    }

    /// Looks up a group.
    #[must_use]
    pub fn group(&self, code: &str) -> Option<&AccountGroupBalance> {
        self.groups.get(code)
    }

    /// Iterates groups in code order.
    pub fn groups(&self) -> impl Iterator<Item = &AccountGroupBalance> {
        self.groups.values()
    }

    /// Reads an amount for a column.
    ///
    /// Returns `None` for the previous column when no prior window exists;
    /// a missing group reads as zero.
    #[must_use]
    pub fn amount(&self, code: &str, field: AmountField, column: PeriodColumn) -> Option<Decimal> {
        if column == PeriodColumn::Previous && !self.has_prior {
            return None;
        }
        let Some(group) = self.groups.get(code) else {
            return Some(Decimal::ZERO);
        };
        let amounts = match column {
            PeriodColumn::Current => group.current,
            PeriodColumn::Previous => group.previous.unwrap_or_default(),
        };
        Some(amounts.get(field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn bank() -> AccountGroupBalance {
        AccountGroupBalance {
            code: "BQ".to_string(),
            current: GroupAmounts::default()
                .with(AmountField::Opening, dec!(100))
                .with(AmountField::Current, dec!(150)),
            previous: Some(GroupAmounts::default().with(AmountField::Current, dec!(100))),
        }
    }

    #[test]
    fn test_amount_reads_fields() {
        let snapshot = BalanceSnapshot::new(true).with_group(bank());
        assert_eq!(
            snapshot.amount("BQ", AmountField::Opening, PeriodColumn::Current),
            Some(dec!(100))
        );
        assert_eq!(
            snapshot.amount("BQ", AmountField::Current, PeriodColumn::Previous),
            Some(dec!(100))
        );
        assert_eq!(
            snapshot.amount("BQ", AmountField::Debit, PeriodColumn::Current),
            Some(Decimal::ZERO)
        );
    }

    #[test]
    fn test_missing_group_is_zero() {
        let snapshot = BalanceSnapshot::new(true);
        assert_eq!(
            snapshot.amount("XX", AmountField::Current, PeriodColumn::Current),
            Some(Decimal::ZERO)
        );
    }

    #[test]
    fn test_previous_column_absent_without_prior() {
        let snapshot = BalanceSnapshot::new(false).with_group(bank());
        assert_eq!(
            snapshot.amount("BQ", AmountField::Current, PeriodColumn::Previous),
            None
        );
        assert!(snapshot.amount("BQ", AmountField::Current, PeriodColumn::Current).is_some());
    }
}
