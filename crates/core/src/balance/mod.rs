//! Account-group balance aggregation.
//!
//! Reads opening/current/debit/credit balances per group from a
//! [`crate::ledger::BalanceSource`] once per run and freezes them in a
//! [`BalanceSnapshot`].

pub mod aggregator;
pub mod snapshot;

pub use aggregator::{BalanceAggregator, DEFAULT_COLUMN, PriorLookup, load};
pub use snapshot::{AccountGroupBalance, BalanceSnapshot, GroupAmounts, PeriodColumn};
