//! Core report logic for SYSCOHADA financial statements.
//!
//! This crate contains pure report logic with ZERO host or UI dependencies.
//! Balances come in through the [`ledger::BalanceSource`] trait and reports go
//! out as line items or rows handed to a [`report::ReportSink`].
//!
//! # Modules
//!
//! - `ledger` - Balance source seam and an in-memory ledger document
//! - `fiscal` - Reporting period classification and prior windows
//! - `balance` - Cached balance lookups and snapshots
//! - `statement` - Line tables, formula evaluation and sequencing
//! - `settings` - Report settings and their schema
//! - `report` - End-to-end report service and rendering

pub mod balance;
pub mod fiscal;
pub mod ledger;
pub mod report;
pub mod settings;
pub mod statement;
