//! Accounting document access.
//!
//! This module defines the balance-lookup seam used by the report engine:
//! - Group selectors, amount fields and fiscal windows
//! - The `BalanceSource` trait implemented by host documents
//! - An in-memory `LedgerDocument` implementation
//! - Error types for lookups

pub mod document;
pub mod error;
pub mod source;

pub use document::{LedgerAccount, LedgerDocument, Posting};
pub use error::LedgerError;
pub use source::{AmountField, BalanceSource, DocumentInfo, FiscalWindow, GroupSelector};
