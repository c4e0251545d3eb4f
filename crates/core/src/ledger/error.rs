//! Ledger lookup errors.

use syscohada_shared::DecimalError;
use thiserror::Error;

/// Errors raised by a balance source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// No account maps to the selector.
    #[error("Account group not found: {0}")]
    GroupNotFound(String),

    /// Selector is not in `<column>=<code>` form.
    #[error("Invalid group selector: {0:?}")]
    InvalidSelector(String),

    /// The document payload could not be read.
    #[error("Invalid ledger document: {0}")]
    InvalidDocument(String),

    /// Balance arithmetic failed.
    #[error(transparent)]
    Decimal(#[from] DecimalError),
}
