//! Statement definitions and the line-item formula engine.
//!
//! This module provides:
//! - Static line tables for the cash-flow and profit-and-loss statements
//! - Dependency ordering of line formulas
//! - Formula evaluation with memoized line values and cross-checks
//! - Presentation-ordered line items

pub mod cash_flow;
pub mod definition;
pub mod engine;
pub mod error;
pub mod order;
pub mod profit_loss;
pub mod sequencer;

#[cfg(test)]
mod engine_props;

pub use cash_flow::{CASH_FLOW, CashFlowLine};
pub use definition::{
    Identity, LayoutRow, LineDefinition, LineKey, LineKind, Operand, Sign, StatementDefinition, Term,
};
pub use engine::{Evaluation, FormulaEngine};
pub use error::DefinitionError;
pub use order::{evaluation_order, validate};
pub use profit_loss::{PROFIT_LOSS, ProfitLossLine};
pub use sequencer::{LineItem, sequence};
