//! Formula evaluation and cross-checks.

use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::warn;

use super::definition::{Identity, LineKey, Operand, Sign, StatementDefinition, Term};
use super::error::DefinitionError;
use super::order::validate;
use crate::balance::{BalanceSnapshot, PeriodColumn};
use crate::report::ReportWarning;

/// Line values for one period column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation<L: LineKey> {
    /// Column evaluated.
    pub column: PeriodColumn,
    values: HashMap<L, Decimal>,
    /// Overflows absorbed while evaluating.
    pub warnings: Vec<ReportWarning>,
}

impl<L: LineKey> Evaluation<L> {
    /// Value of a line, zero if it was never computed.
    #[must_use]
    pub fn value(&self, key: L) -> Decimal {
        self.values.get(&key).copied().unwrap_or_default()
    }

    /// Number of lines computed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no line was computed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Evaluates statement formulas over a balance snapshot.
pub struct FormulaEngine;

impl FormulaEngine {
    /// Computes every line of `definition` for one column.
    ///
    /// Lines are computed once each, in dependency order. Returns `Ok(None)`
    /// for the previous column when the snapshot has no prior amounts.
    ///
    /// # Errors
    ///
    /// Returns `DefinitionError` if the table is malformed.
    pub fn evaluate<L: LineKey>(
        definition: &StatementDefinition<L>,
        snapshot: &BalanceSnapshot,
        column: PeriodColumn,
    ) -> Result<Option<Evaluation<L>>, DefinitionError> {
        if column == PeriodColumn::Previous && !snapshot.has_prior() {
            return Ok(None);
        }
        Self::compute(definition, snapshot, column).map(Some)
    }

    /// Computes the current column and, when the snapshot has prior
    /// amounts, the previous one.
    ///
    /// # Errors
    ///
    /// Returns `DefinitionError` if the table is malformed.
    pub fn evaluate_columns<L: LineKey>(
        definition: &StatementDefinition<L>,
        snapshot: &BalanceSnapshot,
    ) -> Result<(Evaluation<L>, Option<Evaluation<L>>), DefinitionError> {
        let current = Self::compute(definition, snapshot, PeriodColumn::Current)?;
        let previous = Self::evaluate(definition, snapshot, PeriodColumn::Previous)?;
        Ok((current, previous))
    }

    fn compute<L: LineKey>(
        definition: &StatementDefinition<L>,
        snapshot: &BalanceSnapshot,
        column: PeriodColumn,
    ) -> Result<Evaluation<L>, DefinitionError> {
        let order = validate(definition)?;
        let mut evaluation = Evaluation {
            column,
            values: HashMap::with_capacity(order.len()),
            warnings: Vec::new(),
        };

        for key in order {
            let Some(line) = definition.line(key) else {
                continue;
            };
            let value = match Self::sum(line.terms, snapshot, column, &evaluation.values) {
                Some(value) => value,
                None => {
                    warn!(line = key.code(), ?column, "Arithmetic overflow, line set to zero");
                    evaluation.warnings.push(ReportWarning::ArithmeticOverflow {
                        item: key.code().to_string(),
                    });
                    Decimal::ZERO
                }
            };
            evaluation.values.insert(key, value);
        }

        Ok(evaluation)
    }

    /// Checks every identity of `definition` against computed values.
    ///
    /// A failing identity becomes a `CrossCheckFailed` warning.
    #[must_use]
    pub fn cross_check<L: LineKey>(
        definition: &StatementDefinition<L>,
        evaluation: &Evaluation<L>,
    ) -> Vec<ReportWarning> {
        definition
            .identities
            .iter()
            .filter_map(|identity| Self::check_identity(identity, evaluation))
            .collect()
    }

    fn check_identity<L: LineKey>(identity: &Identity<L>, evaluation: &Evaluation<L>) -> Option<ReportWarning> {
        let expected = evaluation.value(identity.total);
        let actual = identity
            .components
            .iter()
            .try_fold(Decimal::ZERO, |acc, term| match term.operand {
                Operand::Line(line) => Self::accumulate(acc, term.sign, evaluation.value(line)),
                Operand::Group { .. } => Some(acc),
            });

        match actual {
            Some(actual) if actual == expected => None,
            Some(actual) => {
                warn!(%identity, %expected, %actual, column = ?evaluation.column, "Cross-check failed");
                Some(ReportWarning::CrossCheckFailed {
                    identity: identity.to_string(),
                    expected,
                    actual,
                })
            }
            None => Some(ReportWarning::ArithmeticOverflow {
                item: identity.to_string(),
            }),
        }
    }

    fn sum<L: LineKey>(
        terms: &[Term<L>],
        snapshot: &BalanceSnapshot,
        column: PeriodColumn,
        values: &HashMap<L, Decimal>,
    ) -> Option<Decimal> {
        terms.iter().try_fold(Decimal::ZERO, |acc, term| {
            let operand = match term.operand {
                Operand::Group { code, field } => snapshot.amount(code, field, column).unwrap_or_default(),
                Operand::Line(line) => values.get(&line).copied().unwrap_or_default(),
            };
            Self::accumulate(acc, term.sign, operand)
        })
    }

    fn accumulate(acc: Decimal, sign: Sign, value: Decimal) -> Option<Decimal> {
        match sign {
            Sign::Plus => acc.checked_add(value),
            Sign::Minus => acc.checked_sub(value),
        }
    }
}
