//! Statement definition tables.
//!
//! A statement is a static table of lines. Each line has one formula: a list
//! of signed terms reading either a group amount or an earlier line.

use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::hash::Hash;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ledger::AmountField;

/// Shorthand for [`AmountField::Current`] in formula tables.
pub const C: AmountField = AmountField::Current;
/// Shorthand for [`AmountField::Opening`] in formula tables.
pub const O: AmountField = AmountField::Opening;
/// Shorthand for [`AmountField::Debit`] in formula tables.
pub const D: AmountField = AmountField::Debit;
/// Shorthand for [`AmountField::Credit`] in formula tables.
pub const K: AmountField = AmountField::Credit;

/// Key of a report line.
///
/// Implemented by one enum per statement so formulas can only reference
/// lines of their own statement.
pub trait LineKey: Copy + Eq + Hash + Ord + fmt::Debug + Send + Sync + 'static {
    /// Line code (e.g. "ZA").
    fn code(self) -> &'static str;

    /// Reference printed in the REF column. Defaults to the code.
    fn reference(self) -> &'static str {
        self.code()
    }
}

/// Sign of a formula term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sign {
    /// Added.
    Plus,
    /// Subtracted.
    Minus,
}

impl Sign {
    /// The term's symbol in an identity string.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
        }
    }

    /// Applies the sign to a value.
    #[must_use]
    pub fn apply(self, value: Decimal) -> Decimal {
        match self {
            Self::Plus => value,
            Self::Minus => -value,
        }
    }
}

/// What a term reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand<L> {
    /// An amount of an account group.
    Group {
        /// Group code in the selector column.
        code: &'static str,
        /// Amount read.
        field: AmountField,
    },
    /// The value of another line.
    Line(L),
}

/// One signed term of a formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Term<L> {
    /// Sign applied to the operand.
    pub sign: Sign,
    /// Value read.
    pub operand: Operand<L>,
}

impl<L> Term<L> {
    /// `+ field(code)`
    #[must_use]
    pub const fn plus(field: AmountField, code: &'static str) -> Self {
        Self {
            sign: Sign::Plus,
            operand: Operand::Group { code, field },
        }
    }

    /// `- field(code)`
    #[must_use]
    pub const fn minus(field: AmountField, code: &'static str) -> Self {
        Self {
            sign: Sign::Minus,
            operand: Operand::Group { code, field },
        }
    }

    /// `+ line`
    #[must_use]
    pub const fn plus_line(line: L) -> Self {
        Self {
            sign: Sign::Plus,
            operand: Operand::Line(line),
        }
    }

    /// `- line`
    #[must_use]
    pub const fn minus_line(line: L) -> Self {
        Self {
            sign: Sign::Minus,
            operand: Operand::Line(line),
        }
    }
}

/// Kind of a presented line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    /// Computed from group amounts.
    Group,
    /// Computed from other lines.
    Total,
    /// Section heading without values.
    Title,
}

/// One line of a statement.
#[derive(Debug, Clone, Copy)]
pub struct LineDefinition<L: 'static> {
    /// Line key.
    pub key: L,
    /// Description printed in the LIBELLES column.
    pub description: &'static str,
    /// Note reference, if the line has one.
    pub note: Option<&'static str>,
    /// Group or total.
    pub kind: LineKind,
    /// Formula.
    pub terms: &'static [Term<L>],
}

impl<L: LineKey> LineDefinition<L> {
    /// Lines this line's formula reads.
    pub fn dependencies(&self) -> impl Iterator<Item = L> + '_ {
        self.terms.iter().filter_map(|term| match term.operand {
            Operand::Line(line) => Some(line),
            Operand::Group { .. } => None,
        })
    }
}

/// A row of the presentation layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutRow<L> {
    /// A computed line.
    Line(L),
    /// A section title.
    Title(&'static str),
}

/// A reconciliation identity: `total = Σ terms`.
#[derive(Debug, Clone, Copy)]
pub struct Identity<L: 'static> {
    /// The total line.
    pub total: L,
    /// Signed line components.
    pub components: &'static [Term<L>],
}

impl<L: LineKey> fmt::Display for Identity<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} =", self.total.code())?;
        for (index, term) in self.components.iter().enumerate() {
            let name = match term.operand {
                Operand::Line(line) => line.code(),
                Operand::Group { code, .. } => code,
            };
            if index == 0 && term.sign == Sign::Plus {
                write!(f, " {name}")?;
            } else {
                write!(f, " {} {name}", term.sign.symbol())?;
            }
        }
        Ok(())
    }
}

/// A complete statement: its lines, layout and reconciliation identities.
#[derive(Debug, Clone, Copy)]
pub struct StatementDefinition<L: 'static> {
    /// Report title.
    pub title: &'static str,
    /// Line formulas, in table order.
    pub lines: &'static [LineDefinition<L>],
    /// Presentation order.
    pub layout: &'static [LayoutRow<L>],
    /// Identities checked after evaluation.
    pub identities: &'static [Identity<L>],
}

impl<L: LineKey> StatementDefinition<L> {
    /// Looks up a line.
    #[must_use]
    pub fn line(&self, key: L) -> Option<&'static LineDefinition<L>> {
        self.lines.iter().find(|line| line.key == key)
    }

    /// Every group code referenced by a formula.
    #[must_use]
    pub fn group_codes(&self) -> BTreeSet<&'static str> {
        self.lines
            .iter()
            .flat_map(|line| line.terms.iter())
            .filter_map(|term| match term.operand {
                Operand::Group { code, .. } => Some(code),
                Operand::Line(_) => None,
            })
            .collect()
    }

    /// Index of each line in table order.
    pub(crate) fn positions(&self) -> HashMap<L, usize> {
        self.lines
            .iter()
            .enumerate()
            .map(|(index, line)| (line.key, index))
            .collect()
    }
}
