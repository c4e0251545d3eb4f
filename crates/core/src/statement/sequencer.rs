//! Flat, presentation-ordered line items.

use rust_decimal::Decimal;
use serde::Serialize;

use super::definition::{LayoutRow, LineKey, LineKind, StatementDefinition};
use super::engine::Evaluation;

/// One presented row of a statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItem {
    /// Line code (empty for titles).
    pub code: &'static str,
    /// Text for the REF column.
    pub reference: &'static str,
    /// Text for the LIBELLES column.
    pub description: &'static str,
    /// Note reference.
    pub note: Option<&'static str>,
    /// Group, total or title.
    pub kind: LineKind,
    /// Value for the reporting window; `None` for titles.
    pub current_value: Option<Decimal>,
    /// Value for the prior window; `None` for titles or without a prior window.
    pub previous_value: Option<Decimal>,
}

impl LineItem {
    fn title(description: &'static str) -> Self {
        Self {
            code: "",
            reference: "",
            description,
            note: None,
            kind: LineKind::Title,
            current_value: None,
            previous_value: None,
        }
    }
}

/// Lays evaluated lines out in presentation order.
#[must_use]
pub fn sequence<L: LineKey>(
    definition: &StatementDefinition<L>,
    current: &Evaluation<L>,
    previous: Option<&Evaluation<L>>,
) -> Vec<LineItem> {
    definition
        .layout
        .iter()
        .filter_map(|row| match *row {
            LayoutRow::Title(text) => Some(LineItem::title(text)),
            LayoutRow::Line(key) => definition.line(key).map(|line| LineItem {
                code: key.code(),
                reference: key.reference(),
                description: line.description,
                note: line.note,
                kind: line.kind,
                current_value: Some(current.value(key)),
                previous_value: previous.map(|evaluation| evaluation.value(key)),
            }),
        })
        .collect()
}
