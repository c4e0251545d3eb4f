//! Turns a produced report into styled table rows.
//!
//! The engine knows nothing about the host's page model; it emits rows of
//! cells tagged with semantic styles and a [`ReportSink`] maps them to
//! whatever the host draws.

use rust_decimal::Decimal;
use serde::Serialize;
use syscohada_shared::amount;

use super::types::FinancialReport;
use crate::settings::ReportSettings;
use crate::statement::{LineItem, LineKind};

/// Number of columns of the statement table.
pub const TABLE_COLUMNS: u8 = 5;

/// Semantic style of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleTag {
    /// Unstyled text.
    Plain,
    /// Logo placeholder, text is the logo composition name.
    Logo,
    /// Company name.
    Company,
    /// Statement title.
    Title,
    /// Column heading.
    Heading,
    /// Section title inside the statement.
    Section,
    /// REF cell.
    Reference,
    /// LIBELLES cell of a group line.
    Description,
    /// LIBELLES cell of a total line.
    Total,
    /// NOTE cell.
    Note,
    /// Right-aligned amount.
    Amount,
}

/// One cell of a rendered row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderCell {
    /// Cell text.
    pub text: String,
    /// Semantic style.
    pub style: StyleTag,
    /// Number of columns spanned.
    pub col_span: u8,
}

impl RenderCell {
    /// A cell spanning one column.
    pub fn new(text: impl Into<String>, style: StyleTag) -> Self {
        Self::spanning(text, style, 1)
    }

    /// A cell spanning `col_span` columns.
    pub fn spanning(text: impl Into<String>, style: StyleTag, col_span: u8) -> Self {
        Self {
            text: text.into(),
            style,
            col_span,
        }
    }

    fn blank_row() -> Vec<Self> {
        vec![Self::spanning(" ", StyleTag::Plain, TABLE_COLUMNS)]
    }
}

/// Receives rendered rows in order.
pub trait ReportSink {
    /// Appends one row.
    fn add_row(&mut self, cells: Vec<RenderCell>);
}

/// Sink that keeps every row in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RowCollector {
    /// Rows in emission order.
    pub rows: Vec<Vec<RenderCell>>,
}

impl ReportSink for RowCollector {
    fn add_row(&mut self, cells: Vec<RenderCell>) {
        self.rows.push(cells);
    }
}

/// Decimal places of a rendered amount.
#[must_use]
pub const fn decimal_places(settings: &ReportSettings) -> u32 {
    if settings.decimals { 0 } else { 2 }
}

/// Emits `report` to `sink` as the settings ask.
pub fn render(report: &FinancialReport, settings: &ReportSettings, sink: &mut impl ReportSink) {
    let header = &report.header;

    if settings.logo {
        sink.add_row(vec![RenderCell::spanning(
            settings.logo_name.as_str(),
            StyleTag::Logo,
            TABLE_COLUMNS,
        )]);
    }

    if settings.print_header {
        sink.add_row(vec![
            RenderCell::new(header.company.as_str(), StyleTag::Company),
            RenderCell::new(header.closing_text(), StyleTag::Plain),
        ]);
        sink.add_row(vec![
            RenderCell::new(header.address.as_str(), StyleTag::Plain),
            RenderCell::new(header.duration_text(), StyleTag::Plain),
        ]);
        sink.add_row(RenderCell::blank_row());
    }

    if settings.print_title {
        sink.add_row(vec![RenderCell::spanning(
            header.title.as_str(),
            StyleTag::Title,
            TABLE_COLUMNS,
        )]);
        sink.add_row(RenderCell::blank_row());
    }

    sink.add_row(vec![
        RenderCell::new("REF", StyleTag::Heading),
        RenderCell::new("LIBELLES", StyleTag::Heading),
        RenderCell::new("NOTE", StyleTag::Heading),
        RenderCell::new(header.current_label.as_str(), StyleTag::Heading),
        RenderCell::new(header.previous_label.as_str(), StyleTag::Heading),
    ]);

    let dp = decimal_places(settings);
    for item in &report.lines {
        sink.add_row(line_row(item, dp));
    }
}

fn line_row(item: &LineItem, dp: u32) -> Vec<RenderCell> {
    let description_style = match item.kind {
        LineKind::Title => StyleTag::Section,
        LineKind::Total => StyleTag::Total,
        LineKind::Group => StyleTag::Description,
    };
    let format = |value: Option<Decimal>| value.map(|value| amount::format_fixed(value, dp)).unwrap_or_default();

    vec![
        RenderCell::new(item.reference, StyleTag::Reference),
        RenderCell::new(item.description, description_style),
        RenderCell::new(item.note.unwrap_or_default(), StyleTag::Note),
        RenderCell::new(format(item.current_value), StyleTag::Amount),
        RenderCell::new(format(item.previous_value), StyleTag::Amount),
    ]
}
