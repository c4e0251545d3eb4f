//! Period classification.
//!
//! A window is classified only by its zero-based (start month, end month)
//! pair:
//!
//! | start | end       | kind     | prior window                          |
//! |-------|-----------|----------|---------------------------------------|
//! | 0     | 11        | Year     | previous-year document                |
//! | 0     | 0 / 2 / 5 | M / Q / S| previous-year document                |
//! | m ≥ 1 | m         | Month    | previous month, same document         |
//! | m ≥ 1 | m + 2     | Quarter  | three months back, same document      |
//! | m ≥ 1 | m + 5     | Semester | six months back, same document        |
//!
//! Prior windows are only produced when a previous-year document is
//! available, including the same-document shifts.

use chrono::{Datelike, Months, NaiveDate};
use tracing::{debug, warn};

use super::error::PeriodError;
use super::labels::{
    month_name, month_range_name, named_label, quarter_name, semester_name, year_label,
};
use super::period::{PeriodKind, PriorPeriod, PriorRule, PriorSource, ReportingPeriod, ResolvedPeriod};
use crate::ledger::{DocumentInfo, FiscalWindow};

/// Classifies zero-based start/end months into a period kind and prior rule.
///
/// Returns `None` for a pair matching no supported shape.
#[must_use]
pub fn classify(start_month: u32, end_month: u32) -> Option<(PeriodKind, PriorRule)> {
    if start_month == 0 {
        let kind = match end_month {
            11 => PeriodKind::Year,
            0 => PeriodKind::Month,
            2 => PeriodKind::Quarter,
            5 => PeriodKind::Semester,
            _ => return None,
        };
        return Some((kind, PriorRule::PreviousYearDocument));
    }

    if start_month > 11 {
        return None;
    }

    match end_month.checked_sub(start_month)? {
        0 => Some((PeriodKind::Month, PriorRule::ShiftBack(1))),
        2 => Some((PeriodKind::Quarter, PriorRule::ShiftBack(3))),
        5 => Some((PeriodKind::Semester, PriorRule::ShiftBack(6))),
        _ => None,
    }
}

/// Number of months a window spans.
///
/// Counts calendar months between the two dates and adds one when the end
/// day-of-month is not before the start day-of-month.
#[must_use]
pub fn duration_months(start: NaiveDate, end: NaiveDate) -> u32 {
    let (first, last) = if end < start { (end, start) } else { (start, end) };
    let mut months = (last.year() - first.year()) * 12;
    months -= i32::try_from(first.month0()).unwrap_or_default();
    months += i32::try_from(last.month0()).unwrap_or_default();
    if first.day() <= last.day() {
        months += 1;
    }
    u32::try_from(months).unwrap_or_default()
}

/// Resolves reporting periods.
pub struct PeriodResolver;

impl PeriodResolver {
    /// Resolves the current window and derives its prior window.
    ///
    /// # Arguments
    ///
    /// * `window` - The selected reporting window
    /// * `current` - The current document's info (its opening year labels columns)
    /// * `previous` - The previous-year document's info, if that document exists
    ///
    /// # Errors
    ///
    /// Returns `PeriodError::InvalidDateRange` if `window.end` is not after
    /// `window.start`. An unsupported shape is not an error: the period is
    /// returned with `kind: None` and no prior window.
    pub fn resolve(
        window: FiscalWindow,
        current: &DocumentInfo,
        previous: Option<&DocumentInfo>,
    ) -> Result<ResolvedPeriod, PeriodError> {
        if window.end <= window.start {
            return Err(PeriodError::InvalidDateRange {
                start: window.start,
                end: window.end,
            });
        }

        let fiscal_year = current.fiscal_year();
        let duration_months = duration_months(window.start, window.end);

        let Some((kind, rule)) = classify(window.start_month(), window.end_month()) else {
            warn!(
                %window,
                start_month = window.start_month(),
                end_month = window.end_month(),
                "Reporting period not resolved"
            );
            return Ok(ResolvedPeriod {
                current: ReportingPeriod {
                    window,
                    kind: None,
                    fiscal_year,
                    label: year_label(fiscal_year),
                    duration_months,
                },
                prior: None,
            });
        };

        let current_period = ReportingPeriod {
            window,
            kind: Some(kind),
            fiscal_year,
            label: Self::current_label(&window, kind, rule, fiscal_year),
            duration_months,
        };

        let prior = previous.and_then(|previous| Self::prior(&window, kind, rule, fiscal_year, previous));
        debug!(
            %window,
            ?kind,
            prior = ?prior.as_ref().map(|p| p.window),
            "Resolved reporting period"
        );

        Ok(ResolvedPeriod {
            current: current_period,
            prior,
        })
    }

    fn current_label(window: &FiscalWindow, kind: PeriodKind, rule: PriorRule, year: i32) -> String {
        if rule == PriorRule::PreviousYearDocument {
            return year_label(year);
        }
        let start = i64::from(window.start_month());
        let end = i64::from(window.end_month());
        let name = match kind {
            PeriodKind::Year => return year_label(year),
            PeriodKind::Month => month_name(window.start.month()).map(str::to_string),
            PeriodKind::Quarter => quarter_name(start, end).map(str::to_string),
            PeriodKind::Semester => semester_name(start, end).map(str::to_string),
        };
        named_label(&name.unwrap_or_else(|| month_range_name(window)), year)
    }

    fn prior(
        window: &FiscalWindow,
        kind: PeriodKind,
        rule: PriorRule,
        year: i32,
        previous: &DocumentInfo,
    ) -> Option<PriorPeriod> {
        let months_back = match rule {
            PriorRule::PreviousYearDocument => {
                return Some(PriorPeriod {
                    window: previous.fiscal_window(),
                    source: PriorSource::PreviousYearDocument,
                    label: year_label(previous.fiscal_year()),
                });
            }
            PriorRule::ShiftBack(months) => months,
        };

        let prior_start = window
            .start
            .with_day(1)?
            .checked_sub_months(Months::new(months_back))?;
        let prior_end = window.start.pred_opt()?;
        let prior_window = FiscalWindow::new(prior_start, prior_end);

        let start = i64::from(window.start_month()) - i64::from(months_back);
        let end = i64::from(window.end_month()) - i64::from(months_back);
        let name = match kind {
            PeriodKind::Year => None,
            PeriodKind::Month => month_name(window.start.month() - 1).map(str::to_string),
            PeriodKind::Quarter => quarter_name(start, end).map(str::to_string),
            PeriodKind::Semester => semester_name(start, end).map(str::to_string),
        };

        Some(PriorPeriod {
            window: prior_window,
            source: PriorSource::CurrentDocument,
            label: named_label(&name.unwrap_or_else(|| month_range_name(&prior_window)), year),
        })
    }
}
