//! Column labels for reporting periods.

use chrono::Datelike;

use crate::ledger::FiscalWindow;

/// French month name in upper case, for a one-based month.
#[must_use]
pub const fn month_name(month: u32) -> Option<&'static str> {
    match month {
        1 => Some("JANVIER"),
        2 => Some("FÉVRIER"),
        3 => Some("MARS"),
        4 => Some("AVRIL"),
        5 => Some("MAI"),
        6 => Some("JUIN"),
        7 => Some("JUILLET"),
        8 => Some("AOÛT"),
        9 => Some("SEPTEMBRE"),
        10 => Some("OCTOBRE"),
        11 => Some("NOVEMBRE"),
        12 => Some("DÉCEMBRE"),
        _ => None,
    }
}

/// Calendar quarter name for zero-based start/end months.
#[must_use]
pub const fn quarter_name(start_month: i64, end_month: i64) -> Option<&'static str> {
    match (start_month, end_month) {
        (0, 2) => Some("Q1"),
        (3, 5) => Some("Q2"),
        (6, 8) => Some("Q3"),
        (9, 11) => Some("Q4"),
        _ => None,
    }
}

/// Calendar semester name for zero-based start/end months.
#[must_use]
pub const fn semester_name(start_month: i64, end_month: i64) -> Option<&'static str> {
    match (start_month, end_month) {
        (0, 5) => Some("S1"),
        (6, 11) => Some("S2"),
        _ => None,
    }
}

/// Month-range name used when a quarter or semester is not calendar-aligned.
#[must_use]
pub fn month_range_name(window: &FiscalWindow) -> String {
    let start = month_name(window.start.month()).unwrap_or_default();
    let end = month_name(window.end.month()).unwrap_or_default();
    format!("{start} - {end}")
}

/// `EXERCICE <year>`.
#[must_use]
pub fn year_label(year: i32) -> String {
    format!("EXERCICE {year}")
}

/// `EXERCICE <name> <year>`.
#[must_use]
pub fn named_label(name: &str, year: i32) -> String {
    format!("EXERCICE {name} {year}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_month_names() {
        assert_eq!(month_name(1), Some("JANVIER"));
        assert_eq!(month_name(8), Some("AOÛT"));
        assert_eq!(month_name(12), Some("DÉCEMBRE"));
        assert_eq!(month_name(0), None);
        assert_eq!(month_name(13), None);
    }

    #[test]
    fn test_quarter_and_semester_names() {
        assert_eq!(quarter_name(3, 5), Some("Q2"));
        assert_eq!(quarter_name(1, 3), None);
        assert_eq!(quarter_name(-2, 0), None);
        assert_eq!(semester_name(6, 11), Some("S2"));
        assert_eq!(semester_name(0, 5), Some("S1"));
        assert_eq!(semester_name(2, 7), None);
    }

    #[test]
    fn test_month_range_name() {
        let window = FiscalWindow::new(
            NaiveDate::from_ymd_opt(2023, 11, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        );
        assert_eq!(month_range_name(&window), "NOVEMBRE - JANVIER");
    }

    #[test]
    fn test_labels() {
        assert_eq!(year_label(2024), "EXERCICE 2024");
        assert_eq!(named_label("Q2", 2024), "EXERCICE Q2 2024");
    }
}
