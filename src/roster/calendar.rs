use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use super::RosterError;

/// Weekday labels indexed by the zero-based Monday-start weekday number.
pub const WEEKDAY_LABELS: [&str; 7] = ["月", "火", "水", "木", "金", "土", "日"];

pub const SATURDAY_LABEL: &str = WEEKDAY_LABELS[5];
pub const SUNDAY_LABEL: &str = WEEKDAY_LABELS[6];

/// Used only when the first day of the following month cannot be formed.
const FALLBACK_DAYS_IN_MONTH: i64 = 31;

/// One calendar date of the roster month
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterDay {
    pub date: NaiveDate,
    pub iso: String,
    pub weekday: &'static str,
}

impl RosterDay {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            iso: date.format("%Y-%m-%d").to_string(),
            weekday: weekday_label(date),
        }
    }
}

/// Build the ordered list of dates for `year`/`month`
pub fn build_month_dates(year: i32, month: u32) -> Result<Vec<RosterDay>, RosterError> {
    if !(1..=12).contains(&month) {
        return Err(RosterError::InvalidMonth(month));
    }

    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or(RosterError::InvalidDate { year, month })?;

    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };

    let days_in_month = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .map(|next| next.signed_duration_since(first).num_days())
        .unwrap_or(FALLBACK_DAYS_IN_MONTH);

    Ok(first
        .iter_days()
        .take(days_in_month as usize)
        .map(RosterDay::new)
        .collect())
}

pub fn weekday_label(date: NaiveDate) -> &'static str {
    WEEKDAY_LABELS[date.weekday().num_days_from_monday() as usize]
}

pub fn is_saturday(label: &str) -> bool {
    label == SATURDAY_LABEL
}

pub fn is_sunday(label: &str) -> bool {
    label == SUNDAY_LABEL
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_leap(year: i32) -> bool {
        (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
    }

    fn expected_len(year: i32, month: u32) -> usize {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if is_leap(year) => 29,
            _ => 28,
        }
    }

    #[test]
    fn test_month_lengths_for_selectable_years() {
        for year in 2023..=2030 {
            for month in 1..=12 {
                let days = build_month_dates(year, month).unwrap();
                assert_eq!(days.len(), expected_len(year, month), "{year}-{month}");
                assert_eq!(days.first().unwrap().date.day(), 1);
                assert!(days.iter().all(|d| d.date.month() == month));
            }
        }
    }

    #[test]
    fn test_dates_are_contiguous() {
        let days = build_month_dates(2024, 12).unwrap();
        for pair in days.windows(2) {
            assert_eq!(pair[0].date.succ_opt(), Some(pair[1].date));
        }
        assert_eq!(days.last().unwrap().iso, "2024-12-31");
    }

    #[test]
    fn test_century_february() {
        assert_eq!(build_month_dates(1900, 2).unwrap().len(), 28);
        assert_eq!(build_month_dates(2000, 2).unwrap().len(), 29);
    }

    #[test]
    fn test_leap_february_2024() {
        let days = build_month_dates(2024, 2).unwrap();
        assert_eq!(days.len(), 29);
        assert_eq!(days[0].iso, "2024-02-01");
        assert_eq!(days[0].weekday, "木");
        assert_eq!(days[28].iso, "2024-02-29");
    }

    #[test]
    fn test_invalid_month() {
        assert!(matches!(
            build_month_dates(2024, 13),
            Err(RosterError::InvalidMonth(13))
        ));
        assert!(matches!(
            build_month_dates(2024, 0),
            Err(RosterError::InvalidMonth(0))
        ));
    }

    #[test]
    fn test_weekday_labels() {
        let saturday = NaiveDate::from_ymd_opt(2024, 12, 7).unwrap();
        let sunday = NaiveDate::from_ymd_opt(2024, 12, 8).unwrap();
        assert!(is_saturday(weekday_label(saturday)));
        assert!(is_sunday(weekday_label(sunday)));
        assert_eq!(weekday_label(saturday), weekday_label(saturday));
        assert_eq!(
            WEEKDAY_LABELS.iter().filter(|l| is_saturday(l)).count(),
            1
        );
        assert_eq!(WEEKDAY_LABELS.iter().filter(|l| is_sunday(l)).count(), 1);
        let monday = NaiveDate::from_ymd_opt(2024, 12, 2).unwrap();
        assert_eq!(weekday_label(monday), "月");
    }
}
