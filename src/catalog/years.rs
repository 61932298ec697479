//! Year ranges for year pickers (vehicle model year, birth year).

use chrono::{Datelike, Local, NaiveDate};

/// Order of a generated year list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YearOrder {
    /// Newest first.
    #[default]
    Descending,
    /// Oldest first.
    Ascending,
}

/// The most recent `years` years plus `future` years ahead, relative to today.
pub fn recent_years(years: u32, order: YearOrder, future: u32) -> Vec<i32> {
    recent_years_from(Local::now().year(), years, order, future)
}

/// The years from `current_year - years + 1` through `current_year + future`.
///
/// The range is clamped to the years a calendar date can represent, so very
/// large `years` or `future` never overflow.
///
/// ```
/// use interview_finance::catalog::{recent_years_from, YearOrder};
///
/// assert_eq!(
///     recent_years_from(2024, 3, YearOrder::Descending, 1),
///     vec![2025, 2024, 2023, 2022]
/// );
/// ```
pub fn recent_years_from(current_year: i32, years: u32, order: YearOrder, future: u32) -> Vec<i32> {
    let oldest = (i64::from(current_year) - i64::from(years) + 1)
        .max(i64::from(NaiveDate::MIN.year()));
    let newest = (i64::from(current_year) + i64::from(future))
        .min(i64::from(NaiveDate::MAX.year()));
    let ascending = (oldest..=newest).filter_map(|year| i32::try_from(year).ok());
    match order {
        YearOrder::Ascending => ascending.collect(),
        YearOrder::Descending => ascending.rev().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_window_has_sixteen_years() {
        let years = recent_years_from(2026, 15, YearOrder::Descending, 1);
        assert_eq!(years.len(), 16);
        assert_eq!(years[0], 2027);
        assert_eq!(years[15], 2012);
    }

    #[test]
    fn test_ascending_is_reverse_of_descending() {
        let mut descending = recent_years_from(2020, 5, YearOrder::Descending, 2);
        descending.reverse();
        assert_eq!(descending, recent_years_from(2020, 5, YearOrder::Ascending, 2));
    }

    #[test]
    fn test_no_future_years() {
        assert_eq!(
            recent_years_from(2020, 2, YearOrder::Ascending, 0),
            vec![2019, 2020]
        );
    }

    #[test]
    fn test_zero_years_and_zero_future_is_empty() {
        assert!(recent_years_from(2020, 0, YearOrder::Descending, 0).is_empty());
    }

    #[test]
    fn test_huge_year_counts_clamp_to_calendar_range() {
        let floor = NaiveDate::MIN.year();
        for years in [1u32 << 31, u32::MAX] {
            let range = recent_years_from(2024, years, YearOrder::Descending, 0);
            assert_eq!(range.first(), Some(&2024));
            assert_eq!(range.last(), Some(&floor));
            assert_eq!(range.len(), (2024 - floor + 1) as usize);
        }
    }

    #[test]
    fn test_huge_future_clamps_to_calendar_range() {
        let ceiling = NaiveDate::MAX.year();
        let range = recent_years_from(2024, 1, YearOrder::Ascending, u32::MAX);
        assert_eq!(range.first(), Some(&2024));
        assert_eq!(range.last(), Some(&ceiling));
    }

    #[test]
    fn test_extreme_current_year_does_not_overflow() {
        assert!(recent_years_from(i32::MAX, 3, YearOrder::Descending, u32::MAX).is_empty());
        assert!(recent_years_from(i32::MIN, u32::MAX, YearOrder::Ascending, 0).is_empty());
    }

    #[test]
    fn test_recent_years_includes_current_year() {
        let current = Local::now().year();
        assert!(recent_years(15, YearOrder::default(), 1).contains(&current));
    }
}
