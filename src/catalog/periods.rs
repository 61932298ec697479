//! Labels for income periods.

use crate::models::Period;

/// Period choices in the order the picker shows them.
pub fn income_periods() -> [(Period, &'static str); 6] {
    [
        (Period::MONTHLY, "Monthly"),
        (Period::YEARLY, "Yearly"),
        (Period::WEEKLY, "Weekly"),
        (Period::TWICE_MONTHLY, "Twice per month"),
        (Period::BIWEEKLY, "Once every two weeks"),
        (Period::QUARTERLY, "Once every 3 months"),
    ]
}

const SMALL_NUMBERS: [&str; 11] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
];

/// Describes a period for use in a sentence.
///
/// Known periods use their lower-cased label. Any other value falls back to
/// "N times per year", spelling out N up to ten.
///
/// # Examples
///
/// ```
/// use interview_finance::catalog::describe_period;
///
/// assert_eq!(describe_period(12), "monthly");
/// assert_eq!(describe_period(3), "Three times per year");
/// assert_eq!(describe_period(365), "365 times per year");
/// ```
pub fn describe_period(times_per_year: i64) -> String {
    let known = income_periods()
        .into_iter()
        .find(|(period, _)| i64::from(period.times_per_year()) == times_per_year);
    match known {
        Some((_, label)) => label.to_lowercase(),
        None => format!("{} times per year", capitalized_number(times_per_year)),
    }
}

/// Like [`describe_period`], for a raw interview answer.
///
/// Answers that are not integers yield an empty string.
///
/// ```
/// use interview_finance::catalog::period_label;
///
/// assert_eq!(period_label(" 52 "), "weekly");
/// assert_eq!(period_label("fortnightly"), "");
/// ```
pub fn period_label(answer: &str) -> String {
    match answer.trim().parse::<i64>() {
        Ok(times_per_year) => describe_period(times_per_year),
        Err(_) => String::new(),
    }
}

fn capitalized_number(n: i64) -> String {
    let Some(word) = usize::try_from(n).ok().and_then(|i| SMALL_NUMBERS.get(i)) else {
        return n.to_string();
    };
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
