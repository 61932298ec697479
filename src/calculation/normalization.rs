//! Period normalization.
//!
//! Converts an amount recurring `period` times per year into the equivalent
//! amount for a different target period. All arithmetic is done in
//! [`Decimal`] so currency values do not pick up binary rounding error.
//!
//! Results that would exceed the `Decimal` range saturate at
//! [`Decimal::MAX`] or [`Decimal::MIN`] instead of panicking.

use rust_decimal::Decimal;
use tracing::warn;

use crate::models::Period;

/// Converts a per-period amount into the equivalent amount per `target`.
///
/// The formula is `value × period / target`. When `value × period` would
/// overflow, the division is done first; if that still overflows the result
/// saturates.
///
/// # Examples
///
/// ```
/// use interview_finance::calculation::normalize;
/// use interview_finance::models::Period;
/// use rust_decimal::Decimal;
///
/// // $3000 a month is $36000 a year
/// let yearly = normalize(Decimal::new(3000, 0), Period::MONTHLY, Period::YEARLY);
/// assert_eq!(yearly, Decimal::new(36000, 0));
///
/// // Out-of-range results saturate
/// assert_eq!(normalize(Decimal::MAX, Period::WEEKLY, Period::YEARLY), Decimal::MAX);
/// ```
pub fn normalize(value: Decimal, period: Period, target: Period) -> Decimal {
    if period == target {
        return value;
    }
    let (times, per) = (period.as_decimal(), target.as_decimal());
    value
        .checked_mul(times)
        .map(|scaled| scaled / per)
        .or_else(|| (value / per).checked_mul(times))
        .unwrap_or_else(|| {
            warn!(
                value = %value,
                period = %period,
                target = %target,
                "Normalized amount out of range, saturating"
            );
            saturated(value)
        })
}

/// Converts hourly earnings into the equivalent amount per `target`.
///
/// The formula is `hourly_rate × hours_per_period × period / target`.
///
/// # Examples
///
/// ```
/// use interview_finance::calculation::normalize_hourly;
/// use interview_finance::models::Period;
/// use rust_decimal::Decimal;
///
/// // $15/hour, 40 hours a week, expressed monthly
/// let monthly = normalize_hourly(
///     Decimal::new(15, 0),
///     Decimal::new(40, 0),
///     Period::WEEKLY,
///     Period::MONTHLY,
/// );
/// assert_eq!(monthly, Decimal::new(2600, 0));
/// ```
pub fn normalize_hourly(
    hourly_rate: Decimal,
    hours_per_period: Decimal,
    period: Period,
    target: Period,
) -> Decimal {
    normalize(hourly_rate.saturating_mul(hours_per_period), period, target)
}

/// Sums amounts, saturating at the `Decimal` range instead of panicking.
///
/// ```
/// use interview_finance::calculation::saturating_sum;
/// use rust_decimal::Decimal;
///
/// assert_eq!(saturating_sum([Decimal::MAX, Decimal::ONE]), Decimal::MAX);
/// assert_eq!(saturating_sum([Decimal::TEN, Decimal::NEGATIVE_ONE]), Decimal::new(9, 0));
/// ```
pub fn saturating_sum<I>(amounts: I) -> Decimal
where
    I: IntoIterator<Item = Decimal>,
{
    amounts
        .into_iter()
        .fold(Decimal::ZERO, |total, amount| total.saturating_add(amount))
}

fn saturated(value: Decimal) -> Decimal {
    if value.is_sign_negative() {
        Decimal::MIN
    } else {
        Decimal::MAX
    }
}
