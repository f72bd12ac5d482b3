//! Business-day arithmetic
//!
//! A business day is any day that is not a Saturday, not a Sunday and not one
//! of the fixed [`HOLIDAYS`]. Holidays are resolved against an explicit
//! `holiday_year`: [`business_day_cutoff`] uses the year of its reference date
//! for the whole walk, so a walk from early January does not treat the
//! previous December 25 as a holiday.

use crate::core::error::{OrderError, OrderResult};
use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveTime, Utc, Weekday};

/// Fixed holidays as (month, day): New Year's Day and Christmas Day
pub const HOLIDAYS: [(u32, u32); 2] = [(1, 1), (12, 25)];

/// Whether `date` is one of the fixed holidays of `holiday_year`
pub fn is_holiday(date: NaiveDate, holiday_year: i32) -> bool {
    HOLIDAYS.iter().any(|&(month, day)| {
        NaiveDate::from_ymd_opt(holiday_year, month, day).is_some_and(|holiday| holiday == date)
    })
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

pub fn is_business_day(date: NaiveDate, holiday_year: i32) -> bool {
    !is_weekend(date) && !is_holiday(date, holiday_year)
}

/// Walk back `days` business days from `reference`
///
/// `reference` itself is never counted; the result is the Nth business day
/// strictly before it. `days == 0` returns `reference` unchanged.
///
/// Holidays only fall between January 1 of the reference year and
/// `reference`, so that stretch is walked day by day. Everything earlier is
/// weekdays only and whole weeks are skipped arithmetically.
///
/// # Errors
///
/// `InvalidInput` when `days` is negative or the walk runs past the earliest
/// representable date.
pub fn business_day_cutoff(reference: NaiveDate, days: i32) -> OrderResult<NaiveDate> {
    if days < 0 {
        return Err(OrderError::invalid_input(
            "Number of business days must not be negative.",
        ));
    }

    let holiday_year = reference.year();
    let year_start = NaiveDate::from_ymd_opt(holiday_year, 1, 1).unwrap_or(reference);
    let mut current = reference;
    let mut remaining = days;

    while remaining > 0 && current > year_start {
        current = step_back(current, holiday_year, &mut remaining)?;
    }

    if remaining > 5 {
        let weeks = (remaining - 1) / 5;
        current = current
            .checked_sub_days(Days::new(weeks as u64 * 7))
            .ok_or_else(out_of_range)?;
        remaining -= weeks * 5;
    }

    while remaining > 0 {
        current = step_back(current, holiday_year, &mut remaining)?;
    }

    Ok(current)
}

fn step_back(date: NaiveDate, holiday_year: i32, remaining: &mut i32) -> OrderResult<NaiveDate> {
    let previous = date.pred_opt().ok_or_else(out_of_range)?;
    if is_business_day(previous, holiday_year) {
        *remaining -= 1;
    }
    Ok(previous)
}

fn out_of_range() -> OrderError {
    OrderError::invalid_input("Number of business days is out of range.")
}

/// Midnight UTC at the start of `date`
pub fn cutoff_instant(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}
