//! Business-day calendar arithmetic.
//!
//! Monday through Friday are business days; Saturday and Sunday are not.
//! No holiday calendar is modelled.
//!
//! # Time Model
//! All values are [`jiff::civil::Date`]: a plain year-month-day with no
//! time of day and no timezone. Arithmetic on civil dates cannot be skewed
//! by daylight-saving transitions. The timezone shown next to an
//! assignment is a display label attached afterwards.
//!
//! # Span Convention
//! A span of `n` business days starting on `start` occupies `start` as day 1
//! when `start` is a business day (otherwise the first business day after
//! it), and ends on the `n`-th business day counted that way. A 1-day span
//! starting on a Monday ends that Monday; a 2-day span starting on a Friday
//! ends the following Monday.

use jiff::civil::{Date, Weekday};
use jiff::ToSpan;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// Whether a date is a business day (Monday to Friday).
#[inline]
pub fn is_business_day(date: Date) -> bool {
    !matches!(date.weekday(), Weekday::Saturday | Weekday::Sunday)
}

/// The smallest business day strictly after `date`.
///
/// Saturates at the last representable date.
pub fn next_business_day(date: Date) -> Date {
    let mut next = date.saturating_add(1.day());
    while !is_business_day(next) {
        next = next.saturating_add(1.day());
    }
    next
}

/// The smallest business day strictly after `date`, or `None` past the
/// last representable date.
pub fn checked_next_business_day(date: Date) -> Option<Date> {
    let mut next = date.checked_add(1.day()).ok()?;
    while !is_business_day(next) {
        next = next.checked_add(1.day()).ok()?;
    }
    Some(next)
}

/// Returns `date` if it is a business day, otherwise the next one.
pub fn first_business_day_on_or_after(date: Date) -> Date {
    if is_business_day(date) {
        date
    } else {
        next_business_day(date)
    }
}

/// Last business day occupied by a span of `days` business days starting
/// on `start`.
///
/// A zero-day request is treated as a one-day span.
pub fn business_end_date_inclusive(start: Date, days: u32) -> Date {
    let mut current = first_business_day_on_or_after(start);
    for _ in 1..days.max(1) {
        current = next_business_day(current);
    }
    current
}

/// Like [`business_end_date_inclusive`], but `None` when the span runs past
/// the last representable date.
pub fn checked_business_end_date_inclusive(start: Date, days: u32) -> Option<Date> {
    let mut current = if is_business_day(start) {
        start
    } else {
        checked_next_business_day(start)?
    };
    for _ in 1..days.max(1) {
        current = checked_next_business_day(current)?;
    }
    Some(current)
}

/// Number of business days in the closed range `[start, end]`.
///
/// Returns 0 when `end` precedes `start`.
pub fn business_days_inclusive(start: Date, end: Date) -> u32 {
    if end < start {
        return 0;
    }
    let mut count = 0;
    let mut current = first_business_day_on_or_after(start);
    while current <= end {
        count += 1;
        let next = next_business_day(current);
        if next == current {
            break;
        }
        current = next;
    }
    count
}

/// Parses a `YYYY-MM-DD` string into a civil date.
pub fn parse_date(value: &str) -> Result<Date> {
    value
        .trim()
        .parse::<Date>()
        .map_err(|source| ScheduleError::InvalidDate {
            value: value.to_string(),
            source,
        })
}

/// A closed run of business days occupied by one job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessSpan {
    /// First occupied business day.
    pub start: Date,
    /// Last occupied business day (inclusive).
    pub end: Date,
    /// Number of business days in the span.
    pub days: u32,
}

impl BusinessSpan {
    /// Creates the span of `days` business days beginning at `start`.
    ///
    /// `None` when the span, or the business day after it, cannot be
    /// represented.
    pub fn starting(start: Date, days: u32) -> Option<Self> {
        let start = first_business_day_on_or_after(start);
        let days = days.max(1);
        let end = checked_business_end_date_inclusive(start, days)?;
        checked_next_business_day(end)?;
        Some(Self { start, end, days })
    }

    /// First business day after the span ends.
    pub fn next_free_day(&self) -> Date {
        next_business_day(self.end)
    }

    /// Whether two spans share at least one calendar day.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}
