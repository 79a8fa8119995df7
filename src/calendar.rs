//! Jalali (Persian) calendar labels.
//!
//! Dates are stored and exchanged as Gregorian [`NaiveDate`] values
//! (ISO `YYYY-MM-DD` on the wire) and only converted to the Jalali
//! calendar for display and for period arithmetic on the dashboard.
//!
//! The conversion is the arithmetic 33-year-cycle Persian calendar: a
//! year is leap when `(25 * year + 11) mod 33 < 8`.

use core::fmt;

use chrono::{Datelike, Days, Local, NaiveDate};

use crate::error::{LedgerError, Result};

/// Label shown instead of a date when it is today.
pub const TODAY_LABEL: &str = "امروز";

/// Jalali month names, Farvardin first.
const MONTH_NAMES: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

/// Julian day number of 1 Farvardin, year 1.
const PERSIAN_EPOCH: i64 = 1_948_320;

/// Offset from chrono's days-from-CE count to the Julian day number.
const CE_TO_JULIAN_DAY: i64 = 1_721_425;

/// Days in the first six months; the first day of month seven is day 186.
const FIRST_HALF_DAYS: i64 = 186;

/// A date in the Jalali calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JalaliDate {
    /// Jalali year.
    year: i32,
    /// Month, 1 (Farvardin) to 12 (Esfand).
    month: u32,
    /// Day of month, starting at 1.
    day: u32,
}

/// Returns `true` if the Jalali `year` has 366 days.
#[inline]
#[must_use]
pub fn is_leap_year(year: i32) -> bool {
    (25 * i64::from(year) + 11).rem_euclid(33) < 8
}

/// Returns the number of days in a Jalali month, or 0 for an invalid
/// month.
#[inline]
#[must_use]
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1..=6 => 31,
        7..=11 => 30,
        12 if is_leap_year(year) => 30,
        12 => 29,
        _ => 0,
    }
}

/// Days from the epoch to 1 Farvardin of `year`.
fn farvardin_first(year: i64) -> i64 {
    365 * (year - 1) + (8 * year + 21).div_euclid(33)
}

/// Days in the year before the month with zero-based index `month_idx`.
fn days_before_month(month_idx: i64) -> i64 {
    if month_idx <= 6 {
        31 * month_idx
    } else {
        30 * month_idx + 6
    }
}

impl JalaliDate {
    /// Creates a Jalali date, returning `None` if the month or day is out
    /// of range.
    #[inline]
    #[must_use]
    pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
        let valid = day >= 1 && day <= days_in_month(year, month);
        valid.then_some(Self { year, month, day })
    }

    /// Converts a Gregorian date.
    #[inline]
    #[must_use]
    pub fn from_gregorian(date: NaiveDate) -> Self {
        let julian_day = i64::from(date.num_days_from_ce()) + CE_TO_JULIAN_DAY;
        let since_epoch = julian_day - PERSIAN_EPOCH;
        let year = 1 + (33 * since_epoch + 3).div_euclid(12_053);
        let day_of_year = since_epoch - farvardin_first(year);
        let month_idx = if day_of_year < FIRST_HALF_DAYS + 30 {
            day_of_year.div_euclid(31)
        } else {
            (day_of_year - 6).div_euclid(30)
        };
        let day = day_of_year - days_before_month(month_idx) + 1;
        Self {
            year: i32::try_from(year).unwrap_or(i32::MAX),
            month: u32::try_from(month_idx + 1).unwrap_or(1),
            day: u32::try_from(day).unwrap_or(1),
        }
    }

    /// Converts back to a Gregorian date, or `None` outside chrono's
    /// supported range.
    #[inline]
    #[must_use]
    pub fn to_gregorian(self) -> Option<NaiveDate> {
        let year = i64::from(self.year);
        let julian_day = PERSIAN_EPOCH - 1
            + farvardin_first(year)
            + days_before_month(i64::from(self.month) - 1)
            + i64::from(self.day);
        let days_from_ce = i32::try_from(julian_day - CE_TO_JULIAN_DAY).ok()?;
        NaiveDate::from_num_days_from_ce_opt(days_from_ce)
    }

    /// Jalali year.
    #[inline]
    #[must_use]
    pub const fn year(self) -> i32 {
        self.year
    }

    /// Month, 1 (Farvardin) to 12 (Esfand).
    #[inline]
    #[must_use]
    pub const fn month(self) -> u32 {
        self.month
    }

    /// Day of month.
    #[inline]
    #[must_use]
    pub const fn day(self) -> u32 {
        self.day
    }

    /// Persian name of the month.
    #[inline]
    #[must_use]
    pub fn month_name(self) -> &'static str {
        usize::try_from(self.month)
            .ok()
            .and_then(|month| MONTH_NAMES.get(month.wrapping_sub(1)))
            .copied()
            .unwrap_or_default()
    }
}

impl fmt::Display for JalaliDate {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{:02}/{:02}", self.year, self.month, self.day)
    }
}

/// Short display label: Jalali day and month name, e.g. `30 بهمن`.
#[inline]
#[must_use]
pub fn short_label(date: NaiveDate) -> String {
    let jalali = JalaliDate::from_gregorian(date);
    format!("{} {}", jalali.day(), jalali.month_name())
}

/// Label for a day picker: [`TODAY_LABEL`] for today, otherwise the
/// short label.
#[inline]
#[must_use]
pub fn day_label(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        TODAY_LABEL.to_owned()
    } else {
        short_label(date)
    }
}

/// Shifts a date by `delta` days, clamping at chrono's supported range.
#[inline]
#[must_use]
pub fn add_days(date: NaiveDate, delta: i64) -> NaiveDate {
    let days = Days::new(delta.unsigned_abs());
    if delta >= 0 {
        date.checked_add_days(days).unwrap_or(NaiveDate::MAX)
    } else {
        date.checked_sub_days(days).unwrap_or(NaiveDate::MIN)
    }
}

/// Parses a strict `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns [`LedgerError::InvalidDate`] if the input is not a valid
/// calendar date in that exact shape.
#[inline]
pub fn parse_iso_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    let invalid = || LedgerError::InvalidDate {
        input: input.to_owned(),
    };
    if trimmed.len() != 10 {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_err| invalid())
}

/// Today's date in the local time zone.
#[inline]
#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Maps dates to localized labels for display.
pub trait DateLabeler: fmt::Debug + Send + Sync {
    /// Short label for a date.
    fn short_label(&self, date: NaiveDate) -> String;

    /// Label for a date relative to `today`.
    fn day_label(&self, date: NaiveDate, today: NaiveDate) -> String {
        if date == today {
            TODAY_LABEL.to_owned()
        } else {
            self.short_label(date)
        }
    }
}

/// [`DateLabeler`] rendering Jalali day and month names.
#[derive(Debug, Default, Clone, Copy)]
pub struct JalaliLabeler;

impl DateLabeler for JalaliLabeler {
    #[inline]
    fn short_label(&self, date: NaiveDate) -> String {
        short_label(date)
    }
}
