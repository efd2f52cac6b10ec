//! Julian day numbers and the proleptic Gregorian calendar.
//!
//! The Julian day number is the interchange value between the Gregorian and
//! Hebrew representations. Both directions use the integer algorithm of
//! Fliegel and Van Flandern (1968), so every intermediate division truncates
//! exactly as the reference algorithm does.

use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::ops::{Add, Sub};

/// A count of days on the Julian day scale (noon-based, day 0 = 1 Jan 4713 BC).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JulianDay(pub i32);

impl JulianDay {
    /// The raw day number.
    pub fn value(self) -> i32 {
        self.0
    }

    /// The Gregorian date this day number falls on.
    pub fn to_gregorian(self) -> GregorianDate {
        jd_to_gregorian(self)
    }
}

impl Add<i32> for JulianDay {
    type Output = JulianDay;

    fn add(self, days: i32) -> JulianDay {
        JulianDay(self.0 + days)
    }
}

impl Sub<i32> for JulianDay {
    type Output = JulianDay;

    fn sub(self, days: i32) -> JulianDay {
        JulianDay(self.0 - days)
    }
}

impl Sub<JulianDay> for JulianDay {
    type Output = i32;

    fn sub(self, other: JulianDay) -> i32 {
        self.0 - other.0
    }
}

impl fmt::Display for JulianDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JD {}", self.0)
    }
}

impl From<NaiveDate> for JulianDay {
    fn from(date: NaiveDate) -> Self {
        gregorian_to_jd(date.day() as i32, date.month() as i32, date.year())
    }
}

/// A date in the proleptic Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GregorianDate {
    pub year: i32,
    pub month: i32, // 1..=12
    pub day: i32,   // 1..=31
}

impl GregorianDate {
    pub fn new(day: i32, month: i32, year: i32) -> Self {
        Self { year, month, day }
    }

    pub fn to_jd(self) -> JulianDay {
        gregorian_to_jd(self.day, self.month, self.year)
    }

    /// Convert to a chrono date, `None` if the fields do not form a real date.
    pub fn to_naive_date(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(
            self.year,
            u32::try_from(self.month).ok()?,
            u32::try_from(self.day).ok()?,
        )
    }
}

impl From<NaiveDate> for GregorianDate {
    fn from(date: NaiveDate) -> Self {
        Self::new(date.day() as i32, date.month() as i32, date.year())
    }
}

impl fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Compute the Julian day number of a Gregorian date.
///
/// # Examples
/// ```
/// use zmanclock::calendar::julian::gregorian_to_jd;
/// assert_eq!(gregorian_to_jd(1, 1, 2000).value(), 2451545);
/// ```
pub fn gregorian_to_jd(day: i32, month: i32, year: i32) -> JulianDay {
    let a = (14 - month) / 12;
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;

    JulianDay(day + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - 32045)
}

/// Convert a Julian day number back to its Gregorian date.
///
/// Exact inverse of [`gregorian_to_jd`] for every non-negative day number.
pub fn jd_to_gregorian(jd: JulianDay) -> GregorianDate {
    let mut l = jd.0 + 68569;
    let n = (4 * l) / 146097;
    l -= (146097 * n + 3) / 4;
    let i = (4000 * (l + 1)) / 1461001;
    l = l - (1461 * i) / 4 + 31;
    let j = (80 * l) / 2447;
    let day = l - (2447 * j) / 80;
    l = j / 11;
    let month = j + 2 - 12 * l;
    let year = 100 * (n - 49) + i + l;

    GregorianDate { year, month, day }
}

/// Day of the year, 1 for January 1st.
pub fn day_of_year(day: i32, month: i32, year: i32) -> i32 {
    gregorian_to_jd(day, month, year) - gregorian_to_jd(1, 1, year) + 1
}
