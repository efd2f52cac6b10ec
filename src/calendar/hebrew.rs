//! The molad-based Hebrew calendar.
//!
//! Year boundaries are derived from the mean lunation ("molad") counted in
//! parts of an hour (1080 parts per hour) from the molad of Tishrei 3744,
//! followed by the postponement rules (dehiyot). Everything is exact integer
//! arithmetic; a single truncation that differs from the reference algorithm
//! shifts whole years by a day.

use std::fmt;

use crate::calendar::julian::{JulianDay, jd_to_gregorian};

const HOUR: i64 = 1080;
const DAY: i64 = 24 * HOUR;
const WEEK: i64 = 7 * DAY;

/// Hours and parts expressed in parts.
const fn parts(hours: i64, parts: i64) -> i64 {
    hours * HOUR + parts
}

/// Excess of a mean lunation over 28 days: 1 day 12 hours 793 parts.
const MONTH: i64 = DAY + parts(12, 793);

/// Julian day of 1 Tishrei minus the epoch offset returned by [`days_from_3744`].
const TISHREI_EPOCH_JD: i32 = 1715119;

/// Nisan through Elul (and Adar I/II in a leap year's tail) always span 236 days.
const LAST_MONTHS_DAYS: i32 = 236;

const MONTH_NAMES: [&str; 14] = [
    "Tishrei", "Cheshvan", "Kislev", "Tevet", "Sh'vat", "Adar", "Nisan", "Iyyar", "Sivan",
    "Tammuz", "Av", "Elul", "Adar I", "Adar II",
];

pub const ADAR: i32 = 6;
pub const ADAR_I: i32 = 13;
pub const ADAR_II: i32 = 14;

/// A date in the Hebrew calendar together with the year anchors it was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HebrewDate {
    pub day: i32,   // 1..=30
    pub month: i32, // 1..=14, 13/14 = Adar I/II in leap years only
    pub year: i32,
    /// Julian day of 1 Tishrei of `year`.
    pub tishrei1: JulianDay,
    /// Julian day of 1 Tishrei of `year + 1`.
    pub tishrei1_next_year: JulianDay,
}

impl HebrewDate {
    /// Number of days in this Hebrew year (353-355 or 383-385).
    pub fn year_length(&self) -> i32 {
        self.tishrei1_next_year - self.tishrei1
    }

    pub fn is_leap_year(&self) -> bool {
        self.year_length() > 355
    }

    pub fn month_name(&self) -> &'static str {
        month_name(self.month)
    }
}

impl fmt::Display for HebrewDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.day, self.month_name(), self.year)
    }
}

/// Name of a Hebrew month, `""` when `month` is outside 1..=14.
///
/// # Examples
/// ```
/// use zmanclock::calendar::hebrew::month_name;
/// assert_eq!(month_name(1), "Tishrei");
/// assert_eq!(month_name(14), "Adar II");
/// assert_eq!(month_name(15), "");
/// ```
pub fn month_name(month: i32) -> &'static str {
    if (1..=14).contains(&month) {
        MONTH_NAMES[(month - 1) as usize]
    } else {
        ""
    }
}

/// Days from 3 Tishrei 3744 to 1 Tishrei of `hebrew_year`.
///
/// Counts lunations with the 19-year cycle (7 leap months), converts to
/// days and applies the postponements: molad zaken on Tuesday of a common
/// year, molad zaken on Monday after a leap year, and "lo ADU rosh"
/// (no Rosh Hashanah on Sunday, Wednesday or Friday).
pub fn days_from_3744(hebrew_year: i32) -> i32 {
    let years_from_3744 = i64::from(hebrew_year) - 3744;
    // Molad of 3744 shifted by 6 hours so days start at midnight
    let molad_3744 = parts(1 + 6, 779);

    let leap_months = (years_from_3744 * 7 + 1) / 19;
    let leap_left = (years_from_3744 * 7 + 1) % 19;
    let months = years_from_3744 * 12 + leap_months;

    let molad_parts = months * MONTH + molad_3744;
    let mut days = months * 28 + molad_parts / DAY - 2;

    let parts_left_in_week = molad_parts % WEEK;
    let parts_left_in_day = molad_parts % DAY;
    let mut week_day = parts_left_in_week / DAY;

    // Molad zaken and its two leap-cycle special cases
    if (leap_left < 12 && week_day == 3 && parts_left_in_day >= parts(9 + 6, 204))
        || (leap_left < 7 && week_day == 2 && parts_left_in_day >= parts(15 + 6, 589))
    {
        days += 1;
        week_day += 1;
    }

    // Lo ADU rosh
    if week_day == 1 || week_day == 4 || week_day == 6 {
        days += 1;
    }

    days as i32
}

/// Julian day of 1 Tishrei of `hebrew_year`.
pub fn tishrei1_jd(hebrew_year: i32) -> JulianDay {
    JulianDay(days_from_3744(hebrew_year) + TISHREI_EPOCH_JD)
}

/// Month-length class for the first four or five months of a year.
///
/// Cheshvan and Kislev vary between 29 and 30 days; which one applies is
/// read off the year length (`% 10` > 4 means a complete year with a long
/// Cheshvan, < 4 a deficient year with a short Kislev).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EarlyMonthCase {
    /// Day 30 of a long Cheshvan.
    LongCheshvanBoundary,
    /// Past Cheshvan in a year where Cheshvan has 30 days.
    LongCheshvanGeneral,
    /// Past Kislev in a year where Kislev has 29 days.
    ShortKislev,
    /// Months of regular alternating 30/29 lengths.
    Regular,
}

impl EarlyMonthCase {
    /// Select the case for a 0-based day offset into a year of `size_of_year` days.
    pub fn classify(size_of_year: i32, days: i32) -> Self {
        let class = size_of_year % 10;
        if class > 4 && days == 59 {
            EarlyMonthCase::LongCheshvanBoundary
        } else if class > 4 && days > 59 {
            EarlyMonthCase::LongCheshvanGeneral
        } else if class < 4 && days > 87 {
            EarlyMonthCase::ShortKislev
        } else {
            EarlyMonthCase::Regular
        }
    }

    /// Resolve a 0-based day offset into a 0-based month index and a 1-based day.
    fn resolve(self, days: i32) -> (i32, i32) {
        match self {
            EarlyMonthCase::LongCheshvanBoundary => (1, 30),
            EarlyMonthCase::LongCheshvanGeneral => {
                let month = (days - 1) * 2 / 59;
                (month, days - (month * 59 + 1) / 2)
            }
            EarlyMonthCase::ShortKislev => {
                let month = (days + 1) * 2 / 59;
                (month, days - (month * 59 + 1) / 2 + 2)
            }
            EarlyMonthCase::Regular => {
                let month = days * 2 / 59;
                (month, days - (month * 59 + 1) / 2 + 1)
            }
        }
    }
}

/// Convert a Julian day to a Hebrew date.
///
/// The Gregorian year + 3760 is used as a seed, which is never more than
/// one year short, so a single correction step suffices.
pub fn jd_to_hebrew(jd: JulianDay) -> HebrewDate {
    let mut year = jd_to_gregorian(jd).year + 3760;

    let mut tishrei1 = tishrei1_jd(year);
    let mut tishrei1_next_year = tishrei1_jd(year + 1);

    if tishrei1_next_year <= jd {
        year += 1;
        tishrei1 = tishrei1_next_year;
        tishrei1_next_year = tishrei1_jd(year + 1);
    }

    let size_of_year = tishrei1_next_year - tishrei1;
    let days = jd - tishrei1;

    let (month, day) = if days >= size_of_year - LAST_MONTHS_DAYS {
        let days = days - (size_of_year - LAST_MONTHS_DAYS);
        let index = days * 2 / 59;
        let day = days - (index * 59 + 1) / 2 + 1;

        let mut month = index + 5;
        if size_of_year > 355 && month <= ADAR {
            month += 8;
        }
        (month, day)
    } else {
        let (index, day) = EarlyMonthCase::classify(size_of_year, days).resolve(days);
        (index + 1, day)
    };

    HebrewDate {
        day,
        month,
        year,
        tishrei1,
        tishrei1_next_year,
    }
}

/// Convert a Hebrew date to its Julian day, also returning the Tishrei anchors
/// of that year.
///
/// Months 13 and 14 are Adar I and Adar II; month 6 in a leap year is treated
/// as Adar I.
pub fn hebrew_to_jd(day: i32, month: i32, year: i32) -> (JulianDay, JulianDay, JulianDay) {
    let (month, day) = match month {
        ADAR_I => (ADAR, day),
        ADAR_II => (ADAR, day + 30),
        _ => (month, day),
    };

    let start = days_from_3744(year);
    let length_of_year = days_from_3744(year + 1) - start;

    let mut days = start + (59 * (month - 1) + 1) / 2 + day;

    if length_of_year % 10 > 4 && month > 2 {
        days += 1;
    }
    if length_of_year % 10 < 4 && month > 3 {
        days -= 1;
    }
    if length_of_year >= 383 && month > ADAR {
        days += 30;
    }

    (
        JulianDay(days + TISHREI_EPOCH_JD - 1),
        tishrei1_jd(year),
        tishrei1_jd(year + 1),
    )
}
