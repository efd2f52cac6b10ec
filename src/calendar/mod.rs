//! Calendar arithmetic: Julian day numbers, the Gregorian and Hebrew
//! calendars, and the moon phase derived from the Hebrew day of month.
//!
//! Every function here is a pure function of its arguments and may be
//! called from any thread.

pub mod hebrew;
pub mod julian;
pub mod moon;

pub use hebrew::{
    EarlyMonthCase, HebrewDate, days_from_3744, hebrew_to_jd, jd_to_hebrew, month_name,
};
pub use julian::{GregorianDate, JulianDay, day_of_year, gregorian_to_jd, jd_to_gregorian};
pub use moon::{MoonBackground, moon_age_index, moon_glyph, moon_phase_index};
