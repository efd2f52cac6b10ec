//! Implementation of the --hebrew command: Hebrew date to Gregorian date.

use anyhow::Result;

use crate::calendar::hebrew::{ADAR, ADAR_I, ADAR_II};
use crate::calendar::{HebrewDate, JulianDay, hebrew_to_jd, jd_to_hebrew, month_name};
use crate::logger::Log;

/// Outcome of converting a Hebrew date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conversion {
    pub jd: JulianDay,
    /// The Hebrew date the Julian day actually falls on. Differs from the
    /// request when the requested day does not exist in that month.
    pub normalized: HebrewDate,
}

/// Convert a Hebrew date, rejecting Adar I/II outside leap years.
pub fn convert_hebrew_date(day: i32, month: i32, year: i32) -> Result<Conversion> {
    let (jd, tishrei1, next_tishrei1) = hebrew_to_jd(day, month, year);
    let leap = next_tishrei1 - tishrei1 >= 383;

    if !leap && (month == ADAR_I || month == ADAR_II) {
        anyhow::bail!(
            "{} exists only in leap years, and {} is a common year; use month {} ({})",
            month_name(month),
            year,
            ADAR,
            month_name(ADAR)
        );
    }

    Ok(Conversion {
        jd,
        normalized: jd_to_hebrew(jd),
    })
}

/// Whether `conversion` landed on the requested day, month and year.
///
/// Plain Adar in a leap year is Adar I.
pub fn is_exact(conversion: &Conversion, day: i32, month: i32, year: i32) -> bool {
    let normalized = &conversion.normalized;
    let month = if month == ADAR && normalized.is_leap_year() {
        ADAR_I
    } else {
        month
    };
    (normalized.day, normalized.month, normalized.year) == (day, month, year)
}

/// Handle the --hebrew command.
pub fn handle_convert_command(day: i32, month: i32, year: i32, debug_enabled: bool) -> Result<()> {
    Log::log_version();

    let conversion = convert_hebrew_date(day, month, year)?;
    let normalized = &conversion.normalized;

    if debug_enabled {
        Log::log_pipe();
        Log::log_debug("Conversion details:");
        Log::log_row("Julian day", &conversion.jd.value().to_string());
        Log::log_row("1 Tishrei", &normalized.tishrei1.to_gregorian().to_string());
        Log::log_row("Year length", &format!("{} days", normalized.year_length()));
    }

    if !is_exact(&conversion, day, month, year) {
        Log::log_pipe();
        Log::log_warning(&format!(
            "Day {} does not exist in {} {}; it falls on {}",
            day,
            month_name(month),
            year,
            normalized
        ));
    }

    Log::log_block_start(&format!(
        "{} is {}",
        normalized,
        conversion.jd.to_gregorian()
    ));
    Log::log_end();

    Ok(())
}
