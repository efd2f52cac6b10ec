//! Moon phase derived from the Hebrew calendar.
//!
//! Hebrew months begin at the new moon, so the day of the month is a good
//! proxy for the phase. The index runs 0..=26 where 0 is the new moon; the
//! southern hemisphere sees the lit side mirrored.

use crate::calendar::julian::JulianDay;

/// Highest phase index.
pub const MAX_PHASE: i32 = 26;

/// Mean synodic month in days.
const SYNODIC_MONTH: f64 = 29.530588853;

/// A new moon close to the J2000 epoch (6 Jan 2000, 14:24 UTC), as a Julian day.
const REFERENCE_NEW_MOON: f64 = 2451550.1;

/// Background the moon glyph is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoonBackground {
    Dark,
    Light,
}

/// Phase index 0..=26 for a Hebrew day of month, mirrored for negative latitudes.
///
/// # Examples
/// ```
/// use zmanclock::calendar::moon::moon_phase_index;
/// assert_eq!(moon_phase_index(1, 31.78), 0);
/// assert_eq!(moon_phase_index(15, 31.78), 12);
/// assert_eq!(moon_phase_index(15, -33.87), 14);
/// ```
pub fn moon_phase_index(hebrew_day: i32, latitude: f64) -> i32 {
    let phase = ((hebrew_day.max(1) - 1) * MAX_PHASE / 29).min(MAX_PHASE);
    if phase > 0 && latitude < 0.0 {
        MAX_PHASE - phase
    } else {
        phase
    }
}

/// Character code of the phase in a moon-phases font.
///
/// The new moon is `'N'` on a dark background and `'0'` on a light one;
/// other phases are letters from `'A'`. On a dark background the lit and
/// unlit halves swap, which rotates the letters by half the cycle.
pub fn moon_glyph(phase_index: i32, background: MoonBackground) -> char {
    if phase_index < 1 {
        return match background {
            MoonBackground::Dark => 'N',
            MoonBackground::Light => '0',
        };
    }

    let mut offset = phase_index.min(MAX_PHASE) - 1;
    if background == MoonBackground::Dark {
        offset = if offset >= 13 { offset - 13 } else { offset + 13 };
    }

    char::from(b'A' + offset as u8)
}

/// Age of the moon scaled to 0..=27, computed from the mean synodic month
/// rather than the calendar. Both 0 and 27 are close to a new moon.
pub fn moon_age_index(jd: JulianDay) -> i32 {
    let lunations = (f64::from(jd.value()) - REFERENCE_NEW_MOON) / SYNODIC_MONTH;
    let fraction = lunations.rem_euclid(1.0);
    (fraction * 27.0 + 0.5) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::julian::gregorian_to_jd;

    #[test]
    fn test_new_moon_is_zero() {
        assert_eq!(moon_phase_index(1, 45.0), 0);
        assert_eq!(moon_phase_index(1, -45.0), 0);
    }

    #[test]
    fn test_phase_progression_is_monotonic_in_north() {
        let mut previous = -1;
        for day in 1..=30 {
            let phase = moon_phase_index(day, 10.0);
            assert!(phase >= previous);
            assert!((0..=MAX_PHASE).contains(&phase));
            previous = phase;
        }
        assert_eq!(moon_phase_index(30, 10.0), 26);
    }

    #[test]
    fn test_southern_hemisphere_mirror() {
        for day in 2..=30 {
            let north = moon_phase_index(day, 10.0);
            let south = moon_phase_index(day, -10.0);
            if north > 0 {
                assert_eq!(south, MAX_PHASE - north, "day {}", day);
            }
        }
    }

    #[test]
    fn test_glyphs() {
        assert_eq!(moon_glyph(0, MoonBackground::Dark), 'N');
        assert_eq!(moon_glyph(0, MoonBackground::Light), '0');
        assert_eq!(moon_glyph(1, MoonBackground::Light), 'A');
        assert_eq!(moon_glyph(26, MoonBackground::Light), 'Z');
        assert_eq!(moon_glyph(1, MoonBackground::Dark), 'N');
        assert_eq!(moon_glyph(14, MoonBackground::Dark), 'A');
        assert_eq!(moon_glyph(13, MoonBackground::Dark), 'Z');
    }

    #[test]
    fn test_moon_age_index() {
        // New moon 6 Jan 2000, full moon 21 Jan 2000
        let new_moon = moon_age_index(gregorian_to_jd(7, 1, 2000));
        assert!(new_moon <= 1, "got {}", new_moon);

        let full_moon = moon_age_index(gregorian_to_jd(21, 1, 2000));
        assert!((13..=14).contains(&full_moon), "got {}", full_moon);

        // Dates before the reference still land in range
        let early = moon_age_index(gregorian_to_jd(1, 1, 1900));
        assert!((0..=27).contains(&early));
    }
}
