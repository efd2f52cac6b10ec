use proptest::prelude::*;
use zmanclock::calendar::hebrew::{ADAR_I, ADAR_II, days_from_3744, tishrei1_jd};
use zmanclock::calendar::{
    JulianDay, gregorian_to_jd, hebrew_to_jd, jd_to_gregorian, jd_to_hebrew, moon_age_index,
    moon_phase_index,
};

const VALID_YEAR_LENGTHS: [i32; 6] = [353, 354, 355, 383, 384, 385];

/// Julian days from 1858 to 2132
fn jd_strategy() -> impl Strategy<Value = i32> {
    2_400_000..2_500_000i32
}

fn hebrew_year_strategy() -> impl Strategy<Value = i32> {
    4000..6500i32
}

/// The month after `month`, with Adar split into 13/14 in leap years.
fn next_month(month: i32, leap: bool) -> i32 {
    match month {
        12 => 1,
        5 if leap => ADAR_I,
        ADAR_I => ADAR_II,
        ADAR_II => 7,
        m => m + 1,
    }
}

proptest! {
    #[test]
    fn test_gregorian_roundtrip(jd in jd_strategy()) {
        let date = jd_to_gregorian(JulianDay(jd));
        prop_assert_eq!(gregorian_to_jd(date.day, date.month, date.year), JulianDay(jd));
    }

    #[test]
    fn test_hebrew_roundtrip(jd in jd_strategy()) {
        let hebrew = jd_to_hebrew(JulianDay(jd));
        let (back, tishrei1, next) = hebrew_to_jd(hebrew.day, hebrew.month, hebrew.year);
        prop_assert_eq!(back, JulianDay(jd));
        prop_assert_eq!(tishrei1, hebrew.tishrei1);
        prop_assert_eq!(next, hebrew.tishrei1_next_year);
    }

    #[test]
    fn test_anchors_bracket_day(jd in jd_strategy()) {
        let hebrew = jd_to_hebrew(JulianDay(jd));
        prop_assert!(hebrew.tishrei1 <= JulianDay(jd));
        prop_assert!(JulianDay(jd) < hebrew.tishrei1_next_year);
        prop_assert!(VALID_YEAR_LENGTHS.contains(&hebrew.year_length()));
        prop_assert!((1..=30).contains(&hebrew.day));
        prop_assert!((1..=14).contains(&hebrew.month));
        if !hebrew.is_leap_year() {
            prop_assert!(hebrew.month != ADAR_I && hebrew.month != ADAR_II);
        }
    }

    #[test]
    fn test_consecutive_days_advance(jd in jd_strategy()) {
        let today = jd_to_hebrew(JulianDay(jd));
        let tomorrow = jd_to_hebrew(JulianDay(jd + 1));
        if tomorrow.day == 1 {
            prop_assert!(today.day == 29 || today.day == 30);
            prop_assert_eq!(tomorrow.month, next_month(today.month, today.is_leap_year()));
            let expected_year = if today.month == 12 { today.year + 1 } else { today.year };
            prop_assert_eq!(tomorrow.year, expected_year);
        } else {
            prop_assert_eq!(tomorrow.day, today.day + 1);
            prop_assert_eq!(tomorrow.month, today.month);
            prop_assert_eq!(tomorrow.year, today.year);
        }
    }

    #[test]
    fn test_year_lengths_from_days_from_3744(year in hebrew_year_strategy()) {
        let length = days_from_3744(year + 1) - days_from_3744(year);
        prop_assert!(VALID_YEAR_LENGTHS.contains(&length));
        prop_assert_eq!(tishrei1_jd(year + 1) - tishrei1_jd(year), length);
    }

    #[test]
    fn test_rosh_hashanah_never_sunday_wednesday_friday(year in hebrew_year_strategy()) {
        // (jd + 1) % 7 gives 0 = Sunday
        let weekday = (tishrei1_jd(year).value() + 1) % 7;
        prop_assert!(![0, 3, 5].contains(&weekday), "year {} starts on weekday {}", year, weekday);
    }

    #[test]
    fn test_moon_indices_in_range(jd in jd_strategy(), latitude in -90.0..=90.0f64) {
        let hebrew = jd_to_hebrew(JulianDay(jd));
        let phase = moon_phase_index(hebrew.day, latitude);
        prop_assert!((0..=26).contains(&phase));
        prop_assert!((0..=27).contains(&moon_age_index(JulianDay(jd))));
    }

    #[test]
    fn test_moon_phase_mirrors_in_south(day in 3..=30i32, latitude in 0.1..=90.0f64) {
        let north = moon_phase_index(day, latitude);
        let south = moon_phase_index(day, -latitude);
        prop_assert_eq!(north + south, 26);
    }
}
