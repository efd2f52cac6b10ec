//! Time-of-day state derived from the calendar and the solar calculations.
//!
//! The calendar and solar modules answer questions about a date in UTC. This
//! module turns those answers into what an observer at a given place and
//! local time wants to know.
//!
//! ## Key Functionality
//! - **Local Time**: Shifting UTC minutes by the timezone offset and DST
//! - **State Detection**: Whether the current minute is day or night
//! - **Zman Hours**: Which of the twelve seasonal hours is running and when the next begins
//! - **Afternoon Markers**: Mincha Gedola, Mincha Ketana and Plag HaMincha
//! - **Day Rollover**: Which Hebrew date applies once the sun has set
//! - **Snapshots**: Everything above bundled for one local date and minute

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::calendar::{
    GregorianDate, HebrewDate, JulianDay, MoonBackground, jd_to_hebrew, moon_age_index,
    moon_glyph, moon_phase_index,
};
use crate::constants::{
    DST_SHIFT_MINUTES, MINUTES_PER_DAY, SUNSET_WARNING_MINUTES, ZMAN_HOURS_PER_PERIOD,
};
use crate::geo::solar::{SolarError, Zmanim, utc_zmanim};
use crate::utils::wrap_minutes;

/// Represents the basic time-based state of the observer's day.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum TimeState {
    Day,   // Between sunrise and sunset, inclusive
    Night, // After sunset or before sunrise
}

impl TimeState {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeState::Day => "day",
            TimeState::Night => "night",
        }
    }
}

/// When the Hebrew date advances relative to the civil date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayRollover {
    /// The Hebrew date follows the civil date and changes at midnight.
    Midnight,
    /// The Hebrew date of the next civil day applies from local sunset onward.
    Sunset,
}

impl DayRollover {
    pub fn as_str(&self) -> &'static str {
        match self {
            DayRollover::Midnight => "midnight",
            DayRollover::Sunset => "sunset",
        }
    }
}

/// Where the observer stands and how their clock relates to UTC.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observer {
    pub latitude: f64,
    pub longitude: f64,
    /// Minutes east of UTC, without DST.
    pub timezone_offset: i32,
    pub dst: bool,
}

impl Observer {
    /// Total shift from UTC to the observer's clock, in minutes.
    pub fn local_offset(&self) -> i32 {
        self.timezone_offset + if self.dst { DST_SHIFT_MINUTES } else { 0 }
    }

    pub fn to_local(&self, utc_minutes: i32) -> i32 {
        adjust_to_local(utc_minutes, self.timezone_offset, self.dst)
    }
}

/// Shift a UTC minute-of-day into local time, wrapping into 0..1440.
///
/// # Examples
/// ```
/// use zmanclock::time_state::adjust_to_local;
/// assert_eq!(adjust_to_local(1400, 120, false), 80);
/// assert_eq!(adjust_to_local(30, -300, true), 1230);
/// ```
pub fn adjust_to_local(utc_minutes: i32, timezone_offset: i32, dst: bool) -> i32 {
    let shift = timezone_offset + if dst { DST_SHIFT_MINUTES } else { 0 };
    wrap_minutes(utc_minutes + shift)
}

/// Minutes from sunrise to sunset, allowing the local times to straddle midnight.
fn daylight_minutes(sunrise: i32, sunset: i32) -> i32 {
    wrap_minutes(sunset - sunrise)
}

/// Day or night at `current`, all values in local minutes since midnight.
///
/// Sunrise and sunset themselves count as day.
pub fn time_state_at(current: i32, sunrise: i32, sunset: i32) -> TimeState {
    let since_sunrise = wrap_minutes(current - sunrise);
    if since_sunrise <= daylight_minutes(sunrise, sunset) {
        TimeState::Day
    } else {
        TimeState::Night
    }
}

/// The seasonal hour running at a given minute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZmanHour {
    pub state: TimeState,
    /// 1..=12, counted from sunrise by day and from sunset by night.
    pub number: i32,
    pub minutes_until_next: i32,
    /// Length of one hour in the current period, in minutes.
    pub hour_length: f64,
}

/// Seasonal hour for `current` given local sunrise and sunset.
///
/// Daytime is split into twelve equal hours, and so is the night between
/// sunset and the following sunrise. A day hour and a night hour always add
/// up to two clock hours.
pub fn zman_hour(current: i32, sunrise: i32, sunset: i32) -> ZmanHour {
    let daylight = daylight_minutes(sunrise, sunset);
    let since_sunrise = wrap_minutes(current - sunrise);
    let hours = f64::from(ZMAN_HOURS_PER_PERIOD);

    let (state, elapsed, period) = if since_sunrise <= daylight {
        (TimeState::Day, since_sunrise, daylight)
    } else {
        (
            TimeState::Night,
            since_sunrise - daylight,
            MINUTES_PER_DAY - daylight,
        )
    };

    let hour_length = f64::from(period) / hours;
    let number = if hour_length > 0.0 {
        // Nudge exact boundaries onto the hour that is starting
        ((f64::from(elapsed) / hour_length + 1e-9).floor() as i32 + 1).min(ZMAN_HOURS_PER_PERIOD)
    } else {
        ZMAN_HOURS_PER_PERIOD
    };
    let next_boundary = (f64::from(number) * hour_length).round() as i32;

    ZmanHour {
        state,
        number,
        minutes_until_next: (next_boundary - elapsed).max(0),
        hour_length,
    }
}

/// Afternoon prayer boundaries, in local minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AfternoonMarkers {
    pub mincha_gedola: i32,
    pub mincha_ketana: i32,
    pub plag_hamincha: i32,
    pub sunset_warning: i32,
    pub sunset: i32,
}

/// A named moment of the afternoon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    MinchaGedola,
    MinchaKetana,
    PlagHamincha,
    SunsetSoon,
    Sunset,
}

impl Marker {
    pub fn label(&self) -> &'static str {
        match self {
            Marker::MinchaGedola => "Mincha Gedola",
            Marker::MinchaKetana => "Mincha Ketana",
            Marker::PlagHamincha => "Plag HaMincha",
            Marker::SunsetSoon => "Sunset soon",
            Marker::Sunset => "Sunset",
        }
    }
}

impl AfternoonMarkers {
    /// Derive the markers from local midday, local sunset and the day-hour length.
    pub fn new(midday: i32, sunset: i32, hour_length: f64) -> Self {
        Self {
            mincha_gedola: wrap_minutes(midday + (hour_length * 0.5) as i32),
            mincha_ketana: wrap_minutes(sunset - (hour_length * 2.5) as i32),
            plag_hamincha: wrap_minutes(sunset - (hour_length * 1.25) as i32),
            sunset_warning: wrap_minutes(sunset - SUNSET_WARNING_MINUTES),
            sunset,
        }
    }

    /// The marker that falls exactly on `minute`, if any.
    pub fn marker_at(&self, minute: i32) -> Option<Marker> {
        let minute = wrap_minutes(minute);
        [
            (self.sunset, Marker::Sunset),
            (self.sunset_warning, Marker::SunsetSoon),
            (self.plag_hamincha, Marker::PlagHamincha),
            (self.mincha_ketana, Marker::MinchaKetana),
            (self.mincha_gedola, Marker::MinchaGedola),
        ]
        .into_iter()
        .find(|(at, _)| *at == minute)
        .map(|(_, marker)| marker)
    }

    /// The most recent marker at or before `minute`, counting from midday.
    pub fn current_period(&self, minute: i32, midday: i32) -> Option<Marker> {
        let since_midday = wrap_minutes(minute - midday);
        let offset = |at: i32| wrap_minutes(at - midday);
        [
            (self.sunset, Marker::Sunset),
            (self.sunset_warning, Marker::SunsetSoon),
            (self.plag_hamincha, Marker::PlagHamincha),
            (self.mincha_ketana, Marker::MinchaKetana),
            (self.mincha_gedola, Marker::MinchaGedola),
        ]
        .into_iter()
        .find(|(at, _)| offset(*at) <= since_midday && since_midday <= offset(self.sunset))
        .map(|(_, marker)| marker)
    }
}

/// Hebrew date in effect on civil `date` at `local_minute`.
///
/// `local_sunset` is measured from local midnight of `date` and is not
/// wrapped: a sunset at 00:04 the next morning is 1444. With
/// [`DayRollover::Sunset`] the date of the following civil day applies once
/// `local_minute` reaches it. When sunset falls after midnight, the minutes
/// before the previous evening's sunset still belong to the previous day.
/// Without a sunset (polar day or night) the civil date is used.
pub fn hebrew_date_at(
    date: NaiveDate,
    local_minute: i32,
    local_sunset: Option<i32>,
    policy: DayRollover,
) -> HebrewDate {
    let jd = JulianDay::from(date);

    let shift = match (policy, local_sunset) {
        (DayRollover::Sunset, Some(sunset)) if local_minute >= sunset => 1,
        (DayRollover::Sunset, Some(sunset)) if local_minute < sunset - MINUTES_PER_DAY => -1,
        _ => 0,
    };

    jd_to_hebrew(jd + shift)
}

/// Local sunset counted from midnight of the civil date, without wrapping.
///
/// Sunset always follows midday by less than half a day, so it is recovered
/// from the wrapped local midday.
pub fn unwrapped_sunset(zmanim: &Zmanim) -> i32 {
    zmanim.midday + wrap_minutes(zmanim.sunset - zmanim.midday)
}

/// Shift every boundary of a UTC [`Zmanim`] onto the observer's clock.
pub fn localize_zmanim(zmanim: &Zmanim, observer: &Observer) -> Zmanim {
    let local = |minutes: i32| observer.to_local(minutes);
    Zmanim {
        sun_hour: zmanim.sun_hour,
        first_light: zmanim.first_light.map(local),
        talit: zmanim.talit.map(local),
        sunrise: local(zmanim.sunrise),
        midday: local(zmanim.midday),
        sunset: local(zmanim.sunset),
        first_stars: zmanim.first_stars.map(local),
        three_stars: zmanim.three_stars.map(local),
    }
}

/// Sun-dependent part of a [`DaySnapshot`], in local time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunSnapshot {
    pub zmanim: Zmanim,
    pub state: TimeState,
    pub zman_hour: ZmanHour,
    pub markers: AfternoonMarkers,
}

/// Everything known about one local date and minute.
#[derive(Debug, Clone, PartialEq)]
pub struct DaySnapshot {
    pub date: GregorianDate,
    pub julian_day: JulianDay,
    pub local_minute: i32,
    pub hebrew: HebrewDate,
    pub moon_phase: i32,
    pub moon_glyph: char,
    pub moon_age: i32,
    /// Sun times, or why there are none on this date.
    pub sun: Result<SunSnapshot, SolarError>,
}

impl DaySnapshot {
    /// Compute the snapshot for `date` at `local_minute` on the observer's clock.
    pub fn compute(
        date: NaiveDate,
        local_minute: i32,
        observer: &Observer,
        rollover: DayRollover,
    ) -> Self {
        let local_minute = wrap_minutes(local_minute);
        let julian_day = JulianDay::from(date);

        // Sun times for the local civil date; the UTC day can differ by one
        // for large offsets, which moves the declination negligibly.
        let sun = utc_zmanim(
            date.day() as i32,
            date.month() as i32,
            date.year(),
            observer.latitude,
            observer.longitude,
        )
        .map(|utc| {
            let zmanim = localize_zmanim(&utc, observer);
            let day_hour =
                f64::from(utc.sun_times().day_length()) / f64::from(ZMAN_HOURS_PER_PERIOD);
            SunSnapshot {
                zmanim,
                state: time_state_at(local_minute, zmanim.sunrise, zmanim.sunset),
                zman_hour: zman_hour(local_minute, zmanim.sunrise, zmanim.sunset),
                markers: AfternoonMarkers::new(zmanim.midday, zmanim.sunset, day_hour),
            }
        });

        let local_sunset = sun.as_ref().ok().map(|s| unwrapped_sunset(&s.zmanim));
        let hebrew = hebrew_date_at(date, local_minute, local_sunset, rollover);
        let moon_phase = moon_phase_index(hebrew.day, observer.latitude);

        Self {
            date: GregorianDate::from(date),
            julian_day,
            local_minute,
            hebrew,
            moon_phase,
            moon_glyph: moon_glyph(moon_phase, MoonBackground::Dark),
            moon_age: moon_age_index(julian_day),
            sun,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::hebrew::ADAR_II;
    use crate::constants::test_constants::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_adjust_to_local_wraps() {
        assert_eq!(adjust_to_local(0, 120, false), 120);
        assert_eq!(adjust_to_local(0, 120, true), 180);
        assert_eq!(adjust_to_local(1380, 120, false), 60);
        assert_eq!(adjust_to_local(60, -300, false), 1200);
        assert_eq!(adjust_to_local(1439, 0, false), 1439);
    }

    #[test]
    fn test_observer_local_offset() {
        let observer = Observer {
            latitude: TEST_JERUSALEM_LATITUDE,
            longitude: TEST_JERUSALEM_LONGITUDE,
            timezone_offset: 120,
            dst: true,
        };
        assert_eq!(observer.local_offset(), 180);
        assert_eq!(observer.to_local(1300), 40);
    }

    #[test]
    fn test_time_state_boundaries() {
        assert_eq!(time_state_at(360, 360, 1080), TimeState::Day);
        assert_eq!(time_state_at(1080, 360, 1080), TimeState::Day);
        assert_eq!(time_state_at(1081, 360, 1080), TimeState::Night);
        assert_eq!(time_state_at(359, 360, 1080), TimeState::Night);
        assert_eq!(time_state_at(0, 360, 1080), TimeState::Night);
    }

    #[test]
    fn test_time_state_when_daylight_crosses_midnight() {
        // Local sunset after midnight on the clock
        assert_eq!(time_state_at(1400, 600, 30), TimeState::Day);
        assert_eq!(time_state_at(20, 600, 30), TimeState::Day);
        assert_eq!(time_state_at(300, 600, 30), TimeState::Night);
    }

    #[test]
    fn test_zman_hour_equal_day_and_night() {
        let first = zman_hour(360, 360, 1080);
        assert_eq!(first.state, TimeState::Day);
        assert_eq!(first.number, 1);
        assert_eq!(first.minutes_until_next, 60);
        assert!((first.hour_length - 60.0).abs() < 1e-9);

        let late_morning = zman_hour(719, 360, 1080);
        assert_eq!(late_morning.number, 6);
        assert_eq!(late_morning.minutes_until_next, 1);

        let at_sunset = zman_hour(1080, 360, 1080);
        assert_eq!(at_sunset.state, TimeState::Day);
        assert_eq!(at_sunset.number, 12);
        assert_eq!(at_sunset.minutes_until_next, 0);

        let after_sunset = zman_hour(1081, 360, 1080);
        assert_eq!(after_sunset.state, TimeState::Night);
        assert_eq!(after_sunset.number, 1);
        assert_eq!(after_sunset.minutes_until_next, 59);

        let midnight = zman_hour(0, 360, 1080);
        assert_eq!(midnight.state, TimeState::Night);
        assert_eq!(midnight.number, 7);
        assert_eq!(midnight.minutes_until_next, 60);
    }

    #[test]
    fn test_zman_hour_day_and_night_hours_sum_to_two_clock_hours() {
        // 10 hours of daylight: 50 minute day hours, 70 minute night hours
        let day = zman_hour(600, 420, 1020);
        let night = zman_hour(1160, 420, 1020);

        assert!((day.hour_length - 50.0).abs() < 1e-9);
        assert!((night.hour_length - 70.0).abs() < 1e-9);
        assert!((day.hour_length + night.hour_length - 120.0).abs() < 1e-9);

        assert_eq!(day.number, 4);
        assert_eq!(day.minutes_until_next, 20);
        assert_eq!(night.number, 3);
        assert_eq!(night.minutes_until_next, 70);
    }

    #[test]
    fn test_afternoon_markers() {
        let markers = AfternoonMarkers::new(720, 1080, 60.0);
        assert_eq!(markers.mincha_gedola, 750);
        assert_eq!(markers.mincha_ketana, 930);
        assert_eq!(markers.plag_hamincha, 1005);
        assert_eq!(markers.sunset_warning, 1062);
        assert_eq!(markers.sunset, 1080);

        assert_eq!(markers.marker_at(750), Some(Marker::MinchaGedola));
        assert_eq!(markers.marker_at(930), Some(Marker::MinchaKetana));
        assert_eq!(markers.marker_at(1005), Some(Marker::PlagHamincha));
        assert_eq!(markers.marker_at(1062), Some(Marker::SunsetSoon));
        assert_eq!(markers.marker_at(1080), Some(Marker::Sunset));
        assert_eq!(markers.marker_at(800), None);
    }

    #[test]
    fn test_afternoon_current_period() {
        let markers = AfternoonMarkers::new(720, 1080, 60.0);
        assert_eq!(markers.current_period(700, 720), None);
        assert_eq!(markers.current_period(740, 720), None);
        assert_eq!(markers.current_period(750, 720), Some(Marker::MinchaGedola));
        assert_eq!(markers.current_period(900, 720), Some(Marker::MinchaGedola));
        assert_eq!(markers.current_period(950, 720), Some(Marker::MinchaKetana));
        assert_eq!(markers.current_period(1010, 720), Some(Marker::PlagHamincha));
        assert_eq!(markers.current_period(1070, 720), Some(Marker::SunsetSoon));
        assert_eq!(markers.current_period(1080, 720), Some(Marker::Sunset));
        assert_eq!(markers.current_period(1100, 720), None);
    }

    #[test]
    fn test_hebrew_date_rollover_policies() {
        // 23 April 2024 is 15 Nisan 5784
        let eve = date(2024, 4, 22);

        let midnight = hebrew_date_at(eve, 1200, Some(1140), DayRollover::Midnight);
        assert_eq!((midnight.day, midnight.month), (14, 7));

        let before = hebrew_date_at(eve, 600, Some(1140), DayRollover::Sunset);
        assert_eq!((before.day, before.month), (14, 7));

        let at_sunset = hebrew_date_at(eve, 1140, Some(1140), DayRollover::Sunset);
        assert_eq!((at_sunset.day, at_sunset.month, at_sunset.year), (15, 7, 5784));

        let no_sunset = hebrew_date_at(eve, 1200, None, DayRollover::Sunset);
        assert_eq!((no_sunset.day, no_sunset.month), (14, 7));
    }

    #[test]
    fn test_hebrew_rollover_into_adar_ii() {
        // 24 March 2024 is 14 Adar II 5784
        let eve = date(2024, 3, 23);
        let hebrew = hebrew_date_at(eve, 1300, Some(1100), DayRollover::Sunset);
        assert_eq!((hebrew.day, hebrew.month), (14, ADAR_II));
    }

    #[test]
    fn test_hebrew_rollover_with_sunset_after_midnight() {
        // Sunset at 00:04 the next morning
        let day = date(2024, 6, 21);
        let civil = hebrew_date_at(day, 600, None, DayRollover::Midnight);

        let morning = hebrew_date_at(day, 600, Some(1444), DayRollover::Sunset);
        assert_eq!(morning, civil);
        let late_evening = hebrew_date_at(day, 1439, Some(1444), DayRollover::Sunset);
        assert_eq!(late_evening, civil);

        // Before the previous evening's sunset
        let small_hours = hebrew_date_at(day, 2, Some(1444), DayRollover::Sunset);
        assert_eq!(small_hours.day, civil.day - 1);
        let after_it = hebrew_date_at(day, 4, Some(1444), DayRollover::Sunset);
        assert_eq!(after_it, civil);
    }

    #[test]
    fn test_unwrapped_sunset() {
        let evening = Zmanim {
            sun_hour: 60,
            first_light: None,
            talit: None,
            sunrise: 360,
            midday: 720,
            sunset: 1080,
            first_stars: None,
            three_stars: None,
        };
        assert_eq!(unwrapped_sunset(&evening), 1080);

        let after_midnight = Zmanim {
            sunrise: 174,
            midday: 809,
            sunset: 4,
            ..evening
        };
        assert_eq!(unwrapped_sunset(&after_midnight), 1444);
    }

    #[test]
    fn test_snapshot_reykjavik_midsummer_keeps_civil_date_by_day() {
        let observer = Observer {
            latitude: 64.15,
            longitude: -21.94,
            timezone_offset: 0,
            dst: false,
        };
        let day = date(2024, 6, 21);
        let morning = DaySnapshot::compute(day, 600, &observer, DayRollover::Sunset);
        let civil = DaySnapshot::compute(day, 600, &observer, DayRollover::Midnight);

        let sun = morning.sun.as_ref().unwrap();
        assert!(sun.zmanim.sunset < sun.zmanim.sunrise, "sunset {}", sun.zmanim.sunset);
        assert!(unwrapped_sunset(&sun.zmanim) > MINUTES_PER_DAY);
        assert_eq!(sun.state, TimeState::Day);

        // 15 Sivan 5784
        assert_eq!(morning.hebrew, civil.hebrew);
        assert_eq!(
            (morning.hebrew.day, morning.hebrew.month, morning.hebrew.year),
            (15, 9, 5784)
        );

        let evening = DaySnapshot::compute(day, 23 * 60, &observer, DayRollover::Sunset);
        assert_eq!(evening.hebrew, civil.hebrew);
    }

    #[test]
    fn test_day_rollover_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            policy: DayRollover,
        }
        let parsed: Wrapper = toml::from_str("policy = \"sunset\"").unwrap();
        assert_eq!(parsed.policy, DayRollover::Sunset);
        let parsed: Wrapper = toml::from_str("policy = \"midnight\"").unwrap();
        assert_eq!(parsed.policy, DayRollover::Midnight);
        assert!(toml::from_str::<Wrapper>("policy = \"noon\"").is_err());
        assert_eq!(DayRollover::Sunset.as_str(), "sunset");
    }

    #[test]
    fn test_snapshot_jerusalem_passover() {
        let observer = Observer {
            latitude: TEST_JERUSALEM_LATITUDE,
            longitude: TEST_JERUSALEM_LONGITUDE,
            timezone_offset: 120,
            dst: true,
        };
        let snapshot =
            DaySnapshot::compute(date(2024, 4, 23), 12 * 60, &observer, DayRollover::Sunset);

        assert_eq!(snapshot.date, GregorianDate::new(23, 4, 2024));
        assert_eq!(snapshot.julian_day, JulianDay(2460424));
        assert_eq!(
            (snapshot.hebrew.day, snapshot.hebrew.month, snapshot.hebrew.year),
            (15, 7, 5784)
        );
        assert_eq!(snapshot.moon_phase, moon_phase_index(15, observer.latitude));

        let sun = snapshot.sun.unwrap();
        assert_eq!(sun.state, TimeState::Day);
        // Sunrise around 06:05 and sunset around 19:20 local
        assert!((345..=380).contains(&sun.zmanim.sunrise), "sunrise {}", sun.zmanim.sunrise);
        assert!((1145..=1180).contains(&sun.zmanim.sunset), "sunset {}", sun.zmanim.sunset);
        assert!(sun.zmanim.sunrise < sun.zmanim.midday && sun.zmanim.midday < sun.zmanim.sunset);
        assert_eq!(sun.zman_hour.state, TimeState::Day);
        assert!((6..=7).contains(&sun.zman_hour.number));
        assert!(sun.markers.mincha_gedola > sun.zmanim.midday);
        assert!(sun.markers.plag_hamincha > sun.markers.mincha_ketana);
    }

    #[test]
    fn test_snapshot_polar_night_keeps_calendar() {
        let observer = Observer {
            latitude: 78.22,
            longitude: 15.65,
            timezone_offset: 60,
            dst: false,
        };
        let snapshot =
            DaySnapshot::compute(date(2024, 12, 21), 600, &observer, DayRollover::Sunset);

        assert!(matches!(snapshot.sun, Err(SolarError::InvalidSunAngle { .. })));
        // Falls back to the civil date: 20 Kislev 5785
        assert_eq!((snapshot.hebrew.day, snapshot.hebrew.month), (20, 3));
    }
}
