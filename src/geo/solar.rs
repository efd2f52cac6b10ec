//! Solar position calculations for sunrise, sunset and the halachic day boundaries.
//!
//! The sun's declination and the equation of time come from a truncated
//! Fourier series in the fractional year (NOAA's low-precision model). Each
//! boundary is the instant the sun's centre crosses a target elevation,
//! found by solving the hour-angle equation
//!
//! ```text
//! cos(H) = (sin(elevation) - sin(lat) * sin(decl)) / (cos(lat) * cos(decl))
//! ```
//!
//! All results are UTC minutes since midnight of the requested date. No
//! timezone or DST is applied here; see [`crate::time_state`] for that.
//!
//! When the target elevation is never reached (polar day or night, or the
//! "white nights" for deep twilight angles) the cosine falls outside [-1, 1]
//! and the calculation reports [`SolarError::InvalidSunAngle`] instead of a
//! clamped, meaningless time.

use std::f64::consts::PI;
use thiserror::Error;

use crate::calendar::julian::day_of_year;
use crate::constants::{
    FIRST_LIGHT_ELEVATION, FIRST_STARS_ELEVATION, HOUR_ANGLE_TOLERANCE, MAXIMUM_LATITUDE,
    MAXIMUM_LONGITUDE, MINIMUM_LATITUDE, MINIMUM_LONGITUDE, SUNRISE_ELEVATION, TALIT_ELEVATION,
    THREE_STARS_ELEVATION, ZMAN_HOURS_PER_PERIOD,
};
use crate::utils::wrap_minutes;

/// Errors reported by the solar calculations.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SolarError {
    /// The sun never crosses the requested elevation on this date.
    #[error(
        "the sun does not cross {elevation}° elevation at latitude {latitude}° on day {day_of_year} of the year"
    )]
    InvalidSunAngle {
        elevation: f64,
        latitude: f64,
        day_of_year: i32,
    },
    #[error(
        "invalid coordinates ({latitude}, {longitude}): latitude must be within ±90° and longitude within ±180°"
    )]
    InvalidCoordinates { latitude: f64, longitude: f64 },
}

/// Where the sun stands on a given date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    pub day_of_year: i32,
    /// Declination in radians.
    pub declination: f64,
    /// Apparent minus mean solar time, in minutes.
    pub equation_of_time: f64,
}

/// Sunrise and sunset in UTC minutes since midnight (0..1440).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SunTimes {
    pub sunrise: i32,
    pub sunset: i32,
}

impl SunTimes {
    /// Minutes of daylight, correct even when the UTC times wrap past midnight.
    pub fn day_length(&self) -> i32 {
        wrap_minutes(self.sunset - self.sunrise)
    }

    /// Halfway between sunrise and sunset (chatzot).
    pub fn midday(&self) -> i32 {
        wrap_minutes(self.sunrise + self.day_length() / 2)
    }
}

/// The full set of daily boundaries, all in UTC minutes since midnight.
///
/// Sunrise and sunset always exist in a `Zmanim`; the twilight boundaries
/// are `None` when the sun never gets that far below the horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Zmanim {
    /// Length of one halachic hour (1/12 of the daylight), in minutes.
    pub sun_hour: i32,
    pub first_light: Option<i32>,
    pub talit: Option<i32>,
    pub sunrise: i32,
    pub midday: i32,
    pub sunset: i32,
    pub first_stars: Option<i32>,
    pub three_stars: Option<i32>,
}

impl Zmanim {
    pub fn sun_times(&self) -> SunTimes {
        SunTimes {
            sunrise: self.sunrise,
            sunset: self.sunset,
        }
    }
}

/// Declination and equation of time for a Gregorian date.
pub fn solar_position(day: i32, month: i32, year: i32) -> SolarPosition {
    let day_of_year = day_of_year(day, month, year);

    // Fractional year in radians
    let gamma = 2.0 * PI * (f64::from(day_of_year - 1) / 365.0);

    let equation_of_time = 229.18
        * (0.000075 + 0.001868 * gamma.cos()
            - 0.032077 * gamma.sin()
            - 0.014615 * (2.0 * gamma).cos()
            - 0.040849 * (2.0 * gamma).sin());

    let declination = 0.006918 - 0.399912 * gamma.cos() + 0.070257 * gamma.sin()
        - 0.006758 * (2.0 * gamma).cos()
        + 0.000907 * (2.0 * gamma).sin()
        - 0.002697 * (3.0 * gamma).cos()
        + 0.00148 * (3.0 * gamma).sin();

    SolarPosition {
        day_of_year,
        declination,
        equation_of_time,
    }
}

fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), SolarError> {
    if !(MINIMUM_LATITUDE..=MAXIMUM_LATITUDE).contains(&latitude)
        || !(MINIMUM_LONGITUDE..=MAXIMUM_LONGITUDE).contains(&longitude)
    {
        return Err(SolarError::InvalidCoordinates {
            latitude,
            longitude,
        });
    }
    Ok(())
}

/// Rising and setting instants for one elevation, as unwrapped UTC minutes.
///
/// Values may fall outside 0..1440 when the event happens on the previous or
/// next UTC day; they are truncated toward zero.
fn crossing_minutes(
    position: &SolarPosition,
    latitude: f64,
    longitude: f64,
    elevation: f64,
) -> Result<(i32, i32), SolarError> {
    let lat = latitude.to_radians();
    let decl = position.declination;

    let cos_hour_angle =
        elevation.to_radians().sin() / (lat.cos() * decl.cos()) - lat.tan() * decl.tan();

    if !cos_hour_angle.is_finite() || cos_hour_angle.abs() > 1.0 + HOUR_ANGLE_TOLERANCE {
        return Err(SolarError::InvalidSunAngle {
            elevation,
            latitude,
            day_of_year: position.day_of_year,
        });
    }

    // 1440 minutes per 2π radians
    let hour_angle = 720.0 * cos_hour_angle.clamp(-1.0, 1.0).acos() / PI;
    let noon = 720.0 - 4.0 * longitude - position.equation_of_time;

    Ok(((noon - hour_angle) as i32, (noon + hour_angle) as i32))
}

/// UTC rising and setting times for an arbitrary sun elevation in degrees.
pub fn utc_sun_times_at_elevation(
    day: i32,
    month: i32,
    year: i32,
    latitude: f64,
    longitude: f64,
    elevation: f64,
) -> Result<SunTimes, SolarError> {
    validate_coordinates(latitude, longitude)?;
    let position = solar_position(day, month, year);
    let (rise, set) = crossing_minutes(&position, latitude, longitude, elevation)?;

    Ok(SunTimes {
        sunrise: wrap_minutes(rise),
        sunset: wrap_minutes(set),
    })
}

/// UTC sunrise and sunset for a Gregorian date and location.
///
/// # Examples
/// ```
/// use zmanclock::geo::solar::{SolarError, utc_sun_times};
///
/// let times = utc_sun_times(20, 3, 2024, 31.778, 35.235).unwrap();
/// assert!(times.sunrise < times.sunset);
///
/// // Polar night
/// assert!(matches!(
///     utc_sun_times(21, 12, 2024, 70.0, 25.0),
///     Err(SolarError::InvalidSunAngle { .. })
/// ));
/// ```
pub fn utc_sun_times(
    day: i32,
    month: i32,
    year: i32,
    latitude: f64,
    longitude: f64,
) -> Result<SunTimes, SolarError> {
    utc_sun_times_at_elevation(day, month, year, latitude, longitude, SUNRISE_ELEVATION)
}

/// Sunrise, sunset and the halachic boundaries derived from other sun angles.
///
/// Fails only if sunrise/sunset themselves are undefined; a missing
/// twilight boundary is reported as `None` in its field.
pub fn utc_zmanim(
    day: i32,
    month: i32,
    year: i32,
    latitude: f64,
    longitude: f64,
) -> Result<Zmanim, SolarError> {
    validate_coordinates(latitude, longitude)?;
    let position = solar_position(day, month, year);

    let (sunrise, sunset) = crossing_minutes(&position, latitude, longitude, SUNRISE_ELEVATION)?;

    let twilight = |elevation: f64| {
        crossing_minutes(&position, latitude, longitude, elevation)
            .ok()
            .map(|(rise, set)| (wrap_minutes(rise), wrap_minutes(set)))
    };

    Ok(Zmanim {
        sun_hour: (sunset - sunrise) / ZMAN_HOURS_PER_PERIOD,
        first_light: twilight(FIRST_LIGHT_ELEVATION).map(|(rise, _)| rise),
        talit: twilight(TALIT_ELEVATION).map(|(rise, _)| rise),
        sunrise: wrap_minutes(sunrise),
        midday: wrap_minutes((sunrise + sunset) / 2),
        sunset: wrap_minutes(sunset),
        first_stars: twilight(FIRST_STARS_ELEVATION).map(|(_, set)| set),
        three_stars: twilight(THREE_STARS_ELEVATION).map(|(_, set)| set),
    })
}
