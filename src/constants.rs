//! Application constants and default values for zmanclock.
//!
//! This module contains the configuration defaults, validation limits,
//! and the sun elevation angles that define each halachic boundary.

use crate::time_state::DayRollover;

// ═══ Application Configuration Defaults ═══
// These values are used when config options are not specified by the user

pub const DEFAULT_LATITUDE: f64 = 31.7683; // Jerusalem
pub const DEFAULT_LONGITUDE: f64 = 35.2137;
pub const DEFAULT_TIMEZONE_OFFSET: i32 = 120; // minutes east of UTC
pub const DEFAULT_DST: bool = false;
pub const DEFAULT_DAY_ROLLOVER: DayRollover = DayRollover::Sunset; // Hebrew days begin at nightfall
pub const DEFAULT_SHOW_ZMANIM: bool = false;

// ═══ Validation Limits ═══

pub const MINIMUM_LATITUDE: f64 = -90.0;
pub const MAXIMUM_LATITUDE: f64 = 90.0;
pub const MINIMUM_LONGITUDE: f64 = -180.0;
pub const MAXIMUM_LONGITUDE: f64 = 180.0;

// UTC-12:00 (Baker Island) to UTC+14:00 (Line Islands)
pub const MINIMUM_TIMEZONE_OFFSET: i32 = -12 * 60;
pub const MAXIMUM_TIMEZONE_OFFSET: i32 = 14 * 60;

// Beyond this the sun stays up or down for days around the solstices
pub const POLAR_WARNING_LATITUDE: f64 = 66.0;

// ═══ Time Constants ═══

pub const MINUTES_PER_DAY: i32 = 24 * 60;
pub const DST_SHIFT_MINUTES: i32 = 60;
pub const ZMAN_HOURS_PER_PERIOD: i32 = 12;
pub const SUNSET_WARNING_MINUTES: i32 = 18;

// ═══ Sun Elevation Angles ═══
// Degrees above (+) or below (-) the horizon at which each boundary occurs

pub const SUNRISE_ELEVATION: f64 = -0.833; // upper limb on the horizon, with refraction
pub const FIRST_LIGHT_ELEVATION: f64 = -16.01; // alot hashachar
pub const TALIT_ELEVATION: f64 = -11.0; // misheyakir: earliest talit and tefillin
pub const FIRST_STARS_ELEVATION: f64 = -6.0; // tzeit hakochavim
pub const THREE_STARS_ELEVATION: f64 = -8.5; // three small stars visible

// Rounding slack for the hour-angle cosine before it counts as unreachable
pub const HOUR_ANGLE_TOLERANCE: f64 = 1e-9;

// ═══ Exit Codes ═══

pub const EXIT_FAILURE: i32 = 1; // General failure
