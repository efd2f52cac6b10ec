//! # Zmanclock
//!
//! Hebrew calendar dates, moon phase and halachic sun times for any location.
//!
//! Given a civil date, a time of day and the observer's coordinates, zmanclock
//! computes the Hebrew date, the moon phase for that Hebrew day, local sunrise
//! and sunset, the seasonal (zmanit) hour, and the halachic boundaries of the
//! day derived from the sun's elevation.
//!
//! ## Architecture
//!
//! - **calendar**: Julian day numbers, Gregorian and Hebrew calendar conversion, moon phase
//! - **geo**: Solar position, sunrise/sunset and twilight calculations, city lookup
//! - **time_state**: Local time, zman hours, afternoon markers and day rollover
//! - **config**: Configuration loading, validation, and default generation
//! - **constants**: Application-wide constants and defaults
//! - **logger**: Structured logging with visual formatting
//! - **args**: Command-line parsing
//! - **commands**: The report and conversion commands
//! - **utils**: Minute arithmetic and formatting helpers

pub mod args;
pub mod calendar;
pub mod commands;
pub mod config;
pub mod constants;
pub mod geo;
pub mod logger;
pub mod time_state;
pub mod utils;

// Re-export important types for easier access
pub use calendar::{GregorianDate, HebrewDate, JulianDay, hebrew_to_jd, jd_to_hebrew};
pub use config::Config;
pub use geo::solar::{SolarError, SunTimes, Zmanim, utc_sun_times, utc_zmanim};
pub use logger::{Log, LogLevel};
pub use time_state::{DayRollover, DaySnapshot, Observer, TimeState};
