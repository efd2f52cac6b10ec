//! Geographic calculations: where the sun is and where the observer is.
//!
//! This module provides functionality for:
//! - Solar position and the sun elevation crossings behind each halachic time
//! - City name lookup for configuring a location without coordinates

pub mod city;
pub mod solar;

pub use city::{CityInfo, find_city, nearest_city};
pub use solar::{SolarError, SunTimes, Zmanim, utc_sun_times, utc_zmanim};

use chrono::{Datelike, NaiveDate};

use crate::logger::Log;
use crate::time_state::Observer;
use crate::utils::{format_coordinates, format_minutes};

/// Log the intermediate solar values behind a day's sun times.
pub fn log_solar_debug_info(date: NaiveDate, observer: &Observer) {
    let (day, month, year) = (date.day() as i32, date.month() as i32, date.year());
    let position = solar::solar_position(day, month, year);

    Log::log_pipe();
    Log::log_debug("Solar calculation details:");
    Log::log_indented(&format!(
        "       Coordinates: {}",
        format_coordinates(observer.latitude, observer.longitude)
    ));
    if let Some(city) = nearest_city(observer.latitude, observer.longitude) {
        Log::log_indented(&format!("      Nearest city: {}", city.display_name()));
    }
    Log::log_indented(&format!("       Day of year: {}", position.day_of_year));
    Log::log_indented(&format!(
        "       Declination: {:.4}°",
        position.declination.to_degrees()
    ));
    Log::log_indented(&format!(
        "  Equation of time: {:.2} min",
        position.equation_of_time
    ));

    match utc_sun_times(day, month, year, observer.latitude, observer.longitude) {
        Ok(times) => {
            Log::log_indented(&format!("       Sunrise UTC: {}", format_minutes(times.sunrise)));
            Log::log_indented(&format!("        Sunset UTC: {}", format_minutes(times.sunset)));
            Log::log_indented(&format!(
                "      Local offset: {:+} min",
                observer.local_offset()
            ));
        }
        Err(e) => Log::log_indented(&format!("       No sun times: {}", e)),
    }
}
