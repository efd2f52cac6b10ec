//! Utility functions shared across the codebase.
//!
//! This module provides minute-of-day arithmetic and the formatting helpers
//! used when presenting dates, times and coordinates.

use std::path::Path;

use crate::constants::MINUTES_PER_DAY;

/// Wrap a minute count into a single day, `0..1440`.
///
/// # Examples
/// ```
/// use zmanclock::utils::wrap_minutes;
/// assert_eq!(wrap_minutes(1500), 60);
/// assert_eq!(wrap_minutes(-30), 1410);
/// ```
pub fn wrap_minutes(minutes: i32) -> i32 {
    minutes.rem_euclid(MINUTES_PER_DAY)
}

/// Format minutes since midnight as `HH:MM`, wrapping into a single day first.
///
/// # Examples
/// ```
/// use zmanclock::utils::format_minutes;
/// assert_eq!(format_minutes(0), "00:00");
/// assert_eq!(format_minutes(1439), "23:59");
/// assert_eq!(format_minutes(1445), "00:05");
/// ```
pub fn format_minutes(minutes: i32) -> String {
    let minutes = wrap_minutes(minutes);
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Format a duration in minutes as `H:MM`.
pub fn format_duration(minutes: i32) -> String {
    let sign = if minutes < 0 { "-" } else { "" };
    let minutes = minutes.abs();
    format!("{}{}:{:02}", sign, minutes / 60, minutes % 60)
}

/// Format coordinates with hemisphere letters, e.g. `31.7683°N, 35.2137°E`.
pub fn format_coordinates(latitude: f64, longitude: f64) -> String {
    format!(
        "{:.4}°{}, {:.4}°{}",
        latitude.abs(),
        if latitude >= 0.0 { "N" } else { "S" },
        longitude.abs(),
        if longitude >= 0.0 { "E" } else { "W" }
    )
}

/// Display a path with the home directory replaced by `~`.
pub fn path_for_display(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}
