//! Implementation of the default command: the report for one date and time.
//!
//! The report covers the civil and Hebrew dates, the moon, local sunrise and
//! sunset, and the seasonal hour running at the requested minute. With
//! `--zmanim` (or `show_zmanim = true`) every halachic boundary is listed.

use anyhow::Result;
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Timelike, Utc};

use crate::args::RunOptions;
use crate::calendar::hebrew::tishrei1_jd;
use crate::config::Config;
use crate::constants::ZMAN_HOURS_PER_PERIOD;
use crate::geo;
use crate::logger::Log;
use crate::time_state::{DaySnapshot, Observer, SunSnapshot};
use crate::utils::{format_duration, format_minutes};

/// Handle the default command: load configuration and print the report.
pub fn handle_today_command(options: &RunOptions) -> Result<()> {
    Log::log_version();

    if options.debug_enabled {
        Log::log_debug("Debug mode enabled");
    }

    let (config, source) = match &options.config_path {
        Some(path) => (Config::load_from_path(path)?, path.clone()),
        None => (Config::load()?, Config::get_config_path()?),
    };

    if options.debug_enabled {
        config.log_config(&source);
    }

    let observer = config.observer();
    let (date, minute) = resolve_moment(options, &observer, Utc::now().naive_utc());

    if options.debug_enabled {
        geo::log_solar_debug_info(date, &observer);
    }

    let snapshot = DaySnapshot::compute(date, minute, &observer, config.day_rollover());

    if options.debug_enabled {
        log_hebrew_year_debug_info(&snapshot);
    }

    print_report(&snapshot, options.zmanim || config.show_zmanim());
    Log::log_end();

    Ok(())
}

/// Local date and minute to report on, from the options or the current UTC time.
fn resolve_moment(
    options: &RunOptions,
    observer: &Observer,
    now_utc: NaiveDateTime,
) -> (NaiveDate, i32) {
    let local_now = now_utc + Duration::minutes(i64::from(observer.local_offset()));
    let date = options.date.unwrap_or(local_now.date());
    let time = options.time.unwrap_or(local_now.time());
    (date, (time.hour() * 60 + time.minute()) as i32)
}

fn log_hebrew_year_debug_info(snapshot: &DaySnapshot) {
    let hebrew = &snapshot.hebrew;
    Log::log_pipe();
    Log::log_debug("Hebrew calendar details:");
    Log::log_row("Julian day", &snapshot.julian_day.value().to_string());
    Log::log_row(
        "1 Tishrei",
        &format!("{} ({})", hebrew.tishrei1, hebrew.tishrei1.to_gregorian()),
    );
    Log::log_row(
        "Next 1 Tishrei",
        &format!(
            "{} ({})",
            hebrew.tishrei1_next_year,
            hebrew.tishrei1_next_year.to_gregorian()
        ),
    );
    Log::log_row(
        "Year after",
        &tishrei1_jd(hebrew.year + 2).to_gregorian().to_string(),
    );
    Log::log_row("Moon age", &format!("{} of 27", snapshot.moon_age));
}

fn print_report(snapshot: &DaySnapshot, show_zmanim: bool) {
    let weekday = snapshot
        .date
        .to_naive_date()
        .map(|date| format!(" ({})", date.weekday()))
        .unwrap_or_default();
    let hebrew = &snapshot.hebrew;

    Log::log_block_start(&format!("{}{}", snapshot.date, weekday));
    Log::log_row("Local time", &format_minutes(snapshot.local_minute));
    Log::log_row(
        "Hebrew date",
        &format!(
            "{} ({} year, {} days)",
            hebrew,
            if hebrew.is_leap_year() { "leap" } else { "common" },
            hebrew.year_length()
        ),
    );
    Log::log_row(
        "Moon",
        &format!("phase {} of 26 [{}]", snapshot.moon_phase, snapshot.moon_glyph),
    );

    match &snapshot.sun {
        Ok(sun) => {
            Log::log_block_start("Sun");
            for (label, value) in sun_rows(sun, show_zmanim) {
                Log::log_row(label, &value);
            }
            if let Some(period) = sun
                .markers
                .current_period(snapshot.local_minute, sun.zmanim.midday)
            {
                Log::log_row("Afternoon", &format!("after {}", period.label()));
            }
            if let Some(marker) = sun.markers.marker_at(snapshot.local_minute) {
                Log::log_pipe();
                Log::log_info(&format!("Now: {}", marker.label()));
            }
        }
        Err(e) => {
            Log::log_pipe();
            Log::log_warning(&format!("No sun times for this date: {}", e));
        }
    }
}

/// Label/value pairs for the sun block of the report.
fn sun_rows(sun: &SunSnapshot, show_zmanim: bool) -> Vec<(&'static str, String)> {
    let zmanim = &sun.zmanim;
    let optional = |time: Option<i32>| {
        time.map(format_minutes)
            .unwrap_or_else(|| "--:--".to_string())
    };
    let hour = &sun.zman_hour;

    let mut rows = Vec::new();
    if show_zmanim {
        rows.push(("First light", optional(zmanim.first_light)));
        rows.push(("Talit", optional(zmanim.talit)));
    }
    rows.push(("Sunrise", format_minutes(zmanim.sunrise)));
    rows.push(("Midday", format_minutes(zmanim.midday)));
    if show_zmanim {
        rows.push(("Mincha Gedola", format_minutes(sun.markers.mincha_gedola)));
        rows.push(("Mincha Ketana", format_minutes(sun.markers.mincha_ketana)));
        rows.push(("Plag HaMincha", format_minutes(sun.markers.plag_hamincha)));
    }
    rows.push(("Sunset", format_minutes(zmanim.sunset)));
    if show_zmanim {
        rows.push(("First stars", optional(zmanim.first_stars)));
        rows.push(("Three stars", optional(zmanim.three_stars)));
        rows.push(("Sun hour", format!("{} min", zmanim.sun_hour)));
    }
    rows.push((
        "Zman hour",
        format!(
            "{} of {} ({}), next in {}",
            hour.number,
            ZMAN_HOURS_PER_PERIOD,
            hour.state.as_str(),
            format_duration(hour.minutes_until_next)
        ),
    ));
    rows
}
