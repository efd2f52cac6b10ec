//! Configuration system for zmanclock with validation and city lookup.
//!
//! This module handles the TOML configuration file, default value generation and
//! validation of the observer's location and clock settings.
//!
//! ## Configuration Sources
//!
//! The configuration file is `zmanclock.toml` in the platform config directory
//! (`$XDG_CONFIG_HOME/zmanclock/zmanclock.toml` on Linux). A commented default
//! is written there on first run. A different file can be given with `--config`.
//!
//! ## Configuration Structure
//!
//! ```toml
//! # Location (coordinates take precedence over city)
//! latitude = 31.7683                # Decimal degrees, north positive
//! longitude = 35.2137               # Decimal degrees, east positive
//! city = "Jerusalem, Israel"        # Looked up when coordinates are absent
//!
//! # Clock
//! timezone_offset = 120             # Minutes east of UTC, without DST
//! dst = false                       # Add one hour for daylight saving time
//! day_rollover = "sunset"           # "midnight" or "sunset"
//!
//! # Display
//! show_zmanim = false               # Print every halachic time, not just sunrise/sunset
//! ```
//!
//! ## Validation
//!
//! - **Geographic**: latitude within ±90°, longitude within ±180°, both or neither given
//! - **City**: must exist in the city database when it is the only location source
//! - **Clock**: timezone offset between UTC-12:00 and UTC+14:00

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::*;
use crate::geo::city::find_city;
use crate::logger::Log;
use crate::time_state::{DayRollover, Observer};
use crate::utils::{format_coordinates, path_for_display};

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct Config {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub city: Option<String>,
    pub timezone_offset: Option<i32>,
    pub dst: Option<bool>,
    pub day_rollover: Option<DayRollover>,
    pub show_zmanim: Option<bool>,
}

impl Config {
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(config_dir.join("zmanclock").join("zmanclock.toml"))
    }

    /// Write a commented default configuration to `path`.
    pub fn create_default_config(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_content = ConfigBuilder::new()
            .add_section("Location")
            .add_setting(
                "latitude",
                &format!("{:.4}", DEFAULT_LATITUDE),
                "Decimal degrees, north positive",
            )
            .add_setting(
                "longitude",
                &format!("{:.4}", DEFAULT_LONGITUDE),
                "Decimal degrees, east positive",
            )
            .add_comment("city = \"Jerusalem, Israel\"", "Used when latitude/longitude are absent")
            .add_section("Clock")
            .add_setting(
                "timezone_offset",
                &DEFAULT_TIMEZONE_OFFSET.to_string(),
                "Minutes east of UTC, without daylight saving",
            )
            .add_setting(
                "dst",
                &DEFAULT_DST.to_string(),
                "Add one hour for daylight saving time",
            )
            .add_setting(
                "day_rollover",
                &format!("\"{}\"", DEFAULT_DAY_ROLLOVER.as_str()),
                "When the Hebrew date advances: \"midnight\" or \"sunset\"",
            )
            .add_section("Display")
            .add_setting(
                "show_zmanim",
                &DEFAULT_SHOW_ZMANIM.to_string(),
                "List every halachic time, not only sunrise and sunset",
            )
            .build();

        fs::write(path, config_content)
            .with_context(|| format!("Failed to write default config to {}", path.display()))?;

        Ok(())
    }

    fn apply_defaults_and_validate_fields(config: &mut Config) -> Result<()> {
        match (config.latitude, config.longitude) {
            (Some(_), Some(_)) => {}
            (None, None) => {
                if let Some(name) = config.city.as_deref() {
                    let city = find_city(name).with_context(|| {
                        format!("City \"{}\" was not found in the city database", name)
                    })?;
                    config.latitude = Some(city.latitude);
                    config.longitude = Some(city.longitude);
                } else {
                    config.latitude = Some(DEFAULT_LATITUDE);
                    config.longitude = Some(DEFAULT_LONGITUDE);
                }
            }
            _ => anyhow::bail!("Both latitude and longitude must be set, or neither"),
        }

        if config.timezone_offset.is_none() {
            config.timezone_offset = Some(DEFAULT_TIMEZONE_OFFSET);
        }
        if config.dst.is_none() {
            config.dst = Some(DEFAULT_DST);
        }
        if config.day_rollover.is_none() {
            config.day_rollover = Some(DEFAULT_DAY_ROLLOVER);
        }
        if config.show_zmanim.is_none() {
            config.show_zmanim = Some(DEFAULT_SHOW_ZMANIM);
        }

        Ok(())
    }

    /// Parse a configuration from TOML text and fill in defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(content).context("Failed to parse config")?;
        Self::apply_defaults_and_validate_fields(&mut config)?;
        validate_config(&config)?;
        Ok(config)
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            anyhow::bail!(
                "Configuration file not found at specified path: {}",
                path.display()
            );
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid configuration in {}", path.display()))
    }

    /// Load the configuration from the default location, creating it if missing.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)
                .context("Failed to create default config during load")?;
            Log::log_block_start(&format!(
                "Created default configuration at {}",
                path_for_display(&config_path)
            ));
        }

        Self::load_from_path(&config_path).with_context(|| {
            format!(
                "Failed to load configuration from {}",
                config_path.display()
            )
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude.unwrap_or(DEFAULT_LATITUDE)
    }

    pub fn longitude(&self) -> f64 {
        self.longitude.unwrap_or(DEFAULT_LONGITUDE)
    }

    pub fn day_rollover(&self) -> DayRollover {
        self.day_rollover.unwrap_or(DEFAULT_DAY_ROLLOVER)
    }

    pub fn show_zmanim(&self) -> bool {
        self.show_zmanim.unwrap_or(DEFAULT_SHOW_ZMANIM)
    }

    /// The observer described by this configuration.
    pub fn observer(&self) -> Observer {
        Observer {
            latitude: self.latitude(),
            longitude: self.longitude(),
            timezone_offset: self.timezone_offset.unwrap_or(DEFAULT_TIMEZONE_OFFSET),
            dst: self.dst.unwrap_or(DEFAULT_DST),
        }
    }

    pub fn log_config(&self, source: &Path) {
        Log::log_block_start(&format!(
            "Loaded configuration from {}",
            path_for_display(source)
        ));

        if let Some(city) = &self.city {
            Log::log_indented(&format!("City: {}", city));
        }
        Log::log_indented(&format!(
            "Location: {}",
            format_coordinates(self.latitude(), self.longitude())
        ));

        let observer = self.observer();
        let offset = observer.timezone_offset;
        Log::log_indented(&format!(
            "Timezone: UTC{}{:02}:{:02}{}",
            if offset < 0 { "-" } else { "+" },
            offset.abs() / 60,
            offset.abs() % 60,
            if observer.dst { " (DST +1h)" } else { "" }
        ));
        Log::log_indented(&format!(
            "Hebrew day rollover: {}",
            self.day_rollover().as_str()
        ));
        Log::log_indented(&format!("Show all zmanim: {}", self.show_zmanim()));
    }
}

/// Check value ranges on a configuration whose defaults have been applied.
pub fn validate_config(config: &Config) -> Result<()> {
    let latitude = config.latitude();
    let longitude = config.longitude();

    if !(MINIMUM_LATITUDE..=MAXIMUM_LATITUDE).contains(&latitude) {
        anyhow::bail!(
            "Latitude must be between {}° and {}° (got {})",
            MINIMUM_LATITUDE,
            MAXIMUM_LATITUDE,
            latitude
        );
    }

    if !(MINIMUM_LONGITUDE..=MAXIMUM_LONGITUDE).contains(&longitude) {
        anyhow::bail!(
            "Longitude must be between {}° and {}° (got {})",
            MINIMUM_LONGITUDE,
            MAXIMUM_LONGITUDE,
            longitude
        );
    }

    if let Some(offset) = config.timezone_offset {
        if !(MINIMUM_TIMEZONE_OFFSET..=MAXIMUM_TIMEZONE_OFFSET).contains(&offset) {
            anyhow::bail!(
                "Timezone offset ({} minutes) must be between {} and {} minutes",
                offset,
                MINIMUM_TIMEZONE_OFFSET,
                MAXIMUM_TIMEZONE_OFFSET
            );
        }
    }

    if latitude.abs() > POLAR_WARNING_LATITUDE {
        Log::log_pipe();
        Log::log_warning(&format!(
            "Latitude {:.2}° is inside the polar circle; some days have no sunrise or sunset",
            latitude
        ));
    }

    Ok(())
}

/// Builds a commented TOML file with aligned trailing comments.
struct ConfigBuilder {
    entries: Vec<ConfigEntry>,
}

enum ConfigEntry {
    Section(String),
    Setting { line: String, comment: String },
}

impl ConfigBuilder {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    fn add_section(mut self, title: &str) -> Self {
        self.entries.push(ConfigEntry::Section(format!("#[{}]", title)));
        self
    }

    fn add_setting(mut self, key: &str, value: &str, comment: &str) -> Self {
        self.entries.push(ConfigEntry::Setting {
            line: format!("{} = {}", key, value),
            comment: format!("# {}", comment),
        });
        self
    }

    /// A commented-out setting the user can enable.
    fn add_comment(mut self, line: &str, comment: &str) -> Self {
        self.entries.push(ConfigEntry::Setting {
            line: format!("# {}", line),
            comment: format!("# {}", comment),
        });
        self
    }

    fn build(self) -> String {
        let max_width = self
            .entries
            .iter()
            .filter_map(|entry| match entry {
                ConfigEntry::Setting { line, .. } => Some(line.len()),
                ConfigEntry::Section(_) => None,
            })
            .max()
            .unwrap_or(0)
            + 1; // one space between setting and comment

        let mut result = Vec::new();
        let mut first_section = true;

        for entry in self.entries {
            match entry {
                ConfigEntry::Section(title) => {
                    if !first_section {
                        result.push(String::new());
                    }
                    result.push(title);
                    first_section = false;
                }
                ConfigEntry::Setting { line, comment } => {
                    let padding = " ".repeat(max_width - line.len());
                    result.push(format!("{}{}{}", line, padding, comment));
                }
            }
        }

        result.push(String::new());
        result.join("\n")
    }
}
