//! Command-line argument parsing and processing.
//!
//! This module handles parsing of command-line arguments and provides a clean
//! interface for the main application logic. It supports the standard help,
//! version and debug flags, date/time overrides for the report, and a
//! Hebrew-to-Gregorian conversion mode, while gracefully handling unknown options.

use chrono::{NaiveDate, NaiveTime};
use std::path::PathBuf;

use crate::logger::Log;

/// Settings for the default report.
#[derive(Debug, Default, PartialEq)]
pub struct RunOptions {
    pub debug_enabled: bool,
    /// Report on this civil date instead of today.
    pub date: Option<NaiveDate>,
    /// Report at this local time instead of now.
    pub time: Option<NaiveTime>,
    /// Force the full list of halachic times.
    pub zmanim: bool,
    /// Read this configuration file instead of the default one.
    pub config_path: Option<PathBuf>,
}

/// Represents the parsed command-line arguments and their intended actions.
#[derive(Debug, PartialEq)]
pub enum CliAction {
    /// Print the report for a date and time
    Run(RunOptions),
    /// Convert a Hebrew date to its Gregorian date
    ConvertHebrew {
        debug_enabled: bool,
        day: i32,
        month: i32,
        year: i32,
    },
    /// Display help information and exit
    ShowHelp,
    /// Display version information and exit
    ShowVersion,
    /// Show help due to unknown or malformed arguments and exit
    ShowHelpDueToError,
}

/// Result of parsing command-line arguments.
pub struct ParsedArgs {
    pub action: CliAction,
}

impl ParsedArgs {
    /// Parse command-line arguments into a structured result.
    ///
    /// The first item is the program name and is skipped.
    pub fn parse<I, S>(args: I) -> ParsedArgs
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = RunOptions::default();
        let mut display_help = false;
        let mut display_version = false;
        let mut hebrew_date: Option<(i32, i32, i32)> = None;
        let mut run_convert = false;
        let mut unknown_arg_found = false;

        let args_vec: Vec<String> = args
            .into_iter()
            .skip(1)
            .map(|s| s.as_ref().to_string())
            .collect();

        let mut i = 0;
        while i < args_vec.len() {
            let arg_str = &args_vec[i];
            match arg_str.as_str() {
                "--help" | "-h" => display_help = true,
                "--version" | "-V" | "-v" => display_version = true,
                "--debug" | "-d" => options.debug_enabled = true,
                "--zmanim" | "-z" => options.zmanim = true,
                "--date" | "-D" => {
                    match args_vec
                        .get(i + 1)
                        .map(|value| NaiveDate::parse_from_str(value, "%Y-%m-%d"))
                    {
                        Some(Ok(date)) => options.date = Some(date),
                        Some(Err(_)) => {
                            Log::log_warning(&format!(
                                "Invalid date: {}. Use YYYY-MM-DD",
                                args_vec[i + 1]
                            ));
                            unknown_arg_found = true;
                        }
                        None => {
                            Log::log_warning("Missing value for --date. Usage: --date YYYY-MM-DD");
                            unknown_arg_found = true;
                        }
                    }
                    i += 1;
                }
                "--time" | "-t" => {
                    match args_vec
                        .get(i + 1)
                        .map(|value| NaiveTime::parse_from_str(value, "%H:%M"))
                    {
                        Some(Ok(time)) => options.time = Some(time),
                        Some(Err(_)) => {
                            Log::log_warning(&format!(
                                "Invalid time: {}. Use HH:MM",
                                args_vec[i + 1]
                            ));
                            unknown_arg_found = true;
                        }
                        None => {
                            Log::log_warning("Missing value for --time. Usage: --time HH:MM");
                            unknown_arg_found = true;
                        }
                    }
                    i += 1;
                }
                "--config" | "-c" => {
                    match args_vec.get(i + 1) {
                        Some(path) => options.config_path = Some(PathBuf::from(path)),
                        None => {
                            Log::log_warning("Missing value for --config. Usage: --config PATH");
                            unknown_arg_found = true;
                        }
                    }
                    i += 1;
                }
                "--hebrew" | "-H" => {
                    run_convert = true;
                    // Parse: --hebrew <day> <month> <year>
                    if i + 3 < args_vec.len() {
                        let values: Vec<Option<i32>> = args_vec[i + 1..=i + 3]
                            .iter()
                            .map(|value| value.parse::<i32>().ok())
                            .collect();
                        match values.as_slice() {
                            [Some(day), Some(month), Some(year)] => {
                                hebrew_date = Some((*day, *month, *year));
                            }
                            _ => {
                                Log::log_warning(&format!(
                                    "Invalid Hebrew date: {} {} {}",
                                    args_vec[i + 1],
                                    args_vec[i + 2],
                                    args_vec[i + 3]
                                ));
                                unknown_arg_found = true;
                            }
                        }
                        i += 3;
                    } else {
                        Log::log_warning(
                            "Missing arguments for --hebrew. Usage: --hebrew <day> <month> <year>",
                        );
                        unknown_arg_found = true;
                        i = args_vec.len();
                    }
                }
                _ => {
                    if arg_str.starts_with('-') {
                        Log::log_warning(&format!("Unknown option: {}", arg_str));
                        unknown_arg_found = true;
                    }
                    // Non-option arguments are currently ignored
                }
            }
            i += 1;
        }

        if let Some((day, month, year)) = hebrew_date {
            if !(1..=30).contains(&day) || !(1..=14).contains(&month) {
                Log::log_warning(&format!(
                    "Hebrew date out of range: day {} month {} (day 1-30, month 1-14)",
                    day, month
                ));
                unknown_arg_found = true;
            }
        }

        let action = if display_version {
            CliAction::ShowVersion
        } else if display_help || unknown_arg_found {
            if unknown_arg_found {
                CliAction::ShowHelpDueToError
            } else {
                CliAction::ShowHelp
            }
        } else if run_convert {
            match hebrew_date {
                Some((day, month, year)) => CliAction::ConvertHebrew {
                    debug_enabled: options.debug_enabled,
                    day,
                    month,
                    year,
                },
                None => CliAction::ShowHelpDueToError,
            }
        } else {
            CliAction::Run(options)
        };

        ParsedArgs { action }
    }

    /// Convenience method to parse from std::env::args()
    pub fn from_env() -> ParsedArgs {
        Self::parse(std::env::args())
    }
}

/// Displays version information using custom logging style.
pub fn display_version_info() {
    Log::log_version();
    Log::log_pipe();
    println!("┗ {}", env!("CARGO_PKG_DESCRIPTION"));
}

/// Displays custom help message using logger methods.
pub fn display_help() {
    Log::log_version();
    Log::log_block_start(env!("CARGO_PKG_DESCRIPTION"));
    Log::log_block_start("Usage: zmanclock [OPTIONS]");
    Log::log_block_start("Options:");
    Log::log_indented("-c, --config <PATH>          Use this configuration file");
    Log::log_indented("-d, --debug                  Enable detailed debug output");
    Log::log_indented("-D, --date <YYYY-MM-DD>      Report on this date instead of today");
    Log::log_indented("-H, --hebrew <d> <m> <y>     Convert a Hebrew date to Gregorian");
    Log::log_indented("                             (months 1-12 from Tishrei, 13/14 = Adar I/II)");
    Log::log_indented("-h, --help                   Print help information");
    Log::log_indented("-t, --time <HH:MM>           Report at this local time instead of now");
    Log::log_indented("-V, --version                Print version information");
    Log::log_indented("-z, --zmanim                 List every halachic time");
    Log::log_end();
}
