use anyhow::Result;

use zmanclock::args::{self, CliAction, ParsedArgs};
use zmanclock::commands;
use zmanclock::constants::EXIT_FAILURE;
use zmanclock::logger::Log;

fn main() -> Result<()> {
    let parsed = ParsedArgs::from_env();

    let result = match parsed.action {
        CliAction::ShowVersion => {
            args::display_version_info();
            Ok(())
        }
        CliAction::ShowHelp => {
            args::display_help();
            Ok(())
        }
        CliAction::ShowHelpDueToError => {
            args::display_help();
            std::process::exit(EXIT_FAILURE);
        }
        CliAction::ConvertHebrew {
            debug_enabled,
            day,
            month,
            year,
        } => commands::convert::handle_convert_command(day, month, year, debug_enabled),
        CliAction::Run(options) => commands::today::handle_today_command(&options),
    };

    if let Err(e) = result {
        Log::log_pipe();
        Log::log_critical(&format!("{:#}", e));
        Log::log_end();
        std::process::exit(EXIT_FAILURE);
    }

    Ok(())
}
