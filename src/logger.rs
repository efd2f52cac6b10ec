//! Structured terminal output with box-drawing decorations.
//!
//! All user-facing output of zmanclock goes through [`Log`]: level-prefixed
//! diagnostic lines and the decorated blocks that make up the daily report.
//! Output can be silenced at runtime, which the tests use to keep their
//! output clean.

use std::sync::atomic::{AtomicBool, Ordering};

static LOGGING_ENABLED: AtomicBool = AtomicBool::new(true);

/// Width of the label column in [`Log::log_row`].
const ROW_LABEL_WIDTH: usize = 16;

/// Log level enumeration for categorizing message importance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Log,  // Debug details
    Warn, // Non-fatal issues
    Err,  // Failures
    Crit, // Failures that stop the program
    Info, // Status updates
}

impl LogLevel {
    fn prefix(&self) -> &'static str {
        match self {
            LogLevel::Log => "[LOG] ",
            LogLevel::Warn => "[WARN] ",
            LogLevel::Err => "[ERR] ",
            LogLevel::Crit => "[CRIT] ",
            LogLevel::Info => "[INFO] ",
        }
    }
}

/// Main logging interface providing structured output formatting.
pub struct Log;

impl Log {
    /// Enable or disable all output.
    pub fn set_enabled(enabled: bool) {
        LOGGING_ENABLED.store(enabled, Ordering::SeqCst);
    }

    pub fn is_enabled() -> bool {
        LOGGING_ENABLED.load(Ordering::SeqCst)
    }

    fn emit(line: &str) {
        if Self::is_enabled() {
            println!("{}", line);
        }
    }

    /// Print `message` with the prefix for `level`.
    pub fn log(level: LogLevel, message: &str) {
        Self::emit(&format!("{}{}", level.prefix(), message));
    }

    // ═══ Convenience Methods for Common Log Levels ═══

    pub fn log_warning(message: &str) {
        Self::log(LogLevel::Warn, message);
    }

    pub fn log_info(message: &str) {
        Self::log(LogLevel::Info, message);
    }

    pub fn log_debug(message: &str) {
        Self::log(LogLevel::Log, message);
    }

    pub fn log_critical(message: &str) {
        Self::log(LogLevel::Crit, message);
    }

    // ═══ Visual Formatting Functions ═══

    /// A main status line on the left rail.
    pub fn log_decorated(message: &str) {
        Self::emit(&format!("┣ {}", message));
    }

    /// A detail line under the previous decorated line.
    pub fn log_indented(message: &str) {
        Self::emit(&format!("┃   {}", message));
    }

    /// An aligned `label: value` detail line.
    pub fn log_row(label: &str, value: &str) {
        Self::log_indented(&format_row(label, value));
    }

    pub fn log_pipe() {
        Self::emit("┃");
    }

    /// Start a new block, separated from the previous one by an empty rail.
    pub fn log_block_start(message: &str) {
        Self::log_pipe();
        Self::log_decorated(message);
    }

    /// The header printed once at startup.
    pub fn log_version() {
        Self::emit(&format!("┏ zmanclock v{} ━━╸", env!("CARGO_PKG_VERSION")));
        Self::log_pipe();
    }

    /// Close the structure opened by [`Log::log_version`].
    pub fn log_end() {
        Self::emit("╹");
    }
}

fn format_row(label: &str, value: &str) -> String {
    format!("{:>width$}: {}", label, value, width = ROW_LABEL_WIDTH)
}
