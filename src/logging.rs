//! Terminal logging for the `freq` binary and the crate's tests.
//!
//! Records go to stderr only; stdout carries the counts.

use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

/// Debug level in debug builds, warnings only in release builds.
pub fn default_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Installs a stderr terminal logger at `level`.
///
/// Does nothing if a global logger is already set.
pub fn init(level: LevelFilter) {
    let _ = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}

/// Initializes logging for unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    init(LevelFilter::Debug);
}
