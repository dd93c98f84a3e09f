//! Logger setup shared by both binaries.
//!
//! Errors and warnings go to stderr, everything else to stdout, each line
//! prefixed with a local timestamp, the level and the target module.

use log::{Level, LevelFilter};

/// Whether records of this level belong on stderr.
fn is_diagnostic(level: Level) -> bool {
    level <= Level::Warn
}

/// Installs the global logger. Fails only if a logger was already set.
pub fn init(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(
            fern::Dispatch::new()
                .filter(|metadata| is_diagnostic(metadata.level()))
                .chain(std::io::stderr()),
        )
        .chain(
            fern::Dispatch::new()
                .filter(|metadata| !is_diagnostic(metadata.level()))
                .chain(std::io::stdout()),
        )
        .apply()
}
