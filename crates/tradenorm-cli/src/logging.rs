use tracing::level_filters::LevelFilter;

use crate::cli::LogLevel;

/// Installs the stderr subscriber. Stdout is reserved for CSV output.
pub fn init(level: LogLevel) {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_max_level(LevelFilter::from(level))
        .try_init();
}
