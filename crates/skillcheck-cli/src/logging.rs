// Logging and verbosity control

use tracing::Level;

/// Initialize logging based on CLI flags
///
/// Diagnostics go to stderr so report output on stdout stays clean.
pub fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
