//! Logger setup for the command-line binary.

use log::LevelFilter;

/// Initializes the `env_logger` backend for the `log` facade.
///
/// Defaults to `Warn`, or `Debug` when `verbose` is set. An explicit
/// `RUST_LOG` overrides both. Safe to call more than once; later calls are
/// ignored.
pub fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    if builder.try_init().is_ok() {
        log::debug!("logger initialized at {level:?} level");
    }
}
