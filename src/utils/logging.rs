// Logger setup for the bootzip binary

use log::LevelFilter;

/// Map the number of `-v` flags to a log level
pub fn level_for_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Initialize env_logger on stderr. `RUST_LOG` takes precedence over `-v`.
pub fn init_logger(verbose: u8) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level_for_verbosity(verbose))
        .format_timestamp(None)
        .parse_env("RUST_LOG");

    // A second init (e.g. from tests) is not an error worth surfacing
    let _ = builder.try_init();
}
