//! Logger setup for the `surf` binary

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initializes the global logger.
///
/// The level comes from `RUST_LOG` and defaults to `warn`. `debug` forces
/// debug output regardless of `RUST_LOG`. Logs go to stderr so command
/// output on stdout stays machine readable.
pub fn init(debug: bool) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_level(LevelFilter::Debug);
    }

    if let Err(e) = builder.format_timestamp_secs().try_init() {
        eprintln!("Failed to initialize logger: {}", e);
    }
}
