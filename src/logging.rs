use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initializes console logging on stderr.
///
/// Stdout is left to the operator report. `RUST_LOG` takes precedence over
/// the default filter when set.
pub fn init_logging(verbose: bool) {
    let default_directive = if verbose {
        "schedule_import=debug"
    } else {
        "schedule_import=info"
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .try_init();
}
