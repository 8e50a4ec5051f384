//! stderr logging through `tracing`, filtered by `RUST_LOG` or `-v`.

use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber. `RUST_LOG` overrides the verbosity flag.
pub fn init(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    // A global subscriber may already be installed; keep using it.
    if let Err(err) = subscriber.try_init() {
        tracing::debug!(%err, "tracing subscriber already initialized");
    }
}
