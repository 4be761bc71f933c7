//! Diagnostics on stderr, so stdout only carries reports.

use tracing_subscriber::{EnvFilter, prelude::*};

/// Level of the `axgen` targets for a `-v` count. The directive is a target
/// prefix, so it covers every `axgen_*` crate.
fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "axgen=info",
        1 => "axgen=debug",
        _ => "axgen=trace",
    }
}

/// Install the global subscriber. `RUST_LOG` takes precedence over `-v`.
pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose > 0)
        .without_time()
        .with_filter(filter);

    if tracing_subscriber::registry()
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        eprintln!("warning: tracing subscriber already initialized");
    }
}
