use std::io::IsTerminal;
use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

static TRACING_INIT: Once = Once::new();

/// Install the stderr subscriber. Safe to call more than once.
///
/// `RUST_LOG` wins when set; otherwise `-v` picks the level.
pub(crate) fn init_tracing(verbose: u8) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(std::io::stderr().is_terminal())
                    .with_target(true)
                    .with_level(true),
            )
            .with(filter)
            .try_init();
    });
}

fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
