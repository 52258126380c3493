use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

pub use crate::formatter::LevelFormatter;

mod formatter;

/// Install the global subscriber.
///
/// Events are written to stderr, so stdout stays reserved for generated output.
/// Filtering follows `RUST_LOG`; without it nothing but errors gets through.
pub fn setup_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(io::stderr().is_terminal())
                .event_format(LevelFormatter)
                .with_filter(EnvFilter::from_default_env()),
        )
        .init();
}
