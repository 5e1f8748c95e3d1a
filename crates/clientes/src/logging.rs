//! Diagnostic logging for the clientes binary.
//!
//! The library emits `tracing` events; this module installs the subscriber. Logs go
//! to **stderr** so they never interleave with prompts and menu text on stdout.
//!
//! Level selection, lowest priority first:
//! - default `warn`
//! - `-v` → `info`, `-vv` (or more) → `debug`
//! - `RUST_LOG` (e.g. `RUST_LOG=clientesapp=debug`) overrides both

use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    }
}

/// Installs the global subscriber. Calling it again is a no-op.
pub fn init(verbosity: u8) {
    let env_filter = EnvFilter::builder()
        .with_default_directive(level_for(verbosity).into())
        .from_env_lossy();

    let console = layer()
        .compact()
        .with_target(false)
        .with_writer(std::io::stderr);

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(console)
        .try_init();
}
