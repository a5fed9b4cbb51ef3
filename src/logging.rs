//! Diagnostic logging setup shared by the binaries.
//!
//! Logs go to stderr so they never interleave with the game's stdout.

use tracing_subscriber::EnvFilter;

/// Filter used when neither `RUST_LOG` nor an explicit level is given.
pub const DEFAULT_FILTER: &str = "war_mission=warn";

/// Installs the global tracing subscriber.
///
/// An explicit `level` wins over `RUST_LOG`. Calling this more than once is
/// harmless; later calls are ignored.
pub fn init(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(format!("war_mission={}", level)),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
