// src/logging.rs
use env_logger::{Builder, Env, Target};

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "warn";

/// Route `log` records to stderr so stdout only carries the report.
/// Calling this more than once is harmless.
pub fn init() {
    let _ = Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
        .target(Target::Stderr)
        .try_init();
}
