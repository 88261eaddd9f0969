//! Command Line Interface (CLI) layer for resourcedump.
//!
//! Argument parsing lives in the library (`resourcedump::Arguments`); this
//! module holds the binary-only pieces: logging setup, error types
//! (`errors`), and the orchestration logic (`runner`).
pub mod errors;
pub mod runner;

pub use runner::run;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber. Warnings are always shown so per-file
/// failures get reported; `--log` raises the default to debug. `RUST_LOG`
/// overrides both.
pub fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}
