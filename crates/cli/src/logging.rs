//! Log sink setup.
//!
//! The board UI owns the terminal, so logs only go to a file unless the
//! command prints plain text, in which case stderr is used.

use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber.
///
/// # Arguments
/// * `log_file` - File to write logs to; takes precedence over `stderr`
/// * `stderr` - Log to stderr when no file is given
pub fn init(log_file: Option<&Path>, stderr: bool) -> io::Result<()> {
    if let Some(path) = log_file {
        let file = File::create(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();
    } else if stderr {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_writer(io::stderr)
            .init();
    }
    Ok(())
}
