//! File logging. The terminal belongs to the UI, so logs never go to stdout.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::QuizError;

/// Install a global subscriber appending to `path`.
///
/// `RUST_LOG` takes precedence over `default_filter`.
pub fn init(path: &Path, default_filter: &str) -> Result<(), QuizError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|err| QuizError::Logging(format!("cannot open '{}': {}", path.display(), err)))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .map_err(|err| QuizError::Logging(format!("invalid log filter '{}': {}", default_filter, err)))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|err| QuizError::Logging(err.to_string()))
}
