// Structured logging to a file next to the diary.
//
// The terminal belongs to the UI while the app runs, so nothing is written
// to stdout/stderr. Level priority: RUST_LOG > --debug > DEFAULT_LOG_LEVEL.

use crate::config::{APP_NAME, APP_VERSION, DEFAULT_LOG_LEVEL};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

/// Initialise the global subscriber. If the log file cannot be opened, log
/// output is discarded.
pub fn init(debug_flag: bool, log_file: &Path) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if debug_flag {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new(DEFAULT_LOG_LEVEL)
    };

    let writer = match OpenOptions::new().create(true).append(true).open(log_file) {
        Ok(file) => BoxMakeWriter::new(Mutex::new(file)),
        Err(_) => BoxMakeWriter::new(std::io::sink),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .compact()
        .init();

    tracing::debug!(
        app = APP_NAME,
        version = APP_VERSION,
        log_file = %log_file.display(),
        "Logging initialised"
    );
}
