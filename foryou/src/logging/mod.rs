//! Structured logging infrastructure for ForYou.
//!
//! Installs a `tracing-subscriber` fmt subscriber according to
//! [`LoggingConfig`]. `RUST_LOG`, when set, takes precedence over the
//! configured level.


use crate::config::{LogFormat, LoggingConfig};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::{BoxMakeWriter, MakeWriterExt};

// Keeps the file writer thread alive for the life of the process
static FILE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Error type for logging operations
#[derive(Debug)]
pub enum LogError {
    /// IO error occurred
    IoError(std::io::Error),

    /// A log file writer is already open for this process
    FileWriterActive(PathBuf),

    /// Error in subscriber setup
    SubscriberError(Box<dyn std::error::Error + Send + Sync>),
}

impl From<std::io::Error> for LogError {
    fn from(err: std::io::Error) -> Self {
        LogError::IoError(err)
    }
}

impl From<Box<dyn std::error::Error + Send + Sync>> for LogError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        LogError::SubscriberError(err)
    }
}

impl std::fmt::Display for LogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogError::IoError(e) => write!(f, "IO error: {}", e),
            LogError::SubscriberError(e) => write!(f, "Subscriber error: {}", e),
            LogError::FileWriterActive(p) => {
                write!(f, "Log file writer already active, cannot open {}", p.display())
            }
        }
    }
}

impl std::error::Error for LogError {}

/// Result type for logging operations
pub type Result<T> = std::result::Result<T, LogError>;

/// Initialize the logging system with the given configuration.
///
/// Does nothing if a global subscriber is already installed.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.to_string()));
    let writer = make_writer(config)?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_target(true)
        .with_line_number(true);

    let result = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Default => builder.try_init(),
    };

    // Lost a race with another initializer
    if result.is_err() && tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    result.map_err(LogError::from)
}

/// Pick the output for the configured combination of stdout and file.
fn make_writer(config: &LoggingConfig) -> Result<BoxMakeWriter> {
    let writer = match (&config.file, config.stdout) {
        (Some(path), true) => BoxMakeWriter::new(file_writer(path)?.and(std::io::stdout)),
        (Some(path), false) => BoxMakeWriter::new(file_writer(path)?),
        (None, true) => BoxMakeWriter::new(std::io::stdout),
        (None, false) => BoxMakeWriter::new(std::io::sink),
    };
    Ok(writer)
}

/// Create a non-blocking file writer.
///
/// Only one file writer may exist per process; its guard lives in
/// `FILE_GUARD` until exit.
fn file_writer(path: impl AsRef<Path>) -> Result<tracing_appender::non_blocking::NonBlocking> {
    let path = path.as_ref();

    if FILE_GUARD.get().is_some() {
        return Err(LogError::FileWriterActive(path.to_path_buf()));
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent)?;
    }

    let file_appender = tracing_appender::rolling::never(
        path.parent().unwrap_or_else(|| Path::new(".")),
        path.file_name().unwrap_or_default(),
    );

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    FILE_GUARD
        .set(guard)
        .map_err(|_| LogError::FileWriterActive(path.to_path_buf()))?;

    Ok(non_blocking)
}
