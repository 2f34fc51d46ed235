//! Configuration system for ForYou.
//!
//! Configuration is layered: built-in defaults, then an optional file
//! (TOML, YAML or JSON), then `FORYOU_`-prefixed environment variables.
//! Nested keys use `__` in environment variables, e.g.
//! `FORYOU_RANKING__MAX_PER_ARTIST=3`.

mod builder;
mod loader;
mod models;
#[cfg(test)]
mod tests;
pub(crate) mod validation;

pub use builder::ConfigBuilder;
pub use loader::ConfigLoader;
pub use models::*;

/// Default configuration file names that the system will look for
pub const DEFAULT_CONFIG_FILES: &[&str] = &[
    "foryou.toml",
    "foryou.yaml",
    "foryou.yml",
    "foryou.json",
    ".foryou/config.toml",
    ".foryou/config.yaml",
    ".foryou/config.yml",
    ".foryou/config.json",
];

/// Environment variable prefix for ForYou configuration
pub const ENV_PREFIX: &str = "FORYOU_";

/// Configuration error type
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Error occurred during file loading
    #[error("Failed to load configuration file: {0}")]
    FileLoadError(String),

    /// Error occurred during validation
    #[error("Configuration validation error: {0}")]
    ValidationError(String),

    /// Error occurred during parsing
    #[error("Configuration parsing error: {0}")]
    ParseError(String),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
