// ABOUTME: Error types for the exchange-site library
// ABOUTME: Provides structured error handling for the slider, navigation, forms and rendering

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Configuration error: {indicators} indicators cannot pair with {slides} slides")]
    ConfigurationError { slides: usize, indicators: usize },

    #[error("Slide index {index} is out of range for {len} slides")]
    IndexOutOfRangeError { index: usize, len: usize },

    #[error("Input validation error: {0}")]
    ValidationError(String),

    #[error("Section not found: {0}")]
    SectionNotFound(String),

    #[error("Unknown admin section: {0}")]
    UnknownSection(String),

    #[error("Invalid configuration value: {0}")]
    ConfigError(String),

    #[error("Invalid event script: {0}")]
    ScriptError(String),

    #[error("Failed to write file: {0}")]
    FileWriteError(#[from] std::io::Error),

    #[error("Unknown error: {0}")]
    UnknownError(String),
}

// Implement conversion from anyhow::Error to our SiteError
impl From<anyhow::Error> for SiteError {
    fn from(err: anyhow::Error) -> Self {
        SiteError::UnknownError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
