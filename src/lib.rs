//! SMS guidelines: per-country SMS rules flattened into one table
//!
//! This crate fetches one guideline page per country, pulls the key/value
//! pairs out of the page's guideline tables, and assembles every country into a
//! single wide table keyed by country code, written out as a fully quoted CSV.

pub mod collector;
pub mod config;
pub mod extract;
pub mod output;
pub mod table;

use thiserror::Error;

/// Main error type for guideline scraping
#[derive(Debug, Error)]
pub enum GuidelineError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No country codes to scrape")]
    NoCountries,
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Invalid country code: {0:?}")]
    InvalidCountry(String),
}

/// Result type alias for guideline operations
pub type Result<T> = std::result::Result<T, GuidelineError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use extract::{extract_record, PageRecordExtractor};
pub use table::{assemble, GuidelineRecord, GuidelineTable, COUNTRY_CODE};
