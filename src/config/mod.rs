//! Configuration module
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//!
//! # Example
//!
//! ```no_run
//! use sms_guidelines::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("guidelines.toml")).unwrap();
//! println!("Writing to: {}", config.output.csv_path);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, ExtractConfig, HttpConfig, OutputConfig, SourceConfig, DEFAULT_URL_TEMPLATE,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
pub use validation::validate_country_code;
