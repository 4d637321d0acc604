use crate::config::types::{Config, HttpConfig, OutputConfig, SourceConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_source_config(&config.source)?;
    validate_http_config(&config.http)?;
    validate_output_config(&config.output)?;
    validate_countries(&config.countries, config.source.discover_countries)?;
    Ok(())
}

/// Validates the page source configuration
fn validate_source_config(config: &SourceConfig) -> Result<(), ConfigError> {
    let placeholders = config.url_template.matches("{}").count();
    if placeholders != 1 {
        return Err(ConfigError::Validation(format!(
            "url-template must contain exactly one '{{}}' placeholder, found {} in '{}'",
            placeholders, config.url_template
        )));
    }

    validate_http_url(&config.page_url("xx"), "url-template")?;

    if let Some(landing_url) = &config.landing_url {
        validate_http_url(landing_url, "landing-url")?;
    } else if config.discover_countries {
        return Err(ConfigError::Validation(
            "discover-countries requires a landing-url".to_string(),
        ));
    }

    Ok(())
}

/// Validates HTTP client configuration
fn validate_http_config(config: &HttpConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    if config.timeout_secs == Some(0) {
        return Err(ConfigError::Validation(
            "timeout-secs must be >= 1 when set".to_string(),
        ));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.csv_path.is_empty() {
        return Err(ConfigError::Validation(
            "csv-path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates the configured country list
///
/// An empty list is only allowed when the codes will be discovered.
fn validate_countries(countries: &[String], discover: bool) -> Result<(), ConfigError> {
    if countries.is_empty() && !discover {
        return Err(ConfigError::Validation(
            "countries cannot be empty unless discover-countries is enabled".to_string(),
        ));
    }

    for code in countries {
        validate_country_code(code)?;
    }

    Ok(())
}

/// Validates a single country code: non-empty, lowercase ASCII letters and digits
pub fn validate_country_code(code: &str) -> Result<(), ConfigError> {
    if code.is_empty()
        || !code
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
    {
        return Err(ConfigError::InvalidCountry(code.to_string()));
    }
    Ok(())
}

/// Checks that a URL parses and uses an HTTP(S) scheme
fn validate_http_url(raw: &str, field: &str) -> Result<(), ConfigError> {
    let url = Url::parse(raw)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid {} '{}': {}", field, raw, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "{} '{}' must use http or https",
            field, raw
        )));
    }

    Ok(())
}
