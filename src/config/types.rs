use serde::Deserialize;

/// Default page template, `{}` is replaced by the country code
pub const DEFAULT_URL_TEMPLATE: &str = "https://www.twilio.com/en-us/guidelines/{}/sms";

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Country codes to scrape, in output row order
    #[serde(default)]
    pub countries: Vec<String>,

    #[serde(default)]
    pub source: SourceConfig,

    #[serde(default)]
    pub http: HttpConfig,

    #[serde(default)]
    pub extract: ExtractConfig,

    pub output: OutputConfig,
}

/// Where guideline pages come from
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    /// Page URL with a single `{}` placeholder for the country code
    #[serde(rename = "url-template", default = "default_url_template")]
    pub url_template: String,

    /// Landing page listing every country (used for discovery)
    #[serde(rename = "landing-url", default)]
    pub landing_url: Option<String>,

    /// Replace `countries` with the codes linked from the landing page
    #[serde(rename = "discover-countries", default)]
    pub discover_countries: bool,
}

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    /// User-Agent header sent with every request
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,

    /// Whole-request timeout in seconds; no timeout when unset
    #[serde(rename = "timeout-secs", default)]
    pub timeout_secs: Option<u64>,
}

/// Extraction options
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExtractConfig {
    /// Clean up field names before they are stored
    #[serde(rename = "normalize-keys", default)]
    pub normalize_keys: bool,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path to the CSV file
    #[serde(rename = "csv-path")]
    pub csv_path: String,
}

impl SourceConfig {
    /// Builds the page URL for one country code
    pub fn page_url(&self, code: &str) -> String {
        self.url_template.replacen("{}", code, 1)
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url_template: default_url_template(),
            landing_url: None,
            discover_countries: false,
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_secs: None,
        }
    }
}

fn default_url_template() -> String {
    DEFAULT_URL_TEMPLATE.to_string()
}

fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
