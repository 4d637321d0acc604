//! Scrape coordinator - the fetch, extract, assemble loop
//!
//! Countries are processed strictly one after another. For each country the
//! guideline page is fetched, parsed and reduced to a record; a failed fetch
//! is logged and the country keeps a record holding only its code. Once every
//! country is done the records are assembled into the output table.

use crate::collector::{build_http_client, fetch_url, FetchResult};
use crate::config::{validate_country_code, Config};
use crate::extract::{discover_country_codes, PageRecordExtractor};
use crate::output::{log_statistics, write_csv, RunStatistics};
use crate::table::{assemble, GuidelineRecord, GuidelineTable};
use crate::GuidelineError;
use reqwest::Client;
use scraper::Html;
use std::path::Path;

/// Everything a finished run produced
#[derive(Debug)]
pub struct ScrapeOutcome {
    pub table: GuidelineTable,
    pub stats: RunStatistics,
}

/// Main scrape coordinator
pub struct Coordinator {
    config: Config,
    client: Client,
    extractor: PageRecordExtractor,
}

impl Coordinator {
    /// Creates a coordinator and its HTTP client
    pub fn new(config: Config) -> Result<Self, GuidelineError> {
        let client = build_http_client(&config.http)?;
        let extractor = PageRecordExtractor::new(config.extract.normalize_keys);

        Ok(Self {
            config,
            client,
            extractor,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Decides which country codes to scrape
    ///
    /// With discovery enabled the landing page's codes are used; if the page
    /// cannot be fetched or lists nothing, the configured codes are the
    /// fallback.
    pub async fn resolve_countries(&self) -> Result<Vec<String>, GuidelineError> {
        let configured = self.config.countries.clone();

        let countries = match self.discovery_url() {
            Some(landing_url) => match self.discover(landing_url).await {
                Ok(discovered) if !discovered.is_empty() => {
                    tracing::info!(
                        "Discovered {} country codes from {}",
                        discovered.len(),
                        landing_url
                    );
                    discovered
                }
                Ok(_) => {
                    tracing::warn!(
                        "No country codes found on {}, using configured list",
                        landing_url
                    );
                    configured
                }
                Err(reason) => {
                    tracing::warn!(
                        "Country discovery failed ({}), using configured list",
                        reason
                    );
                    configured
                }
            },
            None => configured,
        };

        if countries.is_empty() {
            return Err(GuidelineError::NoCountries);
        }
        Ok(countries)
    }

    fn discovery_url(&self) -> Option<&str> {
        if self.config.source.discover_countries {
            self.config.source.landing_url.as_deref()
        } else {
            None
        }
    }

    async fn discover(&self, landing_url: &str) -> Result<Vec<String>, String> {
        let body = fetch_url(&self.client, landing_url).await.into_body()?;
        let document = Html::parse_document(&body);

        let codes = discover_country_codes(&document)
            .into_iter()
            .filter(|code| match validate_country_code(code) {
                Ok(()) => true,
                Err(e) => {
                    tracing::debug!("Skipping discovered code: {}", e);
                    false
                }
            })
            .collect();
        Ok(codes)
    }

    /// Fetches and extracts one country's page
    ///
    /// Returns the record and, when the fetch failed, the failure reason. A
    /// failed country still yields a record holding its code.
    pub async fn scrape_country(&self, country_code: &str) -> (GuidelineRecord, Option<String>) {
        let url = self.config.source.page_url(country_code);
        tracing::debug!("Fetching {}", url);

        let result = fetch_url(&self.client, &url).await;
        if let FetchResult::Success { final_url, .. } = &result {
            if *final_url != url {
                tracing::debug!("{} redirected to {}", url, final_url);
            }
        }

        match result.into_body() {
            Ok(body) => (self.extract(&body, country_code), None),
            Err(reason) => {
                tracing::warn!("Failed to fetch {}: {}", url, reason);
                (GuidelineRecord::new(country_code), Some(reason))
            }
        }
    }

    fn extract(&self, body: &str, country_code: &str) -> GuidelineRecord {
        let document = Html::parse_document(body);
        self.extractor.extract(&document, country_code)
    }

    /// Scrapes every country in order and assembles the table
    pub async fn run(&self, countries: &[String]) -> ScrapeOutcome {
        let mut stats = RunStatistics::new();
        let mut records = Vec::with_capacity(countries.len());

        for (index, code) in countries.iter().enumerate() {
            let (record, failure) = self.scrape_country(code).await;
            stats.countries += 1;

            match failure {
                Some(reason) => stats.record_failure(code, reason),
                None => {
                    stats.pages_fetched += 1;
                    if !record.has_guidelines() {
                        stats.pages_without_guidelines.push(code.clone());
                    }
                }
            }

            tracing::debug!(
                "[{}/{}] {}: {} fields",
                index + 1,
                countries.len(),
                code,
                record.len()
            );
            records.push(record);
        }

        let table = assemble(records);
        stats.finish(table.columns().len());

        ScrapeOutcome { table, stats }
    }
}

/// Runs a complete scrape and writes the CSV
///
/// # Arguments
///
/// * `config` - The scrape configuration
///
/// # Returns
///
/// * `Ok(RunStatistics)` - The CSV was written
/// * `Err(GuidelineError)` - No countries to scrape, or the CSV could not be written
pub async fn run_scrape(config: Config) -> Result<RunStatistics, GuidelineError> {
    let coordinator = Coordinator::new(config)?;
    let countries = coordinator.resolve_countries().await?;
    tracing::info!("Scraping {} countries", countries.len());

    let outcome = coordinator.run(&countries).await;

    let csv_path = Path::new(&coordinator.config().output.csv_path);
    write_csv(&outcome.table, csv_path)?;
    tracing::info!(
        "Wrote {} rows to {}",
        outcome.table.len(),
        csv_path.display()
    );

    log_statistics(&outcome.stats);
    Ok(outcome.stats)
}
