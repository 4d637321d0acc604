//! Collector module for fetching and processing guideline pages
//!
//! This module contains the scraping logic, including:
//! - HTTP fetching without retries
//! - Country discovery
//! - The sequential fetch, extract, assemble loop

mod coordinator;
mod fetcher;

pub use coordinator::{run_scrape, Coordinator, ScrapeOutcome};
pub use fetcher::{build_http_client, fetch_url, FetchResult};
