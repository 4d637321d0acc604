//! Run statistics
//!
//! Counters collected while the coordinator walks the country list, reported
//! once the table has been written.

use chrono::{DateTime, Utc};

/// A country whose page could not be fetched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    pub country_code: String,
    pub reason: String,
}

/// Statistics for one scrape run
#[derive(Debug, Clone)]
pub struct RunStatistics {
    /// When the first page was requested
    pub started_at: DateTime<Utc>,

    /// When the last page was processed
    pub finished_at: Option<DateTime<Utc>>,

    /// Number of countries attempted
    pub countries: usize,

    /// Pages fetched successfully
    pub pages_fetched: usize,

    /// Fetched pages that contained no guideline fields
    pub pages_without_guidelines: Vec<String>,

    /// Pages that could not be fetched
    pub fetch_failures: Vec<FetchFailure>,

    /// Columns in the assembled table
    pub columns: usize,
}

impl RunStatistics {
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            finished_at: None,
            countries: 0,
            pages_fetched: 0,
            pages_without_guidelines: Vec::new(),
            fetch_failures: Vec::new(),
            columns: 0,
        }
    }

    pub fn record_failure(&mut self, country_code: &str, reason: impl Into<String>) {
        self.fetch_failures.push(FetchFailure {
            country_code: country_code.to_string(),
            reason: reason.into(),
        });
    }

    pub fn finish(&mut self, columns: usize) {
        self.columns = columns;
        self.finished_at = Some(Utc::now());
    }

    /// Seconds between start and finish, if the run finished
    pub fn duration_seconds(&self) -> Option<i64> {
        self.finished_at
            .map(|finished| (finished - self.started_at).num_seconds())
    }
}

impl Default for RunStatistics {
    fn default() -> Self {
        Self::new()
    }
}

/// Logs a run summary
pub fn log_statistics(stats: &RunStatistics) {
    tracing::info!(
        "Scraped {} countries: {} fetched, {} failed, {} without guidelines, {} columns",
        stats.countries,
        stats.pages_fetched,
        stats.fetch_failures.len(),
        stats.pages_without_guidelines.len(),
        stats.columns
    );

    if let Some(seconds) = stats.duration_seconds() {
        tracing::info!("Run took {} seconds", seconds);
    }

    for failure in &stats.fetch_failures {
        tracing::warn!("Fetch failed for {}: {}", failure.country_code, failure.reason);
    }

    if !stats.pages_without_guidelines.is_empty() {
        tracing::debug!(
            "No guideline tables for: {}",
            stats.pages_without_guidelines.join(", ")
        );
    }
}
