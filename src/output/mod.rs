//! Output module for the scraped guideline table
//!
//! This module handles:
//! - Writing the assembled table as a fully quoted CSV
//! - Recording and reporting run statistics

mod csv_output;
pub mod stats;

pub use csv_output::{write_csv, write_csv_to};
pub use stats::{log_statistics, FetchFailure, RunStatistics};
