//! SMS guidelines scraper entry point
//!
//! This is the command-line interface for scraping per-country SMS guideline
//! pages into a single CSV.

use anyhow::Context;
use clap::Parser;
use sms_guidelines::collector::run_scrape;
use sms_guidelines::config::{load_config_with_hash, validate_country_code, Config};
use sms_guidelines::GuidelineError;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Scrapes per-country SMS guideline pages into one wide CSV
///
/// Each country's guideline tables are flattened into one row keyed by
/// country code. Columns are grouped by category.
#[derive(Parser, Debug)]
#[command(name = "sms-guidelines")]
#[command(version)]
#[command(about = "Scrape per-country SMS guidelines into a CSV", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show which pages would be fetched
    #[arg(long)]
    dry_run: bool,

    /// Write the CSV here instead of the configured csv-path
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Comma-separated country codes, replacing the configured list
    #[arg(long, value_delimiter = ',', value_name = "CODES")]
    countries: Option<Vec<String>>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (mut config, config_hash) = match load_config_with_hash(&cli.config) {
        Ok((cfg, hash)) => {
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            (cfg, hash)
        }
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e).context(format!("loading {}", cli.config.display()));
        }
    };

    apply_overrides(&mut config, &cli)?;

    if cli.dry_run {
        handle_dry_run(&config, &config_hash);
        return Ok(());
    }

    handle_scrape(config).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("sms_guidelines=info,warn"),
            1 => EnvFilter::new("sms_guidelines=debug,info"),
            2 => EnvFilter::new("sms_guidelines=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Applies command-line overrides on top of the loaded configuration
fn apply_overrides(config: &mut Config, cli: &Cli) -> anyhow::Result<()> {
    if let Some(output) = &cli.output {
        config.output.csv_path = output.to_string_lossy().into_owned();
    }

    if let Some(countries) = &cli.countries {
        let countries: Vec<String> = countries
            .iter()
            .map(|code| code.trim().to_string())
            .filter(|code| !code.is_empty())
            .collect();
        for code in &countries {
            validate_country_code(code).context("invalid --countries value")?;
        }
        anyhow::ensure!(!countries.is_empty(), "--countries cannot be empty");

        config.countries = countries;
        config.source.discover_countries = false;
    }

    Ok(())
}

/// Handles the --dry-run mode: shows what would be fetched
fn handle_dry_run(config: &Config, config_hash: &str) {
    println!("=== SMS Guidelines Dry Run ===\n");

    println!("Configuration hash: {}", config_hash);

    println!("\nSource:");
    println!("  URL template: {}", config.source.url_template);
    match (&config.source.landing_url, config.source.discover_countries) {
        (Some(landing), true) => println!("  Discover countries from: {}", landing),
        _ => println!("  Discover countries: no"),
    }

    println!("\nHTTP:");
    println!("  User agent: {}", config.http.user_agent);
    match config.http.timeout_secs {
        Some(secs) => println!("  Timeout: {}s", secs),
        None => println!("  Timeout: none"),
    }

    println!("\nExtraction:");
    println!("  Normalize keys: {}", config.extract.normalize_keys);

    println!("\nOutput:");
    println!("  CSV: {}", config.output.csv_path);

    println!("\nCountries ({}):", config.countries.len());
    for code in &config.countries {
        println!("  - {} {}", code, config.source.page_url(code));
    }

    println!("\n✓ Configuration is valid");
}

/// Handles the main scrape operation
async fn handle_scrape(config: Config) -> anyhow::Result<()> {
    let csv_path = config.output.csv_path.clone();

    match run_scrape(config).await {
        Ok(stats) => {
            tracing::info!(
                "Scrape completed: {} of {} pages fetched",
                stats.pages_fetched,
                stats.countries
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!("Scrape failed: {}", e);
            let context = error_context(&e, &csv_path);
            Err(e).context(context)
        }
    }
}

/// Context line for a fatal scrape error; only output failures name the CSV
fn error_context(error: &GuidelineError, csv_path: &str) -> String {
    match error {
        GuidelineError::Csv(_) | GuidelineError::Io(_) => format!("writing {}", csv_path),
        _ => "scrape failed".to_string(),
    }
}
