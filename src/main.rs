//! Flow-Mapper main entry point
//!
//! This is the command-line interface for the Flow-Mapper user flow mapper.

use clap::Parser;
use flow_mapper::config::{load_config, validate, Config};
use flow_mapper::output::{log_statistics, to_pretty_json, write_json_file};
use flow_mapper::url::normalize_url;
use flow_mapper::{FlowMapError, FlowMapper};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Flow-Mapper: an intelligent user flow mapper
///
/// Flow-Mapper crawls a site from a start URL, removes links that appear on
/// most pages (global navigation), and prints the remaining page-to-page
/// transitions as a JSON node/edge graph.
#[derive(Parser, Debug)]
#[command(name = "flow-mapper")]
#[command(version)]
#[command(about = "An intelligent user flow mapper", long_about = None)]
struct Cli {
    /// Start URL; prompted for interactively when omitted
    #[arg(value_name = "URL")]
    url: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Maximum link depth from the start URL
    #[arg(long)]
    max_depth: Option<u32>,

    /// Share of pages (0.0-1.0) at which a link counts as global navigation
    #[arg(long)]
    threshold: Option<f64>,

    /// Maximum number of concurrent fetches (1 crawls depth-first)
    #[arg(long)]
    concurrency: Option<usize>,

    /// Stop after this many pages have been crawled
    #[arg(long)]
    max_pages: Option<usize>,

    /// Also write the JSON flow graph to this file
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let start_url = match &cli.url {
        Some(url) => url.trim().to_string(),
        None => prompt_start_url()?,
    };
    if start_url.is_empty() {
        return Err(FlowMapError::Input("a start URL is required".to_string()).into());
    }
    normalize_url(&start_url)?;

    handle_map(&config, &start_url).await?;

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr; stdout carries the progress lines and the JSON document.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("flow_mapper=info,warn"),
            1 => EnvFilter::new("flow_mapper=debug,info"),
            2 => EnvFilter::new("flow_mapper=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the config file (if any) and applies command-line overrides
fn build_config(cli: &Cli) -> Result<Config, FlowMapError> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)?
        }
        None => Config::default(),
    };

    if let Some(depth) = cli.max_depth {
        config.crawler.max_depth = depth;
    }
    if let Some(threshold) = cli.threshold {
        config.filter.threshold = threshold;
    }
    if let Some(concurrency) = cli.concurrency {
        config.crawler.concurrency = concurrency;
    }
    if let Some(max_pages) = cli.max_pages {
        config.crawler.max_pages = Some(max_pages);
    }
    if let Some(output) = &cli.output {
        config.output.json_path = Some(output.display().to_string());
    }

    validate(&config)?;

    Ok(config)
}

/// Asks for the start URL on stdin
fn prompt_start_url() -> Result<String, FlowMapError> {
    print!("Enter the start URL: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    Ok(line.trim().to_string())
}

/// Runs the pipeline and prints the flow graph
async fn handle_map(config: &Config, start_url: &str) -> Result<(), FlowMapError> {
    let mapper = FlowMapper::from_config(config)?;

    println!("Starting crawl from {}", start_url);
    let outcome = mapper.crawl(start_url).await?;
    println!("Crawl completed.");
    println!("Total pages crawled: {}", outcome.visited.len());

    let report = mapper.finish(outcome);
    log_statistics(&report.statistics, report.global_links.len());

    let json = to_pretty_json(&report.flow)?;
    println!("\nFinal User Flow JSON:");
    println!("{}", json);

    if let Some(path) = &config.output.json_path {
        write_json_file(&report.flow, Path::new(path))?;
        tracing::info!("Flow graph written to: {}", path);
    }

    Ok(())
}
