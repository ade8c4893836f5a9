use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Parser;
use log::{error, info};
use std::time::Duration;

mod client;
mod config;
mod error;
mod models;
mod playlist;
mod ports;


use crate::client::{ChartClient, PreviewPlaylistStore, YouTubeClient};
use crate::config::load_config;
use crate::playlist::{OrderingPolicy, PlaylistOrchestrator, RunConfig, RunSummary};
use crate::ports::{ChartSource, PlaylistStore, VideoSearchPort};

/// Run settings file read when `--config` is not given, if it exists
const DEFAULT_CONFIG_FILE: &str = "charts.json";

#[derive(Parser)]
#[command(name = "chart-playlists")]
#[command(about = "Creates YouTube playlists from this week's music charts")]
#[command(version)]
struct Args {
    /// Path to the run configuration JSON file (defaults to charts.json, or the built-in charts)
    #[arg(short = 'c', long = "config")]
    config_file: Option<String>,

    /// Only process these chart ids, in this order (can be given multiple times)
    #[arg(long = "chart")]
    charts: Vec<String>,

    /// Use the charts published for this date (YYYY-MM-DD) instead of the latest
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Maximum number of entries per chart
    #[arg(short = 'n', long)]
    max_entries: Option<usize>,

    /// Order in which entries are added
    #[arg(long, value_enum)]
    ordering: Option<OrderingPolicy>,

    /// Enable debug mode - log what would be created instead of creating playlists
    #[arg(short = 'd', long = "debug")]
    debug: bool,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Quiet mode - only warnings and errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose {
        "debug"
    } else if args.quiet {
        "warn"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let mut run_config = load_run_config(args.config_file.as_deref())?;
    if let Some(max_entries) = args.max_entries {
        run_config.max_entries = max_entries;
    }
    if let Some(ordering) = args.ordering {
        run_config.ordering = ordering;
    }

    let chart_ids = if args.charts.is_empty() {
        run_config.chart_ids()
    } else {
        args.charts.clone()
    };

    // Load credentials from .env
    let config = load_config()?;

    let interval = Duration::from_millis(run_config.request_interval_ms);
    let charts = ChartClient::new(&config, run_config.charts.clone(), interval);
    let youtube = YouTubeClient::new(&config, interval);

    info!("### Run started at {} ###", Local::now().format("%c"));

    let summary = if args.debug {
        info!("🔍 DEBUG MODE: playlists will not be created");
        run(&charts, &youtube, PreviewPlaylistStore::new(&youtube), &run_config, args.date, &chart_ids)
    } else {
        run(&charts, &youtube, &youtube, &run_config, args.date, &chart_ids)
    };

    summary.log();
    info!("### Run finished at {} ###", Local::now().format("%c"));

    if summary.all_failed() {
        error!("No chart could be processed");
        return Err(anyhow::anyhow!("All {} charts failed", summary.charts.len()));
    }

    Ok(())
}

fn load_run_config(path: Option<&str>) -> Result<RunConfig> {
    match path {
        Some(path) => {
            info!("Loading run configuration from: {path}");
            RunConfig::load_from_file(path)
        }
        None if std::path::Path::new(DEFAULT_CONFIG_FILE).exists() => {
            info!("Loading run configuration from: {DEFAULT_CONFIG_FILE}");
            RunConfig::load_from_file(DEFAULT_CONFIG_FILE)
        }
        None => {
            info!("No {DEFAULT_CONFIG_FILE} found, using the built-in chart list");
            Ok(RunConfig::default())
        }
    }
}

fn run<C, V, P>(
    charts: C,
    search: V,
    store: P,
    run_config: &RunConfig,
    as_of: Option<NaiveDate>,
    chart_ids: &[String],
) -> RunSummary
where
    C: ChartSource,
    V: VideoSearchPort,
    P: PlaylistStore,
{
    PlaylistOrchestrator::new(charts, search, store)
        .with_max_entries(run_config.max_entries)
        .with_ordering(run_config.ordering)
        .with_as_of(as_of)
        .run(chart_ids)
}
