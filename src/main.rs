//! CLI entry point for the bikeshare explorer.
//!
//! Interactively collects a city/month/day filter, loads the matching trip
//! records, runs the statistics reporters in order, and offers raw-row
//! paging and a session restart.

use anyhow::Result;
use clap::Parser;
use std::ffi::OsStr;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use bikeshare_explorer::input;
use bikeshare_explorer::loader;
use bikeshare_explorer::output;
use bikeshare_explorer::pager;
use bikeshare_explorer::reports::duration_stats::DurationStats;
use bikeshare_explorer::reports::station_stats::StationStats;
use bikeshare_explorer::reports::time_stats::TimeStats;
use bikeshare_explorer::reports::user_stats::UserStats;

#[derive(Parser)]
#[command(name = "bikeshare_explorer")]
#[command(about = "Explore US bikeshare trip data interactively", long_about = None)]
struct Cli {
    /// Directory containing the city CSV files
    #[arg(short, long, default_value = ".")]
    data_dir: PathBuf,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: stderr + JSON rolling log file. Stderr defaults to warn
    // so diagnostics don't interleave with the interactive prompts.
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/bikeshare_explorer.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("bikeshare_explorer.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("warn".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    run(&cli.data_dir, &mut reader)
}

/// One full session: repeat the filter/load/report/page pipeline until the
/// user declines the restart prompt.
fn run(data_dir: &Path, reader: &mut impl BufRead) -> Result<()> {
    loop {
        let filters = input::get_filters(reader)?;
        output::log_pretty(&filters);

        let dataset = loader::load(data_dir, &filters)?;

        let time_stats = TimeStats::from_dataset(&dataset);
        time_stats.render();
        output::log_json(&time_stats)?;

        let station_stats = StationStats::from_dataset(&dataset);
        station_stats.render();
        output::log_json(&station_stats)?;

        let duration_stats = DurationStats::from_dataset(&dataset);
        duration_stats.render();
        output::log_json(&duration_stats)?;

        let user_stats = UserStats::from_dataset(&dataset);
        user_stats.render();
        output::log_json(&user_stats)?;

        pager::page(reader, &dataset)?;

        if !input::confirm(
            reader,
            "\nWould you like to restart the program? Enter 'yes' / 'no'. ",
        )? {
            break;
        }
    }

    info!("Session complete");
    Ok(())
}
