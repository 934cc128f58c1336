//! `search` command: interest over time from the search-trends provider.

use std::path::PathBuf;

use clap::Args;
use trendscope_core::{write_csv_file, AppConfig, Tabular};
use trendscope_search::{split_keywords, GoogleTrendsClient, Timeframe};

use crate::display::{print_rows, print_table};

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Comma-separated keywords to compare
    #[arg(long, default_value = "fashion, style")]
    pub keywords: String,
    /// Monthly, Quarterly, Yearly or "All Time"
    #[arg(long, default_value = "Monthly")]
    pub timeframe: Timeframe,
    /// Region code; defaults to `TRENDSCOPE_GEO`
    #[arg(long)]
    pub geo: Option<String>,
    /// Rows to show from the raw table
    #[arg(long, default_value_t = 10)]
    pub rows: usize,
    /// Also print the raw table, including the partial-period flag
    #[arg(long)]
    pub raw: bool,
    /// Write the raw table as CSV to this path
    #[arg(long)]
    pub csv: Option<PathBuf>,
}

/// Fetches and prints search interest.
///
/// # Errors
///
/// Returns an error if the client cannot be built, the fetch fails or the
/// CSV file cannot be written.
pub(crate) async fn run_search(config: &AppConfig, args: &SearchArgs) -> anyhow::Result<()> {
    let keywords = split_keywords(&args.keywords);
    let geo = args.geo.as_deref().unwrap_or(&config.default_geo);

    let client = GoogleTrendsClient::from_config(config)?;
    let table = client
        .fetch_search_trends(&keywords, args.timeframe, geo)
        .await?;

    println!(
        "Search interest: {} ({}, {geo})",
        table.keywords().join(", "),
        args.timeframe
    );
    print_table(&table.series());

    if args.raw {
        println!();
        println!("Raw data (first {} rows):", args.rows.min(table.len()));
        let mut rows = Tabular::rows(&table);
        rows.truncate(args.rows);
        print_rows(&Tabular::headers(&table), &rows);
    }

    if let Some(path) = &args.csv {
        write_csv_file(&table, path)?;
        println!("wrote {} rows to {}", table.len(), path.display());
    }

    Ok(())
}
