//! `social` command: top trending topics by volume for a location.

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Args;
use trendscope_core::{write_csv_file, AppConfig};
use trendscope_social::{
    location_name, resolve_location, top_by_volume, RankedTable, TwitterTrendsClient,
    TOP_TRENDS_LIMIT,
};

use crate::display::print_table;

#[derive(Debug, Args)]
pub struct SocialArgs {
    /// Location name (e.g. "United States") or numeric WOEID
    #[arg(long, default_value = "Worldwide")]
    pub location: String,
    /// How many topics to keep
    #[arg(long, default_value_t = TOP_TRENDS_LIMIT)]
    pub top: usize,
    /// Write the ranked list as CSV to this path
    #[arg(long)]
    pub csv: Option<PathBuf>,
}

/// Fetches trending topics and prints the ranked top list.
///
/// # Errors
///
/// Returns an error if the location is unknown, credentials are missing,
/// the fetch fails or the CSV file cannot be written.
pub(crate) async fn run_social(config: &AppConfig, args: &SocialArgs) -> anyhow::Result<()> {
    let location_id = resolve_location(&args.location).with_context(|| {
        format!(
            "unknown location '{}'; use a numeric WOEID or a known name",
            args.location
        )
    })?;

    let client = TwitterTrendsClient::from_config(config)?;
    let topics = client.fetch_social_trends(location_id).await?;
    let ranked = top_by_volume(&topics, args.top);

    let label = location_name(location_id).map_or_else(|| location_id.to_string(), str::to_owned);
    if ranked.is_empty() {
        tracing::warn!(location_id, topics = topics.len(), "no topics report a volume");
        println!("{} topics trending in {label}, none with a reported volume", topics.len());
        return Ok(());
    }

    println!("Top {} trending topics in {label}:", ranked.len());
    print_table(&RankedTable(&ranked));

    if let Some(path) = &args.csv {
        write_csv_file(&RankedTable(&ranked), path)?;
        println!("wrote {} rows to {}", ranked.len(), path.display());
    }

    Ok(())
}
