use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod display;
mod search;
mod social;

#[derive(Debug, Parser)]
#[command(name = "trendscope")]
#[command(about = "Fetch search interest and social trending topics")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search interest over time for one or more keywords
    Search(search::SearchArgs),
    /// Top trending topics on Twitter/X for a location
    Social(social::SocialArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli).await {
        tracing::error!(error = %format!("{err:#}"), "command failed");
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = trendscope_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Search(args) => search::run_search(&config, &args).await,
        Commands::Social(args) => social::run_social(&config, &args).await,
    }
}

#[cfg(test)]
mod tests;
