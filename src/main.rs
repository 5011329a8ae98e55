use anyhow::Result;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;

mod classify;
mod config;
mod discover;
mod report;
mod scrape;
mod sink;
mod telemetry;
mod util;

#[derive(Parser)]
#[command(name = "scout", about = "Lever job board scraping CLI")]
struct Cli {
    /// Emit a single JSON envelope to stdout; logs go to stderr
    #[arg(global = true, long, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Scrape(scrape::ScrapeCmd),
    Discover(discover::DiscoverCmd),
    Classify(classify::ClassifyCmd),
    Report(report::ReportCmd),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let cli = Cli::parse();
    telemetry::config::set_json_mode(cli.json);

    // initialize logging/tracing (stderr). Respect RUST_LOG and SCOUT_LOG_FORMAT
    telemetry::config::init_tracing();

    let settings = config::Settings::from_env();

    match cli.command {
        Commands::Scrape(args) => scrape::run(&settings, args).await?,
        Commands::Discover(args) => discover::run(&settings, args).await?,
        Commands::Classify(args) => classify::run(args)?,
        Commands::Report(args) => report::run(args)?,
    }

    Ok(())
}
