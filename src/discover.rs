use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::config::Settings;
use crate::scrape::{discovery, fetch};
use crate::telemetry;

/// scout discover — run company discovery alone and list the identifiers.
#[derive(Args)]
pub struct DiscoverCmd {
    /// Show at most this many identifiers in the log (all appear in --json)
    #[arg(long, default_value_t = 50)]
    pub show: usize,
}

#[derive(Serialize)]
struct DiscoverResult {
    total: usize,
    companies: Vec<String>,
}

pub async fn run(settings: &Settings, args: DiscoverCmd) -> Result<()> {
    let log = telemetry::discover();
    let _g = log.root_span_kv([("base_url", settings.base_url.clone())]).entered();

    let client = fetch::build_client(settings.http_timeout_secs)?;
    let companies = discovery::discover(&client, settings).await;

    log.info(format!("🔍 {} companies:", companies.len()));
    for slug in companies.iter().take(args.show) {
        log.info(format!("  {}", slug));
    }
    if companies.len() > args.show {
        log.info(format!("  ... ({} more)", companies.len() - args.show));
    }

    if telemetry::config::json_mode() {
        let result = DiscoverResult { total: companies.len(), companies };
        log.result(&result)?;
    }
    Ok(())
}
