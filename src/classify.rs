use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use crate::scrape::classify::ClassifierConfig;
use crate::sink;
use crate::telemetry;
use crate::telemetry::ops::classify::Phase as ClassifyPhase;

/// scout classify — re-run the relevance filter over a JSON artifact.
#[derive(Args)]
pub struct ClassifyCmd {
    /// Input file: bare JSON array of records or a snapshot object
    #[arg(long)]
    pub input: PathBuf,
    /// Write the in-scope subset here (bare JSON array); omit to only report counts
    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[derive(Serialize)]
struct ClassifyResult {
    total: usize,
    in_scope: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<String>,
}

pub fn run(args: ClassifyCmd) -> Result<()> {
    let log = telemetry::classify();
    let _g = log
        .root_span_kv([
            ("input", args.input.display().to_string()),
            ("output", format!("{:?}", args.output)),
        ])
        .entered();

    let jobs = {
        let _s = log.span(&ClassifyPhase::Load).entered();
        let raw = fs::read_to_string(&args.input)
            .with_context(|| format!("reading {}", args.input.display()))?;
        sink::load_records(&raw)?
    };

    let classifier = ClassifierConfig::default();
    let in_scope: Vec<_> = {
        let _s = log.span(&ClassifyPhase::Filter).entered();
        jobs.iter().filter(|j| classifier.is_in_scope(j)).cloned().collect()
    };

    log.info(format!("🇦🇺 {} of {} records in scope", in_scope.len(), jobs.len()));

    let output = match &args.output {
        Some(path) => {
            let _s = log.span(&ClassifyPhase::Write).entered();
            let body = serde_json::to_vec_pretty(&in_scope)?;
            fs::write(path, body).with_context(|| format!("writing {}", path.display()))?;
            log.info(format!("💾 Wrote {}", path.display()));
            Some(path.display().to_string())
        }
        None => None,
    };

    if telemetry::config::json_mode() {
        let result = ClassifyResult { total: jobs.len(), in_scope: in_scope.len(), output };
        log.result(&result)?;
    }
    Ok(())
}
