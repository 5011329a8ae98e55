use std::time::Duration;

use anyhow::Result;
use chrono::Utc;
use clap::Args;
use tokio::time::sleep;

use crate::config::{self, Settings};
use crate::sink;
use crate::telemetry;
use crate::telemetry::ops::scrape::Phase as ScrapePhase;

pub mod classify;
pub mod discovery;
pub mod enumerate;
pub mod extract;
pub mod fetch;
pub mod rules;
pub mod types;

use classify::ClassifierConfig;
use types::{CompanyScrape, CompanySummary, JobRecord, ScrapeApply, ScrapePlan, ScrapeTotals};

#[derive(Args)]
pub struct ScrapeCmd {
    /// Cap on companies scanned this run (bounds total run time)
    #[arg(long)]
    pub limit: Option<usize>,
    /// Scrape a single company board instead of running discovery
    #[arg(long)]
    pub company: Option<String>,
    #[arg(long, default_value_t = false)]
    pub apply: bool,
    #[arg(long, default_value_t = 10)]
    pub plan_limit: usize,
}

pub async fn run(settings: &Settings, args: ScrapeCmd) -> Result<()> {
    let log = telemetry::scrape();
    let limit = args.limit.unwrap_or(settings.company_limit);
    let _g = log
        .root_span_kv([
            ("apply", args.apply.to_string()),
            ("limit", limit.to_string()),
            ("company", format!("{:?}", args.company)),
        ])
        .entered();

    if !args.apply {
        let sample: Vec<String> = match &args.company {
            Some(slug) => vec![slug.clone()],
            None => config::KNOWN_AUSTRALIAN_COMPANIES
                .iter()
                .take(args.plan_limit)
                .map(|s| s.to_string())
                .collect(),
        };
        if telemetry::config::json_mode() {
            let plan = ScrapePlan {
                known_companies: config::KNOWN_AUSTRALIAN_COMPANIES.len(),
                limit,
                job_delay_ms: settings.job_delay_ms,
                company_delay_ms: settings.company_delay_ms,
                sample_companies: sample,
            };
            log.plan(&plan)?;
        } else {
            log.info(format!(
                "📝 Scrape plan — known_companies={} limit={} job_delay_ms={} company_delay_ms={}",
                config::KNOWN_AUSTRALIAN_COMPANIES.len(),
                limit,
                settings.job_delay_ms,
                settings.company_delay_ms
            ));
            for slug in &sample { log.info(format!("  {}", slug)); }
            log.info("   Use --apply to execute.");
        }
        return Ok(());
    }

    let client = fetch::build_client(settings.http_timeout_secs)?;
    let classifier = ClassifierConfig::default();

    let companies: Vec<String> = match &args.company {
        Some(slug) => vec![slug.clone()],
        None => {
            let _s = log.span(&ScrapePhase::Discover).entered();
            let discovered = discovery::discover(&client, settings).await;
            log.info(format!("🔍 Discovered {} companies", discovered.len()));
            discovered.into_iter().take(limit).collect()
        }
    };

    let mut all_jobs: Vec<JobRecord> = Vec::new();
    let mut in_scope: Vec<JobRecord> = Vec::new();
    let mut total_errors = 0usize;
    let mut per_company: Vec<CompanySummary> = Vec::new();

    for (i, company) in companies.iter().enumerate() {
        if i > 0 {
            sleep(Duration::from_millis(settings.company_delay_ms)).await;
        }
        let _c = log.span_kv(&ScrapePhase::Company, [("company", company.clone())]).entered();
        log.info(format!("🏢 Company {}/{}: {}", i + 1, companies.len(), company));

        let CompanyScrape { jobs, errors } = enumerate::scrape_company(&client, settings, company).await;

        let scoped: Vec<JobRecord> = {
            let _s = log.span(&ScrapePhase::Classify).entered();
            jobs.iter().filter(|j| classifier.is_in_scope(j)).cloned().collect()
        };

        log.company_summary(company, jobs.len(), scoped.len(), errors);
        per_company.push(CompanySummary {
            company: company.clone(),
            jobs: jobs.len(),
            in_scope: scoped.len(),
            errors,
        });

        total_errors += errors;
        all_jobs.extend(jobs);
        in_scope.extend(scoped);
    }

    log.totals(companies.len(), all_jobs.len(), in_scope.len(), total_errors);

    // sink whatever was accumulated, even when some companies yielded nothing
    let _s = log.span(&ScrapePhase::Sink).entered();
    let now = Utc::now();

    let raw_snapshot = if all_jobs.is_empty() {
        None
    } else {
        let snap = sink::Snapshot {
            scraped_at: now,
            total_jobs: all_jobs.len(),
            in_scope_jobs: Some(in_scope.len()),
            companies_processed: companies.clone(),
            jobs: all_jobs.clone(),
        };
        match sink::file::write_snapshot(&settings.output_dir, "raw_jobs", &snap) {
            Ok(path) => {
                log.info(format!("💾 Raw snapshot: {}", path.display()));
                Some(path.display().to_string())
            }
            Err(e) => {
                log.error(format!("❌ raw snapshot write failed: {e:#}"));
                None
            }
        }
    };

    let scoped_snapshot = if in_scope.is_empty() {
        None
    } else {
        let snap = sink::Snapshot {
            scraped_at: now,
            total_jobs: in_scope.len(),
            in_scope_jobs: None,
            companies_processed: Vec::new(),
            jobs: in_scope.clone(),
        };
        match sink::file::write_snapshot(&settings.output_dir, "australian_jobs", &snap) {
            Ok(path) => {
                log.info(format!("💾 In-scope snapshot: {}", path.display()));
                Some(path.display().to_string())
            }
            Err(e) => {
                log.error(format!("❌ in-scope snapshot write failed: {e:#}"));
                None
            }
        }
    };

    let sink_ok = match (&settings.sink_endpoint, in_scope.is_empty()) {
        (Some(endpoint), false) => {
            match sink::api::post_batch(&client, endpoint, &settings.api_token, &settings.sink_table, &in_scope).await {
                Ok(()) => {
                    log.info(format!("📤 Sent {} records to backend API", in_scope.len()));
                    Some(true)
                }
                Err(e) => {
                    log.warn_kv("⚠️ backend API sink failed", [("error", format!("{e:#}"))]);
                    Some(false)
                }
            }
        }
        _ => None,
    };

    if telemetry::config::json_mode() {
        let result = ScrapeApply {
            totals: ScrapeTotals {
                companies: companies.len(),
                jobs: all_jobs.len(),
                in_scope: in_scope.len(),
                errors: total_errors,
            },
            per_company,
            raw_snapshot,
            scoped_snapshot,
            sink_ok,
        };
        log.result(&result)?;
    }
    Ok(())
}
