use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use crate::scrape::types::JobRecord;
use crate::sink;
use crate::telemetry;
use crate::telemetry::ops::report::Phase as ReportPhase;

/// scout report — summarize a scraped JSON artifact: postings per company and
/// location, plus the most common title words.
#[derive(Args)]
pub struct ReportCmd {
    /// Input file: bare JSON array of records or a snapshot object
    #[arg(long)]
    pub input: PathBuf,
    /// Rows per table
    #[arg(long, default_value_t = 10)]
    pub top: usize,
}

#[derive(Serialize, Debug, PartialEq)]
pub struct CountRow {
    pub name: String,
    pub count: usize,
}

#[derive(Serialize)]
pub struct ReportSummary {
    pub total: usize,
    pub companies: Vec<CountRow>,
    pub locations: Vec<CountRow>,
    pub title_keywords: Vec<CountRow>,
}

pub fn run(args: ReportCmd) -> Result<()> {
    let log = telemetry::report();
    let _g = log
        .root_span_kv([
            ("input", args.input.display().to_string()),
            ("top", args.top.to_string()),
        ])
        .entered();

    let jobs = {
        let _s = log.span(&ReportPhase::Load).entered();
        let raw = fs::read_to_string(&args.input)
            .with_context(|| format!("reading {}", args.input.display()))?;
        sink::load_records(&raw)?
    };

    let _s = log.span(&ReportPhase::Summarize).entered();
    let summary = summarize(&jobs, args.top);

    log.info(format!("📄 {} records", summary.total));
    log.info("🏢 Top companies:");
    for row in &summary.companies { log.info(format!("  {:4}  {}", row.count, row.name)); }
    log.info("📍 Top locations:");
    for row in &summary.locations { log.info(format!("  {:4}  {}", row.count, row.name)); }
    log.info("🔤 Top title keywords:");
    for row in &summary.title_keywords { log.info(format!("  {:4}  {}", row.count, row.name)); }

    if telemetry::config::json_mode() {
        log.result(&summary)?;
    }
    Ok(())
}

pub fn summarize(jobs: &[JobRecord], top: usize) -> ReportSummary {
    ReportSummary {
        total: jobs.len(),
        companies: top_counts(jobs.iter().map(|j| j.company_name.clone()), top),
        locations: top_counts(
            jobs.iter().map(|j| j.location.clone()).filter(|l| !l.is_empty()),
            top,
        ),
        title_keywords: top_counts(
            jobs.iter().flat_map(|j| {
                j.title
                    .to_lowercase()
                    .split_whitespace()
                    .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()).to_string())
                    .filter(|w| w.len() > 2)
                    .collect::<Vec<_>>()
            }),
            top,
        ),
    }
}

/// Count occurrences and keep the `top` most frequent, ties broken by name
/// for stable output.
fn top_counts(items: impl Iterator<Item = String>, top: usize) -> Vec<CountRow> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for item in items {
        *counts.entry(item).or_default() += 1;
    }
    let mut rows: Vec<CountRow> = counts.into_iter().map(|(name, count)| CountRow { name, count }).collect();
    rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    rows.truncate(top);
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scrape::types::SOURCE_TAG;
    use chrono::Utc;

    fn record(title: &str, company: &str, location: &str) -> JobRecord {
        JobRecord {
            title: title.into(),
            company_name: company.into(),
            company_path: String::new(),
            location: location.into(),
            department: String::new(),
            team: String::new(),
            description: String::new(),
            requirements: String::new(),
            benefits: String::new(),
            url: "u".into(),
            source: SOURCE_TAG.into(),
            scraped_at: Utc::now(),
        }
    }

    #[test]
    fn counts_companies_and_locations() {
        let jobs = vec![
            record("Engineer", "Acme", "Sydney"),
            record("Designer", "Acme", "Sydney"),
            record("Engineer", "Globex", "Melbourne"),
        ];
        let s = summarize(&jobs, 10);
        assert_eq!(s.total, 3);
        assert_eq!(s.companies[0], CountRow { name: "Acme".into(), count: 2 });
        assert_eq!(s.locations[0], CountRow { name: "Sydney".into(), count: 2 });
    }

    #[test]
    fn empty_locations_are_not_counted() {
        let jobs = vec![record("Engineer", "Acme", "")];
        let s = summarize(&jobs, 10);
        assert!(s.locations.is_empty());
    }

    #[test]
    fn title_keywords_are_lowercased_and_short_words_dropped() {
        let jobs = vec![
            record("Senior Software Engineer", "A", ""),
            record("Software Engineer, QA", "B", ""),
        ];
        let s = summarize(&jobs, 10);
        let names: Vec<&str> = s.title_keywords.iter().map(|r| r.name.as_str()).collect();
        assert!(names.contains(&"software"));
        assert!(names.contains(&"engineer"));
        assert!(!names.contains(&"qa")); // len <= 2
    }

    #[test]
    fn top_is_honored_with_stable_ties() {
        let jobs = vec![
            record("x", "B", ""),
            record("x", "A", ""),
            record("x", "C", ""),
        ];
        let s = summarize(&jobs, 2);
        assert_eq!(s.companies.len(), 2);
        // equal counts: alphabetical
        assert_eq!(s.companies[0].name, "A");
        assert_eq!(s.companies[1].name, "B");
    }
}
