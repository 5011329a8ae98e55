use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Origin platform tag stamped onto every record.
pub const SOURCE_TAG: &str = "lever";

/// One scraped posting. Field names follow the interchange JSON used by the
/// downstream sink and analysis tooling.
///
/// A record is only ever built with non-empty `title` and `company_name`;
/// pages missing either are rejected by the extractor before construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    #[serde(rename = "job_title")]
    pub title: String,
    pub company_name: String,
    #[serde(default)]
    pub company_path: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub team: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requirements: String,
    #[serde(default)]
    pub benefits: String,
    #[serde(rename = "job_url")]
    pub url: String,
    #[serde(default = "default_source")]
    pub source: String,
    pub scraped_at: DateTime<Utc>,
}

fn default_source() -> String {
    SOURCE_TAG.to_string()
}

/// Everything one company's enumeration produced: the records plus the count
/// of detail URLs that failed to fetch or parse.
#[derive(Debug, Default)]
pub struct CompanyScrape {
    pub jobs: Vec<JobRecord>,
    pub errors: usize,
}

// Plan envelope types
#[derive(Serialize)]
pub struct ScrapePlan {
    pub known_companies: usize,
    pub limit: usize,
    pub job_delay_ms: u64,
    pub company_delay_ms: u64,
    pub sample_companies: Vec<String>,
}

// Apply/result envelope types
#[derive(Serialize)]
pub struct CompanySummary { pub company: String, pub jobs: usize, pub in_scope: usize, pub errors: usize }

#[derive(Serialize)]
pub struct ScrapeTotals { pub companies: usize, pub jobs: usize, pub in_scope: usize, pub errors: usize }

#[derive(Serialize)]
pub struct ScrapeApply {
    pub totals: ScrapeTotals,
    pub per_company: Vec<CompanySummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_snapshot: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scoped_snapshot: Option<String>,
    /// Outcome of the backend API batch; None when no endpoint is configured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sink_ok: Option<bool>,
}
