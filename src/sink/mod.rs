use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::scrape::types::JobRecord;

pub mod api;
pub mod file;

/// File-sink artifact and the interchange shape accepted by `classify` and
/// `report`. The raw snapshot carries run metadata alongside the records; the
/// in-scope snapshot omits the per-run fields it has no use for.
#[derive(Debug, Serialize, Deserialize)]
pub struct Snapshot {
    pub scraped_at: DateTime<Utc>,
    pub total_jobs: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_scope_jobs: Option<usize>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub companies_processed: Vec<String>,
    pub jobs: Vec<JobRecord>,
}

/// Load records from an interchange file: either a bare JSON array of records
/// or a full Snapshot object.
pub fn load_records(raw: &str) -> anyhow::Result<Vec<JobRecord>> {
    if let Ok(jobs) = serde_json::from_str::<Vec<JobRecord>>(raw) {
        return Ok(jobs);
    }
    let snap: Snapshot = serde_json::from_str(raw)?;
    Ok(snap.jobs)
}
