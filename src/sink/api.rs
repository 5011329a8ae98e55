use anyhow::{bail, Result};
use reqwest::Client;
use serde_json::json;

use crate::scrape::types::JobRecord;

/// POST one batch of records to the backend upsert endpoint, tagged with the
/// target table/collection name. Success or failure is per batch; the caller
/// decides what a failure means for the run.
pub async fn post_batch(
    client: &Client,
    endpoint: &str,
    token: &str,
    table: &str,
    jobs: &[JobRecord],
) -> Result<()> {
    let payload = json!({ "table": table, "data": jobs });
    let resp = client
        .post(endpoint)
        .bearer_auth(token)
        .json(&payload)
        .send()
        .await?;

    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        bail!("sink API returned {}: {}", status, body);
    }
    Ok(())
}
