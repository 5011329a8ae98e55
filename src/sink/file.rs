use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::util::time::timestamp_slug;

use super::Snapshot;

/// Write a snapshot as pretty-printed JSON under `dir`, named
/// `{prefix}_{YYYYMMDD_HHMMSS}.json`. Creates the directory if needed.
pub fn write_snapshot(dir: &Path, prefix: &str, snap: &Snapshot) -> Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("creating output dir {}", dir.display()))?;
    let path = dir.join(format!("{}_{}.json", prefix, timestamp_slug(snap.scraped_at)));
    let body = serde_json::to_vec_pretty(snap)?;
    fs::write(&path, body).with_context(|| format!("writing snapshot {}", path.display()))?;
    Ok(path)
}
