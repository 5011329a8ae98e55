use chrono::{DateTime, Utc};

// Filesystem-safe timestamp used in snapshot artifact names.
pub fn timestamp_slug(ts: DateTime<Utc>) -> String {
    ts.format("%Y%m%d_%H%M%S").to_string()
}
