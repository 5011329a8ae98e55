use std::env;
use std::path::PathBuf;

/// Companies known to hire in Australia, used both to seed discovery and as
/// the classifier allow-list. Slugs as they appear on jobs.lever.co.
pub const KNOWN_AUSTRALIAN_COMPANIES: &[&str] = &[
    "atlassian", "canva", "afterpay", "xero", "wisetech",
    "seek", "carsales", "realestate", "domain", "rea-group",
    "commonwealth-bank", "anz", "westpac", "nab", "macquarie",
    "telstra", "optus", "tpg", "woolworths", "coles",
    "bhp", "rio-tinto", "fortescue", "woodside", "origin",
    "qantas", "virgin-australia", "jetstar", "flight-centre",
    "medibank", "bupa", "nib", "ahm", "hcf",
    "australian-super", "rest", "hostplus", "united-super",
    "airtasker", "hipages", "service-seeking", "oneflare",
    "prospa", "societyone", "ratesetter", "money-me",
    "zip", "humm", "laybuy", "klarna", "affirm",
    "culture-amp", "safetyculture", "enboard", "deputy",
    "myob", "reckon", "sage", "intuit", "wave",
    "square", "stripe", "paypal", "adyen", "braintree",
];

/// Geographic keywords marking a posting as Australian: cities, state and
/// territory abbreviations, country name and adjective.
pub const AUSTRALIAN_KEYWORDS: &[&str] = &[
    "australia", "australian", "sydney", "melbourne", "brisbane",
    "perth", "adelaide", "canberra", "darwin", "hobart",
    "nsw", "vic", "qld", "wa", "sa", "tas", "nt", "act",
];

/// Runtime configuration, resolved once at startup from the environment
/// (`.env` supported via dotenvy). Every field has a working default so a
/// bare `scout scrape` is runnable.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Platform origin, e.g. https://jobs.lever.co
    pub base_url: String,
    /// Company listing API endpoint; defaults to {base_url}/api/companies
    pub listing_api_url: String,
    /// Backend upsert endpoint for in-scope batches; sink skipped when unset
    pub sink_endpoint: Option<String>,
    pub api_token: String,
    /// Table/collection name tagged onto each sink batch
    pub sink_table: String,
    /// Directory for JSON snapshot artifacts
    pub output_dir: PathBuf,
    /// Cap on companies scanned per run (bounds total run time)
    pub company_limit: usize,
    /// Politeness delay between job detail fetches, milliseconds
    pub job_delay_ms: u64,
    /// Politeness delay between companies, milliseconds (larger than per-job)
    pub company_delay_ms: u64,
    pub http_timeout_secs: u64,
}

impl Settings {
    pub fn from_env() -> Self {
        let base_url =
            env::var("LEVER_BASE_URL").unwrap_or_else(|_| "https://jobs.lever.co".to_string());
        let listing_api_url = env::var("LEVER_LISTING_API")
            .unwrap_or_else(|_| format!("{}/api/companies", base_url));
        Settings {
            listing_api_url,
            base_url,
            sink_endpoint: env::var("BACKEND_API_ENDPOINT").ok().filter(|s| !s.is_empty()),
            api_token: env::var("API_TOKEN").unwrap_or_default(),
            sink_table: env::var("SINK_TABLE").unwrap_or_else(|_| "jobsprofiles".to_string()),
            output_dir: env::var("OUTPUT_DIR").map(PathBuf::from).unwrap_or_else(|_| PathBuf::from("data")),
            company_limit: parse_env("COMPANY_LIMIT", 15),
            job_delay_ms: parse_env("JOB_DELAY_MS", 1000),
            company_delay_ms: parse_env("COMPANY_DELAY_MS", 2000),
            http_timeout_secs: parse_env("HTTP_TIMEOUT_SECS", 10),
        }
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key).ok().and_then(|v| v.parse().ok()).unwrap_or(default)
}
