use std::collections::HashSet;

use regex::Regex;
use reqwest::Client;
use scraper::{Html, Selector};
use serde::Deserialize;

use crate::config::{self, Settings};
use crate::telemetry;
use crate::telemetry::ops::discover::Phase as DiscoverPhase;

use super::fetch;

/// Entry shape of the company listing API: a JSON array of objects carrying a
/// slug-like field. Anything without a slug is dropped.
#[derive(Deserialize)]
pub struct CompanyEntry {
    #[serde(default)]
    pub slug: String,
}

/// Produce the de-duplicated company set to scan: the static known list
/// first, then the listing API, falling back to homepage link parsing when
/// the API is unavailable. Network failures contribute nothing and never
/// propagate.
pub async fn discover(client: &Client, settings: &Settings) -> Vec<String> {
    let log = telemetry::discover();

    let mut companies: Vec<String> =
        config::KNOWN_AUSTRALIAN_COMPANIES.iter().map(|s| s.to_string()).collect();

    let from_api = {
        let _s = log.span_kv(&DiscoverPhase::Api, [("url", settings.listing_api_url.clone())]).entered();
        match fetch::fetch_json::<Vec<CompanyEntry>>(client, &settings.listing_api_url).await {
            Ok(entries) => Some(
                entries
                    .into_iter()
                    .map(|e| e.slug)
                    .filter(|s| !s.is_empty())
                    .collect::<Vec<_>>(),
            ),
            Err(e) => {
                log.warn_kv("⚠️ listing API unavailable, falling back to homepage", [("error", e.to_string())]);
                None
            }
        }
    };

    let scraped = match from_api {
        Some(slugs) => slugs,
        None => {
            let _s = log.span_kv(&DiscoverPhase::Homepage, [("url", settings.base_url.clone())]).entered();
            match fetch::fetch_html(client, &settings.base_url).await {
                Ok(html) => parse_homepage_slugs(&html),
                Err(e) => {
                    log.warn_kv("⚠️ homepage fetch failed", [("error", e.to_string())]);
                    Vec::new()
                }
            }
        }
    };

    let _s = log.span(&DiscoverPhase::Merge).entered();
    companies.extend(scraped);
    dedup_preserving_order(companies)
}

/// Company links on the platform homepage are single-path-segment hrefs.
/// One-character slugs are noise and skipped.
pub fn parse_homepage_slugs(html: &str) -> Vec<String> {
    let Ok(anchor) = Selector::parse("a[href]") else { return Vec::new() };
    let Ok(pattern) = Regex::new(r"^/[^/]+$") else { return Vec::new() };

    let doc = Html::parse_document(html);
    let mut slugs = Vec::new();
    for node in doc.select(&anchor) {
        let Some(href) = node.value().attr("href") else { continue };
        if !pattern.is_match(href) {
            continue;
        }
        let slug = href.trim_matches('/');
        if slug.len() > 1 {
            slugs.push(slug.to_string());
        }
    }
    dedup_preserving_order(slugs)
}

/// First occurrence wins, so the static known list stays at the front of the
/// final sequence. Stable for testing; consumers treat it as a set.
pub fn dedup_preserving_order(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items.into_iter().filter(|item| seen.insert(item.clone())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn homepage_slugs_match_single_segment_links_only() {
        let html = r#"
            <a href="/acme">Acme</a>
            <a href="/globex">Globex</a>
            <a href="/acme/job/123">posting</a>
            <a href="/about/team">about</a>
            <a href="https://elsewhere.example/foo">offsite</a>
            <a href="/">home</a>
        "#;
        assert_eq!(parse_homepage_slugs(html), vec!["acme", "globex"]);
    }

    #[test]
    fn homepage_slugs_are_deduplicated() {
        let html = r#"<a href="/acme">one</a><a href="/acme">two</a>"#;
        assert_eq!(parse_homepage_slugs(html), vec!["acme"]);
    }

    #[test]
    fn single_character_slugs_are_skipped() {
        let html = r#"<a href="/x">x</a><a href="/ok">ok</a>"#;
        assert_eq!(parse_homepage_slugs(html), vec!["ok"]);
    }

    #[test]
    fn dedup_keeps_first_occurrence_order() {
        let items = vec!["b".to_string(), "a".to_string(), "b".to_string(), "c".to_string()];
        assert_eq!(dedup_preserving_order(items), vec!["b", "a", "c"]);
    }

    #[test]
    fn dedup_output_has_no_repeats() {
        let items: Vec<String> = ["a", "b", "a", "c", "b", "a"].iter().map(|s| s.to_string()).collect();
        let out = dedup_preserving_order(items);
        let unique: std::collections::HashSet<_> = out.iter().collect();
        assert_eq!(unique.len(), out.len());
    }

    fn unroutable_settings() -> Settings {
        // connection refused immediately for both the listing API and homepage
        Settings {
            base_url: "http://127.0.0.1:9".to_string(),
            listing_api_url: "http://127.0.0.1:9/api/companies".to_string(),
            sink_endpoint: None,
            api_token: String::new(),
            sink_table: "jobsprofiles".to_string(),
            output_dir: std::env::temp_dir(),
            company_limit: 1,
            job_delay_ms: 0,
            company_delay_ms: 0,
            http_timeout_secs: 1,
        }
    }

    #[tokio::test]
    async fn listing_api_failure_falls_back_to_static_list() {
        let settings = unroutable_settings();
        let client = fetch::build_client(settings.http_timeout_secs).unwrap();
        let out = discover(&client, &settings).await;
        // both network sources contribute nothing; the static list survives, in order
        let expected: Vec<String> =
            config::KNOWN_AUSTRALIAN_COMPANIES.iter().map(|s| s.to_string()).collect();
        assert_eq!(out, expected);
        assert!(!out.is_empty());
    }
}
