use std::collections::HashSet;
use std::time::Duration;

use reqwest::Client;
use scraper::{Html, Selector};
use tokio::time::sleep;
use url::Url;

use crate::config::Settings;
use crate::telemetry;
use crate::telemetry::ops::scrape::Phase as ScrapePhase;

use super::extract;
use super::fetch;
use super::types::CompanyScrape;

/// Scrape one company board: fetch the board page, walk its job links,
/// extract a record per detail page with a politeness delay between fetches.
///
/// A board fetch failure logs and returns an empty outcome; a single job
/// failure logs, counts as an error and is skipped. Nothing propagates past
/// this boundary.
pub async fn scrape_company(client: &Client, settings: &Settings, company: &str) -> CompanyScrape {
    let log = telemetry::scrape();
    let board_url = format!("{}/{}", settings.base_url, company);

    let html = {
        let _s = log.span_kv(&ScrapePhase::FetchBoard, [("url", board_url.clone())]).entered();
        match fetch::fetch_html(client, &board_url).await {
            Ok(html) => html,
            Err(e) => {
                log.warn_kv("⚠️ board fetch failed", [("company", company.to_string()), ("error", e.to_string())]);
                return CompanyScrape::default();
            }
        }
    };

    let job_urls = list_job_urls(&html, &settings.base_url);
    let mut out = CompanyScrape::default();

    for (i, job_url) in job_urls.iter().enumerate() {
        if i > 0 {
            sleep(Duration::from_millis(settings.job_delay_ms)).await;
        }
        let _s = log.span_kv(&ScrapePhase::FetchJob, [("url", job_url.clone())]).entered();
        match extract::fetch_job(client, job_url, company).await {
            Ok(Some(rec)) => {
                log.info_kv("➕ job", [("title", rec.title.clone()), ("url", job_url.clone())]);
                out.jobs.push(rec);
            }
            Ok(None) => {
                log.info_kv("↩️ skip", [("reason", "no-title-or-company".to_string()), ("url", job_url.clone())]);
            }
            Err(e) => {
                out.errors += 1;
                log.warn_kv("⚠️ job fetch failed", [("url", job_url.clone()), ("error", e.to_string())]);
            }
        }
    }

    out
}

/// Collect anchors pointing at job detail pages ("/job/" path segment),
/// resolved to absolute URLs and de-duplicated in document order.
pub fn list_job_urls(html: &str, base_url: &str) -> Vec<String> {
    let Ok(anchor) = Selector::parse("a[href]") else { return Vec::new() };
    let Ok(origin) = Url::parse(base_url) else { return Vec::new() };
    let doc = Html::parse_document(html);

    let mut seen = HashSet::new();
    let mut urls = Vec::new();
    for node in doc.select(&anchor) {
        let Some(href) = node.value().attr("href") else { continue };
        if !href.contains("/job/") {
            continue;
        }
        let url = if href.starts_with('/') {
            match origin.join(href) {
                Ok(resolved) => resolved.to_string(),
                Err(_) => continue,
            }
        } else {
            href.to_string()
        };
        if seen.insert(url.clone()) {
            urls.push(url);
        }
    }
    urls
}
