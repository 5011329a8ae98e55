use std::time::Duration;

use anyhow::Result;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CONNECTION, USER_AGENT};
use reqwest::Client;

/// Build the shared HTTP client: browser-like headers, per-request timeout,
/// no retries. A failed fetch is terminal for that one request.
pub fn build_client(timeout_secs: u64) -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(
        USER_AGENT,
        HeaderValue::from_static(
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36",
        ),
    );
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8"),
    );
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.5"));
    headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
    headers.insert(
        HeaderName::from_static("upgrade-insecure-requests"),
        HeaderValue::from_static("1"),
    );

    let client = Client::builder()
        .default_headers(headers)
        .timeout(Duration::from_secs(timeout_secs))
        .build()?;
    Ok(client)
}

/// GET a page as text. Non-2xx statuses map to errors.
pub async fn fetch_html(client: &Client, url: &str) -> Result<String> {
    let text = client.get(url).send().await?.error_for_status()?.text().await?;
    Ok(text)
}

/// GET a JSON body, decoded into T. Non-2xx statuses and decode failures map
/// to errors for the caller to absorb.
pub async fn fetch_json<T: serde::de::DeserializeOwned>(client: &Client, url: &str) -> Result<T> {
    let body = client.get(url).send().await?.error_for_status()?.json::<T>().await?;
    Ok(body)
}
