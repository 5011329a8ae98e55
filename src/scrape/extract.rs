use anyhow::Result;
use chrono::Utc;
use reqwest::Client;
use scraper::{Html, Selector};

use super::fetch;
use super::rules;
use super::types::{JobRecord, SOURCE_TAG};

/// Fetch a job detail page and extract a record from it. `Ok(None)` means the
/// page was fetched but had no usable title or company name, which is a
/// normal outcome, not a failure.
pub async fn fetch_job(client: &Client, job_url: &str, company_path: &str) -> Result<Option<JobRecord>> {
    let html = fetch::fetch_html(client, job_url).await?;
    Ok(parse_job_page(&html, job_url, company_path))
}

/// Pure HTML -> record step, separated from the fetch so selector behavior is
/// testable without I/O.
pub fn parse_job_page(html: &str, job_url: &str, company_path: &str) -> Option<JobRecord> {
    let doc = Html::parse_document(html);

    let title = first_text(&doc, rules::TITLE);
    let company_name = first_text(&doc, rules::COMPANY);

    // rejection rule: both identity fields must resolve
    if title.is_empty() || company_name.is_empty() {
        return None;
    }

    Some(JobRecord {
        title,
        company_name,
        company_path: company_path.to_string(),
        location: first_text(&doc, rules::LOCATION),
        department: first_text(&doc, rules::DEPARTMENT),
        team: first_text(&doc, rules::TEAM),
        description: description_text(&doc),
        requirements: first_text(&doc, rules::REQUIREMENTS),
        benefits: first_text(&doc, rules::BENEFITS),
        url: job_url.to_string(),
        source: SOURCE_TAG.to_string(),
        scraped_at: Utc::now(),
    })
}

/// Walk a selector chain left-to-right and return the first non-empty trimmed
/// text, or the empty string when nothing matches.
fn first_text(doc: &Html, selectors: &[&str]) -> String {
    for sel in selectors {
        let Ok(parsed) = Selector::parse(sel) else { continue };
        if let Some(node) = doc.select(&parsed).next() {
            let text = collapse_text(node.text());
            if !text.is_empty() {
                return text;
            }
        }
    }
    String::new()
}

/// Description: concatenate every named section block joined by newlines;
/// fall back to a single-container chain when the page has no sections.
fn description_text(doc: &Html) -> String {
    for sel in rules::DESCRIPTION_SECTIONS {
        let Ok(parsed) = Selector::parse(sel) else { continue };
        let parts: Vec<String> = doc
            .select(&parsed)
            .map(|node| collapse_text(node.text()))
            .filter(|t| !t.is_empty())
            .collect();
        if !parts.is_empty() {
            return parts.join("\n");
        }
    }
    first_text(doc, rules::DESCRIPTION_FALLBACK)
}

/// Join text nodes, collapsing internal runs of whitespace and trimming the
/// ends. Absent or blank elements come out as "".
fn collapse_text<'a>(parts: impl Iterator<Item = &'a str>) -> String {
    let joined: String = parts.collect::<Vec<_>>().join(" ");
    joined.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACME_PAGE: &str = r#"
        <html><body>
          <h1>Software Engineer</h1>
          <a class="company-link" href="/acme">Acme Pty Ltd</a>
          <div class="location">Sydney, NSW</div>
          <div class="department">Engineering</div>
          <div class="section page-centered">Build the platform.</div>
          <div class="section page-centered">Ship it to customers.</div>
        </body></html>
    "#;

    #[test]
    fn extracts_fields_from_detail_page() {
        let rec = parse_job_page(ACME_PAGE, "https://jobs.lever.co/acme/job/1", "acme").unwrap();
        assert_eq!(rec.title, "Software Engineer");
        assert_eq!(rec.company_name, "Acme Pty Ltd");
        assert_eq!(rec.location, "Sydney, NSW");
        assert_eq!(rec.department, "Engineering");
        assert_eq!(rec.description, "Build the platform.\nShip it to customers.");
        assert_eq!(rec.company_path, "acme");
        assert_eq!(rec.url, "https://jobs.lever.co/acme/job/1");
        assert_eq!(rec.source, "lever");
    }

    #[test]
    fn page_missing_title_and_company_yields_no_record() {
        let html = r#"<html><body><div class="location">Sydney</div></body></html>"#;
        assert!(parse_job_page(html, "https://jobs.lever.co/x/job/1", "x").is_none());
    }

    #[test]
    fn page_missing_only_company_yields_no_record() {
        let html = "<html><body><h1>Engineer</h1></body></html>";
        assert!(parse_job_page(html, "u", "x").is_none());
    }

    #[test]
    fn whitespace_only_title_counts_as_missing() {
        let html = r#"<h1>   </h1><div class="company-name">Acme</div>"#;
        assert!(parse_job_page(html, "u", "x").is_none());
    }

    #[test]
    fn posting_headline_beats_bare_heading() {
        let html = r#"
            <h2 class="posting-headline">Senior Engineer</h2>
            <h1>Careers at Acme</h1>
            <div class="company-name">Acme</div>
        "#;
        let rec = parse_job_page(html, "u", "acme").unwrap();
        assert_eq!(rec.title, "Senior Engineer");
    }

    #[test]
    fn description_falls_back_to_single_container() {
        let html = r#"
            <h1>Engineer</h1>
            <div class="company-name">Acme</div>
            <div class="job-description">Do the work.</div>
        "#;
        let rec = parse_job_page(html, "u", "acme").unwrap();
        assert_eq!(rec.description, "Do the work.");
    }

    #[test]
    fn absent_optional_fields_are_empty_strings() {
        let html = r#"<h1>Engineer</h1><div class="company-name">Acme</div>"#;
        let rec = parse_job_page(html, "u", "acme").unwrap();
        assert_eq!(rec.location, "");
        assert_eq!(rec.team, "");
        assert_eq!(rec.requirements, "");
        assert_eq!(rec.benefits, "");
        assert_eq!(rec.description, "");
    }

    #[test]
    fn nested_markup_text_is_collapsed() {
        let html = r#"
            <h1>Software <b>Engineer</b></h1>
            <div class="company-name">
                Acme
                Pty Ltd
            </div>
        "#;
        let rec = parse_job_page(html, "u", "acme").unwrap();
        assert_eq!(rec.title, "Software Engineer");
        assert_eq!(rec.company_name, "Acme Pty Ltd");
    }
}
