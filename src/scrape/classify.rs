use crate::config;

use super::types::JobRecord;

/// Immutable keyword configuration for the relevance check. Built once at
/// startup; the lists never change at runtime.
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    known_companies: Vec<String>,
    geo_keywords: Vec<String>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self::new(
            config::KNOWN_AUSTRALIAN_COMPANIES.iter().map(|s| s.to_string()),
            config::AUSTRALIAN_KEYWORDS.iter().map(|s| s.to_string()),
        )
    }
}

impl ClassifierConfig {
    pub fn new(
        known_companies: impl IntoIterator<Item = String>,
        geo_keywords: impl IntoIterator<Item = String>,
    ) -> Self {
        ClassifierConfig {
            known_companies: known_companies.into_iter().map(|k| k.to_lowercase()).collect(),
            geo_keywords: geo_keywords.into_iter().map(|k| k.to_lowercase()).collect(),
        }
    }

    /// Substring match over company name, company path, location and
    /// description, lowercased. Any hit from either keyword list puts the
    /// posting in scope. Pure and deterministic.
    pub fn is_in_scope(&self, job: &JobRecord) -> bool {
        let haystack = format!(
            "{} {} {} {}",
            job.company_name, job.company_path, job.location, job.description
        )
        .to_lowercase();

        self.known_companies
            .iter()
            .chain(self.geo_keywords.iter())
            .any(|kw| !kw.is_empty() && haystack.contains(kw.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scrape::types::SOURCE_TAG;
    use chrono::Utc;

    fn record(company: &str, path: &str, location: &str, description: &str) -> JobRecord {
        JobRecord {
            title: "Engineer".into(),
            company_name: company.into(),
            company_path: path.into(),
            location: location.into(),
            department: String::new(),
            team: String::new(),
            description: description.into(),
            requirements: String::new(),
            benefits: String::new(),
            url: "https://jobs.lever.co/x/job/1".into(),
            source: SOURCE_TAG.into(),
            scraped_at: Utc::now(),
        }
    }

    #[test]
    fn sydney_nsw_location_is_in_scope() {
        let cfg = ClassifierConfig::default();
        let rec = record("Acme Pty Ltd", "acme", "Sydney, NSW", "");
        assert!(cfg.is_in_scope(&rec));
    }

    #[test]
    fn known_company_slug_is_in_scope_without_geo_hint() {
        let cfg = ClassifierConfig::default();
        let rec = record("Canva", "canva", "", "");
        assert!(cfg.is_in_scope(&rec));
    }

    #[test]
    fn geo_keyword_in_description_is_in_scope() {
        let cfg = ClassifierConfig::default();
        let rec = record("Widgets Inc", "widgets", "Remote", "Our Melbourne office is hiring");
        assert!(cfg.is_in_scope(&rec));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let cfg = ClassifierConfig::new(Vec::<String>::new(), vec!["sydney".to_string()]);
        let rec = record("X", "x", "SYDNEY", "");
        assert!(cfg.is_in_scope(&rec));
    }

    #[test]
    fn unrelated_record_is_out_of_scope() {
        let cfg = ClassifierConfig::new(
            vec!["atlassian".to_string()],
            vec!["sydney".to_string(), "melbourne".to_string()],
        );
        let rec = record("Globex", "globex", "Berlin, Germany", "Kreuzberg office");
        assert!(!cfg.is_in_scope(&rec));
    }

    #[test]
    fn all_empty_fields_never_match() {
        let cfg = ClassifierConfig::default();
        let rec = record("", "", "", "");
        assert!(!cfg.is_in_scope(&rec));
    }

    #[test]
    fn duplicate_keywords_do_not_change_the_result() {
        let once = ClassifierConfig::new(Vec::<String>::new(), vec!["sydney".to_string()]);
        let twice = ClassifierConfig::new(
            Vec::<String>::new(),
            vec!["sydney".to_string(), "sydney".to_string()],
        );
        let hit = record("X", "x", "Sydney", "");
        let miss = record("X", "x", "Oslo", "");
        assert_eq!(once.is_in_scope(&hit), twice.is_in_scope(&hit));
        assert_eq!(once.is_in_scope(&miss), twice.is_in_scope(&miss));
    }

    #[test]
    fn classifier_is_deterministic() {
        let cfg = ClassifierConfig::default();
        let rec = record("Acme", "acme", "Sydney, NSW", "");
        assert_eq!(cfg.is_in_scope(&rec), cfg.is_in_scope(&rec));
    }

    #[test]
    fn empty_keyword_entries_are_ignored() {
        let cfg = ClassifierConfig::new(vec![String::new()], vec![String::new()]);
        let rec = record("Globex", "globex", "Berlin", "");
        assert!(!cfg.is_in_scope(&rec));
    }
}
