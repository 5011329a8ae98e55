//! Selector fallback chains for the Lever posting page, one ordered list per
//! logical field. Evaluated left-to-right; the first candidate with non-empty
//! trimmed text wins. Kept as data so each chain is testable in isolation and
//! markup drift means editing a list, not a conditional.

pub const TITLE: &[&str] = &["h2.posting-headline", "h1.posting-headline", "h1", "h2"];

pub const COMPANY: &[&str] = &["a.company-link", "div.company-name"];

pub const LOCATION: &[&str] = &[
    "div.posting-categories .location",
    "div.location",
    "span.location",
];

pub const DEPARTMENT: &[&str] = &["div.department", "span.department"];

pub const TEAM: &[&str] = &["div.team", "span.team"];

pub const REQUIREMENTS: &[&str] = &["div.requirements"];

pub const BENEFITS: &[&str] = &["div.benefits"];

/// Content blocks making up the description; all matches are concatenated
/// with a newline separator.
pub const DESCRIPTION_SECTIONS: &[&str] = &["div.section.page-centered"];

/// Single-element fallbacks when no section blocks are present.
pub const DESCRIPTION_FALLBACK: &[&str] = &["div.description", "div.content", "div.job-description"];
