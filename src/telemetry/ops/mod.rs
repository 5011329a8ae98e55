pub mod classify;
pub mod discover;
pub mod report;
pub mod scrape;
