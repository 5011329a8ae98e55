pub mod config;
pub mod ctx;
pub mod emit;
pub mod ops;

use ctx::LogCtx;

// Factory helpers, one per CLI op
pub fn scrape() -> LogCtx<ops::scrape::Scrape> { LogCtx { json: config::logs_are_json(), _marker: std::marker::PhantomData } }
pub fn discover() -> LogCtx<ops::discover::Discover> { LogCtx { json: config::logs_are_json(), _marker: std::marker::PhantomData } }
pub fn classify() -> LogCtx<ops::classify::Classify> { LogCtx { json: config::logs_are_json(), _marker: std::marker::PhantomData } }
pub fn report() -> LogCtx<ops::report::Report> { LogCtx { json: config::logs_are_json(), _marker: std::marker::PhantomData } }
