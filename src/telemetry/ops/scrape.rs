use tracing::info_span;
use tracing::Span;

use crate::telemetry::ctx::{OpMarker, PhaseSpan};

#[derive(Copy, Clone, Debug)]
pub struct Scrape;

#[derive(Copy, Clone, Debug)]
pub enum Phase { Discover, Company, FetchBoard, FetchJob, Classify, Sink }

impl PhaseSpan for Phase {
    fn name(&self) -> &'static str { match self {
        Phase::Discover => "discover",
        Phase::Company => "company",
        Phase::FetchBoard => "fetch_board",
        Phase::FetchJob => "fetch_job",
        Phase::Classify => "classify",
        Phase::Sink => "sink",
    }}
    fn span(&self) -> Span { match self {
        Phase::Discover => info_span!("discover"),
        Phase::Company => info_span!("company"),
        Phase::FetchBoard => info_span!("fetch_board"),
        Phase::FetchJob => info_span!("fetch_job"),
        Phase::Classify => info_span!("classify"),
        Phase::Sink => info_span!("sink"),
    }}
}

impl OpMarker for Scrape {
    const NAME: &'static str = "scrape";
    type Phase = Phase;
    fn root_span() -> Span { info_span!("scrape") }
}
