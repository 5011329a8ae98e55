use tracing::info_span;
use tracing::Span;

use crate::telemetry::ctx::{OpMarker, PhaseSpan};

#[derive(Copy, Clone, Debug)]
pub struct Discover;

#[derive(Copy, Clone, Debug)]
pub enum Phase { Api, Homepage, Merge }

impl PhaseSpan for Phase {
    fn name(&self) -> &'static str { match self {
        Phase::Api => "api",
        Phase::Homepage => "homepage",
        Phase::Merge => "merge",
    }}
    fn span(&self) -> Span { match self {
        Phase::Api => info_span!("api"),
        Phase::Homepage => info_span!("homepage"),
        Phase::Merge => info_span!("merge"),
    }}
}

impl OpMarker for Discover {
    const NAME: &'static str = "discover";
    type Phase = Phase;
    fn root_span() -> Span { info_span!("discover") }
}
