use tracing::info_span;
use tracing::Span;

use crate::telemetry::ctx::{OpMarker, PhaseSpan};

#[derive(Copy, Clone, Debug)]
pub struct Classify;

#[derive(Copy, Clone, Debug)]
pub enum Phase { Load, Filter, Write }

impl PhaseSpan for Phase {
    fn name(&self) -> &'static str { match self {
        Phase::Load => "load",
        Phase::Filter => "filter",
        Phase::Write => "write",
    }}
    fn span(&self) -> Span { match self {
        Phase::Load => info_span!("load"),
        Phase::Filter => info_span!("filter"),
        Phase::Write => info_span!("write"),
    }}
}

impl OpMarker for Classify {
    const NAME: &'static str = "classify";
    type Phase = Phase;
    fn root_span() -> Span { info_span!("classify") }
}
