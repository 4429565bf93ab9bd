//! Event types and sinks for observing generation runs.
//!
//! This module defines [`SurveyEvent`] and a few sinks to collect or forward events while
//! executing [`crate::survey::generator::SampleGenerator::generate_with_events`].
use crate::grid::{CellId, GridSpec};
use crate::placement::Post;
use crate::units::WorkingUnit;

/// Describes events emitted while generating posts.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub enum SurveyEvent {
    /// Emitted once the grid is laid out, before any cell is visited.
    RunStarted {
        /// The grid that will be enumerated.
        grid: GridSpec,
        /// Number of stand polygons.
        stands: usize,
        /// Unit of all coordinates and spacing in this run.
        working_unit: WorkingUnit,
    },

    /// Emitted for every post, in output order.
    PostPlaced { post: Post },

    /// Emitted for a cell that produced no post.
    CellSkipped { cell: CellId },

    /// Emitted after the last cell.
    RunFinished {
        posts: usize,
        cells_evaluated: usize,
        cells_empty: usize,
    },

    /// Non-fatal warning generated during a run.
    Warning {
        /// Context string (e.g. grid, cell).
        context: String,
        /// Human-readable message.
        message: String,
    },
}

/// Discriminant of [`SurveyEvent`], used for filtering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SurveyEventKind {
    RunStarted,
    PostPlaced,
    CellSkipped,
    RunFinished,
    Warning,
}

impl SurveyEvent {
    pub fn kind(&self) -> SurveyEventKind {
        match self {
            SurveyEvent::RunStarted { .. } => SurveyEventKind::RunStarted,
            SurveyEvent::PostPlaced { .. } => SurveyEventKind::PostPlaced,
            SurveyEvent::CellSkipped { .. } => SurveyEventKind::CellSkipped,
            SurveyEvent::RunFinished { .. } => SurveyEventKind::RunFinished,
            SurveyEvent::Warning { .. } => SurveyEventKind::Warning,
        }
    }
}

/// A generic event sink that accepts [`SurveyEvent`]s.
pub trait EventSink {
    fn send(&mut self, event: SurveyEvent);

    /// Whether events of `kind` should be built at all. Defaults to all.
    fn wants(&self, _kind: SurveyEventKind) -> bool {
        true
    }
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn send(&mut self, _event: SurveyEvent) {}

    #[inline]
    fn wants(&self, _kind: SurveyEventKind) -> bool {
        false
    }
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(SurveyEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(SurveyEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(SurveyEvent),
{
    #[inline]
    fn send(&mut self, event: SurveyEvent) {
        (self.f)(event);
    }
}

/// An event sink that records every event in order.
#[derive(Debug, Default)]
pub struct VecSink {
    events: Vec<SurveyEvent>,
}

impl VecSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_inner(self) -> Vec<SurveyEvent> {
        self.events
    }
}

impl EventSink for VecSink {
    #[inline]
    fn send(&mut self, event: SurveyEvent) {
        self.events.push(event);
    }
}
