#![forbid(unsafe_code)]
//! stand_posts: sampling-post generation inside forest stand polygons.
//!
//! Modules:
//! - units: spacing units and conversion into the working reference's linear unit
//! - geometry: extents, polygons, rectangle clipping and the stand index
//! - grid: grid layout over the stands' extent and column-major cell enumeration
//! - placement: center and random point-placement strategies
//! - survey: configuration, generator, events, and source/sink seams
pub mod error;
pub mod geometry;
pub mod grid;
pub mod placement;
pub mod survey;
pub mod units;

/// Convenient re-exports for common types. Import with `use stand_posts::prelude::*;`.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{Extent, Polygon, PolygonIndex, Region, Ring};
    pub use crate::grid::{Cell, CellId, GridAlignment, GridSpec};
    pub use crate::placement::{
        CenterPlacement, PlacementMode, PlacementStrategy, Post, RandomPlacement,
    };
    pub use crate::survey::config::GenerateConfig;
    pub use crate::survey::events::{EventSink, FnSink, SurveyEvent, SurveyEventKind, VecSink};
    pub use crate::survey::generator::{
        generate, generate_with_strategy, SampleGenerator, SampleSet,
    };
    pub use crate::survey::io::{run_survey, MemorySource, PolygonSource, PostSink};
    pub use crate::units::{normalize, LinearUnit, WorkingUnit};
}
