//! Sample generation: units, grid, index and placement wired together.
use glam::DVec2;
use rand::RngCore;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::geometry::{Polygon, PolygonIndex};
use crate::grid::GridSpec;
use crate::placement::{PlacementMode, PlacementStrategy, Post};
use crate::survey::config::GenerateConfig;
use crate::survey::events::{EventSink, SurveyEvent, SurveyEventKind};
use crate::units::{normalize_pair, LinearUnit, WorkingUnit};

/// Ordered posts produced by one generation run.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct SampleSet {
    /// Posts in column-major cell order.
    pub posts: Vec<Post>,
    /// Grid the posts were generated on, in the working unit.
    pub grid: GridSpec,
    /// Unit of every coordinate in the set.
    pub working_unit: WorkingUnit,
    /// Cells visited.
    pub cells_evaluated: usize,
    /// Cells that produced no post.
    pub cells_empty: usize,
}

impl SampleSet {
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Post locations in output order.
    pub fn points(&self) -> impl Iterator<Item = DVec2> + '_ {
        self.posts.iter().map(|p| p.position)
    }
}

/// Generates sample posts for a fixed configuration.
#[derive(Debug, Clone)]
pub struct SampleGenerator {
    config: GenerateConfig,
}

impl SampleGenerator {
    pub fn try_new(config: GenerateConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GenerateConfig {
        &self.config
    }

    /// Generates posts for `polygons` in the unit named by `working_unit_name`.
    pub fn generate<R: RngCore>(
        &self,
        polygons: Vec<Polygon>,
        working_unit_name: &str,
        rng: &mut R,
    ) -> Result<SampleSet> {
        let working_unit = working_unit_name.parse()?;
        self.generate_in(polygons, working_unit, rng, &mut ())
    }

    pub fn generate_with_events<R: RngCore>(
        &self,
        polygons: Vec<Polygon>,
        working_unit_name: &str,
        rng: &mut R,
        sink: &mut dyn EventSink,
    ) -> Result<SampleSet> {
        let working_unit = working_unit_name.parse()?;
        self.generate_in(polygons, working_unit, rng, sink)
    }

    /// Generates posts with an already resolved working unit.
    pub fn generate_in<R: RngCore>(
        &self,
        polygons: Vec<Polygon>,
        working_unit: WorkingUnit,
        rng: &mut R,
        sink: &mut dyn EventSink,
    ) -> Result<SampleSet> {
        let strategy = self.config.mode.strategy(self.config.max_sampling_attempts);
        generate_with_strategy(
            polygons,
            (self.config.spacing_x, self.config.spacing_y),
            self.config.unit,
            working_unit,
            strategy.as_ref(),
            rng,
            sink,
        )
    }
}

/// Generates posts in one call.
///
/// Random mode uses the default rejection-sampling cap.
pub fn generate<R: RngCore>(
    polygons: Vec<Polygon>,
    spacing_x: f64,
    spacing_y: f64,
    input_unit: LinearUnit,
    working_unit_name: &str,
    mode: PlacementMode,
    rng: &mut R,
) -> Result<SampleSet> {
    let config = GenerateConfig::new(spacing_x, spacing_y)
        .with_unit(input_unit)
        .with_mode(mode);
    SampleGenerator::try_new(config)?.generate(polygons, working_unit_name, rng)
}

/// Runs a custom placement strategy over `polygons`.
///
/// `spacing` is `(x, y)` in `input_unit`. Posts are returned in column-major cell order.
/// The first failing cell aborts the run and no posts are returned.
pub fn generate_with_strategy<R: RngCore>(
    polygons: Vec<Polygon>,
    spacing: (f64, f64),
    input_unit: LinearUnit,
    working_unit: WorkingUnit,
    strategy: &dyn PlacementStrategy,
    rng: &mut R,
    sink: &mut dyn EventSink,
) -> Result<SampleSet> {
    let (spacing_x, spacing_y) = normalize_pair(spacing.0, spacing.1, input_unit, working_unit);

    let stands = PolygonIndex::new(polygons);
    let extent = stands.extent().ok_or(Error::EmptyInput)?;
    let grid = GridSpec::build(&extent, spacing_x, spacing_y, strategy.alignment())?;

    debug!(
        "Grid {}x{} cells of {:.3}x{:.3} {} from ({:.3}, {:.3}) over {} stands.",
        grid.columns,
        grid.rows,
        grid.cell_width,
        grid.cell_height,
        working_unit,
        grid.origin.x,
        grid.origin.y,
        stands.len(),
    );

    if sink.wants(SurveyEventKind::RunStarted) {
        sink.send(SurveyEvent::RunStarted {
            grid,
            stands: stands.len(),
            working_unit,
        });
    }

    if grid.is_empty() {
        warn!(
            "Stand extent {:.3}x{:.3} is smaller than one {:.3}x{:.3} grid cell; no posts generated.",
            extent.width(),
            extent.height(),
            grid.cell_width,
            grid.cell_height,
        );
        if sink.wants(SurveyEventKind::Warning) {
            sink.send(SurveyEvent::Warning {
                context: "grid".into(),
                message: "Stand extent is smaller than one grid cell".into(),
            });
        }
    }

    let mut posts: Vec<Post> = Vec::new();
    let mut cells_empty = 0;
    for cell in grid.cells() {
        let before = posts.len();
        strategy.place(&cell, &stands, &mut *rng, &mut posts)?;

        if posts.len() == before {
            cells_empty += 1;
            if sink.wants(SurveyEventKind::CellSkipped) {
                sink.send(SurveyEvent::CellSkipped { cell: cell.id });
            }
        } else if sink.wants(SurveyEventKind::PostPlaced) {
            for post in &posts[before..] {
                sink.send(SurveyEvent::PostPlaced { post: *post });
            }
        }
    }

    let result = SampleSet {
        posts,
        grid,
        working_unit,
        cells_evaluated: grid.cell_count(),
        cells_empty,
    };

    info!(
        "Generated {} posts from {} cells ({} empty).",
        result.len(),
        result.cells_evaluated,
        result.cells_empty,
    );

    if sink.wants(SurveyEventKind::RunFinished) {
        sink.send(SurveyEvent::RunFinished {
            posts: result.len(),
            cells_evaluated: result.cells_evaluated,
            cells_empty: result.cells_empty,
        });
    }

    Ok(result)
}
