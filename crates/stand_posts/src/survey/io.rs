//! Boundaries to the data provider: where stands come from and where posts go.
//!
//! Neither side has a file format of its own here. A [`PolygonSource`] hands over stand
//! geometry plus the linear-unit name of its spatial reference; a [`PostSink`] receives
//! the finished [`SampleSet`].
use glam::DVec2;
use rand::RngCore;
use tracing::info;

use crate::error::Result;
use crate::geometry::Polygon;
use crate::survey::config::GenerateConfig;
use crate::survey::generator::{SampleGenerator, SampleSet};
use crate::units::WorkingUnit;

/// Supplies stand polygons and the working reference's unit.
pub trait PolygonSource {
    /// Stands in a stable order; post stand indices refer to this order.
    fn polygons(&self) -> Result<Vec<Polygon>>;

    /// Linear-unit name of the spatial reference, `None` for a geographic one.
    fn linear_unit_name(&self) -> Option<&str>;
}

/// Persists a finished sample set.
pub trait PostSink {
    fn write(&mut self, samples: &SampleSet, unit: WorkingUnit) -> Result<()>;
}

/// Collects post locations in memory.
impl PostSink for Vec<DVec2> {
    fn write(&mut self, samples: &SampleSet, _unit: WorkingUnit) -> Result<()> {
        self.extend(samples.points());
        Ok(())
    }
}

/// In-memory stand source.
#[derive(Debug, Clone)]
pub struct MemorySource {
    polygons: Vec<Polygon>,
    linear_unit: Option<String>,
}

impl MemorySource {
    pub fn new(polygons: Vec<Polygon>, linear_unit: impl Into<String>) -> Self {
        Self {
            polygons,
            linear_unit: Some(linear_unit.into()),
        }
    }

    /// Source whose reference is geographic.
    pub fn unprojected(polygons: Vec<Polygon>) -> Self {
        Self {
            polygons,
            linear_unit: None,
        }
    }
}

impl PolygonSource for MemorySource {
    fn polygons(&self) -> Result<Vec<Polygon>> {
        Ok(self.polygons.clone())
    }

    fn linear_unit_name(&self) -> Option<&str> {
        self.linear_unit.as_deref()
    }
}

/// Reads stands from `source`, generates posts and writes them to `sink`.
///
/// The reference is checked before any geometry is read. The sink only sees a complete
/// sample set; on error nothing is written.
pub fn run_survey<S, K, R>(
    source: &S,
    config: &GenerateConfig,
    sink: &mut K,
    rng: &mut R,
) -> Result<SampleSet>
where
    S: PolygonSource + ?Sized,
    K: PostSink + ?Sized,
    R: RngCore,
{
    let working_unit = WorkingUnit::from_reference(source.linear_unit_name())?;
    let generator = SampleGenerator::try_new(config.clone())?;
    let polygons = source.polygons()?;
    let stands = polygons.len();

    let samples = generator.generate_in(polygons, working_unit, rng, &mut ())?;
    sink.write(&samples, working_unit)?;

    info!(
        "Survey wrote {} posts for {} stands ({} {} x {} {}, {}).",
        samples.len(),
        stands,
        config.spacing_x,
        config.unit,
        config.spacing_y,
        config.unit,
        config.mode,
    );
    Ok(samples)
}
