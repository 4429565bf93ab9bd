//! Uniform random placement inside each cell/stand overlap.
use glam::DVec2;
use rand::RngCore;

use crate::error::{Error, Result};
use crate::geometry::{PolygonIndex, Region};
use crate::grid::{Cell, GridAlignment};
use crate::placement::{rand01, PlacementStrategy, Post};

/// Default cap on rejection-sampling draws per cell/stand pair.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

/// One uniformly distributed post per cell and overlapping stand.
///
/// Candidates are drawn from the bounding rectangle of the cell/stand intersection and
/// rejected until one falls strictly inside it. A cell overlapped by several stands yields
/// one post per stand.
#[derive(Debug, Clone, Copy)]
pub struct RandomPlacement {
    /// Maximum draws per cell/stand pair before giving up.
    pub max_attempts: usize,
}

impl Default for RandomPlacement {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl RandomPlacement {
    pub fn new(max_attempts: usize) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
        }
    }
}

/// Rejection-samples a point strictly inside `region`.
///
/// Returns `None` when the region is empty or `max_attempts` draws all missed.
pub fn sample_region(region: &Region, max_attempts: usize, rng: &mut dyn RngCore) -> Option<DVec2> {
    let extent = region.extent()?;
    let size = extent.size();
    for _ in 0..max_attempts {
        let candidate = extent.min + DVec2::new(rand01(rng) * size.x, rand01(rng) * size.y);
        if region.contains(candidate) {
            return Some(candidate);
        }
    }
    None
}

impl PlacementStrategy for RandomPlacement {
    fn alignment(&self) -> GridAlignment {
        GridAlignment::Corner
    }

    fn place(
        &self,
        cell: &Cell,
        stands: &PolygonIndex,
        rng: &mut dyn RngCore,
        out: &mut Vec<Post>,
    ) -> Result<()> {
        for (stand, region) in stands.overlapping(&cell.rect) {
            let position = sample_region(&region, self.max_attempts, rng).ok_or(
                Error::SamplingTimeout {
                    col: cell.id.col(),
                    row: cell.id.row(),
                    stand,
                    attempts: self.max_attempts,
                },
            )?;
            out.push(Post {
                position,
                cell: cell.id,
                stand,
            });
        }
        Ok(())
    }
}
