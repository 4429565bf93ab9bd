//! Point-placement strategies applied to each grid cell.
//!
//! A strategy decides, for one [`Cell`], whether and where to emit posts. The grid
//! alignment it expects is part of the strategy, so the generator can lay out the grid
//! accordingly before enumerating cells.
use std::fmt;
use std::str::FromStr;

use glam::DVec2;
use rand::RngCore;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geometry::PolygonIndex;
use crate::grid::{Cell, CellId, GridAlignment};

pub mod center;
pub mod random;

pub use center::CenterPlacement;
pub use random::RandomPlacement;

/// A sampling post emitted for a cell.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Post {
    /// Location in the working linear unit.
    pub position: DVec2,
    /// Cell the post was generated for.
    pub cell: CellId,
    /// Index of the stand polygon the post lies in.
    pub stand: usize,
}

/// Trait for per-cell point placement.
pub trait PlacementStrategy: Send + Sync {
    /// Grid layout this strategy is defined on.
    fn alignment(&self) -> GridAlignment;

    /// Appends the posts for `cell` to `out`.
    ///
    /// On error nothing is guaranteed about `out`; callers discard it.
    fn place(
        &self,
        cell: &Cell,
        stands: &PolygonIndex,
        rng: &mut dyn RngCore,
        out: &mut Vec<Post>,
    ) -> Result<()>;
}

/// Requested sampling mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PlacementMode {
    /// One post at each grid node that falls inside a stand.
    #[default]
    Center,
    /// One uniformly random post per cell and overlapping stand.
    Random,
}

impl PlacementMode {
    /// Builds the strategy for this mode.
    ///
    /// `max_attempts` caps rejection sampling and only applies to [`PlacementMode::Random`].
    pub fn strategy(self, max_attempts: usize) -> Box<dyn PlacementStrategy> {
        match self {
            PlacementMode::Center => Box::new(CenterPlacement),
            PlacementMode::Random => Box::new(RandomPlacement::new(max_attempts)),
        }
    }

    pub fn alignment(self) -> GridAlignment {
        match self {
            PlacementMode::Center => GridAlignment::CellCenter,
            PlacementMode::Random => GridAlignment::Corner,
        }
    }
}

impl FromStr for PlacementMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "center" | "centre" | "regular" => Ok(PlacementMode::Center),
            "random" => Ok(PlacementMode::Random),
            _ => Err(Error::InvalidConfig(format!(
                "unknown placement mode '{s}': expected Center or Random"
            ))),
        }
    }
}

impl fmt::Display for PlacementMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PlacementMode::Center => "Center",
            PlacementMode::Random => "Random",
        })
    }
}

/// Generate a random float in the range [0, 1).
#[inline]
pub(crate) fn rand01(rng: &mut dyn RngCore) -> f64 {
    // 53 random mantissa bits.
    (rng.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
}
