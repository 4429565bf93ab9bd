//! Rings and polygons with exact point-location tests.
use glam::DVec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geometry::Extent;

/// Where a point sits relative to a set of rings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Location {
    Inside,
    Boundary,
    Outside,
}

/// A closed ring stored without its repeated closing vertex.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ring {
    points: Vec<DVec2>,
}

impl Ring {
    /// Builds a ring from open or closed vertex input.
    ///
    /// Consecutive duplicates and the closing vertex are dropped. At least three distinct,
    /// finite vertices are required; collinear rings are accepted.
    pub fn new<I, P>(points: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<mint::Point2<f64>>,
    {
        let mut out: Vec<DVec2> = Vec::new();
        for p in points {
            let p = DVec2::from(p.into());
            if !p.is_finite() {
                return Err(Error::InvalidGeometry(format!(
                    "non-finite ring vertex ({}, {})",
                    p.x, p.y
                )));
            }
            if out.last() != Some(&p) {
                out.push(p);
            }
        }
        while out.len() > 1 && out.first() == out.last() {
            out.pop();
        }
        if out.len() < 3 {
            return Err(Error::InvalidGeometry(format!(
                "ring needs at least 3 distinct vertices, got {}",
                out.len()
            )));
        }
        Ok(Self { points: out })
    }

    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn extent(&self) -> Extent {
        // A ring always has at least three vertices.
        Extent::from_points(self.points.iter().copied())
            .unwrap_or_else(|| Extent::new(DVec2::ZERO, DVec2::ZERO))
    }

    /// Shoelace area; positive for counter-clockwise rings.
    pub fn signed_area(&self) -> f64 {
        signed_area(&self.points)
    }
}

/// A stand boundary: one or more rings combined with the even-odd rule.
///
/// Holes and multipart stands are expressed by adding rings; ring orientation is ignored.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Polygon {
    rings: Vec<Ring>,
    extent: Extent,
}

impl Polygon {
    pub fn new(rings: Vec<Ring>) -> Result<Self> {
        let extent = rings
            .iter()
            .map(Ring::extent)
            .reduce(|a, b| a.union(&b))
            .ok_or_else(|| Error::InvalidGeometry("polygon has no rings".into()))?;
        Ok(Self { rings, extent })
    }

    /// Single-ring polygon from exterior vertices.
    pub fn from_exterior<I, P>(points: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<mint::Point2<f64>>,
    {
        Self::new(vec![Ring::new(points)?])
    }

    /// Axis-aligned rectangle polygon.
    pub fn rectangle(extent: Extent) -> Result<Self> {
        Self::from_exterior([
            [extent.min.x, extent.min.y],
            [extent.max.x, extent.min.y],
            [extent.max.x, extent.max.y],
            [extent.min.x, extent.max.y],
        ])
    }

    /// Adds a ring (a hole inside an existing ring, or another part).
    pub fn with_ring(mut self, ring: Ring) -> Self {
        self.extent = self.extent.union(&ring.extent());
        self.rings.push(ring);
        self
    }

    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    pub fn extent(&self) -> Extent {
        self.extent
    }

    pub fn locate(&self, p: DVec2) -> Location {
        if p.x < self.extent.min.x
            || p.x > self.extent.max.x
            || p.y < self.extent.min.y
            || p.y > self.extent.max.y
        {
            return Location::Outside;
        }
        locate_in_rings(p, self.rings.iter().map(Ring::points))
    }

    /// True if `p` is strictly inside the polygon; boundary points are outside.
    pub fn contains(&self, p: DVec2) -> bool {
        self.locate(p) == Location::Inside
    }
}

/// Even-odd point location over `rings`, with exact on-edge detection.
pub(crate) fn locate_in_rings<'a, I>(p: DVec2, rings: I) -> Location
where
    I: IntoIterator<Item = &'a [DVec2]>,
{
    let mut inside = false;
    for ring in rings {
        let n = ring.len();
        if n == 0 {
            continue;
        }
        let mut j = n - 1;
        for i in 0..n {
            let a = ring[j];
            let b = ring[i];
            if on_segment(p, a, b) {
                return Location::Boundary;
            }
            if (b.y > p.y) != (a.y > p.y) {
                let x_cross = (a.x - b.x) * (p.y - b.y) / (a.y - b.y) + b.x;
                if p.x < x_cross {
                    inside = !inside;
                }
            }
            j = i;
        }
    }
    if inside {
        Location::Inside
    } else {
        Location::Outside
    }
}

fn on_segment(p: DVec2, a: DVec2, b: DVec2) -> bool {
    (b - a).perp_dot(p - a) == 0.0
        && p.x >= a.x.min(b.x)
        && p.x <= a.x.max(b.x)
        && p.y >= a.y.min(b.y)
        && p.y <= a.y.max(b.y)
}

pub(crate) fn signed_area(points: &[DVec2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut twice = 0.0;
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        twice += a.perp_dot(b);
    }
    twice * 0.5
}
