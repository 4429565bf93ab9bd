//! Planar geometry for stand polygons: extents, rings, polygons, rectangle clipping
//! and the read-only [`index::PolygonIndex`] queried during placement.
//!
//! Coordinates are `f64` in the linear unit of the working spatial reference.
use glam::DVec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod clip;
pub mod index;
pub mod polygon;

pub use clip::Region;
pub use index::PolygonIndex;
pub use polygon::{Polygon, Ring};

/// Axis-aligned bounding rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Extent {
    /// Lower-left corner.
    pub min: DVec2,
    /// Upper-right corner.
    pub max: DVec2,
}

impl Extent {
    pub fn new(min: DVec2, max: DVec2) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    pub fn from_coords(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Self {
        Self::new(DVec2::new(xmin, ymin), DVec2::new(xmax, ymax))
    }

    /// Smallest extent enclosing all `points`, or `None` for an empty iterator.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = DVec2>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)));
        Some(Self { min, max })
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn size(&self) -> DVec2 {
        self.max - self.min
    }

    pub fn center(&self) -> DVec2 {
        (self.min + self.max) * 0.5
    }

    pub fn union(&self, other: &Extent) -> Extent {
        Extent {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Closed-rectangle overlap test (touching edges count).
    pub fn intersects(&self, other: &Extent) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
    }

    /// True if `p` lies in the open interior of the rectangle.
    pub fn contains_strict(&self, p: DVec2) -> bool {
        p.x > self.min.x && p.x < self.max.x && p.y > self.min.y && p.y < self.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_orders_corners() {
        let e = Extent::new(DVec2::new(10.0, -2.0), DVec2::new(0.0, 5.0));
        assert_eq!(e.min, DVec2::new(0.0, -2.0));
        assert_eq!(e.max, DVec2::new(10.0, 5.0));
        assert_eq!(e.width(), 10.0);
        assert_eq!(e.height(), 7.0);
    }

    #[test]
    fn from_points_and_union() {
        assert!(Extent::from_points(std::iter::empty()).is_none());
        let a = Extent::from_points([DVec2::new(1.0, 1.0), DVec2::new(3.0, -1.0)]).unwrap();
        let b = Extent::from_coords(2.0, 0.0, 8.0, 4.0);
        let u = a.union(&b);
        assert_eq!(u, Extent::from_coords(1.0, -1.0, 8.0, 4.0));
        assert_eq!(u.center(), DVec2::new(4.5, 1.5));
    }

    #[test]
    fn touching_extents_intersect_but_boundary_is_not_interior() {
        let a = Extent::from_coords(0.0, 0.0, 1.0, 1.0);
        let b = Extent::from_coords(1.0, 0.0, 2.0, 1.0);
        assert!(a.intersects(&b));
        assert!(!a.contains_strict(DVec2::new(1.0, 0.5)));
        assert!(a.contains_strict(DVec2::new(0.5, 0.5)));
    }
}
