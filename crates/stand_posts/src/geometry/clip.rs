//! Polygon/rectangle intersection using Sutherland-Hodgman clipping.
//!
//! Every ring is clipped against the open interior of the rectangle. A vertex lying exactly
//! on the rectangle edge counts as outside, so a stand that only touches a cell along its
//! boundary produces an empty [`Region`].
use glam::DVec2;

use crate::geometry::polygon::{locate_in_rings, signed_area, Location};
use crate::geometry::{Extent, Polygon};

/// Intersection of a polygon with a rectangle.
///
/// The clipped rings keep the even-odd semantics of the source polygon; a region made of
/// several disjoint parts is still one region with one bounding extent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Region {
    rings: Vec<Vec<DVec2>>,
    extent: Option<Extent>,
}

impl Region {
    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    pub fn rings(&self) -> &[Vec<DVec2>] {
        &self.rings
    }

    /// Bounding extent of the clipped rings, `None` when empty.
    pub fn extent(&self) -> Option<Extent> {
        self.extent
    }

    /// Sum of absolute ring areas. Exact for a single ring; an upper bound when holes overlap
    /// parts.
    pub fn ring_area(&self) -> f64 {
        self.rings.iter().map(|r| signed_area(r).abs()).sum()
    }

    /// True if `p` lies strictly inside the region.
    pub fn contains(&self, p: DVec2) -> bool {
        match self.extent {
            Some(e) if e.contains_strict(p) => {
                locate_in_rings(p, self.rings.iter().map(Vec::as_slice)) == Location::Inside
            }
            _ => false,
        }
    }
}

#[derive(Clone, Copy)]
enum Edge {
    Left(f64),
    Right(f64),
    Bottom(f64),
    Top(f64),
}

impl Edge {
    fn inside(self, p: DVec2) -> bool {
        match self {
            Edge::Left(x) => p.x > x,
            Edge::Right(x) => p.x < x,
            Edge::Bottom(y) => p.y > y,
            Edge::Top(y) => p.y < y,
        }
    }

    // Only called when exactly one of `a`, `b` is inside, so the divisor is non-zero.
    fn intersect(self, a: DVec2, b: DVec2) -> DVec2 {
        match self {
            Edge::Left(x) | Edge::Right(x) => {
                let t = (x - a.x) / (b.x - a.x);
                DVec2::new(x, a.y + t * (b.y - a.y))
            }
            Edge::Bottom(y) | Edge::Top(y) => {
                let t = (y - a.y) / (b.y - a.y);
                DVec2::new(a.x + t * (b.x - a.x), y)
            }
        }
    }
}

/// Clips one ring against `rect`, returning the clipped vertex list (possibly empty).
pub fn clip_ring(ring: &[DVec2], rect: &Extent) -> Vec<DVec2> {
    let edges = [
        Edge::Left(rect.min.x),
        Edge::Right(rect.max.x),
        Edge::Bottom(rect.min.y),
        Edge::Top(rect.max.y),
    ];

    let mut output: Vec<DVec2> = ring.to_vec();
    for edge in edges {
        if output.is_empty() {
            break;
        }
        let input = std::mem::take(&mut output);
        let mut prev = input[input.len() - 1];
        for &cur in &input {
            let cur_in = edge.inside(cur);
            let prev_in = edge.inside(prev);
            if cur_in {
                if !prev_in {
                    output.push(edge.intersect(prev, cur));
                }
                output.push(cur);
            } else if prev_in {
                output.push(edge.intersect(prev, cur));
            }
            prev = cur;
        }
    }

    output.dedup();
    while output.len() > 1 && output.first() == output.last() {
        output.pop();
    }
    if output.len() < 3 {
        output.clear();
    }
    output
}

/// Exact intersection of `polygon` with the rectangle `rect`.
pub fn intersection(polygon: &Polygon, rect: &Extent) -> Region {
    if !polygon.extent().intersects(rect) {
        return Region::default();
    }
    let rings: Vec<Vec<DVec2>> = polygon
        .rings()
        .iter()
        .map(|ring| clip_ring(ring.points(), rect))
        .filter(|clipped| !clipped.is_empty())
        .collect();
    let extent = Extent::from_points(rings.iter().flatten().copied());
    Region { rings, extent }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Ring;

    fn rect(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Extent {
        Extent::from_coords(xmin, ymin, xmax, ymax)
    }

    #[test]
    fn polygon_covering_cell_clips_to_cell() {
        let poly = Polygon::rectangle(rect(0.0, 0.0, 100.0, 100.0)).unwrap();
        let cell = rect(25.0, 25.0, 50.0, 50.0);
        let region = intersection(&poly, &cell);
        assert!(!region.is_empty());
        assert_eq!(region.extent(), Some(cell));
        assert!((region.ring_area() - 625.0).abs() < 1e-9);
    }

    #[test]
    fn triangle_is_cut_to_the_cell() {
        let poly = Polygon::from_exterior([[0.0, 0.0], [10.0, 0.0], [0.0, 10.0]]).unwrap();
        let region = intersection(&poly, &rect(0.0, 0.0, 5.0, 5.0));
        // Hypotenuse x + y = 10 misses the 5x5 cell except at its far corner.
        assert!((region.ring_area() - 25.0).abs() < 1e-9);
        assert!(region.contains(DVec2::new(4.9, 4.9)));
        assert!(!region.contains(DVec2::new(5.0, 2.0)));
    }

    #[test]
    fn touching_only_along_an_edge_is_empty() {
        let poly = Polygon::rectangle(rect(10.0, 0.0, 20.0, 10.0)).unwrap();
        let region = intersection(&poly, &rect(0.0, 0.0, 10.0, 10.0));
        assert!(region.is_empty());
        assert_eq!(region.extent(), None);
        assert!(!region.contains(DVec2::new(10.0, 5.0)));
    }

    #[test]
    fn disjoint_polygon_is_empty() {
        let poly = Polygon::rectangle(rect(50.0, 50.0, 60.0, 60.0)).unwrap();
        assert!(intersection(&poly, &rect(0.0, 0.0, 10.0, 10.0)).is_empty());
    }

    #[test]
    fn hole_survives_clipping() {
        let poly = Polygon::rectangle(rect(0.0, 0.0, 10.0, 10.0))
            .unwrap()
            .with_ring(Ring::new([[2.0, 2.0], [4.0, 2.0], [4.0, 4.0], [2.0, 4.0]]).unwrap());
        let region = intersection(&poly, &rect(0.0, 0.0, 5.0, 5.0));
        assert_eq!(region.rings().len(), 2);
        assert!(region.contains(DVec2::new(1.0, 1.0)));
        assert!(!region.contains(DVec2::new(3.0, 3.0)));
    }

    #[test]
    fn collinear_sliver_has_zero_area() {
        let poly = Polygon::from_exterior([[1.0, 1.0], [2.0, 2.0], [3.0, 3.0]]).unwrap();
        let region = intersection(&poly, &rect(0.0, 0.0, 5.0, 5.0));
        assert!(!region.is_empty());
        assert_eq!(region.ring_area(), 0.0);
        assert!(!region.contains(DVec2::new(2.0, 2.5)));
    }

    #[test]
    fn collinear_sliver_crossing_cell_edges_keeps_zero_area_region() {
        let cell = rect(0.0, 0.0, 10.0, 10.0);
        let mid_side = Polygon::from_exterior([[-5.0, 2.0], [5.0, 4.0], [15.0, 6.0]]).unwrap();
        let region = intersection(&mid_side, &cell);
        assert_eq!(
            region.rings(),
            &[vec![
                DVec2::new(10.0, 5.0),
                DVec2::new(0.0, 3.0),
                DVec2::new(5.0, 4.0)
            ]]
        );
        assert_eq!(region.ring_area(), 0.0);

        let corner_to_corner =
            Polygon::from_exterior([[-5.0, -5.0], [5.0, 5.0], [15.0, 15.0]]).unwrap();
        let region = intersection(&corner_to_corner, &cell);
        assert!(!region.is_empty());
        assert_eq!(region.ring_area(), 0.0);
    }
}
