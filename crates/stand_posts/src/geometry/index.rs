//! Read-only polygon index used by the placement strategies.
//!
//! Polygon envelopes live in an R-tree that only prefilters candidates; every answer is
//! confirmed with an exact point-location or clipping test.
use glam::DVec2;
use rstar::{RTree, RTreeObject, AABB};

use crate::geometry::clip::{self, Region};
use crate::geometry::{Extent, Polygon};

#[derive(Debug, Clone)]
struct StandEnvelope {
    stand: usize,
    envelope: AABB<[f64; 2]>,
}

impl RTreeObject for StandEnvelope {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        self.envelope
    }
}

fn aabb(extent: &Extent) -> AABB<[f64; 2]> {
    AABB::from_corners([extent.min.x, extent.min.y], [extent.max.x, extent.max.y])
}

/// Spatially indexed, ordered collection of stand polygons.
///
/// Stand indices are positions in the input sequence; every query reports them in
/// ascending order.
pub struct PolygonIndex {
    polygons: Vec<Polygon>,
    tree: RTree<StandEnvelope>,
    extent: Option<Extent>,
}

impl PolygonIndex {
    pub fn new(polygons: Vec<Polygon>) -> Self {
        let envelopes = polygons
            .iter()
            .enumerate()
            .map(|(stand, p)| StandEnvelope {
                stand,
                envelope: aabb(&p.extent()),
            })
            .collect();
        let extent = polygons
            .iter()
            .map(Polygon::extent)
            .reduce(|a, b| a.union(&b));
        Self {
            polygons,
            tree: RTree::bulk_load(envelopes),
            extent,
        }
    }

    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    pub fn get(&self, stand: usize) -> Option<&Polygon> {
        self.polygons.get(stand)
    }

    /// Union of all polygon extents, `None` for an empty index.
    pub fn extent(&self) -> Option<Extent> {
        self.extent
    }

    fn candidates(&self, envelope: &AABB<[f64; 2]>) -> Vec<usize> {
        let mut stands: Vec<usize> = self
            .tree
            .locate_in_envelope_intersecting(envelope)
            .map(|e| e.stand)
            .collect();
        stands.sort_unstable();
        stands
    }

    /// First stand (in input order) strictly containing `p`.
    pub fn first_containing(&self, p: DVec2) -> Option<usize> {
        self.candidates(&AABB::from_point([p.x, p.y]))
            .into_iter()
            .find(|&stand| self.polygons[stand].contains(p))
    }

    /// True if `p` lies strictly inside any stand.
    pub fn contains(&self, p: DVec2) -> bool {
        self.first_containing(p).is_some()
    }

    /// Stands whose interior shares area with the interior of `cell`, with their
    /// intersection regions, in input order.
    pub fn overlapping(&self, cell: &Extent) -> Vec<(usize, Region)> {
        self.candidates(&aabb(cell))
            .into_iter()
            .filter_map(|stand| {
                let region = clip::intersection(&self.polygons[stand], cell);
                (!region.is_empty()).then_some((stand, region))
            })
            .collect()
    }

    /// Stands overlapping `cell`, in input order.
    pub fn overlapping_polygons(&self, cell: &Extent) -> Vec<&Polygon> {
        self.overlapping(cell)
            .into_iter()
            .map(|(stand, _)| &self.polygons[stand])
            .collect()
    }

    /// Exact intersection of `polygon` with `cell`.
    pub fn intersection(&self, polygon: &Polygon, cell: &Extent) -> Region {
        clip::intersection(polygon, cell)
    }
}

impl std::fmt::Debug for PolygonIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PolygonIndex")
            .field("stands", &self.polygons.len())
            .field("extent", &self.extent)
            .finish()
    }
}
