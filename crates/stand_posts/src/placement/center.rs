//! Deterministic grid-node placement.
use rand::RngCore;

use crate::error::Result;
use crate::geometry::PolygonIndex;
use crate::grid::{Cell, GridAlignment};
use crate::placement::{PlacementStrategy, Post};

/// Emits the cell's grid node when it lies strictly inside a stand.
///
/// The first containing stand in input order is recorded; at most one post per cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct CenterPlacement;

impl PlacementStrategy for CenterPlacement {
    fn alignment(&self) -> GridAlignment {
        GridAlignment::CellCenter
    }

    fn place(
        &self,
        cell: &Cell,
        stands: &PolygonIndex,
        _rng: &mut dyn RngCore,
        out: &mut Vec<Post>,
    ) -> Result<()> {
        if let Some(stand) = stands.first_containing(cell.node) {
            out.push(Post {
                position: cell.node,
                cell: cell.id,
                stand,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use glam::DVec2;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::geometry::{Extent, Polygon};
    use crate::grid::GridSpec;

    #[test]
    fn node_inside_stand_is_emitted_once() {
        let stands = PolygonIndex::new(vec![
            Polygon::rectangle(Extent::from_coords(0.0, 0.0, 100.0, 100.0)).unwrap(),
            Polygon::rectangle(Extent::from_coords(0.0, 0.0, 50.0, 50.0)).unwrap(),
        ]);
        let spec = GridSpec::build(
            &stands.extent().unwrap(),
            50.0,
            50.0,
            GridAlignment::CellCenter,
        )
        .unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let mut out = Vec::new();
        CenterPlacement
            .place(&spec.cell(0, 0), &stands, &mut rng, &mut out)
            .unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].position, DVec2::new(25.0, 25.0));
        assert_eq!(out[0].stand, 0);
    }

    #[test]
    fn nodes_outside_stand_are_skipped() {
        let stands = PolygonIndex::new(vec![Polygon::from_exterior([
            [0.0, 0.0],
            [60.0, 0.0],
            [0.0, 60.0],
        ])
        .unwrap()]);
        let spec = GridSpec::build(
            &Extent::from_coords(0.0, 0.0, 50.0, 50.0),
            25.0,
            25.0,
            GridAlignment::CellCenter,
        )
        .unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let mut out = Vec::new();
        for cell in spec.cells() {
            CenterPlacement
                .place(&cell, &stands, &mut rng, &mut out)
                .unwrap();
        }
        // Nodes (12.5, 12.5), (12.5, 37.5), (37.5, 12.5) are inside; (37.5, 37.5) is not.
        let got: Vec<DVec2> = out.iter().map(|p| p.position).collect();
        assert_eq!(
            got,
            vec![
                DVec2::new(12.5, 12.5),
                DVec2::new(12.5, 37.5),
                DVec2::new(37.5, 12.5)
            ]
        );
    }
}
