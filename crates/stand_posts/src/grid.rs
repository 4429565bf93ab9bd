//! Grid enumeration over a bounding extent.
//!
//! [`GridSpec`] fixes the cell size, origin and counts; [`GridSpec::cells`] walks the cells
//! lazily in column-major order (every row of column 0, then column 1, ...).
use glam::DVec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geometry::Extent;

/// Where the grid origin sits relative to the extent's minimum corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GridAlignment {
    /// Origin at the extent corner; cells tile the extent from there.
    Corner,
    /// Origin half a cell in from the corner, so grid nodes are cell centers.
    CellCenter,
}

/// Column/row index of a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CellId(
    /// Column index along X.
    pub usize,
    /// Row index along Y.
    pub usize,
);

impl CellId {
    pub fn col(&self) -> usize {
        self.0
    }

    pub fn row(&self) -> usize {
        self.1
    }
}

/// A single grid cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    pub id: CellId,
    /// Position in column-major enumeration order.
    pub index: usize,
    /// Grid node `origin + (col * width, row * height)`.
    pub node: DVec2,
    /// Cell rectangle.
    pub rect: Extent,
}

/// Fully determines the enumerable set of cells.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridSpec {
    pub cell_width: f64,
    pub cell_height: f64,
    pub origin: DVec2,
    pub columns: usize,
    pub rows: usize,
    pub alignment: GridAlignment,
}

/// Largest number of cells a single grid may enumerate.
pub const MAX_CELLS: usize = 100_000_000;

fn axis_count(length: f64, step: f64) -> usize {
    let n = ((length - step) / step).floor() + 1.0;
    if n.is_finite() && n >= 1.0 {
        n as usize
    } else {
        0
    }
}

fn check_spacing(value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidSpacing { value })
    }
}

impl GridSpec {
    /// Lays a grid of `cell_width` x `cell_height` cells over `extent`.
    ///
    /// Counts are `floor((size - step) / step) + 1` per axis, clamped at zero, so an extent
    /// smaller than one cell gives an empty (valid) grid. A grid of more than [`MAX_CELLS`]
    /// cells is rejected with [`Error::InvalidConfig`].
    pub fn build(
        extent: &Extent,
        cell_width: f64,
        cell_height: f64,
        alignment: GridAlignment,
    ) -> Result<Self> {
        check_spacing(cell_width)?;
        check_spacing(cell_height)?;

        let origin = match alignment {
            GridAlignment::Corner => extent.min,
            GridAlignment::CellCenter => {
                extent.min + DVec2::new(cell_width * 0.5, cell_height * 0.5)
            }
        };

        let columns = axis_count(extent.width(), cell_width);
        let rows = axis_count(extent.height(), cell_height);
        match columns.checked_mul(rows) {
            Some(count) if count <= MAX_CELLS => {}
            _ => {
                return Err(Error::InvalidConfig(format!(
                    "grid of {columns} x {rows} cells exceeds the limit of {MAX_CELLS} cells"
                )))
            }
        }

        Ok(Self {
            cell_width,
            cell_height,
            origin,
            columns,
            rows,
            alignment,
        })
    }

    pub fn cell_size(&self) -> DVec2 {
        DVec2::new(self.cell_width, self.cell_height)
    }

    pub fn cell_count(&self) -> usize {
        self.columns.saturating_mul(self.rows)
    }

    pub fn is_empty(&self) -> bool {
        self.cell_count() == 0
    }

    /// Grid node of `(col, row)`.
    pub fn node(&self, col: usize, row: usize) -> DVec2 {
        self.origin + DVec2::new(col as f64 * self.cell_width, row as f64 * self.cell_height)
    }

    /// Cell rectangle of `(col, row)`.
    ///
    /// Corner grids start the rectangle at the node; cell-center grids center it there.
    pub fn cell_rect(&self, col: usize, row: usize) -> Extent {
        let node = self.node(col, row);
        let min = match self.alignment {
            GridAlignment::Corner => node,
            GridAlignment::CellCenter => node - self.cell_size() * 0.5,
        };
        Extent::new(min, min + self.cell_size())
    }

    pub fn cell(&self, col: usize, row: usize) -> Cell {
        Cell {
            id: CellId(col, row),
            index: col * self.rows + row,
            node: self.node(col, row),
            rect: self.cell_rect(col, row),
        }
    }

    /// Lazily enumerates all cells in column-major order. Each call starts over.
    pub fn cells(&self) -> Cells {
        Cells {
            spec: *self,
            next: 0,
            end: self.cell_count(),
        }
    }
}

/// Column-major cell iterator returned by [`GridSpec::cells`].
#[derive(Clone, Debug)]
pub struct Cells {
    spec: GridSpec,
    next: usize,
    end: usize,
}

impl Iterator for Cells {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        if self.next >= self.end {
            return None;
        }
        let index = self.next;
        self.next += 1;
        let rows = self.spec.rows;
        Some(self.spec.cell(index / rows, index % rows))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Cells {}

#[cfg(test)]
mod tests {
    use super::*;

    fn extent(w: f64, h: f64) -> Extent {
        Extent::from_coords(0.0, 0.0, w, h)
    }

    #[test]
    fn counts_follow_floor_formula() {
        let spec = GridSpec::build(&extent(100.0, 100.0), 50.0, 50.0, GridAlignment::Corner)
            .unwrap();
        assert_eq!((spec.columns, spec.rows), (2, 2));

        let spec = GridSpec::build(&extent(130.0, 49.0), 50.0, 20.0, GridAlignment::Corner)
            .unwrap();
        assert_eq!((spec.columns, spec.rows), (2, 2));
    }

    #[test]
    fn extent_smaller_than_cell_gives_empty_grid() {
        let spec = GridSpec::build(&extent(10.0, 100.0), 50.0, 50.0, GridAlignment::CellCenter)
            .unwrap();
        assert_eq!(spec.columns, 0);
        assert!(spec.is_empty());
        assert_eq!(spec.cells().count(), 0);
    }

    #[test]
    fn non_positive_spacing_is_rejected() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                GridSpec::build(&extent(10.0, 10.0), bad, 1.0, GridAlignment::Corner),
                Err(Error::InvalidSpacing { .. })
            ));
            assert!(matches!(
                GridSpec::build(&extent(10.0, 10.0), 1.0, bad, GridAlignment::Corner),
                Err(Error::InvalidSpacing { .. })
            ));
        }
    }

    #[test]
    fn oversized_grid_is_rejected_instead_of_overflowing() {
        let e = extent(1e6, 1e6);
        assert!(matches!(
            GridSpec::build(&e, 1e-6, 1e-6, GridAlignment::Corner),
            Err(Error::InvalidConfig(_))
        ));
        // One axis alone past the limit.
        assert!(matches!(
            GridSpec::build(&extent(1e9, 1.0), 1.0, 1.0, GridAlignment::Corner),
            Err(Error::InvalidConfig(_))
        ));

        let spec = GridSpec::build(&e, 1e3, 1e3, GridAlignment::Corner).unwrap();
        assert_eq!(spec.cell_count(), 1_000_000);
    }

    #[test]
    fn center_alignment_offsets_origin_by_half_cell() {
        let e = Extent::from_coords(10.0, 20.0, 110.0, 120.0);
        let spec = GridSpec::build(&e, 50.0, 25.0, GridAlignment::CellCenter).unwrap();
        assert_eq!(spec.origin, DVec2::new(35.0, 32.5));
        assert_eq!(
            spec.cell_rect(0, 0),
            Extent::from_coords(10.0, 20.0, 60.0, 45.0)
        );

        let spec = GridSpec::build(&e, 50.0, 25.0, GridAlignment::Corner).unwrap();
        assert_eq!(spec.origin, DVec2::new(10.0, 20.0));
        assert_eq!(spec.cell(1, 2).rect, Extent::from_coords(60.0, 70.0, 110.0, 95.0));
    }

    #[test]
    fn cells_are_column_major_and_restartable() {
        let spec = GridSpec::build(&extent(30.0, 20.0), 10.0, 10.0, GridAlignment::Corner)
            .unwrap();
        let cells = spec.cells();
        assert_eq!(cells.len(), 6);
        let ids: Vec<CellId> = cells.map(|c| c.id).collect();
        assert_eq!(
            ids,
            vec![
                CellId(0, 0),
                CellId(0, 1),
                CellId(1, 0),
                CellId(1, 1),
                CellId(2, 0),
                CellId(2, 1)
            ]
        );
        let indices: Vec<usize> = spec.cells().map(|c| c.index).collect();
        assert_eq!(indices, (0..6).collect::<Vec<_>>());
    }
}
