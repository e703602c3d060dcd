//! Floor-plan grid builder
//!
//! Projects a list of [`TablePlacement`] onto a fixed `size × size` cell
//! matrix and assigns each occupied cell a sequential display number.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{LayoutCell, TablePlacement};

/// Default floor-plan grid size
pub const DEFAULT_GRID_SIZE: usize = 10;

/// One cell of the floor-plan grid
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridCell {
    /// Whether a table occupies this cell
    pub is_table: bool,
    /// Seat capacity if occupied, 0 otherwise
    pub seats: u32,
    /// Whether the cell's table has an accepted reservation overlapping
    /// the currently selected window
    pub reserved: bool,
    /// Operator-controlled base availability
    pub available: bool,
    /// Display number, assigned in row-major scan order
    pub number: Option<u32>,
    /// Id of the occupying table
    pub table_id: Option<String>,
}

impl GridCell {
    fn table(placement: &TablePlacement, reserved: bool) -> Self {
        Self {
            is_table: true,
            seats: placement.capacity,
            reserved,
            available: placement.available,
            number: None,
            table_id: Some(placement.table_id.clone()),
        }
    }
}

/// A restaurant floor plan as a `size × size` matrix of cells,
/// indexed `[row][col]` where row = y and col = x.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloorGrid {
    size: usize,
    cells: Vec<Vec<GridCell>>,
}

impl FloorGrid {
    /// Build a grid from placements.
    ///
    /// Placements with coordinates outside `[0, size)` are dropped.
    /// When two placements share a cell the later one wins. Display
    /// numbers are assigned by a row-major scan over the populated grid,
    /// not by input order, so a table's on-screen number depends on its
    /// position.
    pub fn build(
        placements: &[TablePlacement],
        size: usize,
        reserved_table_ids: &HashSet<String>,
    ) -> Self {
        let mut cells = vec![vec![GridCell::default(); size]; size];

        for placement in placements {
            let (x, y) = (placement.position_x, placement.position_y);
            if x < 0 || y < 0 || x as usize >= size || y as usize >= size {
                tracing::debug!(
                    table_id = %placement.table_id,
                    x,
                    y,
                    "dropping placement outside the grid"
                );
                continue;
            }
            let reserved = reserved_table_ids.contains(&placement.table_id);
            cells[y as usize][x as usize] = GridCell::table(placement, reserved);
        }

        let mut grid = Self { size, cells };
        grid.assign_numbers();
        grid
    }

    /// Empty grid with the default size
    pub fn empty() -> Self {
        Self::build(&[], DEFAULT_GRID_SIZE, &HashSet::new())
    }

    // Row-major renumbering of every occupied cell, starting at 1.
    // The single source of truth for display numbering.
    fn assign_numbers(&mut self) {
        let mut next = 1u32;
        for row in &mut self.cells {
            for cell in row {
                if cell.is_table {
                    cell.number = Some(next);
                    next += 1;
                } else {
                    cell.number = None;
                }
            }
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&GridCell> {
        self.cells.get(row).and_then(|r| r.get(col))
    }

    pub fn rows(&self) -> &[Vec<GridCell>] {
        &self.cells
    }

    /// Number of occupied cells
    pub fn table_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.is_table)
            .count()
    }

    /// The raw 2D persistence shape the layout save endpoint accepts
    pub fn to_layout(&self) -> Vec<Vec<LayoutCell>> {
        self.cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| LayoutCell {
                        is_table: cell.is_table,
                        capacity: cell.seats,
                        is_available: cell.available,
                    })
                    .collect()
            })
            .collect()
    }

    /// Rebuild placements from the raw persistence shape.
    ///
    /// Rows beyond `size` and cells beyond each row's `size` are ignored,
    /// mirroring the out-of-range rule for placements. Cells added in the
    /// layout editor have no identity yet, so each table cell gets a
    /// fresh id.
    pub fn placements_from_layout(cells: &[Vec<LayoutCell>], size: usize) -> Vec<TablePlacement> {
        let mut placements = Vec::new();
        for (row, cols) in cells.iter().take(size).enumerate() {
            for (col, cell) in cols.iter().take(size).enumerate() {
                if !cell.is_table {
                    continue;
                }
                placements.push(TablePlacement {
                    table_id: Uuid::new_v4().to_string(),
                    position_x: col as i32,
                    position_y: row as i32,
                    capacity: cell.capacity,
                    available: cell.is_available,
                });
            }
        }
        placements
    }
}
