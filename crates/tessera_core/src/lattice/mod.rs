//! HPP lattice gas: square grid of [`GridCell`]s split by a permeable wall.

pub mod init;
pub mod step;

pub use init::initialize;
pub use step::{step, LatticeEngine};

use crate::error::{AutomatonError, Result};
use serde::{Deserialize, Serialize};
use tessera_data::{Direction, GridCell};

/// Square lattice stored row-major; index `(x, y)` lives at `y * size + x`.
///
/// Every border cell is an obstacle. The constructors and deserialization
/// enforce this, so the step never has to look past the ring.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct Grid {
    size: usize,
    cells: Vec<GridCell>,
}

#[derive(Deserialize)]
struct RawGrid {
    size: usize,
    cells: Vec<GridCell>,
}

impl TryFrom<RawGrid> for Grid {
    type Error = AutomatonError;

    fn try_from(raw: RawGrid) -> Result<Self> {
        Self::from_cells(raw.size, raw.cells)
    }
}

fn is_ring(size: usize, x: usize, y: usize) -> bool {
    let last = size.saturating_sub(1);
    x == 0 || y == 0 || x >= last || y >= last
}

impl Grid {
    /// Empty interior enclosed by the obstacle ring.
    pub fn new(size: usize) -> Self {
        let cells = (0..size * size)
            .map(|idx| {
                if is_ring(size, idx % size, idx / size) {
                    GridCell::OBSTACLE
                } else {
                    GridCell::EMPTY
                }
            })
            .collect();
        Self { size, cells }
    }

    /// Checks the shape and the obstacle ring.
    pub fn from_cells(size: usize, cells: Vec<GridCell>) -> Result<Self> {
        if cells.len() != size * size {
            return Err(AutomatonError::invalid_input(format!(
                "expected {} cells for a {size}x{size} grid, got {}",
                size * size,
                cells.len()
            )));
        }
        let open_border = cells.iter().enumerate().position(|(idx, cell)| {
            is_ring(size, idx % size, idx / size) && *cell != GridCell::OBSTACLE
        });
        if let Some(idx) = open_border {
            return Err(AutomatonError::invalid_input(format!(
                "border cell ({}, {}) is not an obstacle",
                idx % size,
                idx / size
            )));
        }
        Ok(Self { size, cells })
    }

    #[inline(always)]
    pub fn index(&self, x: usize, y: usize) -> usize {
        y * self.size + x
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> &GridCell {
        &self.cells[self.index(x, y)]
    }

    pub fn get_mut(&mut self, x: usize, y: usize) -> &mut GridCell {
        let idx = self.index(x, y);
        &mut self.cells[idx]
    }

    /// Places a particle; obstacle cells are left untouched.
    pub fn insert_particle(&mut self, x: usize, y: usize, direction: Direction) {
        let cell = self.get_mut(x, y);
        if !cell.obstacle {
            cell.set(direction, true);
        }
    }

    pub fn set_obstacle(&mut self, x: usize, y: usize) {
        *self.get_mut(x, y) = GridCell::OBSTACLE;
    }

    pub fn is_edge(&self, x: usize, y: usize) -> bool {
        is_ring(self.size, x, y)
    }

    /// Row `y` as a slice ordered by `x`.
    pub fn row(&self, y: usize) -> &[GridCell] {
        let start = y * self.size;
        &self.cells[start..start + self.size]
    }

    /// Iterates `(x, y, cell)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &GridCell)> {
        let size = self.size.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, cell)| (idx % size, idx / size, cell))
    }

    /// Total number of set direction flags.
    pub fn particle_count(&self) -> usize {
        self.cells.iter().map(|c| c.particle_count() as usize).sum()
    }

    pub fn obstacle_count(&self) -> usize {
        self.cells.iter().filter(|c| c.obstacle).count()
    }
}
