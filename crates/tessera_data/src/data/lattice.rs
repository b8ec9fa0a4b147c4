use serde::{Deserialize, Serialize};

/// Direction of travel of a lattice-gas particle.
///
/// `Up` moves toward `y - 1` (the seeded side of the wall), `Down` toward
/// `y + 1`, `Left` toward `x - 1` and `Right` toward `x + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];
}

/// One lattice site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GridCell {
    pub obstacle: bool,
    pub up: bool,
    pub right: bool,
    pub down: bool,
    pub left: bool,
}

impl GridCell {
    pub const EMPTY: GridCell = GridCell {
        obstacle: false,
        up: false,
        right: false,
        down: false,
        left: false,
    };

    pub const OBSTACLE: GridCell = GridCell {
        obstacle: true,
        up: false,
        right: false,
        down: false,
        left: false,
    };

    #[inline]
    pub fn has(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.up,
            Direction::Right => self.right,
            Direction::Down => self.down,
            Direction::Left => self.left,
        }
    }

    #[inline]
    pub fn set(&mut self, direction: Direction, value: bool) {
        match direction {
            Direction::Up => self.up = value,
            Direction::Right => self.right = value,
            Direction::Down => self.down = value,
            Direction::Left => self.left = value,
        }
    }

    /// Builder-style variant of [`GridCell::set`].
    pub fn with(mut self, direction: Direction, value: bool) -> Self {
        self.set(direction, value);
        self
    }

    #[inline]
    pub fn particle_count(&self) -> u32 {
        self.up as u32 + self.right as u32 + self.down as u32 + self.left as u32
    }

    pub fn is_occupied(&self) -> bool {
        self.particle_count() > 0
    }
}

/// Geometry of the dividing wall inside a square grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallConfig {
    pub grid_size: usize,
    /// Row index (`y`) of the wall.
    pub wall_position: usize,
    /// Width of the central gap; odd after coercion.
    pub wall_size: usize,
}

/// Theoretical particle capacity on each side of the wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MaxOccupancy {
    pub upper: usize,
    pub lower: usize,
}

impl WallConfig {
    /// Raw constructor; no coercion or validation.
    pub fn new(grid_size: usize, wall_position: usize, wall_size: usize) -> Self {
        Self {
            grid_size,
            wall_position,
            wall_size,
        }
    }

    /// Applies the settings-panel coercion rules.
    ///
    /// Values beyond the grid fall back to half the grid size, and an even
    /// gap is widened to the next odd width (narrowed when that would not fit).
    pub fn coerced(grid_size: usize, wall_position: usize, wall_size: usize) -> Self {
        let half = grid_size.div_ceil(2);
        let wall_position = if wall_position > grid_size {
            half
        } else {
            wall_position
        };
        let mut wall_size = if wall_size > grid_size { half } else { wall_size };
        if wall_size % 2 == 0 {
            wall_size = if wall_size < grid_size {
                wall_size + 1
            } else {
                wall_size.saturating_sub(1)
            };
        }
        Self {
            grid_size,
            wall_position,
            wall_size,
        }
    }

    pub fn is_border(&self, x: usize, y: usize) -> bool {
        let last = self.grid_size.saturating_sub(1);
        x == 0 || y == 0 || x >= last || y >= last
    }

    /// Wall-geometry predicate: border ring plus the wall row outside the gap.
    pub fn is_obstacle(&self, x: usize, y: usize) -> bool {
        if self.is_border(x, y) {
            return true;
        }
        y == self.wall_position && x.abs_diff(self.grid_size / 2) > self.wall_size / 2
    }

    pub fn max_occupancy(&self) -> MaxOccupancy {
        let inner_width = self.grid_size.saturating_sub(2);
        let upper_rows = self.wall_position.saturating_sub(1);
        let lower_rows = self
            .grid_size
            .saturating_sub(self.wall_position)
            .saturating_sub(2);
        MaxOccupancy {
            upper: inner_width * upper_rows * 4,
            lower: inner_width * lower_rows * 4,
        }
    }
}

impl Default for WallConfig {
    fn default() -> Self {
        Self::coerced(50, 25, 25)
    }
}
