//! Propagation and collision for one lattice-gas tick.
//!
//! Each output cell is a function of the prior snapshot only, so rows are
//! independent and may be computed in parallel.

use super::Grid;
use crate::driver::Automaton;
use crate::error::{AutomatonError, Result};
use crate::pressure::pressure;
use tessera_data::{GridCell, PressureSample, WallConfig};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Particles streaming into a cell from its four neighbors.
#[derive(Debug, Clone, Copy, Default)]
struct Arrivals {
    up: bool,
    right: bool,
    down: bool,
    left: bool,
}

impl Arrivals {
    fn horizontal_head_on(&self) -> bool {
        self.left && self.right && !self.up && !self.down
    }

    fn vertical_head_on(&self) -> bool {
        self.up && self.down && !self.left && !self.right
    }
}

/// Streams particles one site and reflects those blocked by obstacles.
fn propagate(current: &Grid, x: usize, y: usize) -> (GridCell, Arrivals) {
    let cell = current.get(x, y);
    let south = current.get(x, y + 1);
    let north = current.get(x, y - 1);
    let west = current.get(x - 1, y);
    let east = current.get(x + 1, y);

    let arrivals = Arrivals {
        up: south.up,
        down: north.down,
        right: west.right,
        left: east.left,
    };
    let next = GridCell {
        obstacle: false,
        up: arrivals.up || (south.obstacle && cell.down),
        down: arrivals.down || (north.obstacle && cell.up),
        right: arrivals.right || (west.obstacle && cell.left),
        left: arrivals.left || (east.obstacle && cell.right),
    };
    (next, arrivals)
}

/// Rotates an exact two-particle head-on pair by 90 degrees.
///
/// Only the symmetric two-particle arrivals are deflected; one, three and
/// four particle states pass through unchanged.
fn collide(mut next: GridCell, arrivals: Arrivals) -> GridCell {
    if arrivals.horizontal_head_on() {
        next.up = true;
        next.down = true;
        next.left = false;
        next.right = false;
    } else if arrivals.vertical_head_on() {
        next.up = false;
        next.down = false;
        next.left = true;
        next.right = true;
    }
    next
}

/// Next state of the site at `(x, y)`. Obstacles and grid edges are fixed.
pub fn next_cell(current: &Grid, x: usize, y: usize) -> GridCell {
    let cell = *current.get(x, y);
    if cell.obstacle || current.is_edge(x, y) {
        return cell;
    }
    let (next, arrivals) = propagate(current, x, y);
    collide(next, arrivals)
}

fn update_row(current: &Grid, y: usize, row: &mut [GridCell]) {
    for (x, out) in row.iter_mut().enumerate() {
        *out = next_cell(current, x, y);
    }
}

/// Advances the whole lattice by one tick.
pub fn step(current: &Grid) -> Grid {
    let size = current.size();
    let mut cells = current.cells().to_vec();

    #[cfg(feature = "parallel")]
    cells
        .par_chunks_mut(size.max(1))
        .enumerate()
        .for_each(|(y, row)| update_row(current, y, row));

    #[cfg(not(feature = "parallel"))]
    cells
        .chunks_mut(size.max(1))
        .enumerate()
        .for_each(|(y, row)| update_row(current, y, row));

    Grid { size, cells }
}

/// [`Automaton`] adapter binding a wall geometry to the lattice step.
#[derive(Debug, Clone, Copy, Default)]
pub struct LatticeEngine {
    pub wall: WallConfig,
}

impl LatticeEngine {
    pub fn new(wall: WallConfig) -> Self {
        Self { wall }
    }
}

impl Automaton for LatticeEngine {
    type Snapshot = Grid;
    type Sample = PressureSample;
    const LABEL: &'static str = "lattice";

    fn advance(&self, current: &Grid) -> Result<Grid> {
        if current.size() != self.wall.grid_size {
            return Err(AutomatonError::invalid_input(format!(
                "grid of size {} does not match configured size {}",
                current.size(),
                self.wall.grid_size
            )));
        }
        Ok(step(current))
    }

    fn observe(&self, snapshot: &Grid) -> PressureSample {
        pressure(snapshot, &self.wall)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lattice::init::walled_grid;
    use tessera_data::Direction;

    /// Open 7x7 box: border ring only.
    fn open_box() -> Grid {
        walled_grid(&WallConfig::new(7, 0, 7)).unwrap()
    }

    #[test]
    fn test_free_particle_moves_one_site() {
        let mut grid = open_box();
        grid.insert_particle(3, 3, Direction::Up);
        let next = step(&grid);
        assert!(next.get(3, 2).up);
        assert_eq!(next.particle_count(), 1);

        let mut grid = open_box();
        grid.insert_particle(3, 3, Direction::Right);
        let next = step(&grid);
        assert!(next.get(4, 3).right);
    }

    #[test]
    fn test_bounce_back_reverses_direction() {
        let mut grid = open_box();
        grid.insert_particle(1, 3, Direction::Left);
        let next = step(&grid);
        assert_eq!(*next.get(1, 3), GridCell::EMPTY.with(Direction::Right, true));

        let mut grid = open_box();
        grid.insert_particle(3, 5, Direction::Down);
        let next = step(&grid);
        assert_eq!(*next.get(3, 5), GridCell::EMPTY.with(Direction::Up, true));
    }

    #[test]
    fn test_horizontal_head_on_turns_vertical() {
        let mut grid = open_box();
        grid.insert_particle(2, 3, Direction::Right);
        grid.insert_particle(4, 3, Direction::Left);
        let cell = *step(&grid).get(3, 3);
        assert!(cell.up && cell.down);
        assert!(!cell.left && !cell.right);
    }

    #[test]
    fn test_vertical_head_on_turns_horizontal() {
        let mut grid = open_box();
        grid.insert_particle(3, 4, Direction::Up);
        grid.insert_particle(3, 2, Direction::Down);
        let cell = *step(&grid).get(3, 3);
        assert!(cell.left && cell.right);
        assert!(!cell.up && !cell.down);
    }

    #[test]
    fn test_three_particles_pass_through() {
        let mut grid = open_box();
        grid.insert_particle(2, 3, Direction::Right);
        grid.insert_particle(4, 3, Direction::Left);
        grid.insert_particle(3, 4, Direction::Up);
        let cell = *step(&grid).get(3, 3);
        assert!(cell.left && cell.right && cell.up);
        assert!(!cell.down);
    }

    #[test]
    fn test_obstacles_never_change() {
        let wall = WallConfig::new(9, 4, 3);
        let mut grid = walled_grid(&wall).unwrap();
        for x in 1..8 {
            grid.insert_particle(x, 3, Direction::Down);
            grid.insert_particle(x, 1, Direction::Left);
        }
        let next = step(&grid);
        for ((_, _, before), (_, _, after)) in grid.iter().zip(next.iter()) {
            if before.obstacle {
                assert_eq!(*after, GridCell::OBSTACLE);
            }
        }
    }

    #[test]
    fn test_step_reads_only_prior_snapshot() {
        // A row of rightward particles: an in-place sweep would carry the
        // leftmost particle across the whole row in one tick.
        let mut grid = walled_grid(&WallConfig::new(10, 0, 10)).unwrap();
        grid.insert_particle(1, 4, Direction::Right);
        let next = step(&grid);
        assert!(next.get(2, 4).right);
        assert!(!next.get(3, 4).right);
    }

    #[test]
    fn test_particle_count_stable_next_to_border() {
        let mut grid = Grid::new(5);
        grid.insert_particle(0, 2, Direction::Right);
        grid.insert_particle(1, 2, Direction::Left);
        grid.insert_particle(3, 1, Direction::Up);
        assert_eq!(grid.particle_count(), 2);
        for _ in 0..4 {
            grid = step(&grid);
            assert_eq!(grid.particle_count(), 2);
        }
    }

    #[test]
    fn test_engine_rejects_mismatched_grid() {
        let engine = LatticeEngine::new(WallConfig::new(9, 4, 3));
        assert!(engine.advance(&Grid::new(5)).is_err());
    }
}
