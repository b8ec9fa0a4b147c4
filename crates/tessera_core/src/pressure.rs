//! Pressure on either side of the dividing wall.

use crate::lattice::Grid;
use tessera_data::{PressureSample, WallConfig};

/// Raw particle counts `(upper, lower)`; the wall row belongs to neither side.
pub fn side_counts(grid: &Grid, wall_position: usize) -> (usize, usize) {
    let mut upper = 0;
    let mut lower = 0;
    for (_, y, cell) in grid.iter() {
        if cell.obstacle {
            continue;
        }
        let n = cell.particle_count() as usize;
        if y < wall_position {
            upper += n;
        } else if y > wall_position {
            lower += n;
        }
    }
    (upper, lower)
}

/// Particle counts normalized by the theoretical maximum of each side.
///
/// A side with zero capacity reports zero pressure.
pub fn pressure(grid: &Grid, wall: &WallConfig) -> PressureSample {
    let (upper, lower) = side_counts(grid, wall.wall_position);
    let max = wall.max_occupancy();
    let ratio = |count: usize, capacity: usize| {
        if capacity == 0 {
            0.0
        } else {
            count as f64 / capacity as f64
        }
    };
    PressureSample {
        lower: ratio(lower, max.lower),
        upper: ratio(upper, max.upper),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lattice::init::walled_grid;
    use tessera_data::Direction;

    #[test]
    fn test_counts_split_at_wall_row() {
        let wall = WallConfig::new(9, 4, 3);
        let mut grid = walled_grid(&wall).unwrap();
        grid.insert_particle(2, 2, Direction::Up);
        grid.insert_particle(2, 2, Direction::Left);
        grid.insert_particle(4, 4, Direction::Down);
        grid.insert_particle(5, 6, Direction::Right);
        assert_eq!(side_counts(&grid, 4), (2, 1));
    }

    #[test]
    fn test_pressure_normalization() {
        let wall = WallConfig::new(9, 4, 3);
        let mut grid = walled_grid(&wall).unwrap();
        grid.insert_particle(2, 2, Direction::Up);
        grid.insert_particle(5, 6, Direction::Right);
        let sample = pressure(&grid, &wall);
        let max = wall.max_occupancy();
        assert_eq!(max.upper, 7 * 3 * 4);
        assert_eq!(max.lower, 7 * 3 * 4);
        assert!((sample.upper - 1.0 / 84.0).abs() < 1e-12);
        assert!((sample.lower - 1.0 / 84.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_capacity_side() {
        let wall = WallConfig::new(9, 1, 3);
        let grid = walled_grid(&wall).unwrap();
        let sample = pressure(&grid, &wall);
        assert_eq!(sample.upper, 0.0);
        assert_eq!(sample.lower, 0.0);
    }
}
