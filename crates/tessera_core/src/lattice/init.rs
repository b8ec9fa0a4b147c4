use super::Grid;
use crate::error::{AutomatonError, Result};
use rand::Rng;
use tessera_data::{Direction, GridCell, WallConfig};

/// Smallest grid with at least one interior cell.
pub const MIN_GRID_SIZE: usize = 3;

/// Rejects wall geometry the initializer cannot build.
pub fn validate_wall(config: &WallConfig) -> Result<()> {
    if config.grid_size < MIN_GRID_SIZE {
        return Err(AutomatonError::invalid_config(format!(
            "grid size {} is smaller than {MIN_GRID_SIZE}",
            config.grid_size
        )));
    }
    if config.wall_position > config.grid_size {
        return Err(AutomatonError::invalid_config(format!(
            "wall position {} exceeds grid size {}",
            config.wall_position, config.grid_size
        )));
    }
    if config.wall_size > config.grid_size {
        return Err(AutomatonError::invalid_config(format!(
            "wall size {} exceeds grid size {}",
            config.wall_size, config.grid_size
        )));
    }
    Ok(())
}

pub fn validate_density(density: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&density) {
        return Err(AutomatonError::invalid_config(format!(
            "particle density {density} outside [0, 1]"
        )));
    }
    Ok(())
}

/// Empty grid with the border ring and the wall marked as obstacles.
pub fn walled_grid(config: &WallConfig) -> Result<Grid> {
    validate_wall(config)?;
    let size = config.grid_size;
    let cells = (0..size * size)
        .map(|idx| {
            if config.is_obstacle(idx % size, idx / size) {
                GridCell::OBSTACLE
            } else {
                GridCell::EMPTY
            }
        })
        .collect();
    Grid::from_cells(size, cells)
}

/// Builds the initial lattice.
///
/// Every open cell above the wall (`y < wall_position`) gets each of its four
/// direction flags independently with probability `density`; the far side
/// starts empty.
pub fn initialize<R: Rng + ?Sized>(config: &WallConfig, density: f64, rng: &mut R) -> Result<Grid> {
    validate_density(density)?;
    let mut grid = walled_grid(config)?;
    let size = grid.size();
    for y in 0..config.wall_position.min(size) {
        for x in 0..size {
            let cell = grid.get_mut(x, y);
            if cell.obstacle {
                continue;
            }
            for direction in Direction::ALL {
                cell.set(direction, rng.gen_bool(density));
            }
        }
    }
    tracing::debug!(
        grid_size = size,
        wall_position = config.wall_position,
        wall_size = config.wall_size,
        particles = grid.particle_count(),
        "Lattice initialized"
    );
    Ok(grid)
}
