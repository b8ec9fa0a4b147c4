pub mod macros;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tessera_core::lattice::init::walled_grid;
use tessera_core::{Grid, Line, RuleTable};
use tessera_data::{Direction, Symbol, WallConfig};

#[allow(dead_code)]
pub fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Builds small lattices by hand: a border ring, an optional wall row and
/// explicitly placed particles.
#[allow(dead_code)]
pub struct GridBuilder {
    wall: WallConfig,
    particles: Vec<(usize, usize, Direction)>,
}

#[allow(dead_code)]
impl GridBuilder {
    /// An open box of `size`: border obstacles only.
    pub fn new(size: usize) -> Self {
        Self {
            wall: WallConfig::new(size, 0, size),
            particles: Vec::new(),
        }
    }

    pub fn with_wall(mut self, position: usize, gap: usize) -> Self {
        self.wall = WallConfig::new(self.wall.grid_size, position, gap);
        self
    }

    pub fn with_particle(mut self, x: usize, y: usize, direction: Direction) -> Self {
        self.particles.push((x, y, direction));
        self
    }

    pub fn wall(&self) -> WallConfig {
        self.wall
    }

    pub fn build(self) -> Grid {
        let mut grid = walled_grid(&self.wall).expect("valid test wall");
        for (x, y, direction) in self.particles {
            grid.insert_particle(x, y, direction);
        }
        grid
    }
}

#[allow(dead_code)]
pub fn line(digits: &str) -> Line {
    Line::from_digits(digits).expect("valid test line")
}

/// A table that maps every neighborhood to its center symbol.
#[allow(dead_code)]
pub fn identity_rules() -> RuleTable {
    let mut rules = RuleTable::new();
    for n in tessera_data::Neighborhood::all() {
        rules.set(n, n.center);
    }
    rules
}

#[allow(dead_code)]
pub fn uniform_rules(symbol: Symbol) -> RuleTable {
    let mut rules = RuleTable::new();
    for n in tessera_data::Neighborhood::all() {
        rules.set(n, symbol);
    }
    rules
}

/// Runs `ticks` lattice steps.
#[allow(dead_code)]
pub fn run_lattice(mut grid: Grid, ticks: usize) -> Grid {
    for _ in 0..ticks {
        grid = tessera_core::lattice::step(&grid);
    }
    grid
}
