mod common;

use common::{rng, run_lattice, GridBuilder};
use tessera_core::lattice::{initialize, step};
use tessera_core::pressure::pressure;
use tessera_core::AutomatonError;
use tessera_data::{Direction, GridCell, WallConfig};

#[test]
fn test_five_by_five_wall_has_single_gap() {
    let wall = WallConfig::new(5, 2, 1);
    let grid = initialize(&wall, 0.0, &mut rng(1)).unwrap();

    for x in 0..5 {
        let open = x == 2;
        assert_eq!(grid.get(x, 2).obstacle, !open, "wall row at x={x}");
    }
    for i in 0..5 {
        assert!(grid.get(i, 0).obstacle);
        assert!(grid.get(i, 4).obstacle);
        assert!(grid.get(0, i).obstacle);
        assert!(grid.get(4, i).obstacle);
    }
    assert_eq!(grid.obstacle_count(), 18);
    assert_particles!(grid, 0);
}

#[test]
fn test_even_wall_size_is_coerced_odd() {
    assert_eq!(WallConfig::coerced(50, 25, 4).wall_size, 5);
    assert_eq!(WallConfig::coerced(6, 3, 6).wall_size, 5);
    assert_eq!(WallConfig::coerced(50, 60, 70), WallConfig::new(50, 25, 25));
}

#[test]
fn test_full_density_fills_upper_side_only() {
    let wall = WallConfig::new(10, 5, 3);
    let grid = initialize(&wall, 1.0, &mut rng(7)).unwrap();
    assert_particles!(grid, 8 * 4 * 4);
    for (_, y, cell) in grid.iter() {
        if y > 5 {
            assert_eq!(cell.particle_count(), 0);
        }
    }
    let sample = pressure(&grid, &wall);
    assert_eq!(sample.upper, 1.0);
    assert_eq!(sample.lower, 0.0);
}

#[test]
fn test_invalid_geometry_rejected() {
    let cases = [
        (WallConfig::new(2, 1, 1), 0.5),
        (WallConfig::new(10, 11, 3), 0.5),
        (WallConfig::new(10, 5, 11), 0.5),
        (WallConfig::new(10, 5, 3), 1.5),
        (WallConfig::new(10, 5, 3), -0.1),
    ];
    for (wall, density) in cases {
        let err = initialize(&wall, density, &mut rng(0)).unwrap_err();
        assert!(matches!(err, AutomatonError::InvalidConfig(_)), "{wall:?} {density}");
    }
}

#[test]
fn test_horizontal_collision_symmetry() {
    let grid = GridBuilder::new(7)
        .with_particle(2, 3, Direction::Right)
        .with_particle(4, 3, Direction::Left)
        .build();
    let cell = *step(&grid).get(3, 3);
    assert_eq!(
        cell,
        GridCell::EMPTY
            .with(Direction::Up, true)
            .with(Direction::Down, true)
    );
}

#[test]
fn test_vertical_collision_symmetry() {
    let grid = GridBuilder::new(7)
        .with_particle(3, 2, Direction::Down)
        .with_particle(3, 4, Direction::Up)
        .build();
    let cell = *step(&grid).get(3, 3);
    assert_eq!(
        cell,
        GridCell::EMPTY
            .with(Direction::Left, true)
            .with(Direction::Right, true)
    );
}

#[test]
fn test_four_particle_cell_passes_through() {
    let grid = GridBuilder::new(7)
        .with_particle(2, 3, Direction::Right)
        .with_particle(4, 3, Direction::Left)
        .with_particle(3, 2, Direction::Down)
        .with_particle(3, 4, Direction::Up)
        .build();
    assert_eq!(step(&grid).get(3, 3).particle_count(), 4);
}

#[test]
fn test_single_particle_conserved_while_bouncing() {
    let grid = GridBuilder::new(8)
        .with_particle(2, 5, Direction::Left)
        .build();
    let mut current = grid;
    for tick in 0..60 {
        current = step(&current);
        assert_eq!(current.particle_count(), 1, "tick {tick}");
    }
}

#[test]
fn test_head_on_pair_conserved() {
    let grid = GridBuilder::new(7)
        .with_particle(2, 3, Direction::Right)
        .with_particle(4, 3, Direction::Left)
        .build();
    let mut current = grid;
    for tick in 0..40 {
        current = step(&current);
        assert_eq!(current.particle_count(), 2, "tick {tick}");
    }
}

#[test]
fn test_obstacles_immutable_under_random_load() {
    let wall = WallConfig::coerced(30, 15, 5);
    let initial = initialize(&wall, 0.6, &mut rng(99)).unwrap();
    let after = run_lattice(initial.clone(), 30);
    assert_obstacles_fixed!(initial, after);
    assert_eq!(initial.obstacle_count(), after.obstacle_count());
}

#[test]
fn test_particle_crosses_gap() {
    let builder = GridBuilder::new(9)
        .with_wall(4, 1)
        .with_particle(4, 2, Direction::Down);
    let wall = builder.wall();
    let grid = builder.build();
    assert!(grid.get(3, 4).obstacle);
    assert!(!grid.get(4, 4).obstacle);

    let after = run_lattice(grid, 3);
    assert!(after.get(4, 5).down);
    let sample = pressure(&after, &wall);
    assert_eq!(sample.upper, 0.0);
    assert!(sample.lower > 0.0);
}

#[test]
fn test_particles_leak_to_lower_side_over_time() {
    let wall = WallConfig::coerced(20, 10, 5);
    let initial = initialize(&wall, 0.5, &mut rng(3)).unwrap();
    assert_eq!(pressure(&initial, &wall).lower, 0.0);
    let after = run_lattice(initial, 200);
    assert!(pressure(&after, &wall).lower > 0.0);
}
