/// Asserts the total number of particles on a grid.
#[macro_export]
macro_rules! assert_particles {
    ($grid:expr, $count:expr) => {
        assert_eq!(
            $grid.particle_count(),
            $count,
            "Particle count mismatch"
        );
    };
}

/// Asserts that every obstacle of `$before` is still a bare obstacle in `$after`.
#[macro_export]
macro_rules! assert_obstacles_fixed {
    ($before:expr, $after:expr) => {
        for ((x, y, before), (_, _, after)) in $before.iter().zip($after.iter()) {
            if before.obstacle {
                assert_eq!(
                    *after,
                    tessera_data::GridCell::OBSTACLE,
                    "Obstacle at ({}, {}) changed",
                    x,
                    y
                );
            }
        }
    };
}

/// Asserts that a distribution sums to one.
#[macro_export]
macro_rules! assert_normalized {
    ($dist:expr) => {
        let total = $dist.total();
        assert!(
            (total - 1.0).abs() < 1e-9,
            "Distribution sums to {} instead of 1",
            total
        );
    };
}
