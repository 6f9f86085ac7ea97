//! End-to-end properties of the distributed stepping loop.

use rand::SeedableRng;
use rand::rngs::StdRng;

use life_engine::patterns::{self, PATTERNS};
use life_engine::step::step_local;
use life_engine::{Cluster, Grid, Partition};

fn pattern(name: &str) -> &'static patterns::Pattern {
    PATTERNS.iter().find(|p| p.name == name).unwrap()
}

/// Single-slice step over the whole grid, the P = 1 reference path.
fn step_full(grid: &Grid) -> Grid {
    let part = Partition::new(grid.len(), 1, 0);
    Grid::from_cells(grid.width(), grid.height(), step_local(grid, &part)).unwrap()
}

#[test]
fn dead_grid_is_a_fixed_point() {
    let mut cluster = Cluster::with_grid(4, Grid::dead(8, 8)).unwrap();
    for _ in 0..5 {
        assert_eq!(cluster.advance().unwrap().live_cells(), 0);
    }
}

#[test]
fn lone_cell_dies_in_one_round() {
    let mut grid = Grid::dead(8, 8);
    grid.set_xy(4, 4, true);
    let mut cluster = Cluster::with_grid(3, grid).unwrap();

    assert_eq!(cluster.advance().unwrap().live_cells(), 0);
    // ...and the grid stays dead from then on.
    assert_eq!(cluster.advance().unwrap().live_cells(), 0);
}

#[test]
fn block_still_life_survives_ten_rounds() {
    let mut grid = Grid::dead(8, 8);
    patterns::stamp(&mut grid, pattern("Block"), (3, 3));
    let start = grid.clone();

    let mut cluster = Cluster::with_grid(3, grid).unwrap();
    for round in 1..=10 {
        assert_eq!(cluster.advance().unwrap(), &start, "round {round}");
    }
}

#[test]
fn glider_translates_by_one_one_every_four_rounds() {
    let mut grid = Grid::dead(16, 16);
    patterns::stamp(&mut grid, pattern("Glider"), (4, 4));

    let mut expected = Grid::dead(16, 16);
    patterns::stamp(&mut expected, pattern("Glider"), (5, 5));

    let mut cluster = Cluster::with_grid(4, grid).unwrap();
    for _ in 0..4 {
        cluster.advance().unwrap();
    }
    assert_eq!(cluster.snapshot(), &expected);
}

#[test]
fn worker_count_does_not_change_results() {
    let mut rng = StdRng::seed_from_u64(42);
    let initial = Grid::random(12, 10, 0.3, &mut rng);

    let mut single = Cluster::with_grid(1, initial.clone()).unwrap();
    let mut seven = Cluster::with_grid(7, initial).unwrap();
    for round in 1..=6 {
        let a = single.advance().unwrap().clone();
        let b = seven.advance().unwrap().clone();
        assert_eq!(a, b, "round {round}");
    }
}

#[test]
fn cluster_rounds_match_the_reference_path() {
    let mut rng = StdRng::seed_from_u64(7);
    let initial = Grid::random(9, 11, 0.25, &mut rng);

    let mut reference = initial.clone();
    let mut cluster = Cluster::with_grid(5, initial).unwrap();
    for round in 1..=5 {
        reference = step_full(&reference);
        assert_eq!(cluster.advance().unwrap(), &reference, "round {round}");
    }
}

#[test]
fn snapshot_reflects_only_completed_rounds() {
    let mut grid = Grid::dead(6, 6);
    patterns::stamp(&mut grid, pattern("Blinker"), (1, 2));
    let start = grid.clone();

    let cluster_grid = grid.clone();
    let mut cluster = Cluster::with_grid(2, cluster_grid).unwrap();
    // Before any advance the snapshot is the seed grid, even though the
    // workers are already computing round 1.
    assert_eq!(cluster.snapshot(), &start);

    let after = cluster.advance().unwrap().clone();
    assert_eq!(after, step_full(&start));
    assert_eq!(cluster.snapshot(), &after);
}
