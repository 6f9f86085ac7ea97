//! The generation rule applied over one worker's slice.

use crate::grid::Grid;
use crate::partition::Partition;

/// Classic four-clause rule: a live cell survives on 2 or 3 live
/// neighbors, a dead cell is born on exactly 3.
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    match (alive, neighbors) {
        (true, 2) | (true, 3) => true, // survival
        (false, 3) => true,            // birth
        _ => false,                    // death or stays dead
    }
}

/// Step every cell in `partition` against the complete previous grid,
/// producing this worker's fragment of the next generation.
///
/// The full grid is required because cells near the slice boundary have
/// neighbors inside other workers' slices. The previous grid is never
/// mutated; the fragment is a fresh value.
pub fn step_local(grid: &Grid, partition: &Partition) -> Vec<bool> {
    let mut fragment = Vec::with_capacity(partition.length);
    for index in partition.range() {
        let alive = grid.get(index);
        let neighbors = grid.count_neighbors(index);
        fragment.push(next_state(alive, neighbors));
    }
    fragment
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_table() {
        for neighbors in 0..=8 {
            assert_eq!(
                next_state(true, neighbors),
                neighbors == 2 || neighbors == 3,
                "live cell with {neighbors} neighbors"
            );
            assert_eq!(
                next_state(false, neighbors),
                neighbors == 3,
                "dead cell with {neighbors} neighbors"
            );
        }
    }

    #[test]
    fn fragment_length_matches_partition() {
        let grid = Grid::dead(10, 10);
        for part in Partition::split(grid.len(), 3) {
            assert_eq!(step_local(&grid, &part).len(), part.length);
        }
    }

    #[test]
    fn boundary_cells_read_neighbor_slices() {
        // A horizontal triple straddling the boundary between two slices
        // still produces its births; the stepper reads the full grid.
        let mut grid = Grid::dead(6, 6);
        grid.set_xy(2, 2, true);
        grid.set_xy(3, 2, true);
        grid.set_xy(4, 2, true);

        let parts = Partition::split(grid.len(), 2);
        let cell_above = grid.index(3, 1); // born next round, lives in rank 0
        let cell_below = grid.index(3, 3); // born next round, lives in rank 1
        assert!(parts[0].range().contains(&cell_above));
        assert!(parts[1].range().contains(&cell_below));

        let low = step_local(&grid, &parts[0]);
        let high = step_local(&grid, &parts[1]);
        assert!(low[cell_above - parts[0].start]);
        assert!(high[cell_below - parts[1].start]);
    }
}
