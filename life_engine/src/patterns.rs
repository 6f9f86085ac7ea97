//! Named seed patterns, stamped anywhere on the torus.

use crate::grid::Grid;

pub struct Pattern {
    pub name: &'static str,
    /// `(x, y)` offsets from the stamp origin.
    pub cells: &'static [(usize, usize)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (1, 0), (2, 0)],
    },
    Pattern {
        name: "Toad",
        cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
    },
    Pattern {
        name: "Block",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
    },
];

/// Set the pattern's cells starting at `origin`, wrapping on both axes.
pub fn stamp(grid: &mut Grid, pattern: &Pattern, origin: (usize, usize)) {
    for &(dx, dy) in pattern.cells {
        let x = (origin.0 + dx) % grid.width();
        let y = (origin.1 + dy) % grid.height();
        grid.set_xy(x, y, true);
    }
}
