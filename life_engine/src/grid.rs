//! Toroidal grid state and flat-index neighbor arithmetic.

use rand::Rng;

use crate::error::ConfigError;

/// One complete generation: `width * height` cell states addressed by the
/// flat index `i = y * width + x`. A grid value is never mutated while a
/// round is in flight; stepping produces a fresh grid that replaces it at
/// the round boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// All-dead grid.
    pub fn dead(width: usize, height: usize) -> Self {
        Grid {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    /// Independent Bernoulli draw per cell at `live_fraction`, which must
    /// already be validated to lie within `0.0..=1.0`.
    pub fn random<R: Rng + ?Sized>(
        width: usize,
        height: usize,
        live_fraction: f64,
        rng: &mut R,
    ) -> Self {
        let cells = (0..width * height)
            .map(|_| rng.gen_bool(live_fraction))
            .collect();
        Grid { width, height, cells }
    }

    /// Wrap an existing cell vector, checking the length invariant.
    pub fn from_cells(width: usize, height: usize, cells: Vec<bool>) -> Result<Self, ConfigError> {
        let expected = width * height;
        if cells.len() != expected {
            return Err(ConfigError::CellCountMismatch {
                width,
                height,
                expected,
                got: cells.len(),
            });
        }
        Ok(Grid { width, height, cells })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total cell count `width * height`.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    pub fn get(&self, index: usize) -> bool {
        self.cells[index]
    }

    pub fn get_xy(&self, x: usize, y: usize) -> bool {
        self.cells[self.index(x, y)]
    }

    pub fn set_xy(&mut self, x: usize, y: usize, alive: bool) {
        let index = self.index(x, y);
        self.cells[index] = alive;
    }

    pub fn toggle_xy(&mut self, x: usize, y: usize) {
        let index = self.index(x, y);
        self.cells[index] = !self.cells[index];
    }

    pub fn live_cells(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Live count over the 8 toroidal neighbors of `index`.
    ///
    /// The wrap on both axes comes from taking each fixed flat offset
    /// modulo the total cell count, so no 2-D coordinate translation is
    /// needed here.
    pub fn count_neighbors(&self, index: usize) -> u8 {
        let n = self.cells.len() as isize;
        let w = self.width as isize;
        let offsets = [
            -1,     // left
            1,      // right
            w - 1,  // down-left
            w,      // down
            w + 1,  // down-right
            -w - 1, // up-left
            -w,     // up
            -w + 1, // up-right
        ];

        let mut count = 0;
        for step in offsets {
            let wrapped = (index as isize + step).rem_euclid(n) as usize;
            if self.cells[wrapped] {
                count += 1;
            }
        }
        count
    }
}
