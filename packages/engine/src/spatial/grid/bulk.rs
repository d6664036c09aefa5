use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use rand::{Rng, RngCore};

use super::*;

impl Grid {
    /// Kill every cell.
    pub fn clear(&mut self) {
        self.front.clear();
    }

    /// Each cell independently alive with probability 0.5.
    pub fn randomize_with<R: RngCore + ?Sized>(&mut self, rng: &mut R) {
        for idx in 0..self.size {
            let cell = if rng.gen_bool(0.5) { Cell::NEWBORN } else { Cell::DEAD };
            self.front.write(idx, cell);
        }
    }

    /// Replace the board from a row-major buffer (nonzero = alive).
    pub fn load_alive(&mut self, cells: &[u8]) -> Result<()> {
        if cells.len() != self.size {
            return Err(LifeError::DimensionMismatch {
                expected: self.size,
                actual: cells.len(),
            });
        }
        for (idx, &alive) in cells.iter().enumerate() {
            let cell = if alive != 0 { Cell::NEWBORN } else { Cell::DEAD };
            self.front.write(idx, cell);
        }
        Ok(())
    }

    /// Revive cells at `origin + offset`, wrapping around the torus.
    /// Returns how many offsets were applied.
    pub fn stamp<I>(&mut self, origin: Coord, offsets: I) -> usize
    where
        I: IntoIterator<Item = (u32, u32)>,
    {
        let height = self.height as u64;
        let width = self.width as u64;
        let mut stamped = 0;

        for (d_row, d_col) in offsets {
            let row = ((origin.row as u64 + d_row as u64) % height) as u32;
            let col = ((origin.col as u64 + d_col as u64) % width) as u32;
            let idx = self.index(row, col);
            self.front.revive(idx);
            stamped += 1;
        }
        stamped
    }

    /// Hash of the full visible state (dimensions, alive and streak planes).
    pub fn checksum(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.width.hash(&mut hasher);
        self.height.hash(&mut hasher);
        self.front.alive.hash(&mut hasher);
        self.front.streak.hash(&mut hasher);
        hasher.finish()
    }

    /// Hash of the alive plane only; streaks grow on still lifes, so cycle
    /// detection must ignore them.
    pub fn alive_checksum(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.width.hash(&mut hasher);
        self.height.hash(&mut hasher);
        self.front.alive.hash(&mut hasher);
        hasher.finish()
    }
}
