use super::*;
use crate::domain::rules::{self, NEIGHBOR_OFFSETS};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Births and deaths produced by one generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Transition {
    pub births: u32,
    pub deaths: u32,
}

impl Transition {
    #[inline]
    fn merge(self, other: Transition) -> Transition {
        Transition {
            births: self.births + other.births,
            deaths: self.deaths + other.deaths,
        }
    }
}

impl Grid {
    /// Advance one generation and swap buffers.
    /// PARALLEL: rows are computed with Rayon on large boards
    pub fn step(&mut self) -> Transition {
        #[cfg(feature = "parallel")]
        {
            if self.height >= PARALLEL_MIN_ROWS {
                return self.step_parallel();
            }
        }
        self.step_sequential()
    }

    pub fn step_sequential(&mut self) -> Transition {
        if self.size == 0 {
            return Transition::default();
        }
        let width = self.width as usize;
        let height = self.height as usize;

        let front = &self.front;
        let CellBuffer { alive, streak } = &mut self.back;
        let transition = alive
            .chunks_mut(width)
            .zip(streak.chunks_mut(width))
            .enumerate()
            .map(|(row, (alive_row, streak_row))| {
                step_row(front, row, width, height, alive_row, streak_row)
            })
            .fold(Transition::default(), Transition::merge);

        std::mem::swap(&mut self.front, &mut self.back);
        transition
    }

    /// Same result as `step_sequential`; each row task only reads `front`.
    #[cfg(feature = "parallel")]
    pub fn step_parallel(&mut self) -> Transition {
        if self.size == 0 {
            return Transition::default();
        }
        let width = self.width as usize;
        let height = self.height as usize;

        let front = &self.front;
        let CellBuffer { alive, streak } = &mut self.back;
        let transition = alive
            .par_chunks_mut(width)
            .zip(streak.par_chunks_mut(width))
            .enumerate()
            .map(|(row, (alive_row, streak_row))| {
                step_row(front, row, width, height, alive_row, streak_row)
            })
            .reduce(Transition::default, Transition::merge);

        std::mem::swap(&mut self.front, &mut self.back);
        transition
    }

    /// Live neighbors of `(row, col)` on the torus, as `step()` counts them.
    pub fn neighbor_count(&self, row: u32, col: u32) -> Result<u8> {
        self.checked_index(row, col)?;
        Ok(NEIGHBOR_OFFSETS
            .iter()
            .map(|&(d_row, d_col)| self.front.alive[self.wrapped_index(row, col, d_row, d_col)])
            .sum())
    }

    /// Next generation as an independent grid; `self` is untouched.
    pub fn successor(&self) -> Grid {
        let mut next = self.clone();
        next.step();
        next
    }
}

/// Compute one row of the next generation into `alive_out`/`streak_out`.
#[inline]
fn step_row(
    front: &CellBuffer,
    row: usize,
    width: usize,
    height: usize,
    alive_out: &mut [u8],
    streak_out: &mut [i32],
) -> Transition {
    let row_bases = [
        wrap(row, -1, height) * width,
        row * width,
        wrap(row, 1, height) * width,
    ];
    let mut transition = Transition::default();

    for col in 0..width {
        let cols = [wrap(col, -1, width), col, wrap(col, 1, width)];

        let mut neighbors = 0u8;
        for (i, &base) in row_bases.iter().enumerate() {
            for (j, &c) in cols.iter().enumerate() {
                if i == 1 && j == 1 {
                    continue; // self
                }
                neighbors += front.alive[base + c];
            }
        }

        let idx = row * width + col;
        let was_alive = front.alive[idx] != 0;
        let now_alive = rules::next_alive(was_alive, neighbors);

        alive_out[col] = now_alive as u8;
        streak_out[col] = rules::next_streak(was_alive, front.streak[idx], now_alive);

        match (was_alive, now_alive) {
            (false, true) => transition.births += 1,
            (true, false) => transition.deaths += 1,
            _ => {}
        }
    }
    transition
}
