use super::*;
use crate::cell::STREAK_UNSET;

/// One generation's worth of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CellBuffer {
    pub(crate) alive: Vec<u8>,
    pub(crate) streak: Vec<i32>,
}

impl CellBuffer {
    /// `None` when either plane cannot be allocated.
    pub(crate) fn try_new(size: usize) -> Option<Self> {
        Some(Self {
            alive: filled_plane(size, 0)?,
            streak: filled_plane(size, STREAK_UNSET)?,
        })
    }

    #[inline]
    pub(crate) fn cell(&self, idx: usize) -> Cell {
        Cell::from_planes(self.alive[idx], self.streak[idx])
    }

    #[inline]
    pub(crate) fn write(&mut self, idx: usize, cell: Cell) {
        self.alive[idx] = cell.alive as u8;
        self.streak[idx] = cell.alive_streak;
    }

    /// Mark alive, keeping an existing streak.
    #[inline]
    pub(crate) fn revive(&mut self, idx: usize) {
        if self.alive[idx] == 0 {
            self.write(idx, Cell::NEWBORN);
        }
    }

    pub(crate) fn clear(&mut self) {
        self.alive.fill(0);
        self.streak.fill(STREAK_UNSET);
    }
}

fn filled_plane<T: Clone>(len: usize, value: T) -> Option<Vec<T>> {
    let mut plane = Vec::new();
    plane.try_reserve_exact(len).ok()?;
    plane.resize(len, value);
    Some(plane)
}
