//! Cell - the per-coordinate value handed to renderers
//!
//! The grid stores cells as two planes (alive bytes + streak words); `Cell`
//! is the small `Copy` view assembled on read.

/// Streak of a dead cell.
pub const STREAK_UNSET: i32 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub alive: bool,
    /// Consecutive generations alive, `STREAK_UNSET` while dead.
    pub alive_streak: i32,
}

impl Cell {
    pub const DEAD: Cell = Cell { alive: false, alive_streak: STREAK_UNSET };
    pub const NEWBORN: Cell = Cell { alive: true, alive_streak: 0 };

    #[inline]
    pub(crate) fn from_planes(alive: u8, streak: i32) -> Self {
        Cell { alive: alive != 0, alive_streak: streak }
    }

    /// Generations alive so far, `None` for a dead cell.
    #[inline]
    pub fn streak(&self) -> Option<u32> {
        u32::try_from(self.alive_streak).ok().filter(|_| self.alive)
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::DEAD
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: u32,
    pub col: u32,
}

impl Coord {
    #[inline]
    pub const fn new(row: u32, col: u32) -> Self {
        Coord { row, col }
    }
}
