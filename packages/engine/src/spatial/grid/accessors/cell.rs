use super::super::*;

impl Grid {
    // === Cell access ===
    pub fn get(&self, row: u32, col: u32) -> Result<Cell> {
        let idx = self.checked_index(row, col)?;
        Ok(self.front.cell(idx))
    }

    #[inline]
    pub fn cell_idx(&self, idx: usize) -> Cell {
        self.front.cell(idx)
    }

    /// Dead -> alive starts a streak at 0, alive -> alive keeps it,
    /// anything -> dead resets it.
    pub fn set_alive(&mut self, row: u32, col: u32, alive: bool) -> Result<()> {
        let idx = self.checked_index(row, col)?;
        if alive {
            self.front.revive(idx);
        } else {
            self.front.write(idx, Cell::DEAD);
        }
        Ok(())
    }

    // === Aggregates ===
    /// Live cell count; `check_dimensions` keeps it within `u32`.
    pub fn population(&self) -> u32 {
        let live = self.front.alive.iter().filter(|&&a| a != 0).count();
        u32::try_from(live).unwrap_or(u32::MAX)
    }

    pub fn live_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.front
            .alive
            .iter()
            .enumerate()
            .filter(|&(_, &a)| a != 0)
            .map(move |(idx, _)| self.coords(idx))
    }

    /// Read-only view of the alive plane (row-major, 0/1).
    pub fn alive_plane(&self) -> &[u8] {
        &self.front.alive
    }

    pub fn streak_plane(&self) -> &[i32] {
        &self.front.streak
    }
}
