use super::*;

/// `(value + delta) mod extent`, always in `[0, extent)` for negative deltas.
#[inline]
pub fn wrap(value: usize, delta: isize, extent: usize) -> usize {
    debug_assert!(extent > 0, "wrap: zero extent");
    (value as isize + delta).rem_euclid(extent as isize) as usize
}

impl Grid {
    // === Dimensions ===
    #[inline]
    pub fn width(&self) -> u32 { self.width }

    #[inline]
    pub fn height(&self) -> u32 { self.height }

    #[inline]
    pub fn size(&self) -> usize { self.size }

    // === Index conversion ===
    #[inline]
    pub fn index(&self, row: u32, col: u32) -> usize {
        row as usize * self.width as usize + col as usize
    }

    #[inline]
    pub fn coords(&self, idx: usize) -> Coord {
        let width = self.width as usize;
        Coord::new((idx / width) as u32, (idx % width) as u32)
    }

    // === Bounds checking ===
    #[inline]
    pub fn contains(&self, row: u32, col: u32) -> bool {
        row < self.height && col < self.width
    }

    /// Index for caller-supplied coordinates; never wraps.
    #[inline]
    pub fn checked_index(&self, row: u32, col: u32) -> Result<usize> {
        if !self.contains(row, col) {
            return Err(LifeError::IndexOutOfBounds {
                row,
                col,
                height: self.height,
                width: self.width,
            });
        }
        Ok(self.index(row, col))
    }

    /// Index of `(row + d_row, col + d_col)` on the torus.
    #[inline]
    pub fn wrapped_index(&self, row: u32, col: u32, d_row: isize, d_col: isize) -> usize {
        let r = wrap(row as usize, d_row, self.height as usize);
        let c = wrap(col as usize, d_col, self.width as usize);
        r * self.width as usize + c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_handles_negative_offsets() {
        assert_eq!(wrap(0, -1, 5), 4);
        assert_eq!(wrap(4, 1, 5), 0);
        assert_eq!(wrap(2, -1, 5), 1);
        assert_eq!(wrap(0, -1, 1), 0);
    }

    #[test]
    fn index_and_coords_agree() {
        let grid = Grid::new(7, 3).expect("grid");
        for row in 0..3 {
            for col in 0..7 {
                let idx = grid.index(row, col);
                assert_eq!(grid.coords(idx), Coord::new(row, col));
            }
        }
        assert_eq!(grid.wrapped_index(0, 0, -1, -1), grid.index(2, 6));
    }

    #[test]
    fn checked_index_rejects_out_of_range() {
        let grid = Grid::new(4, 2).expect("grid");
        assert_eq!(grid.checked_index(1, 3), Ok(7));
        assert_eq!(
            grid.checked_index(2, 0),
            Err(LifeError::IndexOutOfBounds { row: 2, col: 0, height: 2, width: 4 })
        );
        assert!(grid.checked_index(0, 4).is_err());
    }
}
