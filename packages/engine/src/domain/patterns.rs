//! Named seed patterns
//!
//! Cells are (row, col) offsets from the pattern's top-left corner.
//! Stamping wraps around the torus, so any origin is valid.

pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(u32, u32)],
}

impl Pattern {
    /// Bounding box as (height, width).
    pub fn extent(&self) -> (u32, u32) {
        let height = self.cells.iter().map(|&(r, _)| r + 1).max().unwrap_or(0);
        let width = self.cells.iter().map(|&(_, c)| c + 1).max().unwrap_or(0);
        (height, width)
    }
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Block",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "Toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "Glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "LWSS",
        cells: &[(0, 1), (0, 4), (1, 0), (2, 0), (2, 4), (3, 0), (3, 1), (3, 2), (3, 3)],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
            (2, 0), (2, 5), (2, 7), (2, 12),
            (3, 0), (3, 5), (3, 7), (3, 12),
            (4, 0), (4, 5), (4, 7), (4, 12),
            (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
            // Bottom half (mirrored)
            (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
            (8, 0), (8, 5), (8, 7), (8, 12),
            (9, 0), (9, 5), (9, 7), (9, 12),
            (10, 0), (10, 5), (10, 7), (10, 12),
            (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
        ],
    },
];

/// Case-insensitive lookup by name.
pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

pub fn names() -> impl Iterator<Item = &'static str> {
    PATTERNS.iter().map(|p| p.name)
}

/// Parse a plaintext block into live-cell offsets.
///
/// `O`, `#`, `*`, `1` and `X` are alive, every other glyph is dead; lines
/// starting with `!` are comments.
pub fn parse_plaintext(text: &str) -> Vec<(u32, u32)> {
    let mut cells = Vec::new();
    let rows = text.lines().filter(|line| !line.starts_with('!'));

    for (row, line) in rows.enumerate() {
        for (col, ch) in line.chars().enumerate() {
            if is_alive_glyph(ch) {
                cells.push((row as u32, col as u32));
            }
        }
    }
    cells
}

#[inline]
fn is_alive_glyph(ch: char) -> bool {
    matches!(ch, 'O' | '#' | '*' | '1' | 'X')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(find("glider").map(|p| p.name), Some("Glider"));
        assert_eq!(find("r-PENTOMINO").map(|p| p.cells.len()), Some(5));
        assert!(find("spaceship-of-theseus").is_none());
    }

    #[test]
    fn pulsar_is_symmetric() {
        let pulsar = find("Pulsar").expect("pulsar");
        assert_eq!(pulsar.cells.len(), 48);
        assert_eq!(pulsar.extent(), (13, 13));
        for &(r, c) in pulsar.cells {
            assert!(pulsar.cells.contains(&(12 - r, c)));
            assert!(pulsar.cells.contains(&(c, r)));
        }
    }

    #[test]
    fn plaintext_skips_comments_and_dead_glyphs() {
        let cells = parse_plaintext("!Name: Glider\n.O.\n..O\nOOO\n");
        assert_eq!(cells, find("Glider").expect("glider").cells.to_vec());
    }

    #[test]
    fn plaintext_only_counts_alive_glyphs() {
        let cells = parse_plaintext("#\tx\r\n.*a1\nX?O\n");
        assert_eq!(cells, vec![(0, 0), (1, 1), (1, 3), (2, 0), (2, 2)]);
    }
}
