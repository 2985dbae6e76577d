//! Board coordinates.
//!
//! A `Position` is a bounds-checked square on the 5x5 board. Rows are also
//! addressable by the letters 'a' through 'e', which is how players type
//! them at the console. Offset enumeration with silent edge-clipping is the
//! shared mechanism behind every movement and attack pattern.

use thiserror::Error;

/// The board is square, `BOARD_SIZE` x `BOARD_SIZE`.
pub const BOARD_SIZE: u8 = 5;

/// Errors from constructing a position out of raw input.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PositionError {
    #[error("({col},{row}) is outside the board")]
    OutOfBounds { col: i32, row: i32 },

    #[error("'{0}' is not a row letter (a-e)")]
    InvalidRowLetter(char),
}

/// A square on the board. `col` runs left to right, `row` top to bottom;
/// row 0 is printed as 'a'.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    col: u8,
    row: u8,
}

impl Position {
    /// Creates a position from integer coordinates, rejecting anything
    /// outside `[0, 4]` on either axis.
    pub fn new(col: i32, row: i32) -> Result<Position, PositionError> {
        if col < 0 || col >= BOARD_SIZE as i32 || row < 0 || row >= BOARD_SIZE as i32 {
            return Err(PositionError::OutOfBounds { col, row });
        }
        Ok(Position {
            col: col as u8,
            row: row as u8,
        })
    }

    /// Creates a position from coordinates known to be in bounds, for const
    /// tables. Out-of-range constants fail to compile.
    pub(crate) const fn new_const(col: u8, row: u8) -> Position {
        assert!(col < BOARD_SIZE && row < BOARD_SIZE);
        Position { col, row }
    }

    /// Creates a position from a column number and a row letter 'a'-'e'.
    /// The letter is checked first, then the column bound.
    pub fn from_row_letter(col: i32, row: char) -> Result<Position, PositionError> {
        if !row.is_ascii_lowercase() || row > 'e' {
            return Err(PositionError::InvalidRowLetter(row));
        }
        Position::new(col, (row as u8 - b'a') as i32)
    }

    pub const fn col(self) -> u8 {
        self.col
    }

    pub const fn row(self) -> u8 {
        self.row
    }

    /// The row letter this position prints as.
    pub const fn row_letter(self) -> char {
        (b'a' + self.row) as char
    }

    /// Applies each `(dx, dy)` offset in turn, keeping only the results that
    /// land on the board. Out-of-board offsets are dropped silently.
    pub fn offset_by(self, offsets: &[(i8, i8)]) -> Vec<Position> {
        offsets
            .iter()
            .filter_map(|&(dx, dy)| {
                Position::new(self.col as i32 + dx as i32, self.row as i32 + dy as i32).ok()
            })
            .collect()
    }

    /// The up-to-4 orthogonally adjacent squares, edge-clipped.
    pub fn orthogonal_neighbors(self) -> Vec<Position> {
        self.offset_by(&ORTHOGONAL_OFFSETS)
    }

    /// The up-to-8 adjacent squares (orthogonal and diagonal), edge-clipped.
    pub fn all_neighbors(self) -> Vec<Position> {
        self.offset_by(&ADJACENT_OFFSETS)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.row_letter(), self.col)
    }
}

/// The four orthogonal single-step offsets.
pub const ORTHOGONAL_OFFSETS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// All eight adjacent offsets.
pub const ADJACENT_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_all_board_squares() {
        for col in 0..5 {
            for row in 0..5 {
                let pos = Position::new(col, row).unwrap();
                assert_eq!(pos.col() as i32, col);
                assert_eq!(pos.row() as i32, row);
            }
        }
    }

    #[test]
    fn new_rejects_out_of_bounds() {
        for (col, row) in [(-1, 0), (0, -1), (5, 0), (0, 5), (7, 7), (-3, 9)] {
            assert_eq!(
                Position::new(col, row),
                Err(PositionError::OutOfBounds { col, row })
            );
        }
    }

    #[test]
    fn row_letter_roundtrip() {
        for col in 0..5 {
            for row in ['a', 'b', 'c', 'd', 'e'] {
                let pos = Position::from_row_letter(col, row).unwrap();
                assert_eq!(pos.col() as i32, col);
                assert_eq!(pos.row_letter(), row);
            }
        }
    }

    #[test]
    fn from_row_letter_rejects_bad_letters() {
        for c in ['f', 'z', 'A', '1', ' '] {
            assert_eq!(
                Position::from_row_letter(0, c),
                Err(PositionError::InvalidRowLetter(c))
            );
        }
    }

    #[test]
    fn from_row_letter_checks_letter_before_column() {
        // Both the letter and the column are bad; the letter error wins.
        assert_eq!(
            Position::from_row_letter(9, 'x'),
            Err(PositionError::InvalidRowLetter('x'))
        );
        assert_eq!(
            Position::from_row_letter(9, 'a'),
            Err(PositionError::OutOfBounds { col: 9, row: 0 })
        );
    }

    #[test]
    fn orthogonal_neighbors_clip_at_edges() {
        let corner = Position::new(0, 0).unwrap();
        assert_eq!(corner.orthogonal_neighbors().len(), 2);

        let edge = Position::new(2, 0).unwrap();
        assert_eq!(edge.orthogonal_neighbors().len(), 3);

        let center = Position::new(2, 2).unwrap();
        assert_eq!(center.orthogonal_neighbors().len(), 4);
    }

    #[test]
    fn all_neighbors_clip_at_edges() {
        let corner = Position::new(4, 4).unwrap();
        assert_eq!(corner.all_neighbors().len(), 3);

        let center = Position::new(2, 2).unwrap();
        assert_eq!(center.all_neighbors().len(), 8);
    }

    #[test]
    fn offset_by_drops_off_board_silently() {
        let pos = Position::new(0, 0).unwrap();
        let hits = pos.offset_by(&[(-1, 0), (2, 2), (-2, -2), (4, 4)]);
        assert_eq!(hits.len(), 2);
        assert!(hits.contains(&Position::new(2, 2).unwrap()));
        assert!(hits.contains(&Position::new(4, 4).unwrap()));
    }

    #[test]
    fn display_prints_row_letter_then_column() {
        let pos = Position::from_row_letter(2, 'a').unwrap();
        assert_eq!(pos.to_string(), "(a,2)");
        let pos = Position::new(0, 4).unwrap();
        assert_eq!(pos.to_string(), "(e,0)");
    }
}
