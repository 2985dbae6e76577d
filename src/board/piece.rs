//! Piece kinds and their movement/attack geometry.
//!
//! Kind metadata (display char, long name, total supply) lives in a
//! compile-time lookup table indexed by the `PieceKind` discriminant.
//! Movement and attack patterns are precomputed offset tables applied
//! through `Position::offset_by`; the Archer is the only kind with a
//! non-default pattern.

use thiserror::Error;

use super::position::{Position, ADJACENT_OFFSETS, BOARD_SIZE, ORTHOGONAL_OFFSETS};

/// The number of piece kinds, Royal included.
pub const KIND_COUNT: usize = 5;

/// A unit kind.
///
/// The Royal is a wildcard: it can be discarded in place of any required
/// kind-matched discard on move, attack, or recruit, and each player owns
/// at most one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    Archer = 0,
    Berserker = 1,
    Mercenary = 2,
    Swordsman = 3,
    Royal = 4,
}

/// All kinds in index order.
pub const ALL_KINDS: [PieceKind; KIND_COUNT] = [
    PieceKind::Archer,
    PieceKind::Berserker,
    PieceKind::Mercenary,
    PieceKind::Swordsman,
    PieceKind::Royal,
];

/// The four recruitable kinds partitioned between the players at setup.
pub const BASIC_KINDS: [PieceKind; 4] = [
    PieceKind::Archer,
    PieceKind::Berserker,
    PieceKind::Mercenary,
    PieceKind::Swordsman,
];

struct KindInfo {
    short: char,
    name: &'static str,
    supply: u8,
}

const KIND_INFO: [KindInfo; KIND_COUNT] = [
    KindInfo { short: 'A', name: "Archer", supply: 4 },
    KindInfo { short: 'B', name: "Berserker", supply: 4 },
    KindInfo { short: 'M', name: "Mercenary", supply: 5 },
    KindInfo { short: 'S', name: "Swordsman", supply: 4 },
    KindInfo { short: 'R', name: "Royal", supply: 1 },
];

impl PieceKind {
    /// Returns the single-character board abbreviation.
    pub const fn short(self) -> char {
        KIND_INFO[self as usize].short
    }

    /// Returns the full display name.
    pub const fn name(self) -> &'static str {
        KIND_INFO[self as usize].name
    }

    /// Returns the total number of copies of this kind in the game supply.
    pub const fn supply(self) -> u8 {
        KIND_INFO[self as usize].supply
    }

    /// Parses a kind from its long name or single-letter abbreviation,
    /// case-insensitively.
    pub fn from_name(s: &str) -> Option<PieceKind> {
        let s = s.trim();
        ALL_KINDS.into_iter().find(|k| {
            s.eq_ignore_ascii_case(k.name()) || (s.len() == 1 && s.eq_ignore_ascii_case(&k.short().to_string()))
        })
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The Archer's leap attack: the eight squares at distance two along a
/// rank, file, or diagonal.
pub const ARCHER_ATTACK_OFFSETS: [(i8, i8); 8] = [
    (-2, 0),
    (2, 0),
    (0, -2),
    (0, 2),
    (-2, -2),
    (-2, 2),
    (2, -2),
    (2, 2),
];

/// A piece relocating outside its legal move set.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("{kind} cannot move from {from} to {to}")]
pub struct IllegalMove {
    pub kind: PieceKind,
    pub from: Position,
    pub to: Position,
}

/// A unit, either placed on a square or unplaced (living in some player
/// container).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    position: Option<Position>,
}

impl Piece {
    /// Creates an unplaced piece of the given kind.
    pub const fn new(kind: PieceKind) -> Piece {
        Piece {
            kind,
            position: None,
        }
    }

    /// Creates a piece already standing on a square.
    pub const fn at(kind: PieceKind, position: Position) -> Piece {
        Piece {
            kind,
            position: Some(position),
        }
    }

    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    pub const fn position(self) -> Option<Position> {
        self.position
    }

    /// Squares this piece may move to.
    ///
    /// An unplaced piece reports every square on the board; that form is
    /// only used for pre-placement legality probing. A placed piece moves
    /// one orthogonal step, whatever its kind.
    pub fn moves(self) -> Vec<Position> {
        match self.position {
            None => all_squares(),
            Some(pos) => pos.offset_by(&ORTHOGONAL_OFFSETS),
        }
    }

    /// Squares this piece attacks. Empty while unplaced. The Archer leaps
    /// to distance two; every other kind strikes the eight adjacent
    /// squares.
    pub fn attacked_squares(self) -> Vec<Position> {
        let pos = match self.position {
            None => return Vec::new(),
            Some(p) => p,
        };
        match self.kind {
            PieceKind::Archer => pos.offset_by(&ARCHER_ATTACK_OFFSETS),
            _ => pos.offset_by(&ADJACENT_OFFSETS),
        }
    }

    pub fn can_move_to(self, target: Position) -> bool {
        self.moves().contains(&target)
    }

    pub fn can_attack_to(self, target: Position) -> bool {
        self.attacked_squares().contains(&target)
    }

    /// Moves the piece.
    ///
    /// An unplaced piece is placed unconditionally; whether the square is a
    /// legal drop is the game state's business, not the piece's. A placed
    /// piece relocates only within its move set.
    pub fn move_to(&mut self, target: Position) -> Result<(), IllegalMove> {
        if let Some(from) = self.position {
            if !self.can_move_to(target) {
                return Err(IllegalMove {
                    kind: self.kind,
                    from,
                    to: target,
                });
            }
        }
        self.position = Some(target);
        Ok(())
    }
}

fn all_squares() -> Vec<Position> {
    let mut squares = Vec::with_capacity((BOARD_SIZE * BOARD_SIZE) as usize);
    for col in 0..BOARD_SIZE as i32 {
        for row in 0..BOARD_SIZE as i32 {
            // Bounds are satisfied by construction.
            if let Ok(pos) = Position::new(col, row) {
                squares.push(pos);
            }
        }
    }
    squares
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_metadata() {
        assert_eq!(PieceKind::Archer.short(), 'A');
        assert_eq!(PieceKind::Mercenary.name(), "Mercenary");
        assert_eq!(PieceKind::Mercenary.supply(), 5);
        assert_eq!(PieceKind::Royal.supply(), 1);
        let total: u32 = ALL_KINDS.iter().map(|k| k.supply() as u32).sum();
        assert_eq!(total, 18);
    }

    #[test]
    fn from_name_accepts_long_and_short_forms() {
        assert_eq!(PieceKind::from_name("archer"), Some(PieceKind::Archer));
        assert_eq!(PieceKind::from_name("Berserker"), Some(PieceKind::Berserker));
        assert_eq!(PieceKind::from_name("m"), Some(PieceKind::Mercenary));
        assert_eq!(PieceKind::from_name(" S "), Some(PieceKind::Swordsman));
        assert_eq!(PieceKind::from_name("ROYAL"), Some(PieceKind::Royal));
        assert_eq!(PieceKind::from_name("knight"), None);
        assert_eq!(PieceKind::from_name(""), None);
    }

    #[test]
    fn unplaced_piece_probes_whole_board() {
        let piece = Piece::new(PieceKind::Swordsman);
        assert_eq!(piece.moves().len(), 25);
        assert!(piece.attacked_squares().is_empty());
    }

    #[test]
    fn placed_piece_moves_one_orthogonal_step() {
        for kind in ALL_KINDS {
            let piece = Piece::at(kind, Position::new(2, 2).unwrap());
            assert_eq!(piece.moves().len(), 4);

            let corner = Piece::at(kind, Position::new(0, 0).unwrap());
            assert_eq!(corner.moves().len(), 2);
        }
    }

    #[test]
    fn default_attack_is_all_adjacent() {
        for kind in [
            PieceKind::Berserker,
            PieceKind::Mercenary,
            PieceKind::Swordsman,
            PieceKind::Royal,
        ] {
            let piece = Piece::at(kind, Position::new(2, 2).unwrap());
            assert_eq!(piece.attacked_squares().len(), 8);
            assert!(piece.can_attack_to(Position::new(3, 3).unwrap()));
            assert!(!piece.can_attack_to(Position::new(4, 2).unwrap()));
        }
    }

    #[test]
    fn archer_attacks_at_distance_two_only() {
        let archer = Piece::at(PieceKind::Archer, Position::new(2, 2).unwrap());
        let attacked = archer.attacked_squares();
        assert_eq!(attacked.len(), 8);
        assert!(attacked.contains(&Position::new(0, 0).unwrap()));
        assert!(attacked.contains(&Position::new(4, 2).unwrap()));
        assert!(attacked.contains(&Position::new(2, 4).unwrap()));
        // Adjacent squares are out of reach.
        assert!(!archer.can_attack_to(Position::new(3, 2).unwrap()));
        assert!(!archer.can_attack_to(Position::new(3, 3).unwrap()));
    }

    #[test]
    fn archer_attack_clips_in_corner() {
        let archer = Piece::at(PieceKind::Archer, Position::new(0, 0).unwrap());
        let attacked = archer.attacked_squares();
        assert_eq!(attacked.len(), 3);
        assert!(attacked.contains(&Position::new(2, 0).unwrap()));
        assert!(attacked.contains(&Position::new(0, 2).unwrap()));
        assert!(attacked.contains(&Position::new(2, 2).unwrap()));
    }

    #[test]
    fn move_to_places_unplaced_unconditionally() {
        let mut piece = Piece::new(PieceKind::Berserker);
        let target = Position::new(4, 4).unwrap();
        piece.move_to(target).unwrap();
        assert_eq!(piece.position(), Some(target));
    }

    #[test]
    fn move_to_rejects_non_adjacent_target() {
        let from = Position::new(1, 1).unwrap();
        let to = Position::new(3, 3).unwrap();
        let mut piece = Piece::at(PieceKind::Mercenary, from);
        let err = piece.move_to(to).unwrap_err();
        assert_eq!(
            err,
            IllegalMove {
                kind: PieceKind::Mercenary,
                from,
                to,
            }
        );
        // Position is untouched on failure.
        assert_eq!(piece.position(), Some(from));
    }

    #[test]
    fn move_to_relocates_within_move_set() {
        let mut piece = Piece::at(PieceKind::Archer, Position::new(1, 1).unwrap());
        let target = Position::new(1, 2).unwrap();
        piece.move_to(target).unwrap();
        assert_eq!(piece.position(), Some(target));
    }
}
