//! Match state and the action state machine.
//!
//! `GameState` composes the two players, the board occupancy, the six
//! control zones, and turn/initiative tracking. Every player action goes
//! through an `attempt_*` method that runs its full check list before
//! touching anything, so a failed action leaves the match byte-for-byte
//! unchanged. Win detection is a pure query over the same state.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::board::{Piece, PieceKind, Position, BASIC_KINDS};
use crate::player::Player;

use super::error::GameError;

/// The number of control zones on the board.
pub const ZONE_COUNT: usize = 6;

/// The number of sides in a match.
pub const SIDE_COUNT: usize = 2;

/// One of the two sides. The `#[repr(u8)]` discriminants index the
/// per-side arrays in `GameState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Side {
    Crow = 0,
    Wolf = 1,
}

/// Both sides in index order; also the order `winner` checks them in.
pub const ALL_SIDES: [Side; SIDE_COUNT] = [Side::Crow, Side::Wolf];

impl Side {
    pub const fn opponent(self) -> Side {
        match self {
            Side::Crow => Side::Wolf,
            Side::Wolf => Side::Crow,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Side::Crow => "Crow",
            Side::Wolf => "Wolf",
        }
    }

    /// The ownership marker printed next to a piece on the board.
    pub const fn marker(self) -> char {
        match self {
            Side::Crow => '^',
            Side::Wolf => 'v',
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A fixed board square capturable toward the zone-majority win.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlZone {
    pub position: Position,
    pub controller: Option<Side>,
}

/// A piece standing on the board together with the side that controls it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlledPiece {
    pub piece: Piece,
    pub owner: Side,
}

/// What occupies a board square: a controlled piece, a control zone,
/// both, or neither.
#[derive(Debug, Clone, Copy)]
pub struct Square<'a> {
    pub piece: Option<&'a ControlledPiece>,
    pub zone: Option<&'a ControlZone>,
}

/// The six zone squares and their owners at setup: one home zone per
/// side, four neutral.
const ZONE_SETUP: [(Position, Option<Side>); ZONE_COUNT] = [
    (Position::new_const(1, 0), Some(Side::Crow)),
    (Position::new_const(2, 1), None),
    (Position::new_const(1, 2), None),
    (Position::new_const(3, 2), None),
    (Position::new_const(2, 3), None),
    (Position::new_const(3, 4), Some(Side::Wolf)),
];

/// Complete state of one match.
pub struct GameState {
    players: [Player; SIDE_COUNT],
    forfeited: [bool; SIDE_COUNT],
    active: Side,
    initiative: Side,
    turn_end: bool,
    pieces: Vec<ControlledPiece>,
    zones: [ControlZone; ZONE_COUNT],
    rng: SmallRng,
}

impl GameState {
    /// Starts a fresh match with entropy-seeded randomness.
    pub fn new() -> GameState {
        GameState::new_with_rng(SmallRng::from_entropy())
    }

    /// Starts a fresh match drawing all randomness (the setup partition and
    /// every bag draw) from the given generator. Used for deterministic
    /// setups in tests.
    pub fn new_with_rng(mut rng: SmallRng) -> GameState {
        // Partition the four basic kinds 2-and-2 between the sides.
        let mut kinds = BASIC_KINDS;
        kinds.shuffle(&mut rng);

        let crow = Player::with_kinds(&kinds[..2]);
        let wolf = Player::with_kinds(&kinds[2..]);

        GameState {
            players: [crow, wolf],
            forfeited: [false; SIDE_COUNT],
            active: Side::Crow,
            initiative: Side::Crow,
            turn_end: false,
            pieces: Vec::new(),
            zones: ZONE_SETUP.map(|(position, controller)| ControlZone {
                position,
                controller,
            }),
            rng,
        }
    }

    pub fn active_side(&self) -> Side {
        self.active
    }

    pub fn initiative_side(&self) -> Side {
        self.initiative
    }

    /// True between the two halves of a round under the initiative turn
    /// model.
    pub fn turn_end(&self) -> bool {
        self.turn_end
    }

    pub fn player(&self, side: Side) -> &Player {
        &self.players[side as usize]
    }

    pub fn active_player(&self) -> &Player {
        self.player(self.active)
    }

    pub fn has_forfeited(&self, side: Side) -> bool {
        self.forfeited[side as usize]
    }

    pub fn zones(&self) -> &[ControlZone] {
        &self.zones
    }

    /// Flips the active player unconditionally.
    pub fn swap_active_player(&mut self) {
        self.active = self.active.opponent();
    }

    /// Advances the half-turn round structure: the first half swaps the
    /// active player, the second hands control back to the initiative
    /// holder.
    pub fn pass_turn(&mut self) {
        if self.turn_end {
            self.active = self.initiative;
        } else {
            self.swap_active_player();
        }
        self.turn_end = !self.turn_end;
    }

    /// Refills the active player's bag from their discard pile. The driver
    /// calls this when the bag runs empty.
    pub fn refill_active(&mut self) {
        self.players[self.active as usize].refill();
    }

    /// Draws the active player's hand from their bag.
    pub fn draw_active_hand(&mut self) {
        self.players[self.active as usize].draw_hand(&mut self.rng);
    }

    /// Returns whatever occupies the square: piece, zone, both, or neither.
    pub fn square_at(&self, position: Position) -> Square<'_> {
        Square {
            piece: self.piece_index_at(position).map(|i| &self.pieces[i]),
            zone: self.zone_index_at(position).map(|i| &self.zones[i]),
        }
    }

    fn piece_index_at(&self, position: Position) -> Option<usize> {
        self.pieces
            .iter()
            .position(|cp| cp.piece.position() == Some(position))
    }

    fn zone_index_at(&self, position: Position) -> Option<usize> {
        self.zones.iter().position(|z| z.position == position)
    }

    /// Squares a piece may be placed on: every square orthogonally adjacent
    /// to a zone the active player controls. Occupancy is not filtered here.
    fn placeable_positions(&self) -> Vec<Position> {
        self.zones
            .iter()
            .filter(|z| z.controller == Some(self.active))
            .flat_map(|z| z.position.orthogonal_neighbors())
            .collect()
    }

    fn discard_from_active(&mut self, kind: PieceKind) -> Result<(), GameError> {
        self.players[self.active as usize]
            .discard(kind)
            .map_err(|_| GameError::NoPieceToDiscard)
    }

    /// Moves a piece controlled by the active player, paying a matching
    /// discard from the hand unless the move is free. `kind` must match the
    /// moved piece or be the Royal wildcard.
    pub fn attempt_move(
        &mut self,
        kind: PieceKind,
        from: Position,
        to: Position,
        is_free: bool,
    ) -> Result<(), GameError> {
        let mover_idx = self.piece_index_at(from).ok_or(GameError::NoPieceToMove)?;
        if self.piece_index_at(to).is_some() {
            return Err(GameError::OccupiedTarget);
        }
        let mover = self.pieces[mover_idx];
        if mover.owner != self.active {
            return Err(GameError::InactivePlayerMove);
        }
        if !mover.piece.can_move_to(to) {
            return Err(GameError::InvalidMove);
        }
        if kind != PieceKind::Royal && mover.piece.kind() != kind {
            return Err(GameError::UnmatchingPieces);
        }
        if !is_free {
            self.discard_from_active(kind)?;
        }
        // Cannot fail: membership in the move set was checked above.
        self.pieces[mover_idx]
            .piece
            .move_to(to)
            .map_err(|_| GameError::InvalidMove)
    }

    /// Attacks an enemy piece with one of the active player's pieces,
    /// paying a matching discard unless the attack is free. The target is
    /// removed from the board permanently; it returns to no container.
    pub fn attempt_attack(
        &mut self,
        kind: PieceKind,
        from: Position,
        to: Position,
        is_free: bool,
    ) -> Result<(), GameError> {
        let attacker_idx = self
            .piece_index_at(from)
            .ok_or(GameError::NoPieceToAttackWith)?;
        let attacker = self.pieces[attacker_idx];
        if attacker.owner != self.active {
            return Err(GameError::InactivePlayerAttack);
        }
        let target_idx = self.piece_index_at(to).ok_or(GameError::NoAttackTarget)?;
        if self.pieces[target_idx].owner == self.active {
            return Err(GameError::FriendlyFire);
        }
        if !attacker.piece.can_attack_to(to) {
            return Err(GameError::InvalidAttack);
        }
        if kind != PieceKind::Royal && attacker.piece.kind() != kind {
            return Err(GameError::UnmatchingPieces);
        }
        if !is_free {
            self.discard_from_active(kind)?;
        }
        self.pieces.swap_remove(target_idx);
        Ok(())
    }

    /// Places a piece from the active player's hand onto an empty square
    /// orthogonally adjacent to a zone they control. No discard cost.
    pub fn attempt_place(&mut self, kind: PieceKind, to: Position) -> Result<(), GameError> {
        if self.piece_index_at(to).is_some() {
            return Err(GameError::OccupiedTarget);
        }
        if !self.placeable_positions().contains(&to) {
            return Err(GameError::InvalidPlacement);
        }
        if !self.active_player().has_piece_in_hand(kind) {
            return Err(GameError::NoPieceToPlace);
        }
        let mut piece = self.players[self.active as usize]
            .place(kind)
            .map_err(|_| GameError::NoPieceToPlace)?;
        // Cannot fail: the piece comes out of the hand unplaced.
        piece.move_to(to).map_err(|_| GameError::InvalidPlacement)?;
        self.pieces.push(ControlledPiece {
            piece,
            owner: self.active,
        });
        Ok(())
    }

    /// Recruits a new piece of the given kind into the active player's bag,
    /// paying with a matching hand piece, or with the Royal when
    /// `using_royal` is set.
    pub fn attempt_recruit(&mut self, kind: PieceKind, using_royal: bool) -> Result<(), GameError> {
        let payer = if using_royal { PieceKind::Royal } else { kind };
        if !self.active_player().has_piece_in_hand(payer) {
            return Err(GameError::NoPieceToDiscard);
        }
        self.players[self.active as usize]
            .recruit(kind)
            .map_err(|_| GameError::NoPieceToRecruit)?;
        // Cannot fail: presence in the hand was checked above.
        self.discard_from_active(payer)
    }

    /// Takes control of the zone at `position` for the active player. The
    /// active player must have a piece standing on the zone; the discarded
    /// kind is any piece from the hand.
    pub fn attempt_gain_control(
        &mut self,
        discarded_kind: PieceKind,
        position: Position,
    ) -> Result<(), GameError> {
        let zone_idx = self.zone_index_at(position).ok_or(GameError::NoControlZone)?;
        let standing = self.piece_index_at(self.zones[zone_idx].position);
        match standing {
            Some(i) if self.pieces[i].owner == self.active => {}
            _ => return Err(GameError::NoPieceToControlWith),
        }
        if !self.active_player().has_piece_in_hand(discarded_kind) {
            return Err(GameError::NoPieceToDiscard);
        }
        self.discard_from_active(discarded_kind)?;
        self.zones[zone_idx].controller = Some(self.active);
        Ok(())
    }

    /// Claims the initiative for the active player at the cost of one
    /// discard.
    pub fn attempt_take_initiative(&mut self, discarded_kind: PieceKind) -> Result<(), GameError> {
        self.discard_from_active(discarded_kind)?;
        self.initiative = self.active;
        Ok(())
    }

    /// Concedes the match for the active player.
    pub fn forfeit(&mut self) {
        self.forfeited[self.active as usize] = true;
    }

    /// True when some piece of the active player has at least one empty
    /// legal destination.
    pub fn can_move(&self) -> bool {
        self.pieces
            .iter()
            .filter(|cp| cp.owner == self.active)
            .flat_map(|cp| cp.piece.moves())
            .any(|pos| self.piece_index_at(pos).is_none())
    }

    /// True when some piece of the active player attacks an enemy-occupied
    /// square.
    pub fn can_attack(&self) -> bool {
        self.pieces
            .iter()
            .filter(|cp| cp.owner == self.active)
            .flat_map(|cp| cp.piece.attacked_squares())
            .any(|pos| {
                self.piece_index_at(pos)
                    .is_some_and(|i| self.pieces[i].owner != self.active)
            })
    }

    /// True when some zone-adjacent square is empty.
    pub fn can_place_piece(&self) -> bool {
        self.placeable_positions()
            .iter()
            .any(|pos| self.piece_index_at(*pos).is_none())
    }

    /// True while any recruitment count is above zero.
    pub fn can_recruit(&self) -> bool {
        !self.active_player().recruitment_is_empty()
    }

    /// True when the active player has a piece standing on any zone.
    pub fn can_control_a_zone(&self) -> bool {
        self.zones.iter().any(|z| {
            self.piece_index_at(z.position)
                .is_some_and(|i| self.pieces[i].owner == self.active)
        })
    }

    /// True unless the active player already holds the initiative.
    pub fn can_take_initiative(&self) -> bool {
        self.active != self.initiative
    }

    fn controls_four_zones(&self, side: Side) -> bool {
        self.zones
            .iter()
            .filter(|z| z.controller == Some(side))
            .count()
            >= 4
    }

    fn is_eliminated(&self, side: Side) -> bool {
        self.player(side).has_no_more_units()
            && !self.pieces.iter().any(|cp| cp.owner == side)
    }

    /// Whether the given side has won: four of the six zones, an
    /// eliminated opponent, or an opponent who forfeited.
    pub fn check_win(&self, side: Side) -> bool {
        let opponent = side.opponent();
        self.controls_four_zones(side)
            || self.is_eliminated(opponent)
            || self.forfeited[opponent as usize]
    }

    /// The winning side, if the match is over. Crow is checked first.
    pub fn winner(&self) -> Option<Side> {
        ALL_SIDES.into_iter().find(|&side| self.check_win(side))
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}
