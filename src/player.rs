//! Per-player unit economy.
//!
//! Each player owns four containers: the bag (undrawn pieces, drawn from
//! uniformly at random), the hand (drawn pieces, spendable as placement
//! material or action cost), the discard pile (spent pieces, inert until
//! refilled into the bag), and the recruitment pool (per-kind counts of
//! pieces not yet in circulation). Pieces removed from the board by an
//! attack return to none of these.

use rand::Rng;
use thiserror::Error;

use crate::board::{Piece, PieceKind};

/// The number of pieces drawn into the hand each turn, bag permitting.
pub const HAND_SIZE: usize = 3;

/// Errors from economy operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PlayerError {
    #[error("no more pieces of this kind to recruit")]
    NoSupply,

    #[error("no matching piece in hand")]
    NoMatchingPiece,
}

/// One player's unit economy.
#[derive(Debug, Clone)]
pub struct Player {
    bag: Vec<Piece>,
    hand: Vec<Piece>,
    discard: Vec<Piece>,
    recruitment: Vec<(PieceKind, u8)>,
}

impl Player {
    /// Sets up a player assigned the given kinds: two copies of each into
    /// the bag plus exactly one Royal, and `supply - 2` of each assigned
    /// kind into the recruitment pool.
    pub fn with_kinds(kinds: &[PieceKind]) -> Player {
        let mut bag = Vec::with_capacity(kinds.len() * 2 + 1);
        let mut recruitment = Vec::with_capacity(kinds.len());
        for &kind in kinds {
            bag.push(Piece::new(kind));
            bag.push(Piece::new(kind));
            recruitment.push((kind, kind.supply() - 2));
        }
        bag.push(Piece::new(PieceKind::Royal));
        Player {
            bag,
            hand: Vec::new(),
            discard: Vec::new(),
            recruitment,
        }
    }

    /// Draws up to [`HAND_SIZE`] pieces from the bag into the hand,
    /// uniformly at random without replacement. Draws fewer when the bag
    /// runs short.
    pub fn draw_hand<R: Rng>(&mut self, rng: &mut R) {
        let draws = HAND_SIZE.min(self.bag.len());
        for _ in 0..draws {
            let idx = rng.gen_range(0..self.bag.len());
            let piece = self.bag.swap_remove(idx);
            self.hand.push(piece);
        }
    }

    /// Takes one piece of the given kind out of the recruitment pool and
    /// adds it to the bag. Paying the discard cost is the caller's
    /// responsibility.
    pub fn recruit(&mut self, kind: PieceKind) -> Result<(), PlayerError> {
        let entry = self
            .recruitment
            .iter_mut()
            .find(|(k, _)| *k == kind)
            .filter(|(_, n)| *n >= 1)
            .ok_or(PlayerError::NoSupply)?;
        entry.1 -= 1;
        self.bag.push(Piece::new(kind));
        Ok(())
    }

    /// Removes one piece of the given kind from the hand and returns it;
    /// it becomes the board piece. No discard cost.
    pub fn place(&mut self, kind: PieceKind) -> Result<Piece, PlayerError> {
        let idx = self
            .hand
            .iter()
            .position(|p| p.kind() == kind)
            .ok_or(PlayerError::NoMatchingPiece)?;
        Ok(self.hand.swap_remove(idx))
    }

    /// Moves one piece of the given kind from the hand to the discard pile.
    pub fn discard(&mut self, kind: PieceKind) -> Result<(), PlayerError> {
        let idx = self
            .hand
            .iter()
            .position(|p| p.kind() == kind)
            .ok_or(PlayerError::NoMatchingPiece)?;
        let piece = self.hand.swap_remove(idx);
        self.discard.push(piece);
        Ok(())
    }

    /// Moves the entire discard pile back into the bag. Invoked by the
    /// driver when the bag is empty.
    pub fn refill(&mut self) {
        self.bag.append(&mut self.discard);
    }

    pub fn hand_is_empty(&self) -> bool {
        self.hand.is_empty()
    }

    pub fn bag_is_empty(&self) -> bool {
        self.bag.is_empty()
    }

    pub fn recruitment_is_empty(&self) -> bool {
        self.recruitment.iter().all(|(_, n)| *n == 0)
    }

    /// True when hand, bag, and recruitment are all exhausted. The discard
    /// pile is not consulted.
    pub fn has_no_more_units(&self) -> bool {
        self.hand_is_empty() && self.bag_is_empty() && self.recruitment_is_empty()
    }

    pub fn has_piece_in_hand(&self, kind: PieceKind) -> bool {
        self.hand.iter().any(|p| p.kind() == kind)
    }

    pub fn bag_size(&self) -> usize {
        self.bag.len()
    }

    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    pub fn discard_size(&self) -> usize {
        self.discard.len()
    }

    /// Remaining recruitable count for a kind; zero for kinds this player
    /// was never assigned.
    pub fn recruitment_remaining(&self, kind: PieceKind) -> u8 {
        self.recruitment
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }

    /// The kinds currently in hand, in hand order (duplicates included).
    pub fn hand_kinds(&self) -> Vec<PieceKind> {
        self.hand.iter().map(|p| p.kind()).collect()
    }

    /// Hand contents for display: comma-joined long names.
    pub fn hand_string(&self) -> String {
        join_kinds(self.hand.iter().map(|p| p.kind()))
    }

    /// Recruitment pool for display: `Kind = n` per assigned kind.
    pub fn recruitment_string(&self) -> String {
        self.recruitment
            .iter()
            .map(|(kind, n)| format!("{} = {}", kind.name(), n))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Discard pile contents for display: comma-joined long names.
    pub fn discard_string(&self) -> String {
        join_kinds(self.discard.iter().map(|p| p.kind()))
    }

    /// Per-kind count over bag, hand, and discard. Used by the state layer
    /// for conservation checks.
    #[cfg(test)]
    pub(crate) fn reserve_count(&self, kind: PieceKind) -> usize {
        self.bag
            .iter()
            .chain(self.hand.iter())
            .chain(self.discard.iter())
            .filter(|p| p.kind() == kind)
            .count()
    }
}

fn join_kinds(kinds: impl Iterator<Item = PieceKind>) -> String {
    kinds
        .map(|k| k.name().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
