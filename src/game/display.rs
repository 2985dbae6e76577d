//! Console rendering of the match state.
//!
//! The board prints as a 5x5 grid with column numbers across the top and
//! row letters down the side. Pieces render as their kind letter plus an
//! ownership marker (`^` Crow, `v` Wolf); zone squares render as `C`/`W`
//! for their owner or `@` while neutral; everything else is a dot. The
//! active player's hand, recruitment pool, and discard pile follow.

use std::fmt;

use crate::board::{Position, BOARD_SIZE};

use super::state::{GameState, Side};

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..BOARD_SIZE {
            write!(f, " {} ", col)?;
        }
        writeln!(f)?;
        writeln!(f, "   {}", "___".repeat(BOARD_SIZE as usize))?;

        for row in 0..BOARD_SIZE {
            write!(f, "{}| ", (b'a' + row) as char)?;
            for col in 0..BOARD_SIZE {
                let square = self.square_at(Position::new_const(col, row));
                match square.piece {
                    Some(cp) => write!(f, " {}{}", cp.piece.kind().short(), cp.owner.marker())?,
                    None => match square.zone {
                        Some(zone) => match zone.controller {
                            Some(Side::Crow) => write!(f, " C ")?,
                            Some(Side::Wolf) => write!(f, " W ")?,
                            None => write!(f, " @ ")?,
                        },
                        None => write!(f, " . ")?,
                    },
                }
            }
            writeln!(f)?;
        }

        let active = self.active_side();
        writeln!(
            f,
            "==== {} ({}) ====",
            active.name().to_uppercase(),
            active.marker()
        )?;

        let player = self.active_player();
        writeln!(f, "Hand: {}", player.hand_string())?;
        writeln!(f, "Recruitment pieces: {}", player.recruitment_string())?;
        write!(f, "Discard pile: {}", player.discard_string())
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    use crate::board::{PieceKind, Position};
    use crate::game::state::GameState;

    fn fresh_game() -> GameState {
        GameState::new_with_rng(SmallRng::seed_from_u64(0))
    }

    #[test]
    fn empty_board_renders_zones_and_dots() {
        let rendered = fresh_game().to_string();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "    0  1  2  3  4 ");
        assert_eq!(lines[1], "   _______________");
        // Home zones and the four neutral zones.
        assert_eq!(lines[2], "a|  .  C  .  .  . ");
        assert_eq!(lines[3], "b|  .  .  @  .  . ");
        assert_eq!(lines[4], "c|  .  @  .  @  . ");
        assert_eq!(lines[5], "d|  .  .  @  .  . ");
        assert_eq!(lines[6], "e|  .  .  .  W  . ");
    }

    #[test]
    fn banner_and_player_lines_follow_the_board() {
        let rendered = fresh_game().to_string();
        assert!(rendered.contains("==== CROW (^) ===="));
        assert!(rendered.contains("Hand: "));
        assert!(rendered.contains("Recruitment pieces: "));
        assert!(rendered.ends_with("Discard pile: "));
    }

    #[test]
    fn placed_piece_renders_with_ownership_marker() {
        let mut gs = fresh_game();
        gs.draw_active_hand();
        gs.draw_active_hand();
        let kind = gs
            .active_player()
            .hand_kinds()
            .into_iter()
            .find(|&k| k != PieceKind::Royal)
            .unwrap();
        gs.attempt_place(kind, Position::new(1, 1).unwrap()).unwrap();

        let rendered = gs.to_string();
        let row_b = rendered.lines().nth(3).unwrap();
        assert_eq!(row_b, format!("b|  .  {}^ @  .  . ", kind.short()));
    }
}
