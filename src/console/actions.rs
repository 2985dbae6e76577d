//! Interactive handlers, one per player action.
//!
//! Each handler keeps prompting until the engine accepts the action,
//! printing the engine's error message after every rejection. The
//! Swordsman's free follow-up move and the Berserker's free second attack
//! are offered here, through the free-action flags on the engine calls;
//! the engine itself tracks no pending-bonus state.

use std::io::{self, BufRead, Write};

use crate::board::{PieceKind, Position};
use crate::game::GameState;

use super::parser::Action;
use super::prompt;

/// Dispatches one selected action, first checking whether the engine can
/// offer it at all.
pub fn handle_action<R: BufRead, W: Write>(
    action: Action,
    gs: &mut GameState,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    match action {
        Action::Move => {
            if gs.can_move() {
                handle_move(gs, input, out)?;
            } else {
                writeln!(out, "You don't have any piece to move")?;
            }
        }
        Action::Recruit => {
            if gs.can_recruit() {
                handle_recruit(gs, input, out)?;
            } else {
                writeln!(out, "You don't have any piece to recruit")?;
            }
        }
        Action::Place => {
            if gs.can_place_piece() {
                handle_place(gs, input, out)?;
            } else {
                writeln!(out, "You can't place any piece")?;
            }
        }
        Action::Attack => {
            if gs.can_attack() {
                handle_attack(gs, input, out)?;
            } else {
                writeln!(out, "You don't have any possible attacks")?;
            }
        }
        Action::Control => {
            if gs.can_control_a_zone() {
                handle_control(gs, input, out)?;
            } else {
                writeln!(out, "You don't have any zone to control")?;
            }
        }
        Action::Initiative => {
            if gs.can_take_initiative() {
                handle_initiative(gs, input, out)?;
            } else {
                writeln!(out, "You already have the initiative")?;
            }
        }
        Action::Forfeit => gs.forfeit(),
    }
    Ok(())
}

/// Prompts until the player names a valid piece kind. With `check_hand`,
/// also insists the active player actually holds one.
fn prompt_for_kind<R: BufRead, W: Write>(
    gs: &GameState,
    input: &mut R,
    out: &mut W,
    verb: &str,
    is_discard: bool,
    check_hand: bool,
) -> io::Result<PieceKind> {
    let msg = if is_discard {
        format!("Select piece to discard from your hand to {}: ", verb)
    } else {
        format!("Select piece to {}: ", verb)
    };
    loop {
        let answer = prompt(input, out, &msg)?;
        match PieceKind::from_name(&answer) {
            None => writeln!(out, "Invalid piece type")?,
            Some(kind) if check_hand && !gs.active_player().has_piece_in_hand(kind) => {
                writeln!(out, "You don't have that kind of piece")?;
            }
            Some(kind) => return Ok(kind),
        }
    }
}

/// Prompts until the player types a well-formed on-board position.
fn prompt_for_position<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    what: &str,
) -> io::Result<Position> {
    loop {
        let answer = prompt(input, out, &format!("{} (row,col): ", what))?;
        match super::parser::parse_position(&answer) {
            Ok(pos) => return Ok(pos),
            Err(e) => writeln!(out, "{}", e)?,
        }
    }
}

fn handle_move<R: BufRead, W: Write>(
    gs: &mut GameState,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    loop {
        let kind = prompt_for_kind(gs, input, out, "move piece of the same kind", true, true)?;
        let from = prompt_for_position(input, out, "From position")?;
        let to = prompt_for_position(input, out, "To position")?;
        match gs.attempt_move(kind, from, to, false) {
            Ok(()) => return Ok(()),
            Err(e) => writeln!(out, "{}", e)?,
        }
    }
}

fn handle_attack<R: BufRead, W: Write>(
    gs: &mut GameState,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    loop {
        let kind = prompt_for_kind(
            gs,
            input,
            out,
            "attack with a piece of the same kind",
            true,
            true,
        )?;
        let from = prompt_for_position(input, out, "From position")?;
        let to = prompt_for_position(input, out, "To position")?;
        match gs.attempt_attack(kind, from, to, false) {
            Ok(()) => {
                if kind == PieceKind::Swordsman {
                    offer_swordsman_free_move(gs, input, out, from)?;
                }
                if kind == PieceKind::Berserker {
                    offer_berserker_second_attack(gs, input, out, from)?;
                }
                return Ok(());
            }
            Err(e) => writeln!(out, "{}", e)?,
        }
    }
}

fn offer_swordsman_free_move<R: BufRead, W: Write>(
    gs: &mut GameState,
    input: &mut R,
    out: &mut W,
    from: Position,
) -> io::Result<()> {
    writeln!(out, "The swordsman can move for free after attacking.")?;
    let answer = prompt(
        input,
        out,
        "Do you want to move the swordsman? [default: yes] (yes/no) ",
    )?;
    if answer == "no" {
        return Ok(());
    }
    loop {
        writeln!(out, "Moving the swordsman from position {}", from)?;
        let to = prompt_for_position(input, out, "To position")?;
        match gs.attempt_move(PieceKind::Swordsman, from, to, true) {
            Ok(()) => return Ok(()),
            Err(e) => writeln!(out, "{}", e)?,
        }
    }
}

fn offer_berserker_second_attack<R: BufRead, W: Write>(
    gs: &mut GameState,
    input: &mut R,
    out: &mut W,
    from: Position,
) -> io::Result<()> {
    writeln!(out, "The berserker can attack twice.")?;
    let answer = prompt(
        input,
        out,
        "Do you want to attack again? [default: yes] (yes/no) ",
    )?;
    if answer == "no" {
        return Ok(());
    }
    loop {
        let to = prompt_for_position(input, out, "To position")?;
        match gs.attempt_attack(PieceKind::Berserker, from, to, true) {
            Ok(()) => return Ok(()),
            Err(e) => writeln!(out, "{}", e)?,
        }
    }
}

fn handle_place<R: BufRead, W: Write>(
    gs: &mut GameState,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    loop {
        let kind = prompt_for_kind(gs, input, out, "place from your hand", false, true)?;
        let to = prompt_for_position(input, out, "To position")?;
        match gs.attempt_place(kind, to) {
            Ok(()) => return Ok(()),
            Err(e) => writeln!(out, "{}", e)?,
        }
    }
}

fn handle_recruit<R: BufRead, W: Write>(
    gs: &mut GameState,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    loop {
        let kind = prompt_for_kind(gs, input, out, "recruit piece of the same kind", true, true)?;
        if kind == PieceKind::Royal {
            return handle_recruit_with_royal(gs, input, out);
        }
        match gs.attempt_recruit(kind, false) {
            Ok(()) => return Ok(()),
            Err(e) => writeln!(out, "{}", e)?,
        }
    }
}

/// Naming the Royal at the recruit prompt means paying with it; the next
/// prompt asks which kind the Royal buys.
fn handle_recruit_with_royal<R: BufRead, W: Write>(
    gs: &mut GameState,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    loop {
        let kind = prompt_for_kind(gs, input, out, "recruit using a Royal", false, false)?;
        match gs.attempt_recruit(kind, true) {
            Ok(()) => return Ok(()),
            Err(e) => writeln!(out, "{}", e)?,
        }
    }
}

fn handle_control<R: BufRead, W: Write>(
    gs: &mut GameState,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    loop {
        let kind = prompt_for_kind(gs, input, out, "take control of a Control Zone", true, true)?;
        let position = prompt_for_position(input, out, "Control Zone position")?;
        match gs.attempt_gain_control(kind, position) {
            Ok(()) => return Ok(()),
            Err(e) => writeln!(out, "{}", e)?,
        }
    }
}

fn handle_initiative<R: BufRead, W: Write>(
    gs: &mut GameState,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    loop {
        let kind = prompt_for_kind(gs, input, out, "take the initiative", true, true)?;
        match gs.attempt_take_initiative(kind) {
            Ok(()) => return Ok(()),
            Err(e) => writeln!(out, "{}", e)?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::io::Cursor;

    fn drawn_game() -> GameState {
        let mut gs = GameState::new_with_rng(SmallRng::seed_from_u64(0));
        gs.draw_active_hand();
        gs.draw_active_hand();
        gs
    }

    fn a_hand_kind(gs: &GameState) -> PieceKind {
        gs.active_player()
            .hand_kinds()
            .into_iter()
            .find(|&k| k != PieceKind::Royal)
            .unwrap()
    }

    #[test]
    fn place_flow_puts_a_piece_on_the_board() {
        let mut gs = drawn_game();
        let kind = a_hand_kind(&gs);
        // (0,a) is adjacent to Crow's home zone.
        let script = format!("{}\na,0\n", kind.name());
        let mut input = Cursor::new(script);
        let mut out = Vec::new();

        handle_action(Action::Place, &mut gs, &mut input, &mut out).unwrap();
        let square = gs.square_at(Position::new(0, 0).unwrap());
        assert_eq!(square.piece.unwrap().piece.kind(), kind);
    }

    #[test]
    fn place_flow_reprompts_after_engine_rejection() {
        let mut gs = drawn_game();
        let kind = a_hand_kind(&gs);
        // First try an illegal drop far from any owned zone, then a legal
        // one next to the home zone.
        let script = format!("{kind}\ne,4\n{kind}\nb,1\n", kind = kind.name());
        let mut input = Cursor::new(script);
        let mut out = Vec::new();

        handle_action(Action::Place, &mut gs, &mut input, &mut out).unwrap();
        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("you can't place a piece there"));
        assert!(gs.square_at(Position::new(1, 1).unwrap()).piece.is_some());
    }

    #[test]
    fn bad_position_answers_are_reprompted() {
        let mut gs = drawn_game();
        let kind = a_hand_kind(&gs);
        let script = format!("{}\ngarbage\nz,9\na,0\n", kind.name());
        let mut input = Cursor::new(script);
        let mut out = Vec::new();

        handle_action(Action::Place, &mut gs, &mut input, &mut out).unwrap();
        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("invalid position format"));
        assert!(printed.contains("not a row letter"));
        assert!(gs.square_at(Position::new(0, 0).unwrap()).piece.is_some());
    }

    #[test]
    fn unknown_kind_answers_are_reprompted() {
        let mut gs = drawn_game();
        let kind = a_hand_kind(&gs);
        let script = format!("dragon\n{}\na,0\n", kind.name());
        let mut input = Cursor::new(script);
        let mut out = Vec::new();

        handle_action(Action::Place, &mut gs, &mut input, &mut out).unwrap();
        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("Invalid piece type"));
    }

    #[test]
    fn forfeit_needs_no_prompting() {
        let mut gs = drawn_game();
        let mut input = Cursor::new("");
        let mut out = Vec::new();

        handle_action(Action::Forfeit, &mut gs, &mut input, &mut out).unwrap();
        assert_eq!(gs.winner(), Some(crate::game::Side::Wolf));
    }

    #[test]
    fn unofferable_actions_print_a_refusal() {
        // Fresh game, empty board: nothing to move or attack.
        let mut gs = drawn_game();
        let mut input = Cursor::new("");
        let mut out = Vec::new();

        handle_action(Action::Move, &mut gs, &mut input, &mut out).unwrap();
        handle_action(Action::Attack, &mut gs, &mut input, &mut out).unwrap();
        handle_action(Action::Initiative, &mut gs, &mut input, &mut out).unwrap();

        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("You don't have any piece to move"));
        assert!(printed.contains("You don't have any possible attacks"));
        assert!(printed.contains("You already have the initiative"));
    }

    #[test]
    fn initiative_flow_spends_a_discard() {
        let mut gs = drawn_game();
        gs.swap_active_player();
        gs.draw_active_hand();
        let kind = a_hand_kind(&gs);
        let script = format!("{}\n", kind.name());
        let mut input = Cursor::new(script);
        let mut out = Vec::new();

        handle_action(Action::Initiative, &mut gs, &mut input, &mut out).unwrap();
        assert_eq!(gs.initiative_side(), crate::game::Side::Wolf);
        assert_eq!(gs.active_player().discard_size(), 1);
    }
}
