//! Interactive console driver.
//!
//! Reads player answers from any `BufRead` and renders to any `Write`, so
//! the whole driver is scriptable from tests. The engine only ever
//! receives parsed, validated values; everything typed at a prompt goes
//! through `parser` first.

pub mod actions;
pub mod parser;

use std::io::{self, BufRead, Write};

use crate::game::GameState;

pub use actions::handle_action;
pub use parser::{parse_action, parse_position, Action, ParseError, VALID_ACTIONS};

/// Prints a prompt and reads one trimmed answer line. A closed input
/// stream surfaces as `UnexpectedEof` rather than an endless re-prompt.
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, msg: &str) -> io::Result<String> {
    write!(out, "{}", msg)?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
    }
    Ok(line.trim().to_string())
}

/// Prompts until the player names a valid action.
fn prompt_action<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<Action> {
    let msg = format!("Make an action ({}): ", VALID_ACTIONS.join("/"));
    loop {
        let answer = prompt(input, out, &msg)?;
        match parse_action(&answer) {
            Some(action) => return Ok(action),
            None => writeln!(out, "Invalid action.")?,
        }
    }
}

/// Runs one hand's worth of actions: render the board, then act until the
/// hand is spent or the match ends.
fn turn_loop<R: BufRead, W: Write>(
    gs: &mut GameState,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "{}\n", gs)?;

    while !gs.active_player().hand_is_empty() && gs.winner().is_none() {
        writeln!(out, "Hand: {}", gs.active_player().hand_string())?;
        let action = prompt_action(input, out)?;
        handle_action(action, gs, input, out)?;
    }
    Ok(())
}

/// Plays a match to completion: each player in turn refills their bag if
/// it is empty, draws a hand, spends it, and hands over. Announces the
/// winner at the end.
pub fn run_match<R: BufRead, W: Write>(
    gs: &mut GameState,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    while gs.winner().is_none() {
        if gs.active_player().bag_is_empty() {
            gs.refill_active();
        }
        gs.draw_active_hand();
        turn_loop(gs, input, out)?;
        gs.swap_active_player();
    }

    if let Some(winner) = gs.winner() {
        writeln!(out, "The game has ended! The winner is: {}", winner)?;
    }
    Ok(())
}
