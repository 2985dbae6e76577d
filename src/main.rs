//! Warchest -- a bag-building board game at the console.
//!
//! This binary shows the pre-match leaderboard, then runs one interactive
//! match on stdin/stdout. Operational noise (database failures, aborted
//! input) goes to stderr through tracing; stdout carries only the game.

use std::io::{self, BufRead, Write};

use tracing_subscriber::EnvFilter;

use warchest::console::run_match;
use warchest::game::GameState;
use warchest::leaderboard;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
    dotenvy::dotenv().ok();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut out = io::BufWriter::new(stdout.lock());

    show_leaderboard(&mut out);

    writeln!(out, "Welcome to Warchest").unwrap();
    writeln!(
        out,
        "DISCLAIMER: SOME ACTIONS MAY LEAD TO A SOFTBLOCK OF THE GAME. \
         IN SUCH CASE, PRESS CTRL-C TO EXIT"
    )
    .unwrap();
    if wait_for_enter(&mut input, &mut out).is_err() {
        return;
    }

    let mut gs = GameState::new();
    if let Err(e) = run_match(&mut gs, &mut input, &mut out) {
        out.flush().ok();
        tracing::error!("match aborted: {}", e);
    }
    out.flush().ok();
}

/// Fetches and prints the leaderboard when a database is configured.
/// Any failure is logged and the match goes ahead without it.
fn show_leaderboard<W: Write>(out: &mut W) {
    let url = match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            tracing::warn!("DATABASE_URL not set; skipping leaderboard");
            return;
        }
    };

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            tracing::warn!("could not start runtime for leaderboard: {}", e);
            return;
        }
    };

    match runtime.block_on(leaderboard::fetch_top(&url)) {
        Ok(entries) => {
            for entry in &entries {
                writeln!(out, "{}", leaderboard::format_entry(entry)).unwrap();
            }
            writeln!(out).unwrap();
        }
        Err(e) => tracing::warn!("leaderboard unavailable: {}", e),
    }
}

fn wait_for_enter<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<()> {
    write!(out, "Press enter to continue")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
    }
    Ok(())
}
