//! Vanguard -- a battle-arrangement solver for the Age of War puzzle.
//!
//! This binary reads commands from stdin and writes responses to stdout,
//! one command per line.

use std::io::{self, BufRead};

use vanguard::engine::Engine;
use vanguard::protocol::command::{parse_command, Command};

/// Runs the main command loop, reading commands from stdin and writing
/// responses to stdout.
fn main() {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut engine = Engine::new();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        match cmd {
            Command::IsReady => {
                engine.handle_isready(&mut out);
            }
            Command::NewGame => {
                engine.new_game();
            }
            Command::Attacker { army } => {
                if let Err(e) = engine.set_attacker(&army) {
                    eprintln!("{}", e);
                }
            }
            Command::Defender { army } => {
                if let Err(e) = engine.set_defender(&army) {
                    eprintln!("{}", e);
                }
            }
            Command::SetOption { name, value } => {
                engine.set_option(name, value);
            }
            Command::Solve { json } => {
                engine.handle_solve(&mut out, json);
            }
            Command::Random { seed } => {
                engine.handle_random(&mut out, seed);
            }
            Command::Load { path } => {
                if let Err(e) = engine.load_scenario_file(&path) {
                    eprintln!("{}", e);
                }
            }
            Command::Quit => {
                break;
            }
        }
    }
}
