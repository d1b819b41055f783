//! Command parser for the solver's line protocol.
//!
//! Parses incoming lines from stdin into structured `Command` variants that
//! the main loop can dispatch on.

/// A parsed command for the solver loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Set the attacking army from army notation.
    Attacker { army: String },

    /// Set the defending army from army notation.
    Defender { army: String },

    /// Set an engine option: `setoption name <id> [value <x>]`.
    SetOption { name: String, value: Option<String> },

    /// Run the arrangement search and print the report.
    Solve { json: bool },

    /// Generate a random scenario, optionally from a fixed seed.
    Random { seed: Option<u64> },

    /// Load a scenario file.
    Load { path: String },

    /// Synchronization ping; the engine replies `readyok`.
    IsReady,

    /// Reset engine state for a new puzzle.
    NewGame,

    /// Terminate the process.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines or unrecognized commands. Malformed
/// arguments for known commands also return `None` after logging to stderr.
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let tokens: Vec<&str> = trimmed.split_whitespace().collect();
    if tokens.is_empty() {
        return None;
    }

    match tokens[0] {
        "isready" => Some(Command::IsReady),
        "newgame" => Some(Command::NewGame),
        "quit" => Some(Command::Quit),

        "attacker" => parse_army_arg(&tokens, |army| Command::Attacker { army }),
        "defender" => parse_army_arg(&tokens, |army| Command::Defender { army }),
        "setoption" => parse_setoption(&tokens),
        "solve" => parse_solve(&tokens),
        "random" => parse_random(&tokens),
        "load" => parse_load(&tokens),

        other => {
            eprintln!("unknown command: {}", other);
            None
        }
    }
}

/// Parses `attacker <army>` / `defender <army>`.
fn parse_army_arg(tokens: &[&str], build: impl FnOnce(String) -> Command) -> Option<Command> {
    if tokens.len() < 2 {
        eprintln!("malformed {}: expected '{} <army>'", tokens[0], tokens[0]);
        return None;
    }
    // Army notation is a single token (no spaces).
    Some(build(tokens[1].to_string()))
}

/// Parses `setoption name <id> [value <x>]`.
fn parse_setoption(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 3 || tokens[1] != "name" {
        eprintln!("malformed setoption: expected 'setoption name <id> [value <x>]'");
        return None;
    }

    let value_idx = tokens.iter().position(|&t| t == "value");

    let (name, value) = match value_idx {
        Some(vi) => {
            let name_parts = &tokens[2..vi];
            let value_parts = &tokens[vi + 1..];
            if name_parts.is_empty() {
                eprintln!("malformed setoption: empty name");
                return None;
            }
            let name = name_parts.join(" ");
            let value = if value_parts.is_empty() {
                None
            } else {
                Some(value_parts.join(" "))
            };
            (name, value)
        }
        None => (tokens[2..].join(" "), None),
    };

    Some(Command::SetOption { name, value })
}

/// Parses `solve [json]`.
fn parse_solve(tokens: &[&str]) -> Option<Command> {
    match tokens.get(1) {
        None => Some(Command::Solve { json: false }),
        Some(&"json") => Some(Command::Solve { json: true }),
        Some(other) => {
            eprintln!("unknown solve parameter: '{}'", other);
            None
        }
    }
}

/// Parses `random [seed]`.
fn parse_random(tokens: &[&str]) -> Option<Command> {
    match tokens.get(1) {
        None => Some(Command::Random { seed: None }),
        Some(raw) => match raw.parse::<u64>() {
            Ok(seed) => Some(Command::Random { seed: Some(seed) }),
            Err(_) => {
                eprintln!("invalid random seed: '{}'", raw);
                None
            }
        },
    }
}

/// Parses `load <path>`.
fn parse_load(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 2 {
        eprintln!("malformed load: expected 'load <path>'");
        return None;
    }
    Some(Command::Load {
        path: tokens[1..].join(" "),
    })
}
