//! Engine state management.
//!
//! Holds the current armies and engine options, and runs the arrangement
//! search for the `solve` command. Uses the chunked parallel solver when
//! the `Threads` option is above 1 and the sequential solver otherwise.

use std::collections::HashMap;
use std::io::Write;
use std::path::Path;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::army::{random_army, Army};
use crate::battle::Rules;
use crate::protocol::army::parse_army;
use crate::protocol::report::{json_report, write_report};
use crate::scenario::load_scenario;
use crate::search::{solve, solve_parallel};

/// Holds the mutable state of the engine between commands.
pub struct Engine {
    pub attacker: Option<Army>,
    pub defender: Option<Army>,
    pub options: HashMap<String, String>,
    rng: SmallRng,
}

impl Engine {
    /// Creates a new engine with no armies set.
    pub fn new() -> Self {
        Engine {
            attacker: None,
            defender: None,
            options: HashMap::new(),
            rng: SmallRng::from_entropy(),
        }
    }

    /// Resets armies for a new puzzle. Options persist.
    pub fn new_game(&mut self) {
        self.attacker = None;
        self.defender = None;
    }

    /// Sets the attacking army from army notation.
    /// Returns an error message on failure.
    pub fn set_attacker(&mut self, army: &str) -> Result<(), String> {
        match parse_army(army) {
            Ok(parsed) => {
                self.attacker = Some(parsed);
                Ok(())
            }
            Err(e) => Err(format!("failed to parse attacker: {}", e)),
        }
    }

    /// Sets the defending army from army notation.
    pub fn set_defender(&mut self, army: &str) -> Result<(), String> {
        match parse_army(army) {
            Ok(parsed) => {
                self.defender = Some(parsed);
                Ok(())
            }
            Err(e) => Err(format!("failed to parse defender: {}", e)),
        }
    }

    /// Sets an engine option.
    pub fn set_option(&mut self, name: String, value: Option<String>) {
        self.options.insert(name, value.unwrap_or_default());
    }

    /// Returns a numeric option, or the default when unset or unparsable.
    fn numeric_option(&self, name: &str, default: usize) -> usize {
        self.options
            .get(name)
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(default)
    }

    /// Builds the rule set from the current options.
    pub fn rules(&self) -> Rules {
        let defaults = Rules::default();
        Rules {
            army_size: self.numeric_option("ArmySize", defaults.army_size),
            required_wins: self.numeric_option("RequiredWins", defaults.required_wins),
            advantage_multiplier: defaults.advantage_multiplier,
        }
    }

    /// Handles the `isready` command.
    pub fn handle_isready<W: Write>(&self, out: &mut W) {
        writeln!(out, "readyok").unwrap();
        out.flush().unwrap();
    }

    /// Handles the `random` command: generates both armies, optionally from
    /// a fixed seed, and echoes them.
    pub fn handle_random<W: Write>(&mut self, out: &mut W, seed: Option<u64>) {
        let rules = self.rules();
        let mut rng = match seed {
            Some(s) => SmallRng::seed_from_u64(s),
            None => SmallRng::seed_from_u64(self.rng.gen()),
        };
        let attacker = random_army(rules.army_size, &mut rng);
        let defender = random_army(rules.army_size, &mut rng);
        writeln!(out, "attacker {}", attacker).unwrap();
        writeln!(out, "defender {}", defender).unwrap();
        out.flush().unwrap();
        self.attacker = Some(attacker);
        self.defender = Some(defender);
    }

    /// Handles the `load` command: reads a scenario file and applies it.
    pub fn load_scenario_file(&mut self, path: &str) -> Result<(), String> {
        let scenario = load_scenario(Path::new(path))?;
        self.attacker = Some(scenario.attacker);
        self.defender = Some(scenario.defender);
        if let Some(wins) = scenario.required_wins {
            self.options
                .insert("RequiredWins".to_string(), wins.to_string());
        }
        Ok(())
    }

    /// Handles the `solve` command: runs the search and writes the report.
    pub fn handle_solve<W: Write>(&mut self, out: &mut W, json: bool) {
        let attacker = match &self.attacker {
            Some(a) => a,
            None => {
                eprintln!("solve: no attacker army set");
                return;
            }
        };
        let defender = match &self.defender {
            Some(d) => d,
            None => {
                eprintln!("solve: no defender army set");
                return;
            }
        };

        let rules = self.rules();
        let threads = self.numeric_option("Threads", 1);
        let result = if threads > 1 {
            solve_parallel(attacker, defender, &rules, threads)
        } else {
            solve(attacker, defender, &rules)
        };

        match result {
            Ok(outcome) => {
                if json {
                    writeln!(out, "{}", json_report(&outcome, &rules)).unwrap();
                } else {
                    write_report(out, &outcome, &rules).unwrap();
                }
                out.flush().unwrap();
            }
            Err(e) => eprintln!("solve: {}", e),
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new()
    }
}
