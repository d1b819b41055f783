//! Pairing evaluation.
//!
//! Scores one attacker platoon against one defender platoon under a set of
//! rules. The ruleset is one-sided: only the attacker's strength is ever
//! scaled by the advantage multiplier, the defender always fights at its raw
//! soldier count.

use std::fmt;

use crate::army::{has_advantage, Platoon};

/// Tunable rule parameters, passed explicitly to the evaluator and solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    /// Platoons per army.
    pub army_size: usize,
    /// Minimum number of Wins for an arrangement to qualify.
    pub required_wins: usize,
    /// Strength multiplier applied to an advantaged attacker.
    pub advantage_multiplier: u64,
}

impl Default for Rules {
    fn default() -> Self {
        Rules {
            army_size: 5,
            required_wins: 3,
            advantage_multiplier: 2,
        }
    }
}

/// The result of one platoon-vs-platoon pairing, from the attacker's
/// perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleOutcome {
    Win,
    Draw,
    Loss,
}

impl fmt::Display for BattleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BattleOutcome::Win => f.write_str("Win"),
            BattleOutcome::Draw => f.write_str("Draw"),
            BattleOutcome::Loss => f.write_str("Loss"),
        }
    }
}

/// One resolved pairing: the platoons involved and the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Engagement {
    pub attacker: Platoon,
    pub defender: Platoon,
    pub outcome: BattleOutcome,
}

/// Returns the attacker's effective strength against the given defender.
pub fn effective_strength(attacker: &Platoon, defender: &Platoon, rules: &Rules) -> u64 {
    let base = attacker.count() as u64;
    if has_advantage(attacker.unit_class(), defender.unit_class()) {
        base * rules.advantage_multiplier
    } else {
        base
    }
}

/// Evaluates one pairing. Win on strictly greater effective strength, Loss
/// on strictly less, Draw on equal.
pub fn evaluate(attacker: &Platoon, defender: &Platoon, rules: &Rules) -> BattleOutcome {
    let attack = effective_strength(attacker, defender, rules);
    let defense = defender.count() as u64;
    if attack > defense {
        BattleOutcome::Win
    } else if attack < defense {
        BattleOutcome::Loss
    } else {
        BattleOutcome::Draw
    }
}
