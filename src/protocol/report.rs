//! Battle report rendering.
//!
//! Renders a solve outcome as protocol lines or as a single JSON document.

use std::io::{self, Write};

use serde_json::json;

use crate::battle::Rules;
use crate::search::{Arrangement, SolveOutcome};

/// Writes the text report for a solve outcome.
///
/// A found arrangement renders as the winning order, one numbered line per
/// battle, and the win tally; an exhausted search renders as a single
/// `nosolution` line carrying the best win count.
pub fn write_report<W: Write>(
    out: &mut W,
    outcome: &SolveOutcome,
    rules: &Rules,
) -> io::Result<()> {
    match outcome {
        SolveOutcome::Arranged(arrangement) => write_arrangement(out, arrangement, rules),
        SolveOutcome::NoArrangement { best_wins } => {
            writeln!(out, "nosolution best {}/{}", best_wins, rules.army_size)
        }
    }
}

fn write_arrangement<W: Write>(
    out: &mut W,
    arrangement: &Arrangement,
    rules: &Rules,
) -> io::Result<()> {
    let order: Vec<String> = arrangement
        .platoons
        .iter()
        .map(|p| p.to_string())
        .collect();
    writeln!(out, "arrangement {}", order.join(";"))?;
    for (i, battle) in arrangement.battles.iter().enumerate() {
        writeln!(
            out,
            "battle {}: {} vs {} -> {}",
            i + 1,
            battle.attacker,
            battle.defender,
            battle.outcome
        )?;
    }
    writeln!(out, "wins {}/{}", arrangement.wins, rules.army_size)
}

/// Renders a solve outcome as a single-line JSON document.
pub fn json_report(outcome: &SolveOutcome, rules: &Rules) -> String {
    let doc = match outcome {
        SolveOutcome::Arranged(arrangement) => json!({
            "arrangement": arrangement
                .platoons
                .iter()
                .map(|p| p.to_string())
                .collect::<Vec<String>>(),
            "wins": arrangement.wins,
            "required_wins": rules.required_wins,
            "battles": arrangement
                .battles
                .iter()
                .map(|b| json!({
                    "attacker": b.attacker.to_string(),
                    "defender": b.defender.to_string(),
                    "outcome": b.outcome.to_string(),
                }))
                .collect::<Vec<serde_json::Value>>(),
        }),
        SolveOutcome::NoArrangement { best_wins } => json!({
            "arrangement": serde_json::Value::Null,
            "best_wins": best_wins,
            "required_wins": rules.required_wins,
        }),
    };
    doc.to_string()
}
