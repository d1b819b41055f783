//! Scenario files.
//!
//! Loads a puzzle scenario (both armies and an optional win threshold) from
//! a JSON document, so recurring test positions can be replayed without
//! retyping the army strings.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::army::Army;
use crate::protocol::army::parse_army;

/// A scenario as represented in the JSON file.
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioFile {
    pub attacker: String,
    pub defender: String,
    #[serde(default)]
    pub required_wins: Option<usize>,
}

/// A loaded scenario with parsed armies.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub attacker: Army,
    pub defender: Army,
    pub required_wins: Option<usize>,
}

/// Loads a scenario from a JSON file at the given path.
pub fn load_scenario(path: &Path) -> Result<Scenario, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
    load_scenario_from_str(&data)
}

/// Loads a scenario from a JSON string.
pub fn load_scenario_from_str(json: &str) -> Result<Scenario, String> {
    let file: ScenarioFile =
        serde_json::from_str(json).map_err(|e| format!("failed to parse scenario JSON: {}", e))?;
    let attacker = parse_army(&file.attacker)
        .map_err(|e| format!("invalid attacker army: {}", e))?;
    let defender = parse_army(&file.defender)
        .map_err(|e| format!("invalid defender army: {}", e))?;
    Ok(Scenario {
        attacker,
        defender,
        required_wins: file.required_wins,
    })
}
