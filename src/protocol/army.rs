//! Army notation encoding and decoding.
//!
//! An army is written as semicolon-separated `UnitClass#count` tokens, e.g.
//! `Spearmen#10;Militia#30;FootArcher#20;LightCavalry#1000;HeavyCavalry#120`.

use crate::army::{Army, Platoon, UnitClass, ValidationError};

/// Errors that can occur while parsing army notation.
#[derive(Debug, thiserror::Error)]
pub enum ArmyParseError {
    #[error("empty army string")]
    Empty,

    #[error("malformed platoon token '{0}', expected UnitClass#count")]
    MalformedPlatoon(String),

    #[error("unknown unit class: '{0}'")]
    UnknownUnitClass(String),

    #[error("invalid soldier count: '{0}'")]
    InvalidCount(String),

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Parses one `UnitClass#count` token.
fn parse_platoon(token: &str) -> Result<Platoon, ArmyParseError> {
    let (class_str, count_str) = token
        .split_once('#')
        .ok_or_else(|| ArmyParseError::MalformedPlatoon(token.to_string()))?;

    let class = UnitClass::from_token(class_str)
        .ok_or_else(|| ArmyParseError::UnknownUnitClass(class_str.to_string()))?;

    let count: u32 = count_str
        .parse()
        .map_err(|_| ArmyParseError::InvalidCount(count_str.to_string()))?;

    Ok(Platoon::new(class, count)?)
}

/// Parses an army from its text form. Slot order follows token order.
pub fn parse_army(s: &str) -> Result<Army, ArmyParseError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(ArmyParseError::Empty);
    }
    let platoons = trimmed
        .split(';')
        .map(parse_platoon)
        .collect::<Result<Vec<Platoon>, ArmyParseError>>()?;
    Ok(Army::new(platoons))
}
