//! Unit class definitions.
//!
//! All six unit classes are enumerated in a fixed order. The `#[repr(u8)]`
//! attribute enables use of the discriminant as an index into the advantage
//! table.

use std::fmt;

/// The number of unit classes in the ruleset.
pub const UNIT_CLASS_COUNT: usize = 6;

/// A class of military unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum UnitClass {
    Militia = 0,
    Spearmen = 1,
    LightCavalry = 2,
    HeavyCavalry = 3,
    FootArcher = 4,
    CavalryArcher = 5,
}

/// All unit class variants in index order.
pub const ALL_UNIT_CLASSES: [UnitClass; UNIT_CLASS_COUNT] = [
    UnitClass::Militia,
    UnitClass::Spearmen,
    UnitClass::LightCavalry,
    UnitClass::HeavyCavalry,
    UnitClass::FootArcher,
    UnitClass::CavalryArcher,
];

impl UnitClass {
    /// Returns the token used for this class in army notation.
    pub const fn token(self) -> &'static str {
        match self {
            UnitClass::Militia => "Militia",
            UnitClass::Spearmen => "Spearmen",
            UnitClass::LightCavalry => "LightCavalry",
            UnitClass::HeavyCavalry => "HeavyCavalry",
            UnitClass::FootArcher => "FootArcher",
            UnitClass::CavalryArcher => "CavalryArcher",
        }
    }

    /// Parses a unit class from its army-notation token.
    pub fn from_token(s: &str) -> Option<UnitClass> {
        match s {
            "Militia" => Some(UnitClass::Militia),
            "Spearmen" => Some(UnitClass::Spearmen),
            "LightCavalry" => Some(UnitClass::LightCavalry),
            "HeavyCavalry" => Some(UnitClass::HeavyCavalry),
            "FootArcher" => Some(UnitClass::FootArcher),
            "CavalryArcher" => Some(UnitClass::CavalryArcher),
            _ => None,
        }
    }
}

impl fmt::Display for UnitClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
