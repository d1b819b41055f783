//! The unit-class advantage table.
//!
//! The relation is data, not per-class behavior: each row pairs an attacking
//! class with the classes it is advantaged against. An advantaged attacker's
//! effective strength is scaled by the rules multiplier; the relation itself
//! is a plain membership test and makes no assumption about graph shape.

use super::unit::{UnitClass, UNIT_CLASS_COUNT};

/// Advantage rows indexed by attacker discriminant. Each row carries its
/// owning class so a misordered table is caught at lookup time.
const ADVANTAGES: [(UnitClass, &[UnitClass]); UNIT_CLASS_COUNT] = [
    (
        UnitClass::Militia,
        &[UnitClass::Spearmen, UnitClass::LightCavalry],
    ),
    (
        UnitClass::Spearmen,
        &[UnitClass::LightCavalry, UnitClass::HeavyCavalry],
    ),
    (
        UnitClass::LightCavalry,
        &[UnitClass::FootArcher, UnitClass::CavalryArcher],
    ),
    (
        UnitClass::HeavyCavalry,
        &[
            UnitClass::Militia,
            UnitClass::FootArcher,
            UnitClass::LightCavalry,
        ],
    ),
    (
        UnitClass::FootArcher,
        &[UnitClass::Militia, UnitClass::CavalryArcher],
    ),
    (
        UnitClass::CavalryArcher,
        &[UnitClass::Spearmen, UnitClass::HeavyCavalry],
    ),
];

/// Returns true if `attacker` holds a tactical advantage over `defender`.
pub fn has_advantage(attacker: UnitClass, defender: UnitClass) -> bool {
    let (row_class, beats) = ADVANTAGES[attacker as usize];
    assert_eq!(row_class, attacker, "advantage table row out of order");
    beats.contains(&defender)
}
