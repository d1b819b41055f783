//! Army representation.
//!
//! Contains the unit class enumeration, the advantage table, and the
//! platoon/army value types.

pub mod advantage;
pub mod platoon;
pub mod unit;

use rand::Rng;

pub use advantage::has_advantage;
pub use platoon::{Army, Platoon, Side, ValidationError};
pub use unit::{UnitClass, ALL_UNIT_CLASSES, UNIT_CLASS_COUNT};

/// Generates a random army of `size` platoons.
///
/// Classes are drawn uniformly and counts uniformly from 1..=1000. Callers
/// that need reproducibility pass a seeded rng.
pub fn random_army(size: usize, rng: &mut impl Rng) -> Army {
    let platoons = (0..size)
        .map(|_| {
            let class = ALL_UNIT_CLASSES[rng.gen_range(0..UNIT_CLASS_COUNT)];
            let count = rng.gen_range(1..=1000);
            // Count is never zero by construction.
            Platoon::new(class, count).expect("random count in 1..=1000")
        })
        .collect();
    Army::new(platoons)
}
