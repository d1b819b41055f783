//! Platoons and armies.
//!
//! A platoon is an immutable (class, count) pair; an army is an ordered
//! sequence of platoons. Defender armies are positionally fixed (slot order
//! is the battle-location order); attacker armies are the subject of the
//! arrangement search.

use std::fmt;

use super::unit::UnitClass;

/// Which side of the battle an army fights on. Used in validation messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Attacker,
    Defender,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Attacker => f.write_str("attacker"),
            Side::Defender => f.write_str("defender"),
        }
    }
}

/// Errors raised before any search begins.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("platoon count must be positive, got {0}")]
    ZeroCount(u32),

    #[error("{side} army must field exactly {expected} platoons, got {actual}")]
    ArmySize {
        side: Side,
        expected: usize,
        actual: usize,
    },

    #[error("army size {actual} exceeds the searchable maximum of {max}")]
    SizeUnsupported { actual: usize, max: usize },
}

/// One army's force at one battle location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Platoon {
    unit_class: UnitClass,
    count: u32,
}

impl Platoon {
    /// Builds a platoon, rejecting a zero soldier count.
    pub fn new(unit_class: UnitClass, count: u32) -> Result<Platoon, ValidationError> {
        if count == 0 {
            return Err(ValidationError::ZeroCount(count));
        }
        Ok(Platoon { unit_class, count })
    }

    /// Returns the unit class of this platoon.
    pub fn unit_class(&self) -> UnitClass {
        self.unit_class
    }

    /// Returns the soldier count. Always at least 1.
    pub fn count(&self) -> u32 {
        self.count
    }
}

impl fmt::Display for Platoon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.unit_class, self.count)
    }
}

/// An ordered sequence of platoons.
///
/// Size against the configured army size is checked at solve time, not at
/// construction, since the size is a rules parameter rather than a property
/// of the type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Army(Vec<Platoon>);

impl Army {
    /// Builds an army from its platoons in slot order.
    pub fn new(platoons: Vec<Platoon>) -> Army {
        Army(platoons)
    }

    /// Returns the platoons in slot order.
    pub fn platoons(&self) -> &[Platoon] {
        &self.0
    }

    /// Returns the number of platoons.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the army has no platoons.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Army {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, platoon) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(";")?;
            }
            write!(f, "{}", platoon)?;
        }
        Ok(())
    }
}
