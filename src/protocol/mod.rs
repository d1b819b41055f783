//! Line protocol handling.
//!
//! Parsing and rendering for the solver's text surfaces: army notation,
//! the stdin command language, and the battle report.

pub mod army;
pub mod command;
pub mod report;

pub use army::{parse_army, ArmyParseError};
pub use command::{parse_command, Command};
pub use report::{json_report, write_report};
