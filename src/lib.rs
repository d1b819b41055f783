//! Vanguard solver library.
//!
//! Exposes the army representation, pairing evaluator, arrangement search,
//! and protocol modules for use by integration tests and the binary entry
//! point.

pub mod army;
pub mod battle;
pub mod engine;
pub mod protocol;
pub mod scenario;
pub mod search;
