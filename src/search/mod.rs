//! Arrangement search.
//!
//! The permutation generator, the sequential solver, and the chunked
//! parallel solver.

pub mod arrange;
pub mod parallel;
pub mod permute;

pub use arrange::{solve, Arrangement, SolveOutcome};
pub use parallel::solve_parallel;
pub use permute::{permutation_count, Permutations, MAX_ELEMENTS};
