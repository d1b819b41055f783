//! Parallel arrangement search.
//!
//! Splits the permutation rank space into contiguous chunks and scans each
//! chunk independently on the rayon pool. Workers share no mutable state;
//! each seeds its own generator from the chunk's starting rank. Taking the
//! lowest-ranked qualifying arrangement among the workers' findings keeps
//! the result identical to the sequential search.

use rayon::prelude::*;

use crate::army::{Army, ValidationError};
use crate::battle::Rules;

use super::arrange::{scan_ranks, Arrangement, SolveOutcome};
use super::permute::permutation_count;

/// Searches like [`solve`](super::solve), scanning `chunks` rank ranges
/// concurrently.
///
/// A worker stops at the first qualifying ordering in its own range, so
/// later chunks may do wasted work that the sequential search would have
/// skipped; the returned outcome is the same either way.
pub fn solve_parallel(
    attacker: &Army,
    defender: &Army,
    rules: &Rules,
    chunks: usize,
) -> Result<SolveOutcome, ValidationError> {
    let chunks = chunks.max(1) as u64;
    // Size validation happens in the sequential path for a single chunk.
    if chunks == 1 {
        return super::solve(attacker, defender, rules);
    }
    super::arrange::validate(attacker, defender, rules)?;

    let total = permutation_count(attacker.len());
    let chunk_len = total.div_ceil(chunks);

    let outcomes: Vec<SolveOutcome> = (0..chunks)
        .into_par_iter()
        .map(|i| {
            // More chunks than ranks leaves trailing chunks empty.
            let first = (i * chunk_len).min(total);
            let len = chunk_len.min(total - first);
            scan_ranks(first, len, attacker.platoons(), defender.platoons(), rules)
        })
        .collect();

    let mut best_wins = 0;
    let mut found: Option<Arrangement> = None;
    for outcome in outcomes {
        match outcome {
            SolveOutcome::Arranged(a) => {
                let earlier = match &found {
                    Some(prev) => a.rank < prev.rank,
                    None => true,
                };
                if earlier {
                    found = Some(a);
                }
            }
            SolveOutcome::NoArrangement { best_wins: wins } => {
                best_wins = best_wins.max(wins);
            }
        }
    }

    Ok(match found {
        Some(a) => SolveOutcome::Arranged(a),
        None => SolveOutcome::NoArrangement { best_wins },
    })
}
