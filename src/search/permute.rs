//! Lexicographic permutation generation.
//!
//! Enumerates permutations of `0..n` in lexicographic order by index, as an
//! explicit restartable sequence rather than recursive backtracking. The
//! sequence can be started at any rank via the factorial number system,
//! which is what allows the rank space to be split across workers.

/// Largest element count whose permutation count fits in a u64. Callers
/// validate sizes against this before searching.
pub const MAX_ELEMENTS: usize = 20;

/// Returns `n!`. Panics above [`MAX_ELEMENTS`], where the count no longer
/// fits in a u64.
pub fn permutation_count(n: usize) -> u64 {
    assert!(
        n <= MAX_ELEMENTS,
        "permutation count overflows u64 for n > {}",
        MAX_ELEMENTS
    );
    (1..=n as u64).product()
}

/// A finite, deterministic sequence of index permutations.
#[derive(Debug, Clone)]
pub struct Permutations {
    indices: Vec<usize>,
    remaining: u64,
}

impl Permutations {
    /// Starts the sequence at rank 0 (the identity permutation).
    pub fn new(n: usize) -> Permutations {
        Permutations {
            indices: (0..n).collect(),
            remaining: permutation_count(n),
        }
    }

    /// Starts the sequence at the given rank. Rank `r` decodes through the
    /// factorial number system: the i-th digit selects which of the unused
    /// indices comes next.
    pub fn from_rank(n: usize, rank: u64) -> Permutations {
        let total = permutation_count(n);
        assert!(rank <= total, "rank {} out of range for n = {}", rank, n);

        let mut pool: Vec<usize> = (0..n).collect();
        let mut indices = Vec::with_capacity(n);
        let mut r = rank.min(total.saturating_sub(1));
        for i in (1..=n).rev() {
            let f = permutation_count(i - 1);
            let k = (r / f) as usize;
            r %= f;
            indices.push(pool.remove(k));
        }
        Permutations {
            indices,
            remaining: total - rank,
        }
    }

    /// Advances `indices` to its lexicographic successor. Must not be called
    /// on the final permutation.
    fn advance(&mut self) {
        let indices = &mut self.indices;
        let n = indices.len();
        // Rightmost ascent.
        let mut pivot = n - 1;
        while pivot > 0 && indices[pivot - 1] >= indices[pivot] {
            pivot -= 1;
        }
        debug_assert!(pivot > 0, "advance past the final permutation");
        let pivot = pivot - 1;
        // Smallest element right of the pivot that exceeds it.
        let mut succ = n - 1;
        while indices[succ] <= indices[pivot] {
            succ -= 1;
        }
        indices.swap(pivot, succ);
        indices[pivot + 1..].reverse();
    }
}

impl Iterator for Permutations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.indices.clone();
        self.remaining -= 1;
        if self.remaining > 0 {
            self.advance();
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::try_from(self.remaining).ok();
        (len.unwrap_or(usize::MAX), len)
    }
}
