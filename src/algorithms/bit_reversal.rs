//! Bit reversal permutation for the radix-2 decimation-in-time FFT.
//!
//! The permutation for a size `N = 2^k` maps index `i` to the integer formed by reversing the
//! low `k` bits of `i`. It is self-inverse, so the reordering is applied in place by swapping
//! each pair `(i, rev(i))` once, with `i < rev(i)`.
//!
//! The table itself is built once per size and cached in the [`Plan`](crate::planner::Plan);
//! transforms never recompute it.

/// Compute the bit reversal permutation table for `big_n` elements.
///
/// Entry `i` holds the index `i` moves to (equivalently, comes from) when the sequence is
/// bit-reverse permuted. The table is built with the doubling recurrence: the table for `2m`
/// is the table for `m` with every entry doubled, followed by the same entries doubled plus one.
///
/// # Panics
///
/// Panics if `big_n` is zero or not a power of 2.
pub fn permutation_index(big_n: usize) -> Vec<usize> {
    assert!(
        big_n.is_power_of_two(),
        "permutation size must be a non-zero power of two, got {big_n}"
    );

    let mut table = Vec::with_capacity(big_n);
    table.push(0);

    while table.len() < big_n {
        let half = table.len();
        for i in 0..half {
            table[i] <<= 1;
        }
        for i in 0..half {
            let odd = table[i] + 1;
            table.push(odd);
        }
    }

    table
}

/// Reorder `buf` in place according to a self-inverse permutation `table`.
///
/// # Panics
///
/// Panics if `buf.len() != table.len()` or if the table holds an index outside of `buf`.
pub fn apply_permutation<T>(buf: &mut [T], table: &[usize]) {
    assert_eq!(buf.len(), table.len());

    for (i, &j) in table.iter().enumerate() {
        if i < j {
            buf.swap(i, j);
        }
    }
}
