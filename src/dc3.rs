//! The Skew (DC3) suffix array construction of Karkkainen and Sanders:
//! sample the mod-{1,2} suffixes, sort and name their leading triples,
//! recurse on the reduced alphabet if names aren't already unique, sort
//! the mod-0 suffixes against them, and merge.

use crate::counting_sort::{alphabet_bound, counting_sort, TUPLE_SIZE};
use crate::trace;
use crate::tuple_info::{sample_mod12, radix_sort_and_name};

const PAD: usize = 2;

/// Builds the suffix array of `padded[0..n)`, where `padded` has length
/// `n + 2` and `padded[n] == padded[n + 1] == 0`. This is the internal,
/// already-padded entry point; `crate::suffix_array` is the public one.
pub fn suffix_array_padded(padded: &[u32], n: usize) -> Vec<u32> {
    debug_assert_eq!(padded.len(), n + PAD);

    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![0];
    }

    let mut t12 = sample_mod12(padded, n);
    let m = t12.total_blocks;
    trace!("dc3: n={n} m={m}");

    let names = radix_sort_and_name(&mut t12);

    if t12.max_name < m {
        trace!("dc3: names not unique ({} < {m}), recursing", t12.max_name);
        let sa12 = suffix_array_padded(&names, m);
        // sa12 is a permutation of 0..m over table indices (since `names`
        // is indexed by table index); convert it into the rank-ordered
        // replacement for tuple_sorting.
        t12.tuple_sorting = sa12.iter().map(|&i| i as usize).collect();
    }
    // else: m distinct triples means the 3-character sort already gives
    // the true lexicographic order of the sampled suffixes.

    // SA12r: source position -> 1-based rank among sampled suffixes.
    // Positions >= n (including the PAD tail) compare as rank 0, the
    // smallest possible rank, which is always a valid tie-break against
    // the trailing sentinel zeros.
    let mut sa12r = vec![0u32; n + PAD];
    for (rank, &idx) in t12.tuple_sorting.iter().enumerate() {
        sa12r[t12.positions[idx]] = (rank + 1) as u32;
    }

    let sa0 = mod0_positions_sorted(padded, n, &t12);

    merge(padded, n, &t12, &sa0, &sa12r)
}

/// Builds the mod-0 positions in final lexicographic order: pre-order by
/// the (already known) rank of their mod-1 successor, then a single
/// stable counting sort by the leading symbol.
fn mod0_positions_sorted(padded: &[u32], n: usize, t12: &crate::tuple_info::TupleInfo) -> Vec<usize> {
    let mut positions0 = Vec::with_capacity(n / 3 + 1);
    if n % 3 == 1 {
        // S[n-1..] has no sampled mod-1 successor within range; its
        // successor rank is the smallest possible (0), so it sorts first.
        positions0.push(n - 1);
    }
    for &idx in &t12.tuple_sorting {
        if t12.tuple_type[idx] == 1 {
            positions0.push(t12.positions[idx] - 1);
        }
    }

    let n0 = positions0.len();
    let values: Vec<[u32; TUPLE_SIZE]> = positions0
        .iter()
        .map(|&p| [padded[p], 0, 0])
        .collect();
    let k = alphabet_bound(n0.max(1));
    let order = counting_sort(&values, None, k, n0, 0);
    order.into_iter().map(|i| positions0[i]).collect()
}

/// Merges the sorted mod-0 and mod-12 suffixes by the classic DC3
/// comparison: two symbols plus a sampled rank for mod-1 successors,
/// three symbols plus a sampled rank for mod-2 successors.
fn merge(
    padded: &[u32],
    n: usize,
    t12: &crate::tuple_info::TupleInfo,
    sa0: &[usize],
    sa12r: &[u32],
) -> Vec<u32> {
    let mut sa = Vec::with_capacity(n);
    let mut i0 = 0usize;
    let mut i12 = 0usize;
    let n0 = sa0.len();
    let n12 = t12.tuple_sorting.len();

    while i0 < n0 && i12 < n12 {
        let p0 = sa0[i0];
        let idx12 = t12.tuple_sorting[i12];
        let p12 = t12.positions[idx12];
        let mod0_is_smaller = if t12.tuple_type[idx12] == 1 {
            (padded[p0], sa12r[p0 + 1]) <= (padded[p12], sa12r[p12 + 1])
        } else {
            (padded[p0], padded[p0 + 1], sa12r[p0 + 2])
                <= (padded[p12], padded[p12 + 1], sa12r[p12 + 2])
        };
        if mod0_is_smaller {
            sa.push(p0 as u32);
            i0 += 1;
        } else {
            sa.push(p12 as u32);
            i12 += 1;
        }
    }
    while i0 < n0 {
        sa.push(sa0[i0] as u32);
        i0 += 1;
    }
    while i12 < n12 {
        sa.push(t12.positions[t12.tuple_sorting[i12]] as u32);
        i12 += 1;
    }
    sa
}
