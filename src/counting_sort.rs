//! Stable counting sort over one position of a fixed-width tuple, and the
//! radix sort built from three passes of it.

/// Width of the sampled triples the whole construction operates on.
pub const TUPLE_SIZE: usize = 3;

/// Stably sorts `m` indices by `values[_][stage]`.
///
/// If `prev` is `None`, the indices sorted are `0..m`. If `prev` is
/// `Some`, the indices sorted are `prev[0..m]`, i.e. this call refines an
/// existing order by a less significant key while preserving ties in
/// `prev`'s order. `k` must exceed every key that can appear at `stage`.
pub fn counting_sort(
    values: &[[u32; TUPLE_SIZE]],
    prev: Option<&[usize]>,
    k: usize,
    m: usize,
    stage: usize,
) -> Vec<usize> {
    debug_assert!(prev.map_or(true, |p| p.len() == m));

    let index_of = |i: usize| prev.map_or(i, |p| p[i]);

    let mut count = vec![0usize; k];
    for i in 0..m {
        count[values[index_of(i)][stage] as usize] += 1;
    }
    for i in 1..k {
        count[i] += count[i - 1];
    }

    // Reverse scan: walking the input back to front and placing each
    // element just below the running (inclusive) prefix count keeps
    // equal keys in their original relative order.
    let mut out = vec![0usize; m];
    for i in (0..m).rev() {
        let j = index_of(i);
        let key = values[j][stage] as usize;
        count[key] -= 1;
        out[count[key]] = j;
    }
    out
}

/// `K` large enough to bound any symbol/name/rank that can appear as a
/// tuple field for `m` tuples (spec: `max(3m, 127)`).
pub fn alphabet_bound(m: usize) -> usize {
    (3 * m).max(127) + 1
}

/// Chains three counting-sort passes, least significant tuple field
/// first, to fully order `m` tuples by `values[_][0..3)`.
pub fn radix_sort(values: &[[u32; TUPLE_SIZE]], m: usize, k: usize) -> Vec<usize> {
    let mut order = counting_sort(values, None, k, m, 2);
    order = counting_sort(values, Some(&order), k, m, 1);
    order = counting_sort(values, Some(&order), k, m, 0);
    order
}
