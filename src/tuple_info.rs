//! `TupleInfo`: the sampled mod-{1,2} triples used by one level of DC3,
//! their sort permutation, and the maps needed to merge them back against
//! the mod-0 suffixes.

use crate::counting_sort::{alphabet_bound, radix_sort, TUPLE_SIZE};

/// Residue class of a sampled position, `1` or `2`.
pub type TupleType = u8;

/// The sampled mod-{1,2} triples for one DC3 level, plus the bookkeeping
/// needed to merge them against the mod-0 suffixes.
pub struct TupleInfo {
    /// Source offset of the k-th sampled tuple.
    pub positions: Vec<usize>,
    /// Residue class (1 or 2) of the k-th sampled tuple.
    pub tuple_type: Vec<TupleType>,
    /// `S[positions[k]..positions[k]+3)` for the k-th sampled tuple.
    pub values: Vec<[u32; TUPLE_SIZE]>,
    /// Current order of table indices, lexicographically by the full
    /// sampled suffix (after naming and, if needed, recursion).
    pub tuple_sorting: Vec<usize>,
    /// Number of sampled tuples, `m`.
    pub total_blocks: usize,
    /// Number of distinct names assigned during naming.
    pub max_name: usize,
}

/// Samples every position `p` with `p mod 3 in {1,2}` and `p < n`,
/// mod-1 positions first, then mod-2, as required to build `T0` later.
pub fn sample_mod12(padded: &[u32], n: usize) -> TupleInfo {
    const PAD: usize = 2;
    debug_assert_eq!(padded.len(), n + PAD);

    let mut positions = Vec::new();
    let mut tuple_type = Vec::new();
    for p in (1..n).step_by(3) {
        positions.push(p);
        tuple_type.push(1);
    }
    for p in (2..n).step_by(3) {
        positions.push(p);
        tuple_type.push(2);
    }
    let total_blocks = positions.len();

    let values: Vec<[u32; TUPLE_SIZE]> = positions
        .iter()
        .map(|&p| [padded[p], padded[p + 1], padded[p + 2]])
        .collect();

    TupleInfo {
        positions,
        tuple_type,
        values,
        tuple_sorting: (0..total_blocks).collect(),
        total_blocks,
        max_name: 0,
    }
}

/// Sorts `tinfo`'s triples into `tinfo.tuple_sorting` and assigns
/// consecutive names (starting at 1) to distinct triples in that order.
/// Returns the per-table-index names, padded with two trailing zeros so
/// the array can be fed straight to a recursive `suffix_array` call.
pub fn radix_sort_and_name(tinfo: &mut TupleInfo) -> Vec<u32> {
    let m = tinfo.total_blocks;
    let k = alphabet_bound(m);
    tinfo.tuple_sorting = radix_sort(&tinfo.values, m, k);

    let mut names = vec![0u32; m + 2];
    let mut name = 0u32;
    let mut prev: Option<[u32; TUPLE_SIZE]> = None;
    for &idx in &tinfo.tuple_sorting {
        let v = tinfo.values[idx];
        if prev != Some(v) {
            name += 1;
            prev = Some(v);
        }
        names[idx] = name;
    }
    tinfo.max_name = name as usize;
    names
}
