//! The inverse of a suffix array: `rank[sa[i]] = i`.

/// Builds the rank array (reverse SA) of `sa`. `rank[sa[i]] = i` for every
/// `i`, and `sa[rank[i]] = i` for every `i`.
pub fn reverse_sa(sa: &[u32]) -> Vec<u32> {
    let mut rank = vec![0u32; sa.len()];
    for (i, &p) in sa.iter().enumerate() {
        rank[p as usize] = i as u32;
    }
    rank
}
