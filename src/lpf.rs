//! The Longest Previous Factor array: for each position, the length of
//! the longest factor starting there that also occurs earlier. Computed
//! by sweeping the LCP array in reverse rank order over a doubly linked
//! list of not-yet-processed ranks.

use crate::lcp::lcp_array;
use crate::rank::reverse_sa;
use crate::trace;

#[derive(Clone, Copy)]
struct AdjNode {
    prev: isize,
    next: isize,
    prev_val: u32,
    next_val: u32,
}

/// Builds `LPF[0..n)` from the raw symbols `s` (unpadded, `n = s.len()`).
/// `LPF[0] = 0`; for `i > 0`, `LPF[i]` is the length of the longest
/// factor starting at `i` that also starts at some `j < i`.
pub fn lpf_array(s: &[u32], sa: &[u32], sar: &[u32], lcp: &[u32]) -> Vec<u32> {
    let n = s.len();
    trace!("lpf: n={n}");
    if n == 0 {
        return Vec::new();
    }

    let mut adj = vec![
        AdjNode {
            prev: -1,
            next: -1,
            prev_val: 0,
            next_val: 0,
        };
        n
    ];
    for r in 0..n {
        adj[r] = AdjNode {
            prev: if r == 0 { -1 } else { (r - 1) as isize },
            next: if r + 1 < n { (r + 1) as isize } else { -1 },
            prev_val: if r == 0 { 0 } else { lcp[r] },
            next_val: if r + 1 < n { lcp[r + 1] } else { 0 },
        };
    }

    let mut lpf = vec![0u32; n];
    for i in (1..n).rev() {
        let r = sar[i] as usize;
        let node = adj[r];
        let (p, q, pv, qv) = (node.prev, node.next, node.prev_val, node.next_val);
        lpf[i] = pv.max(qv);

        if q >= 0 {
            adj[q as usize].prev = p;
            adj[q as usize].prev_val = pv.min(qv);
        }
        if p >= 0 {
            adj[p as usize].next = q;
            adj[p as usize].next_val = if q >= 0 { adj[q as usize].prev_val } else { 0 };
        }
    }
    lpf
}

/// Convenience entry point: computes `sa`, `sar`, and `lcp` internally.
pub fn lpf_array_from_scratch(s: &[u32], sa: Vec<u32>) -> Vec<u32> {
    let sar = reverse_sa(&sa);
    let lcp = lcp_array(s, &sa, &sar);
    lpf_array(s, &sa, &sar, &lcp)
}
