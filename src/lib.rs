//! Linear-time suffix array (Skew/DC3), LCP (Kasai), and Longest Previous
//! Factor construction over an integer-valued alphabet.
//!
//! The three public entry points mirror each other's preconditions:
//! symbols are positive integers bounded by the input length, and the
//! crate handles the two-symbol trailing padding DC3 needs internally so
//! callers never have to think about it.

mod counting_sort;
mod dc3;
mod error;
mod lcp;
mod lpf;
mod rank;
#[cfg(test)]
mod testing;
mod tuple_info;

pub use error::SkewError;
pub use rank::reverse_sa;

/// Emits a diagnostic line when the `trace` feature is enabled; compiles
/// to nothing (and does not evaluate its arguments) otherwise.
#[cfg(feature = "trace")]
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => { eprintln!($($arg)*) };
}
#[cfg(not(feature = "trace"))]
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

fn pad(s: &[u32]) -> Vec<u32> {
    let mut padded = Vec::with_capacity(s.len() + 2);
    padded.extend_from_slice(s);
    padded.push(0);
    padded.push(0);
    padded
}

/// Builds the suffix array of `s`. Undefined (may panic or misbehave)
/// unless every symbol lies in `[1, s.len()]`; see [`try_suffix_array`]
/// for a validating entry point.
pub fn suffix_array(s: &[u32]) -> Vec<u32> {
    dc3::suffix_array_padded(&pad(s), s.len())
}

/// As [`suffix_array`], but validates the alphabet first.
pub fn try_suffix_array(s: &[u32]) -> Result<Vec<u32>, SkewError> {
    error::validate_alphabet(s)?;
    Ok(suffix_array(s))
}

/// Builds `LCP[0..n)` from `s` and its suffix array `sa` (with rank array
/// `sar`, e.g. from [`reverse_sa`]). `LCP[0] = 0`; `LCP[i]` is the length
/// of the common prefix of the suffixes at `sa[i-1]` and `sa[i]`.
pub fn lcp_array(s: &[u32], sa: &[u32], sar: &[u32]) -> Vec<u32> {
    lcp::lcp_array(s, sa, sar)
}

/// Builds `LPF[0..n)`: for each position, the length of the longest
/// factor starting there that also starts somewhere earlier. Undefined
/// unless every symbol of `s` lies in `[1, s.len()]`; see
/// [`try_lpf_array`] for a validating entry point.
pub fn lpf_array(s: &[u32]) -> Vec<u32> {
    let sa = suffix_array(s);
    lpf::lpf_array_from_scratch(s, sa)
}

/// As [`lpf_array`], but validates the alphabet first.
pub fn try_lpf_array(s: &[u32]) -> Result<Vec<u32>, SkewError> {
    error::validate_alphabet(s)?;
    Ok(lpf_array(s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{naive_lpf, naive_suffix_array};

    fn symbols(s: &[u8]) -> Vec<u32> {
        s.iter().map(|&b| b as u32).collect()
    }

    // ---- concrete scenarios (spec.md table 8) ----

    #[test]
    fn scenario_a() {
        let s = symbols(b"a");
        assert_eq!(suffix_array(&s), vec![0]);
        assert_eq!(lpf_array(&s), vec![0]);
    }

    #[test]
    fn scenario_banana() {
        let s = symbols(b"banana");
        let sa = suffix_array(&s);
        assert_eq!(sa, vec![5, 3, 1, 0, 4, 2]);
        let sar = reverse_sa(&sa);
        assert_eq!(lcp_array(&s, &sa, &sar), vec![0, 1, 3, 0, 0, 2]);
        assert_eq!(lpf_array(&s), vec![0, 0, 0, 3, 2, 1]);
    }

    #[test]
    fn scenario_mississippi() {
        let s = symbols(b"mississippi");
        let sa = suffix_array(&s);
        assert_eq!(sa, vec![10, 7, 4, 1, 0, 9, 8, 6, 3, 5, 2]);
        let sar = reverse_sa(&sa);
        assert_eq!(
            lcp_array(&s, &sa, &sar),
            vec![0, 1, 1, 4, 0, 0, 1, 0, 2, 1, 3]
        );
        assert_eq!(lpf_array(&s), vec![0, 0, 0, 0, 0, 4, 3, 2, 3, 2, 1]);
    }

    #[test]
    fn scenario_abcabcabc() {
        let s = symbols(b"abcabcabc");
        let sa = suffix_array(&s);
        assert_eq!(sa, vec![0, 3, 6, 1, 4, 7, 2, 5, 8]);
        let sar = reverse_sa(&sa);
        assert_eq!(lcp_array(&s, &sa, &sar), vec![0, 6, 3, 0, 5, 2, 0, 4, 1]);
        assert_eq!(lpf_array(&s), vec![0, 0, 0, 6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn scenario_aaaaa() {
        let s = symbols(b"aaaaa");
        let sa = suffix_array(&s);
        assert_eq!(sa, vec![4, 3, 2, 1, 0]);
        let sar = reverse_sa(&sa);
        assert_eq!(lcp_array(&s, &sa, &sar), vec![0, 1, 2, 3, 4]);
        assert_eq!(lpf_array(&s), vec![0, 4, 3, 2, 1]);
    }

    // ---- universal invariants ----

    fn assert_is_valid_sa(s: &[u32], sa: &[u32]) {
        let n = s.len();
        let mut seen = vec![false; n];
        for &p in sa {
            assert!((p as usize) < n);
            assert!(!seen[p as usize], "duplicate SA entry {p}");
            seen[p as usize] = true;
        }
        for w in sa.windows(2) {
            assert!(
                s[w[0] as usize..] < s[w[1] as usize..],
                "SA not increasing at {w:?}"
            );
        }
    }

    fn assert_round_trips(sa: &[u32]) {
        let sar = reverse_sa(sa);
        for (i, &p) in sa.iter().enumerate() {
            assert_eq!(sar[p as usize], i as u32);
        }
        for (p, &r) in sar.iter().enumerate() {
            assert_eq!(sa[r as usize], p as u32);
        }
    }

    #[test]
    fn empty_input_returns_empty_arrays() {
        let s: Vec<u32> = vec![];
        assert_eq!(suffix_array(&s), Vec::<u32>::new());
        assert_eq!(lpf_array(&s), Vec::<u32>::new());
    }

    #[test]
    fn idempotent_on_repeated_calls() {
        let s = symbols(b"abracadabra");
        let sa1 = suffix_array(&s);
        let sa2 = suffix_array(&s);
        assert_eq!(sa1, sa2);
        assert_eq!(lpf_array(&s), lpf_array(&s));
    }

    #[test]
    fn matches_oracles_on_random_inputs() {
        for &alphabet in &[2u32, 26] {
            for len in [1usize, 2, 3, 5, 8, 13, 21, 50, 97] {
                for _ in 0..5 {
                    let s: Vec<u32> = (0..len)
                        .map(|_| rand::random::<u32>() % alphabet + 1)
                        .collect();

                    let sa = suffix_array(&s);
                    assert_is_valid_sa(&s, &sa);
                    assert_round_trips(&sa);
                    assert_eq!(sa, naive_suffix_array(&s), "SA mismatch for {s:?}");

                    let lpf = lpf_array(&s);
                    assert_eq!(lpf, naive_lpf(&s), "LPF mismatch for {s:?}");
                    for (i, &k) in lpf.iter().enumerate() {
                        assert!(k as usize <= len - i);
                    }
                    assert_eq!(lpf[0], 0);
                }
            }
        }
    }

    #[test]
    fn rejects_invalid_alphabet() {
        assert!(try_suffix_array(&[1, 0, 2]).is_err());
        assert!(try_suffix_array(&[1, 5, 2]).is_err());
        assert!(try_lpf_array(&[0]).is_err());
        assert!(try_suffix_array(&[1, 2, 3]).is_ok());
    }
}
