//! Naive oracles used only by the test suite: direct-comparison suffix
//! sort and brute-force LPF, both intentionally far from linear time.

/// Sorts `0..s.len()` by direct suffix comparison. `O(n^2 log n)` worst
/// case; used only to cross-check `suffix_array`.
pub fn naive_suffix_array(s: &[u32]) -> Vec<u32> {
    let mut sa: Vec<u32> = (0..s.len() as u32).collect();
    sa.sort_by(|&a, &b| s[a as usize..].cmp(&s[b as usize..]));
    sa
}

/// For each `i`, scans every `j < i` and keeps the longest matching
/// prefix length. `O(n^3)` worst case; used only to cross-check
/// `lpf_array`.
pub fn naive_lpf(s: &[u32]) -> Vec<u32> {
    let n = s.len();
    let mut lpf = vec![0u32; n];
    for i in 0..n {
        let mut best = 0usize;
        for j in 0..i {
            let len = s[j..].iter().zip(&s[i..]).take_while(|(a, b)| a == b).count();
            best = best.max(len);
        }
        lpf[i] = best as u32;
    }
    lpf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn naive_sa_matches_known_answer() {
        let s: Vec<u32> = b"banana".iter().map(|&b| b as u32).collect();
        assert_eq!(naive_suffix_array(&s), vec![5, 3, 1, 0, 4, 2]);
    }

    #[test]
    fn naive_lpf_matches_known_answer() {
        let s: Vec<u32> = b"banana".iter().map(|&b| b as u32).collect();
        assert_eq!(naive_lpf(&s), vec![0, 0, 0, 3, 2, 1]);
    }
}
