//! Knuth-Morris-Pratt subsequence search over generic elements.
//!
//! The matcher only needs element equality, so it runs unchanged over
//! characters, integers, or [`Node`](crate::Node) records. The haystack and
//! pattern may hold different types as long as `H: PartialEq<P>`.

/// Build the KMP failure (longest proper prefix-suffix) table for `pattern`.
///
/// `fail[i]` is the length of the longest proper prefix of `pattern[..=i]`
/// that is also a suffix of it. O(m) time.
pub fn failure_function<P: PartialEq>(pattern: &[P]) -> Vec<usize> {
    let m = pattern.len();
    let mut fail = vec![0usize; m];
    let mut k = 0usize;
    for i in 1..m {
        while k > 0 && pattern[k] != pattern[i] {
            k = fail[k - 1];
        }
        if pattern[k] == pattern[i] {
            k += 1;
        }
        fail[i] = k;
    }
    fail
}

/// Leftmost occurrence of `pattern` in `haystack` starting at or after `from`.
///
/// Returns `None` for an empty pattern, when `from` is past the end, or when
/// the pattern is longer than the remaining suffix. O(n + m).
pub fn find_from<H, P>(haystack: &[H], pattern: &[P], from: usize) -> Option<usize>
where
    H: PartialEq<P>,
    P: PartialEq,
{
    let n = haystack.len();
    let m = pattern.len();
    if m == 0 || from >= n || m > n - from {
        return None;
    }

    let fail = failure_function(pattern);
    let mut q = 0usize;
    for (i, item) in haystack.iter().enumerate().skip(from) {
        while q > 0 && *item != pattern[q] {
            q = fail[q - 1];
        }
        if *item == pattern[q] {
            q += 1;
        }
        if q == m {
            return Some(i + 1 - m);
        }
    }
    None
}

/// All occurrences of `pattern` in `haystack`, overlapping ones included.
pub fn find_all<H, P>(haystack: &[H], pattern: &[P]) -> Vec<usize>
where
    H: PartialEq<P>,
    P: PartialEq,
{
    let m = pattern.len();
    if m == 0 || m > haystack.len() {
        return vec![];
    }

    let fail = failure_function(pattern);
    let mut results = Vec::new();
    let mut q = 0usize;
    for (i, item) in haystack.iter().enumerate() {
        while q > 0 && *item != pattern[q] {
            q = fail[q - 1];
        }
        if *item == pattern[q] {
            q += 1;
        }
        if q == m {
            results.push(i + 1 - m);
            q = fail[q - 1];
        }
    }
    results
}
