//! Levenshtein edit distance and a normalized similarity ratio.
//!
//! The distance is the classic O(m*n) dynamic program over a transient
//! `(m+1) x (n+1)` table with unit cost for insertion, deletion, and
//! substitution. Strings are compared by Unicode scalar value.
//!
//! # Invariants
//!
//! - `levenshtein_distance(a, b) == levenshtein_distance(b, a)`
//! - The distance is non-negative and satisfies the triangle inequality.
//! - [`similarity_ratio`] is in `[0, 1]` and equals 1 exactly when the two
//!   strings are identical (including both empty).

use log::debug;

/// Minimum number of single-character insertions, deletions, and
/// substitutions transforming `s1` into `s2`.
///
/// # Examples
///
/// ```rust
/// use funlib::similarity::levenshtein_distance;
///
/// assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
/// assert_eq!(levenshtein_distance("", "abc"), 3);
/// ```
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();
    let (m, n) = (a.len(), b.len());
    debug!("levenshtein_distance(m = {}, n = {})", m, n);

    let mut dp = vec![vec![0usize; n + 1]; m + 1];
    for (i, row) in dp.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=n {
        dp[0][j] = j;
    }

    for i in 1..=m {
        for j in 1..=n {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            dp[i][j] = (dp[i - 1][j] + 1)
                .min(dp[i][j - 1] + 1)
                .min(dp[i - 1][j - 1] + cost);
        }
    }
    dp[m][n]
}

/// Normalized similarity in `[0, 1]` derived from the edit distance.
///
/// Two empty strings are fully similar (ratio 1.0); otherwise the ratio is
/// `1 - distance / max(m, n)`.
pub fn similarity_ratio(s1: &str, s2: &str) -> f64 {
    let m = s1.chars().count();
    let n = s2.chars().count();
    if m == 0 && n == 0 {
        return 1.0;
    }
    let dist = levenshtein_distance(s1, s2);
    1.0 - dist as f64 / m.max(n) as f64
}
