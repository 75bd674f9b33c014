//! Approximate string equality for single words and short phrases.
//!
//! The ratio is Ratcliff/Obershelp: match the longest common contiguous
//! block, recurse on the unmatched left and right remainders, and score
//! `2 * matched / (len(a) + len(b))`. Worst case O(n*m), which is fine for
//! the word-sized inputs the scorers feed it.

/// Threshold for callers with no stricter requirement of their own; the
/// keyword and skill scorers pass 0.85.
pub const DEFAULT_THRESHOLD: f64 = 0.8;

/// True when the similarity ratio of `a` and `b` meets `threshold`.
/// Inputs are compared as-is; callers lowercase beforehand.
pub fn fuzzy_eq(a: &str, b: &str, threshold: f64) -> bool {
    similarity_ratio(a, b) >= threshold
}

/// Similarity ratio in `[0, 1]`. Two empty strings are trivially identical.
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() && b.is_empty() {
        return 1.0;
    }

    let matched = matching_chars(&a, &b);
    (2.0 * matched as f64) / ((a.len() + b.len()) as f64)
}

fn matching_chars(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let (a_start, b_start, len) = longest_common_block(a, b);
    if len == 0 {
        return 0;
    }

    len + matching_chars(&a[..a_start], &b[..b_start])
        + matching_chars(&a[a_start + len..], &b[b_start + len..])
}

/// Finds the longest common contiguous block of `a` and `b`, returning
/// `(start_in_a, start_in_b, length)`. Ties resolve to the earliest block.
fn longest_common_block(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);
    let mut prev = vec![0usize; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        let mut current = vec![0usize; b.len() + 1];
        for (j, cb) in b.iter().enumerate() {
            if ca == cb {
                let len = prev[j] + 1;
                current[j + 1] = len;
                if len > best.2 {
                    best = (i + 1 - len, j + 1 - len, len);
                }
            }
        }
        prev = current;
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_threshold_accepts_close_words() {
        assert!(fuzzy_eq("nodejs", "node-js", DEFAULT_THRESHOLD));
    }

    #[test]
    fn test_identical_strings_score_one() {
        assert_eq!(similarity_ratio("kubernetes", "kubernetes"), 1.0);
        assert!(fuzzy_eq("kubernetes", "kubernetes", 1.0));
    }

    #[test]
    fn test_fuzzy_eq_holds_for_any_threshold_up_to_one() {
        for threshold in [0.0, 0.5, 0.8, 0.85, 1.0] {
            assert!(fuzzy_eq("python", "python", threshold));
        }
    }

    #[test]
    fn test_disjoint_strings_score_zero() {
        assert_eq!(similarity_ratio("abc", "xyz"), 0.0);
    }

    #[test]
    fn test_both_empty_are_identical() {
        assert_eq!(similarity_ratio("", ""), 1.0);
    }

    #[test]
    fn test_one_empty_scores_zero() {
        assert_eq!(similarity_ratio("rust", ""), 0.0);
        assert_eq!(similarity_ratio("", "rust"), 0.0);
    }

    #[test]
    fn test_single_character_typo() {
        // "pyton" shares all 5 of its chars with "python": 2*5 / (6+5)
        let ratio = similarity_ratio("python", "pyton");
        assert!((ratio - 10.0 / 11.0).abs() < 1e-12);
        assert!(fuzzy_eq("python", "pyton", 0.85));
    }

    #[test]
    fn test_transposition_counts_partial_blocks() {
        // Longest block "ja" then "v" / "a" remainders: ratio stays high
        let ratio = similarity_ratio("java", "jaav");
        assert!(ratio >= 0.5 && ratio < 1.0);
    }

    #[test]
    fn test_ratio_is_deterministic() {
        let first = similarity_ratio("postgresql", "postgres");
        let second = similarity_ratio("postgresql", "postgres");
        assert_eq!(first, second);
    }

    #[test]
    fn test_ratio_stays_in_unit_interval() {
        for (a, b) in [("a", "aaaa"), ("react", "racket"), ("docker", "doctor")] {
            let ratio = similarity_ratio(a, b);
            assert!((0.0..=1.0).contains(&ratio), "ratio {ratio} for {a}/{b}");
        }
    }
}
