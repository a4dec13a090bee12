//! Edit-tolerant string similarity.
//!
//! A matching-window similarity (Jaro) followed by a common-prefix boost
//! (Winkler). Scores are in `[0, 1]`. Inputs are compared as given, so
//! callers are expected to normalize case first.

/// Weight applied per shared prefix character.
pub const PREFIX_SCALE: f64 = 0.1;

/// Longest prefix that earns a boost.
pub const MAX_PREFIX_LEN: usize = 4;

/// Similarity of `a` and `b` in `[0, 1]`.
///
/// Returns `0.0` when either input is empty and `1.0` for equal inputs.
pub fn similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a == b {
        return 1.0;
    }
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let base = jaro_chars(&a, &b);
    let prefix = common_prefix_len(&a, &b);
    base + prefix as f64 * PREFIX_SCALE * (1.0 - base)
}

/// Base similarity without the prefix boost.
pub fn jaro(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a == b {
        return 1.0;
    }
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    jaro_chars(&a, &b)
}

fn common_prefix_len(a: &[char], b: &[char]) -> usize {
    a.iter()
        .zip(b)
        .take(MAX_PREFIX_LEN)
        .take_while(|(x, y)| x == y)
        .count()
}

fn jaro_chars(a: &[char], b: &[char]) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let window = (a.len().max(b.len()) / 2).saturating_sub(1);
    let mut a_matched = vec![false; a.len()];
    let mut b_matched = vec![false; b.len()];
    let mut matches = 0usize;

    for (i, ch) in a.iter().enumerate() {
        let start = i.saturating_sub(window);
        let end = (i + window + 1).min(b.len());
        for j in start..end {
            if !b_matched[j] && b[j] == *ch {
                a_matched[i] = true;
                b_matched[j] = true;
                matches += 1;
                break;
            }
        }
    }

    if matches == 0 {
        return 0.0;
    }

    let a_seq = a.iter().zip(&a_matched).filter(|(_, used)| **used);
    let mut b_seq = b
        .iter()
        .zip(&b_matched)
        .filter(|(_, used)| **used)
        .map(|(ch, _)| ch);
    let mut transpositions = 0usize;
    for (ch, _) in a_seq {
        if b_seq.next().is_some_and(|other| other != ch) {
            transpositions += 1;
        }
    }

    let m = matches as f64;
    let t = transpositions as f64 / 2.0;
    (m / a.len() as f64 + m / b.len() as f64 + (m - t) / m) / 3.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-3,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn classic_pairs() {
        assert_close(jaro("martha", "marhta"), 0.9444);
        assert_close(similarity("martha", "marhta"), 0.9611);
        assert_close(jaro("dwayne", "duane"), 0.8222);
        assert_close(similarity("dwayne", "duane"), 0.84);
    }

    #[test]
    fn nickname_scores_above_base() {
        let base = jaro("michael", "mikey");
        let boosted = similarity("michael", "mikey");
        assert_close(base, 0.6762);
        assert_close(boosted, 0.7410);
    }

    #[test]
    fn empty_and_identical() {
        assert_eq!(similarity("", "abc"), 0.0);
        assert_eq!(similarity("abc", ""), 0.0);
        assert_eq!(similarity("", ""), 0.0);
        assert_eq!(similarity("a", "a"), 1.0);
        assert_eq!(similarity("smith", "smith"), 1.0);
    }

    #[test]
    fn disjoint_alphabets_score_zero() {
        assert_eq!(similarity("abc", "xyz"), 0.0);
        assert_eq!(similarity("a", "b"), 0.0);
    }

    #[test]
    fn prefix_boost_caps_at_four() {
        assert_eq!(common_prefix_len(&['a', 'b', 'c', 'd', 'e'], &['a', 'b', 'c', 'd', 'e']), 4);
        assert_eq!(common_prefix_len(&['a', 'b'], &['a', 'c']), 1);
    }
}
