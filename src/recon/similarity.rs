//! Character-sequence similarity over normalized employer names.

/// Matching-blocks similarity ratio in [0, 1].
///
/// Ratcliff/Obershelp gestalt matching: find the longest common substring,
/// recurse on the unmatched pieces to either side, and score
/// `2 * matched / (|a| + |b|)` over characters. Unlike edit distance this
/// stays high when whole words are reordered ("empresa abc" vs
/// "abc empresa"). Identical non-empty strings score 1.0; if either string
/// is empty the ratio is 0.0 so a missing employer never contributes to a
/// match.
#[must_use]
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let matched = matched_chars(&a_chars, &b_chars);

    #[allow(clippy::cast_precision_loss)]
    {
        2.0 * matched as f64 / (a_chars.len() + b_chars.len()) as f64
    }
}

/// Total characters covered by matching blocks on both sides.
fn matched_chars(a: &[char], b: &[char]) -> usize {
    let (i, j, size) = longest_common_block(a, b);
    if size == 0 {
        return 0;
    }
    size + matched_chars(&a[..i], &b[..j]) + matched_chars(&a[i + size..], &b[j + size..])
}

/// Longest common substring as `(start_a, start_b, length)`.
///
/// Single-row dynamic programming over common-suffix lengths; scanning
/// ascending with a strictly-greater update keeps the earliest-positioned
/// block among equals.
fn longest_common_block(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);
    let mut row = vec![0usize; b.len() + 1];
    for (i, &ca) in a.iter().enumerate() {
        let mut previous_diagonal = 0;
        for (j, &cb) in b.iter().enumerate() {
            let current = row[j + 1];
            row[j + 1] = if ca == cb { previous_diagonal + 1 } else { 0 };
            if row[j + 1] > best.2 {
                best = (i + 1 - row[j + 1], j + 1 - row[j + 1], row[j + 1]);
            }
            previous_diagonal = current;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_identical_names_score_one() {
        assert!((similarity_ratio("empresa abc", "empresa abc") - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_scores_zero() {
        assert!((similarity_ratio("", "empresa abc")).abs() < f64::EPSILON);
        assert!((similarity_ratio("empresa abc", "")).abs() < f64::EPSILON);
        assert!((similarity_ratio("", "")).abs() < f64::EPSILON);
    }

    #[test]
    fn test_close_names_score_high() {
        let score = similarity_ratio("empresa abc sas", "empresa abc sa");
        assert!(score > 0.9, "expected high similarity, got {score}");
    }

    #[test]
    fn test_reordered_words_score_moderate() {
        // "empresa" (7 chars) matches as one block; 2 * 7 / 22
        let score = similarity_ratio("empresa abc", "abc empresa");
        assert!((score - 14.0 / 22.0).abs() < 1e-9, "got {score}");
    }

    #[test]
    fn test_unrelated_names_score_low() {
        let score = similarity_ratio("empresa abc", "zyx qwerty corp");
        assert!(score < 0.3, "expected low similarity, got {score}");
    }

    #[test]
    fn test_longest_common_block() {
        assert_eq!(
            longest_common_block(&chars("empresa abc"), &chars("abc empresa")),
            (0, 4, 7)
        );
        assert_eq!(longest_common_block(&chars("abc"), &chars("xyz")), (0, 0, 0));
    }

    #[test]
    fn test_matched_chars_recurses_around_blocks() {
        // "a", then "b" and "c" found in the remainders
        assert_eq!(matched_chars(&chars("abc"), &chars("axbxc")), 3);
        assert!((similarity_ratio("abc", "axbxc") - 0.75).abs() < f64::EPSILON);
    }
}
