// Levenshtein edit distance matcher.
//
// Words are passed as `char` slices so distances are computed over
// characters, not bytes. The matcher is a pure function with no failure
// modes; inputs are short words, so the full O(n*m) recurrence is fine and
// no upper-bound cutoff is applied.

/// Compute the Levenshtein distance between two character sequences:
/// the minimum number of single-character insertions, deletions and
/// substitutions needed to turn `a` into `b`.
///
/// Evaluates the classic dynamic-programming recurrence, keeping only the
/// previous table row in memory.
pub fn levenshtein(a: &[char], b: &[char]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, &a_ch) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &b_ch) in b.iter().enumerate() {
            let cost = if a_ch == b_ch { 0 } else { 1 };
            curr[j + 1] = (prev[j] + cost).min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
