//! Levenshtein edit distance and normalized similarity.

/// Classic dynamic-programming Levenshtein distance (insert/delete/substitute,
/// unit cost each) with rolling-row O(min(len)) memory.
///
/// Symmetric: `levenshtein(a, b) == levenshtein(b, a)`.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let mut shorter: Vec<char> = a.chars().collect();
    let mut longer: Vec<char> = b.chars().collect();
    if shorter.len() > longer.len() {
        std::mem::swap(&mut shorter, &mut longer);
    }
    if shorter.is_empty() {
        return longer.len();
    }

    // Rolling row over the shorter string.
    let mut current: Vec<usize> = (0..=shorter.len()).collect();
    for (i, lc) in longer.iter().enumerate() {
        let mut previous_diagonal = current[0];
        current[0] = i + 1;
        for (j, sc) in shorter.iter().enumerate() {
            let add = current[j + 1] + 1;
            let delete = current[j] + 1;
            let change = previous_diagonal + usize::from(sc != lc);
            previous_diagonal = current[j + 1];
            current[j + 1] = add.min(delete).min(change);
        }
    }
    current[shorter.len()]
}

/// Normalized similarity: `1 - dist / max(len_a, len_b)`, in [0.0, 1.0].
/// Two empty strings are identical (1.0).
pub fn similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    1.0 - levenshtein(a, b) as f64 / max_len as f64
}
