use std::collections::HashSet;

/// Jaccard index over the character sets of two words.
///
/// `|chars(a) ∩ chars(b)| / |chars(a) ∪ chars(b)|`, and `0.0` if either word
/// is empty. Repeated letters count once.
pub fn jaccard_chars(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let set_a: HashSet<char> = a.chars().collect();
    let set_b: HashSet<char> = b.chars().collect();

    let intersection = set_a.intersection(&set_b).count();
    let union = set_a.union(&set_b).count();

    if union == 0 {
        0.0
    } else {
        intersection as f64 / union as f64
    }
}
