//! Cosine similarity over embedding vectors.

/// Raw cosine similarity `(u·v) / (‖u‖·‖v‖)` in `[-1, 1]`.
///
/// Returns exactly `0.0` when either vector has zero norm, when the
/// dimensions differ, or when the inputs contain non-finite values.
/// Accumulates in f64 so 300-dim f32 vectors don't lose precision.
pub fn cosine_similarity(u: &[f32], v: &[f32]) -> f64 {
    if u.len() != v.len() || u.is_empty() {
        return 0.0;
    }

    let mut dot = 0.0f64;
    let mut norm_u = 0.0f64;
    let mut norm_v = 0.0f64;
    for (&a, &b) in u.iter().zip(v.iter()) {
        let (a, b) = (a as f64, b as f64);
        dot += a * b;
        norm_u += a * a;
        norm_v += b * b;
    }

    if norm_u == 0.0 || norm_v == 0.0 {
        return 0.0;
    }

    let cos = dot / (norm_u.sqrt() * norm_v.sqrt());
    if cos.is_nan() {
        return 0.0;
    }
    cos.clamp(-1.0, 1.0)
}

/// Map a cosine from `[-1, 1]` onto `[0, 1]`, clamping float overshoot
pub fn remap_unit(cos: f64) -> f64 {
    ((cos + 1.0) / 2.0).clamp(0.0, 1.0)
}
