//! Order statistics over pixel value distributions.

/// Linearly interpolated percentile of `values`, `p` in [0, 100].
///
/// Rank is `p/100 * (n-1)` over the sorted values with linear interpolation
/// between the two bracketing entries. An empty slice yields 0.0.
pub fn percentile(values: &[f32], p: f32) -> f32 {
    debug_assert!((0.0..=100.0).contains(&p), "percentile out of range: {p}");
    if values.is_empty() {
        return 0.0;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let rank = (p as f64 / 100.0) * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }
    let frac = (rank - lo as f64) as f32;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}
