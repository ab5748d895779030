//! Edge geometry derivation: distances and sampled polylines.
use nalgebra::Point2;

/// Standard 2D Euclidean distance.
pub fn distance(p1: Point2<f64>, p2: Point2<f64>) -> f64 {
    (p1 - p2).norm()
}

/// Round to 2 decimal places; edge lengths are stored this way.
pub(crate) fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Sample `num_points + 1` coordinates along the straight line from `start`
/// to `end` at `t = i/num_points`, components truncated toward zero.
///
/// Boundary samples are computed from `t = 0` and `t = 1` directly, so the
/// first coordinate equals `start` exactly and the last equals `end`
/// exactly; intermediate truncation never perturbs them.
pub fn sample_polyline(start: [i32; 2], end: [i32; 2], num_points: usize) -> Vec<[i32; 2]> {
    let n = num_points.max(1);
    let mut coords = Vec::with_capacity(n + 1);
    for i in 0..=n {
        let t = i as f64 / n as f64;
        let x = start[0] as f64 + t * (end[0] - start[0]) as f64;
        let y = start[1] as f64 + t * (end[1] - start[1]) as f64;
        coords.push([x.trunc() as i32, y.trunc() as i32]);
    }
    coords
}
