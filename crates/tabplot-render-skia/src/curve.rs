// File: crates/tabplot-render-skia/src/curve.rs
// Summary: Natural cubic spline control points for smooth path interpolation.

/// Bezier control values, one coordinate at a time, for the natural cubic
/// spline through `v`. Returns the first and second control value per
/// segment; segment `i` runs from `v[i]` to `v[i+1]`.
///
/// Caller guarantees `v.len() >= 2`. Solved with the usual tridiagonal
/// forward-eliminate / back-substitute pass.
pub fn control_points(v: &[f32]) -> (Vec<f32>, Vec<f32>) {
    let n = v.len() - 1;
    let mut a = vec![0.0f32; n];
    let mut b = vec![0.0f32; n];
    let mut r = vec![0.0f32; n];
    a[0] = 0.0;
    b[0] = 2.0;
    r[0] = v[0] + 2.0 * v[1];
    for i in 1..n.saturating_sub(1) {
        a[i] = 1.0;
        b[i] = 4.0;
        r[i] = 4.0 * v[i] + 2.0 * v[i + 1];
    }
    a[n - 1] = 2.0;
    b[n - 1] = 7.0;
    r[n - 1] = 8.0 * v[n - 1] + v[n];
    for i in 1..n {
        let m = a[i] / b[i - 1];
        b[i] -= m;
        r[i] -= m * r[i - 1];
    }
    a[n - 1] = r[n - 1] / b[n - 1];
    for i in (0..n - 1).rev() {
        a[i] = (r[i] - a[i + 1]) / b[i];
    }
    b[n - 1] = (v[n] + a[n - 1]) / 2.0;
    for i in 0..n - 1 {
        b[i] = 2.0 * v[i + 1] - a[i + 1];
    }
    (a, b)
}
