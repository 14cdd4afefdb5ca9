#![allow(dead_code)]

use approx::abs_diff_eq;
use circlex::Point2;
use tracing_subscriber::EnvFilter;

/// Installs a test-writer subscriber; `RUST_LOG=circlex=trace` shows the
/// classification trail of every intersection call.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Returns `true` if every point of `a` has a partner in `b` within `tol`,
/// and both hold the same number of points.
pub fn same_point_set(a: &[Point2], b: &[Point2], tol: f64) -> bool {
    a.len() == b.len()
        && a.iter().all(|p| {
            b.iter()
                .any(|q| abs_diff_eq!(p.x, q.x, epsilon = tol) && abs_diff_eq!(p.y, q.y, epsilon = tol))
        })
}
