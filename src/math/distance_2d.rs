use super::{Point2, TOLERANCE};

/// Returns the minimum distance from point `p` to the line segment `a`→`b`.
#[must_use]
pub fn point_to_segment_dist(p: &Point2, a: &Point2, b: &Point2) -> f64 {
    let d = b - a;
    let len_sq = d.norm_squared();

    if len_sq < TOLERANCE {
        // Degenerate segment (zero length).
        return (p - a).norm();
    }

    // Project point onto the infinite line, clamp to [0, 1].
    let t = ((p - a).dot(&d) / len_sq).clamp(0.0, 1.0);
    let closest = a + d * t;

    (p - closest).norm()
}

/// Returns the minimum distance from `p` to an open polyline.
///
/// Each consecutive pair of `points` is one segment. With fewer than two
/// points there is no segment and the result is `f64::INFINITY`.
#[must_use]
pub fn point_to_polyline_dist(p: &Point2, points: &[Point2]) -> f64 {
    points
        .windows(2)
        .map(|w| point_to_segment_dist(p, &w[0], &w[1]))
        .fold(f64::INFINITY, f64::min)
}

/// Returns the midpoint of segment `a`→`b`.
#[must_use]
pub fn midpoint(a: &Point2, b: &Point2) -> Point2 {
    nalgebra::center(a, b)
}
