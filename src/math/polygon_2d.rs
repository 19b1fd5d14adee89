use super::Point2;

/// Computes the signed area of a closed ring (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise. Coordinates are
/// taken relative to the first point, so large projected offsets (UTM
/// northings around 7e6) do not cancel out the low-order digits.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let origin = points[0];
    let mut sum = 0.0;
    for i in 0..n {
        let a = points[i] - origin;
        let b = points[(i + 1) % n] - origin;
        sum += a.x * b.y - b.x * a.y;
    }
    sum * 0.5
}

/// Unsigned area enclosed by a closed ring.
#[must_use]
pub fn ring_area(points: &[Point2]) -> f64 {
    signed_area_2d(points).abs()
}

/// Sum of all edge lengths of a closed ring, including the closing edge.
#[must_use]
pub fn ring_perimeter(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 2 {
        return 0.0;
    }
    (0..n)
        .map(|i| (points[(i + 1) % n] - points[i]).norm())
        .sum()
}
