use super::{coincident, distance, Point2, Vector2};

/// Computes the signed area of a closed polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Sums the distances between consecutive points.
///
/// If `closed` is true and there are more than two points, the distance from
/// the last point back to the first is included, giving the perimeter.
#[must_use]
pub fn perimeter_2d(points: &[Point2], closed: bool) -> f64 {
    let open: f64 = points.windows(2).map(|w| distance(&w[0], &w[1])).sum();
    match (closed && points.len() > 2, points.first(), points.last()) {
        (true, Some(first), Some(last)) => open + distance(last, first),
        _ => open,
    }
}

/// Even-odd point containment test for a closed polygon.
///
/// Points exactly on an edge may land on either side.
#[must_use]
pub fn contains_point_2d(points: &[Point2], pt: &Point2) -> bool {
    let n = points.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (pi, pj) = (points[i], points[j]);
        if (pi.y > pt.y) != (pj.y > pt.y) {
            let x_cross = pi.x + (pt.y - pi.y) * (pj.x - pi.x) / (pj.y - pi.y);
            if pt.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Drops consecutive points that coincide within the snap tolerance,
/// including the wrap-around pair of a closed polygon.
#[must_use]
pub fn dedup_consecutive_2d(points: &[Point2]) -> Vec<Point2> {
    let mut out: Vec<Point2> = Vec::with_capacity(points.len());
    for &pt in points {
        if out.last().is_some_and(|last| coincident(last, &pt)) {
            continue;
        }
        out.push(pt);
    }
    while out.len() > 1 && out.first().zip(out.last()).is_some_and(|(f, l)| coincident(f, l)) {
        out.pop();
    }
    out
}

/// Returns `true` if no two non-adjacent edges of the closed polygon cross.
///
/// Only proper crossings are detected; edges that merely touch are accepted.
#[must_use]
pub fn is_simple_2d(points: &[Point2]) -> bool {
    let n = points.len();
    if n < 3 {
        return false;
    }
    for i in 0..n {
        let (a0, a1) = (points[i], points[(i + 1) % n]);
        for j in (i + 1)..n {
            // Adjacent edges share a vertex.
            if j == i + 1 || (i == 0 && j == n - 1) {
                continue;
            }
            let (b0, b1) = (points[j], points[(j + 1) % n]);
            if segments_cross_properly(&a0, &a1, &b0, &b1) {
                return false;
            }
        }
    }
    true
}

fn cross(o: &Point2, a: &Point2, b: &Point2) -> f64 {
    let u: Vector2 = a - o;
    let v: Vector2 = b - o;
    u.x * v.y - u.y * v.x
}

fn segments_cross_properly(a0: &Point2, a1: &Point2, b0: &Point2, b1: &Point2) -> bool {
    let d1 = cross(b0, b1, a0);
    let d2 = cross(b0, b1, a1);
    let d3 = cross(a0, a1, b0);
    let d4 = cross(a0, a1, b1);
    d1 * d2 < 0.0 && d3 * d4 < 0.0
}
