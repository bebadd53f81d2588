use gridstar_core::Point;

/// Euclidean (L2) distance between two points.
///
/// This is both the edge cost between adjacent nodes (1 or √2) and the
/// search heuristic.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f32 {
    let dx = (a.x - b.x) as i64;
    let dy = (a.y - b.y) as i64;
    ((dx * dx + dy * dy) as f64).sqrt() as f32
}

/// Estimate of the remaining cost from `from` to `to`.
///
/// Straight-line distance never overestimates an 8-connected path whose
/// steps are themselves Euclidean, so the estimate is admissible and
/// consistent.
#[inline]
pub fn heuristic(from: Point, to: Point) -> f32 {
    euclidean(from, to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_and_diagonal_steps() {
        let o = Point::ZERO;
        assert_eq!(euclidean(o, Point::new(1, 0)), 1.0);
        assert_eq!(euclidean(o, Point::new(0, -1)), 1.0);
        assert!((euclidean(o, Point::new(1, 1)) - std::f32::consts::SQRT_2).abs() < 1e-6);
        assert_eq!(euclidean(Point::new(1, 2), Point::new(4, 6)), 5.0);
        assert_eq!(euclidean(o, o), 0.0);
    }

    #[test]
    fn heuristic_is_symmetric_and_matches_distance() {
        let a = Point::new(-3, 7);
        let b = Point::new(2, 1);
        assert_eq!(heuristic(a, b), heuristic(b, a));
        assert_eq!(heuristic(a, b), euclidean(a, b));
    }
}
