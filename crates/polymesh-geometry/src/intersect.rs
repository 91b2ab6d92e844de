//! Planar segment predicates used while editing outlines.
//!
//! All tests work on the x/y plane of the outline's local frame.

use glam::Vec3;

/// Tolerance for treating two segments as parallel.
pub const PARALLEL_TOLERANCE: f32 = 0.00001;

/// Whether `a -> b -> c` turns clockwise.
pub fn is_right_turn(a: Vec3, b: Vec3, c: Vec3) -> bool {
    let ab = b - a;
    let bc = c - b;
    ab.x * bc.y - ab.y * bc.x < 0.0
}

/// Whether segment `p1 -> p2` crosses segment `p3 -> p4`.
///
/// Segments sharing an endpoint never count as crossing. Collinear,
/// overlapping segments do.
pub fn lines_intersect(p1: Vec3, p2: Vec3, p3: Vec3, p4: Vec3) -> bool {
    if p1 == p3 || p1 == p4 || p2 == p3 || p2 == p4 {
        return false;
    }

    let mut ua = (p4.x - p3.x) * (p1.y - p3.y) - (p4.y - p3.y) * (p1.x - p3.x);
    let mut ub = (p2.x - p1.x) * (p1.y - p3.y) - (p2.y - p1.y) * (p1.x - p3.x);
    let denominator = (p4.y - p3.y) * (p2.x - p1.x) - (p4.x - p3.x) * (p2.y - p1.y);

    if denominator.abs() <= PARALLEL_TOLERANCE {
        return ua.abs() <= PARALLEL_TOLERANCE && ub.abs() <= PARALLEL_TOLERANCE;
    }

    ua /= denominator;
    ub /= denominator;
    (0.0..=1.0).contains(&ua) && (0.0..=1.0).contains(&ub)
}

/// Whether the segment `a -> b` crosses any edge of the closed loop
/// `points`.
pub fn intersects_existing_edges(points: &[Vec3], a: Vec3, b: Vec3) -> bool {
    let len = points.len();
    (0..len).any(|i| lines_intersect(a, b, points[i], points[(i + 1) % len]))
}
