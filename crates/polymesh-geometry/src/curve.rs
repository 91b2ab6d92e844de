//! Quadratic Bezier primitives for curved outline edges.
//!
//! Authors never place a raw control point. They drag a "bulge" handle that
//! the curve should pass near, and [`QuadraticBezier::from_handle`] derives
//! the control point from it.

use glam::Vec3;

/// A quadratic Bezier curve (one control point).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticBezier {
    /// Start point
    pub from: Vec3,
    /// Control point
    pub control: Vec3,
    /// End point
    pub to: Vec3,
}

impl QuadraticBezier {
    /// Create a new quadratic Bezier curve.
    pub fn new(from: Vec3, control: Vec3, to: Vec3) -> Self {
        Self { from, control, to }
    }

    /// Create the curve for an outline edge from its bulge handle.
    pub fn from_handle(from: Vec3, to: Vec3, handle: Vec3) -> Self {
        Self::new(from, infer_control(from, to, handle), to)
    }

    /// Evaluate the curve at parameter t (0.0 to 1.0).
    ///
    /// Returns `from` exactly at 0 and `to` exactly at 1.
    pub fn eval(&self, t: f32) -> Vec3 {
        let mt = 1.0 - t;
        self.from * (mt * mt) + self.control * (2.0 * mt * t) + self.to * (t * t)
    }
}

/// Derive a true quadratic control point from a bulge handle.
///
/// The handle is projected onto the chord `from -> to` and then mirrored
/// across that foot point. A zero-length chord projects onto `from`.
pub fn infer_control(from: Vec3, to: Vec3, handle: Vec3) -> Vec3 {
    let axis = (to - from).normalize_or_zero();
    let foot = from + axis * axis.dot(handle - from);
    foot + (handle - foot) * 2.0
}

/// Number of samples emitted for one curved edge.
///
/// `curve_detail` is the parameter step; non-positive details emit a single
/// sample so a curved edge never vanishes.
pub fn segments_for_detail(curve_detail: f32) -> usize {
    if curve_detail <= 0.0 || !curve_detail.is_finite() {
        return 1;
    }
    ((1.0 / curve_detail).ceil() as usize).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_exact_with_awkward_values() {
        let curve = QuadraticBezier::new(
            Vec3::new(0.1, -7.3, 1e-3),
            Vec3::new(-3.3, 9.9, 2.0),
            Vec3::new(12.7, 0.3, -4.4),
        );

        assert_eq!(curve.eval(0.0), curve.from);
        assert_eq!(curve.eval(1.0), curve.to);
    }

    #[test]
    fn test_infer_control_mirrors_handle_across_chord() {
        let control = infer_control(Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0), Vec3::new(1.0, 1.0, 0.0));
        assert!((control - Vec3::new(1.0, 2.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_handle_lies_on_curve_at_midpoint() {
        // With a handle over the chord midpoint the curve passes through it.
        let from = Vec3::ZERO;
        let to = Vec3::new(4.0, 0.0, 0.0);
        let handle = Vec3::new(2.0, 1.5, 0.0);
        let curve = QuadraticBezier::from_handle(from, to, handle);
        assert!((curve.eval(0.5) - handle).length() < 1e-5);
    }

    #[test]
    fn test_infer_control_zero_chord() {
        let p = Vec3::new(1.0, 1.0, 0.0);
        let control = infer_control(p, p, Vec3::new(2.0, 1.0, 0.0));
        assert_eq!(control, Vec3::new(3.0, 1.0, 0.0));
    }

    #[test]
    fn test_segments_for_detail() {
        assert_eq!(segments_for_detail(1.0), 1);
        assert_eq!(segments_for_detail(0.5), 2);
        assert_eq!(segments_for_detail(0.3), 4);
        assert_eq!(segments_for_detail(0.1), 10);
        assert_eq!(segments_for_detail(0.0), 1);
    }
}
