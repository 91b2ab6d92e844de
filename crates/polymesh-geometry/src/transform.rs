//! Texture-space mapping for render vertices.
//!
//! UVs are the outline's planar coordinates pushed through
//! `Translate(-position) * Rotate(rotation) * Scale(1 / scale)`.

use crate::UvMapping;
use glam::{Mat3, Vec2, Vec3};

/// A 2D affine transform from outline space to texture space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UvTransform {
    matrix: Mat3,
}

impl Default for UvTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl UvTransform {
    /// Identity transform (UVs equal planar coordinates).
    pub const IDENTITY: Self = Self {
        matrix: Mat3::IDENTITY,
    };

    /// Build the transform for a UV mapping.
    ///
    /// A zero scale collapses every UV onto the translated origin instead of
    /// dividing by zero.
    pub fn from_mapping(mapping: &UvMapping) -> Self {
        let scale = if mapping.scale != 0.0 {
            1.0 / mapping.scale
        } else {
            0.0
        };

        Self {
            matrix: Mat3::from_translation(-mapping.position)
                * Mat3::from_angle(mapping.rotation_degrees.to_radians())
                * Mat3::from_scale(Vec2::splat(scale)),
        }
    }

    /// Map an outline point to texture coordinates. Depth is ignored.
    pub fn transform_point(&self, point: Vec3) -> Vec2 {
        self.matrix.transform_point2(point.truncate())
    }

    /// Get the underlying 3x3 matrix.
    pub fn as_mat3(&self) -> &Mat3 {
        &self.matrix
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(position: Vec2, scale: f32, rotation_degrees: f32) -> UvMapping {
        UvMapping {
            position,
            scale,
            rotation_degrees,
        }
    }

    #[test]
    fn test_default_mapping_is_identity() {
        let t = UvTransform::from_mapping(&UvMapping::default());
        let point = Vec3::new(3.0, -2.0, 7.0);
        assert_eq!(t.transform_point(point), Vec2::new(3.0, -2.0));
    }

    #[test]
    fn test_scale_divides() {
        let t = UvTransform::from_mapping(&mapping(Vec2::ZERO, 2.0, 0.0));
        assert_eq!(t.transform_point(Vec3::new(4.0, 2.0, 0.0)), Vec2::new(2.0, 1.0));
    }

    #[test]
    fn test_zero_scale_collapses_instead_of_nan() {
        let t = UvTransform::from_mapping(&mapping(Vec2::new(1.0, 1.0), 0.0, 30.0));
        let uv = t.transform_point(Vec3::new(5.0, 9.0, 0.0));
        assert!(uv.is_finite());
        assert!((uv - Vec2::new(-1.0, -1.0)).length() < 1e-6);
    }

    #[test]
    fn test_rotation_then_translation() {
        let t = UvTransform::from_mapping(&mapping(Vec2::new(0.5, 0.0), 1.0, 90.0));
        let uv = t.transform_point(Vec3::new(1.0, 0.0, 0.0));
        // (1, 0) rotates to (0, 1), then shifts by -0.5 on x.
        assert!((uv - Vec2::new(-0.5, 1.0)).length() < 1e-6);
    }
}
