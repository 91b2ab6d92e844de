//! Edit-time outline overlay data.
//!
//! Produces the world-space segments and normal ticks a debug renderer needs
//! to draw an outline. Nothing is drawn here.

use glam::{Mat4, Vec3};

/// One outline segment in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlaySegment {
    /// Segment start
    pub start: Vec3,
    /// Segment end
    pub end: Vec3,
    /// Midpoint, where the normal tick is anchored
    pub midpoint: Vec3,
    /// Unit normal `Z x (end - start)`; faces outward for clockwise loops
    pub normal: Vec3,
}

/// The closed loop of segments of a tessellated outline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutlineOverlay {
    /// Segments in loop order, the last one closing back to the first point
    pub segments: Vec<OverlaySegment>,
}

impl OutlineOverlay {
    /// Build the overlay for local-space `points`.
    ///
    /// Points are moved to world space with `world` and then shifted by
    /// `depth_shift` along z.
    pub fn build(points: &[Vec3], world: &Mat4, depth_shift: f32) -> Self {
        let shift = Vec3::new(0.0, 0.0, depth_shift);
        let world_points: Vec<Vec3> = points
            .iter()
            .map(|point| world.transform_point3(*point) + shift)
            .collect();

        let len = world_points.len();
        if len < 2 {
            return Self::default();
        }

        let segments = (0..len)
            .map(|i| {
                let start = world_points[i];
                let end = world_points[(i + 1) % len];
                OverlaySegment {
                    start,
                    end,
                    midpoint: (start + end) * 0.5,
                    normal: Vec3::Z.cross(end - start).normalize_or_zero(),
                }
            })
            .collect();

        Self { segments }
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Check if there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
