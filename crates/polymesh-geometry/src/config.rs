//! Authored settings for a poly mesh.
//!
//! Plain data with sensible defaults; persisting it is up to the embedding
//! application.

use glam::Vec2;

/// Settings controlling how an outline becomes render and collision meshes.
#[derive(Debug, Clone, PartialEq)]
pub struct PolyMeshSettings {
    /// Depth added to every render vertex (the collider ignores it).
    pub depth_offset: f32,
    /// Texture mapping for render UVs.
    pub uv: UvMapping,
    /// Collision shape settings, `None` when no collision shape is attached.
    pub collider: Option<ColliderSettings>,
}

impl Default for PolyMeshSettings {
    fn default() -> Self {
        Self {
            depth_offset: 0.0,
            uv: UvMapping::default(),
            collider: Some(ColliderSettings::default()),
        }
    }
}

impl PolyMeshSettings {
    /// Settings without a collision shape.
    pub fn render_only() -> Self {
        Self {
            collider: None,
            ..Self::default()
        }
    }
}

/// Pan, scale and rotation of the render texture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UvMapping {
    /// Texture-space pan.
    pub position: Vec2,
    /// Texture scale; zero collapses all UVs.
    pub scale: f32,
    /// Rotation about the depth axis, in degrees.
    pub rotation_degrees: f32,
}

impl Default for UvMapping {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            scale: 1.0,
            rotation_degrees: 0.0,
        }
    }
}

/// How the collision mesh is extruded from the outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColliderSettings {
    /// Total depth of the side walls.
    pub depth: f32,
    /// Build side walls around the outline.
    pub build_edges: bool,
    /// Build a flat cap at the outline's own depth.
    pub build_front: bool,
}

impl Default for ColliderSettings {
    fn default() -> Self {
        Self {
            depth: 10.0,
            build_edges: true,
            build_front: false,
        }
    }
}
