//! Collision mesh extrusion.
//!
//! The collider is built from the raw edge points (without the render depth
//! offset). Walls are an open tube around the outline, `depth / 2` in front
//! of and behind it; the optional front cap reuses the render triangulation
//! at the outline's own depth. There is never a back cap.

use crate::{ColliderSettings, Triangulation, mesh::recalculate_normals};
use glam::Vec3;
use polymesh_core::profiling::profile_function;

/// Vertices, indices and normals of the collision shape.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColliderMesh {
    positions: Vec<Vec3>,
    indices: Vec<u32>,
    normals: Vec<Vec3>,
    wall_vertices: usize,
}

impl ColliderMesh {
    /// Create a new empty collider mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contents from tessellated edge points.
    pub fn rebuild(
        &mut self,
        edge_points: &[Vec3],
        triangulation: &Triangulation,
        settings: &ColliderSettings,
    ) {
        profile_function!();

        self.clear();

        if settings.build_edges {
            self.build_walls(edge_points, settings.depth);
        }
        if settings.build_front {
            self.build_front(edge_points, triangulation);
        }

        recalculate_normals(&self.positions, &self.indices, &mut self.normals);
    }

    /// Front/back vertex pairs with two triangles per outline segment.
    fn build_walls(&mut self, edge_points: &[Vec3], depth: f32) {
        let offset = Vec3::new(0.0, 0.0, depth / 2.0);
        for point in edge_points {
            self.positions.push(*point + offset);
            self.positions.push(*point - offset);
        }

        let count = self.positions.len() as u32;
        for a in (0..count).step_by(2) {
            let b = (a + 1) % count;
            let c = (a + 2) % count;
            let d = (a + 3) % count;
            self.indices.extend_from_slice(&[a, c, b, c, d, b]);
        }
        self.wall_vertices = self.positions.len();
    }

    /// Flat cap at the outline's depth, appended after any wall vertices.
    fn build_front(&mut self, edge_points: &[Vec3], triangulation: &Triangulation) {
        let base = self.positions.len() as u32;
        self.positions.extend_from_slice(edge_points);
        self.indices
            .extend(triangulation.indices.iter().map(|index| index + base));
    }

    /// Vertex positions.
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Triangle indices.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Smooth vertex normals.
    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    /// Number of wall segments (two triangles each).
    pub fn wall_segment_count(&self) -> usize {
        self.wall_vertices / 2
    }

    /// Get the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Get the number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Clear all data, keeping allocations.
    pub fn clear(&mut self) {
        self.positions.clear();
        self.indices.clear();
        self.normals.clear();
        self.wall_vertices = 0;
    }
}
