//! The render mesh generated from an outline.
//!
//! A [`RenderMesh`] is owned by one entity and rewritten in place on every
//! rebuild, so anything holding on to it sees the new contents without
//! re-binding.

use crate::{MeshVertex, Triangulation, UvTransform};
use glam::{Vec2, Vec3};
use polymesh_core::profiling::profile_function;

/// Positions, UVs, indices and normals of the rendered outline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderMesh {
    positions: Vec<Vec3>,
    uvs: Vec<Vec2>,
    indices: Vec<u32>,
    normals: Vec<Vec3>,
}

impl RenderMesh {
    /// Create a new empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contents from tessellated edge points.
    ///
    /// Vertices are the edge points shifted by `depth_offset` along z. UVs
    /// are taken from the unshifted points.
    pub fn rebuild(
        &mut self,
        edge_points: &[Vec3],
        triangulation: &Triangulation,
        depth_offset: f32,
        uv: &UvTransform,
    ) {
        profile_function!();

        self.clear();

        let offset = Vec3::new(0.0, 0.0, depth_offset);
        self.positions
            .extend(edge_points.iter().map(|point| *point + offset));
        self.uvs
            .extend(edge_points.iter().map(|point| uv.transform_point(*point)));
        self.indices.extend_from_slice(&triangulation.indices);

        recalculate_normals(&self.positions, &self.indices, &mut self.normals);
    }

    /// Vertex positions.
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Texture coordinates, one per vertex.
    pub fn uvs(&self) -> &[Vec2] {
        &self.uvs
    }

    /// Triangle indices.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Smooth vertex normals, one per vertex.
    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    /// Interleave the vertex attributes for upload.
    pub fn interleaved(&self) -> Vec<MeshVertex> {
        self.positions
            .iter()
            .zip(&self.normals)
            .zip(&self.uvs)
            .map(|((position, normal), uv)| {
                MeshVertex::new(position.to_array(), normal.to_array(), uv.to_array())
            })
            .collect()
    }

    /// Check if the mesh is empty.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty() || self.indices.is_empty()
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
        self.uvs.clear();
        self.indices.clear();
        self.normals.clear();
    }
}

/// Recompute smooth vertex normals into `normals`.
///
/// Face normals (right-handed, from the triangle winding) are accumulated
/// area-weighted on their corners and normalised. Vertices no triangle uses
/// get a zero normal.
pub fn recalculate_normals(positions: &[Vec3], indices: &[u32], normals: &mut Vec<Vec3>) {
    normals.clear();
    normals.resize(positions.len(), Vec3::ZERO);

    for tri in indices.chunks_exact(3) {
        let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
        let face = (positions[b] - positions[a]).cross(positions[c] - positions[a]);
        normals[a] += face;
        normals[b] += face;
        normals[c] += face;
    }

    for normal in normals.iter_mut() {
        *normal = normal.normalize_or_zero();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{UvMapping, triangulate};

    fn square() -> Vec<Vec3> {
        vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ]
    }

    #[test]
    fn test_rebuild_applies_depth_offset_to_positions_only() {
        let points = square();
        let tri = triangulate(&points);
        let mut mesh = RenderMesh::new();
        mesh.rebuild(&points, &tri, 2.5, &UvTransform::IDENTITY);

        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 2);
        assert!(mesh.positions().iter().all(|p| p.z == 2.5));
        assert_eq!(mesh.uvs()[2], Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_normals_are_unit_depth_axis() {
        let points = square();
        let tri = triangulate(&points);
        let mut mesh = RenderMesh::new();
        mesh.rebuild(&points, &tri, 0.0, &UvTransform::IDENTITY);

        assert_eq!(mesh.normals().len(), 4);
        for normal in mesh.normals() {
            assert!((normal.z.abs() - 1.0).abs() < 1e-6);
            assert!(normal.x.abs() < 1e-6 && normal.y.abs() < 1e-6);
        }
    }

    #[test]
    fn test_rebuild_replaces_previous_contents() {
        let mut mesh = RenderMesh::new();
        let points = square();
        mesh.rebuild(&points, &triangulate(&points), 0.0, &UvTransform::IDENTITY);

        let triangle = &points[..3];
        mesh.rebuild(
            triangle,
            &triangulate(triangle),
            0.0,
            &UvTransform::from_mapping(&UvMapping::default()),
        );
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);
    }

    #[test]
    fn test_interleaved_matches_attributes() {
        let points = square();
        let mut mesh = RenderMesh::new();
        mesh.rebuild(&points, &triangulate(&points), 0.0, &UvTransform::IDENTITY);

        let vertices = mesh.interleaved();
        assert_eq!(vertices.len(), 4);
        assert_eq!(vertices[1].position, [1.0, 0.0, 0.0]);
        assert_eq!(vertices[1].uv, [1.0, 0.0]);
    }

    #[test]
    fn test_unused_vertex_gets_zero_normal() {
        let positions = [Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::new(5.0, 5.0, 0.0)];
        let mut normals = Vec::new();
        recalculate_normals(&positions, &[0, 1, 2], &mut normals);
        assert_eq!(normals[3], Vec3::ZERO);
        assert_eq!(normals[0], Vec3::Z);
    }
}
