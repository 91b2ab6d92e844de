//! Outline Demo - build, edit and merge a poly mesh without a renderer
//!
//! This example demonstrates:
//! - Authoring an outline with a curved edge
//! - Rebuilding the render and collision meshes
//! - Editing the outline and splicing in an arc from another outline
//!
//! Set `POLYMESH_PROFILE=1` to serve puffin scopes on port 8585.

use glam::Vec3;
use polymesh_core::logging;
use polymesh_core::profiling::{init_profiling, new_frame};
use polymesh_geometry::{ColliderMesh, GeometryResult, MeshSink, Outline, PolyMesh, RenderMesh};

struct LogSink;

impl MeshSink for LogSink {
    fn render_mesh_updated(&mut self, mesh: &RenderMesh) {
        tracing::info!(
            vertices = mesh.vertex_count(),
            triangles = mesh.triangle_count(),
            bytes = bytemuck::cast_slice::<_, u8>(&mesh.interleaved()).len(),
            "Render mesh updated"
        );
    }

    fn collider_assigned(&mut self, mesh: &ColliderMesh, generation: u64) {
        tracing::info!(
            generation,
            vertices = mesh.vertex_count(),
            walls = mesh.wall_segment_count(),
            "Collider assigned"
        );
    }
}

fn main() -> GeometryResult<()> {
    logging::init();
    if std::env::var_os("POLYMESH_PROFILE").is_some() {
        init_profiling();
    }

    let mut outline = Outline::from_points([
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(6.0, 0.0, 0.0),
        Vec3::new(6.0, 3.0, 0.0),
        Vec3::new(0.0, 3.0, 0.0),
    ]);
    outline.set_curve(2, Vec3::new(3.0, 5.0, 0.0))?;

    let mut mesh = PolyMesh::from_outline(outline);
    let mut sink = LogSink;

    new_frame();
    let report = mesh.rebuild_with(&mut sink);
    tracing::info!(?report, "Initial build");

    new_frame();
    let (a, b) = mesh.outline.extrude_edge(0)?;
    let lowered = mesh.outline.point(a)? - Vec3::new(0.0, 1.0, 0.0);
    mesh.outline.set_point(a, lowered)?;
    let lowered = mesh.outline.point(b)? - Vec3::new(0.0, 1.0, 0.0);
    mesh.outline.set_point(b, lowered)?;
    let report = mesh.rebuild_with(&mut sink);
    tracing::info!(?report, "After extruding the bottom edge");

    new_frame();
    let patch = Outline::from_points([
        Vec3::new(10.0, 1.5, 0.0),
        Vec3::new(6.1, 0.0, 0.0),
        Vec3::new(8.0, 1.5, 0.0),
        Vec3::new(6.1, 3.0, 0.0),
    ]);
    let right_corner = mesh
        .outline
        .nearest_point(Vec3::new(6.0, 0.0, 0.0))
        .unwrap_or_default();
    let top_corner = mesh
        .outline
        .nearest_point(Vec3::new(6.0, 3.0, 0.0))
        .unwrap_or_default();
    if let Some(merge) = mesh.merge_from_with(Some(&patch), right_corner, top_corner, &mut sink)? {
        tracing::info!(?merge, points = mesh.outline.len(), "Merged patch");
    }

    Ok(())
}
