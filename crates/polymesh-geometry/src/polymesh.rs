//! The poly mesh entity: an outline plus the meshes generated from it.
//!
//! Nothing here hooks into a host lifecycle. The embedding application calls
//! [`PolyMesh::rebuild`] (or [`PolyMesh::on_edit`]) whenever it changed the
//! outline or settings; every call regenerates both meshes from scratch.

use crate::{
    ColliderMesh, GeometryResult, MergePlan, MeshSink, NullSink, Outline, OutlineOverlay,
    PolyMeshSettings, RenderMesh, TriangulationStatus, UvTransform, triangulate,
};
use glam::{Mat4, Vec3};
use polymesh_core::profiling::profile_function;

/// Summary of one rebuild.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RebuildReport {
    /// Number of tessellated edge points (render vertices).
    pub edge_points: usize,
    /// Number of render triangles.
    pub triangles: usize,
    /// How triangulation finished.
    pub status: TriangulationStatus,
    /// Collider vertices, `None` without a collision shape.
    pub collider_vertices: Option<usize>,
}

/// Summary of a merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeReport {
    /// Destination points removed.
    pub removed: usize,
    /// Source points inserted.
    pub inserted: usize,
    /// The rebuild that followed the last insertion.
    pub last_rebuild: Option<RebuildReport>,
}

/// Meshes owned by one poly mesh; rewritten in place on every rebuild.
#[derive(Debug, Clone, Default)]
struct MeshTargets {
    render: RenderMesh,
    collider: Option<ColliderMesh>,
    collider_generation: u64,
}

impl MeshTargets {
    fn rebuild(
        &mut self,
        outline: &Outline,
        settings: &PolyMeshSettings,
        sink: &mut dyn MeshSink,
    ) -> RebuildReport {
        profile_function!();

        let edge_points = outline.edge_points();
        let triangulation = triangulate(&edge_points);

        self.render.rebuild(
            &edge_points,
            &triangulation,
            settings.depth_offset,
            &UvTransform::from_mapping(&settings.uv),
        );
        sink.render_mesh_updated(&self.render);

        let collider_vertices = match &settings.collider {
            Some(collider_settings) => {
                let collider = self.collider.get_or_insert_with(ColliderMesh::new);
                collider.rebuild(&edge_points, &triangulation, collider_settings);
                self.collider_generation += 1;
                sink.collider_assigned(collider, self.collider_generation);
                Some(collider.vertex_count())
            }
            None => {
                self.collider = None;
                None
            }
        };

        let report = RebuildReport {
            edge_points: edge_points.len(),
            triangles: triangulation.triangle_count(),
            status: triangulation.status,
            collider_vertices,
        };
        tracing::debug!(
            edge_points = report.edge_points,
            triangles = report.triangles,
            status = ?report.status,
            "Rebuilt poly mesh"
        );
        report
    }
}

/// An authored outline and the render/collision meshes built from it.
#[derive(Debug, Clone, Default)]
pub struct PolyMesh {
    /// The authored outline. Rebuild after changing it.
    pub outline: Outline,
    /// Mesh generation settings. Rebuild after changing them.
    pub settings: PolyMeshSettings,
    targets: MeshTargets,
}

impl PolyMesh {
    /// Create a poly mesh. No meshes are built until the first rebuild.
    pub fn new(outline: Outline, settings: PolyMeshSettings) -> Self {
        Self {
            outline,
            settings,
            targets: MeshTargets::default(),
        }
    }

    /// Create a poly mesh with default settings.
    pub fn from_outline(outline: Outline) -> Self {
        Self::new(outline, PolyMeshSettings::default())
    }

    /// The render mesh.
    pub fn render_mesh(&self) -> &RenderMesh {
        &self.targets.render
    }

    /// The collision mesh, if a collision shape is attached and built.
    pub fn collider_mesh(&self) -> Option<&ColliderMesh> {
        self.targets.collider.as_ref()
    }

    /// How many times a collider has been assigned.
    pub fn collider_generation(&self) -> u64 {
        self.targets.collider_generation
    }

    /// The tessellated outline.
    pub fn edge_points(&self) -> Vec<Vec3> {
        self.outline.edge_points()
    }

    /// Regenerate both meshes.
    pub fn rebuild(&mut self) -> RebuildReport {
        self.rebuild_with(&mut NullSink)
    }

    /// Regenerate both meshes and hand them to `sink`.
    pub fn rebuild_with(&mut self, sink: &mut dyn MeshSink) -> RebuildReport {
        self.targets.rebuild(&self.outline, &self.settings, sink)
    }

    /// Entry point for editors after an authored change.
    pub fn on_edit(&mut self) -> RebuildReport {
        self.rebuild()
    }

    /// Drop the existing meshes and build new ones.
    ///
    /// Unlike [`rebuild`](Self::rebuild) this does not preserve the previous
    /// mesh storage.
    pub fn force_rebuild(&mut self) -> RebuildReport {
        self.targets.render = RenderMesh::new();
        self.targets.collider = None;
        self.rebuild()
    }

    /// Replace `self.outline[start..=end]` with the matching arc of `source`.
    ///
    /// Returns `Ok(None)` without touching anything when `source` is unset.
    pub fn merge_from(
        &mut self,
        source: Option<&Outline>,
        start: usize,
        end: usize,
    ) -> GeometryResult<Option<MergeReport>> {
        self.merge_from_with(source, start, end, &mut NullSink)
    }

    /// Like [`merge_from`](Self::merge_from), handing each rebuild to `sink`.
    ///
    /// The meshes are rebuilt after every single inserted point.
    pub fn merge_from_with(
        &mut self,
        source: Option<&Outline>,
        start: usize,
        end: usize,
        sink: &mut dyn MeshSink,
    ) -> GeometryResult<Option<MergeReport>> {
        let Some(source) = source else {
            return Ok(None);
        };

        let plan = MergePlan::new(&self.outline, source, start, end)?;
        self.apply_merge(&plan, sink).map(Some)
    }

    /// Apply an already resolved merge plan, rebuilding after each insertion.
    pub fn apply_merge(
        &mut self,
        plan: &MergePlan,
        sink: &mut dyn MeshSink,
    ) -> GeometryResult<MergeReport> {
        let at = plan.open_gap(&mut self.outline)?;

        let mut last_rebuild = None;
        for (offset, point) in plan.points().iter().enumerate() {
            self.outline.insert_point(at + offset, *point)?;
            tracing::trace!(index = at + offset, ?point, "Merged point");
            last_rebuild = Some(self.rebuild_with(sink));
        }

        Ok(MergeReport {
            removed: plan.destination_arc().count(),
            inserted: plan.points().len(),
            last_rebuild,
        })
    }

    /// Overlay data for drawing the outline in world space.
    ///
    /// The depth offset is scaled by the world transform's z scale.
    pub fn overlay(&self, world: &Mat4) -> OutlineOverlay {
        let (scale, _, _) = world.to_scale_rotation_translation();
        OutlineOverlay::build(
            &self.edge_points(),
            world,
            self.settings.depth_offset * scale.z,
        )
    }
}
