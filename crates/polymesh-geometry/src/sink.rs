//! Hand-off points to the renderer and the physics world.

use crate::{ColliderMesh, RenderMesh};

/// Receives freshly rebuilt meshes.
///
/// Implemented by whatever owns GPU buffers or collision shapes. Both
/// callbacks run synchronously at the end of a rebuild.
pub trait MeshSink {
    /// The render mesh was rewritten in place.
    fn render_mesh_updated(&mut self, mesh: &RenderMesh);

    /// The collision mesh was rebuilt and must be (re)assigned.
    ///
    /// Called on every rebuild, even when the contents did not change, so
    /// broad-phase caches keyed on assignment are refreshed. `generation`
    /// increases by one per assignment.
    fn collider_assigned(&mut self, mesh: &ColliderMesh, generation: u64);
}

/// A sink that ignores every update.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl MeshSink for NullSink {
    fn render_mesh_updated(&mut self, _mesh: &RenderMesh) {}

    fn collider_assigned(&mut self, _mesh: &ColliderMesh, _generation: u64) {}
}
