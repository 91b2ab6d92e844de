//! Interleaved vertex format for uploading render meshes.

use bytemuck::{Pod, Zeroable};

/// One render vertex: position, normal and texture coordinate.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    /// Position in the outline's local frame
    pub position: [f32; 3],
    /// Smooth vertex normal
    pub normal: [f32; 3],
    /// Texture coordinate
    pub uv: [f32; 2],
}

impl MeshVertex {
    /// Create a new mesh vertex.
    pub fn new(position: [f32; 3], normal: [f32; 3], uv: [f32; 2]) -> Self {
        Self {
            position,
            normal,
            uv,
        }
    }

    /// Size of one vertex in bytes.
    pub const STRIDE: usize = std::mem::size_of::<Self>();
}
