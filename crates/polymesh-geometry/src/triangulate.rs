//! Ear-clipping triangulation of simple polygons.
//!
//! The polygon is read from the x/y plane of its points. Its winding is
//! normalised to counter-clockwise before clipping, and the resulting index
//! list is reversed at the end, so triangles come out clockwise when seen
//! from +z.
//!
//! Active vertices live in a doubly linked ring over a fixed arena, so an
//! ear is removed in O(1). The scan order is deterministic: after an ear
//! `(u, v, w)` is cut, scanning resumes at `w`; after a rejected corner it
//! advances by one vertex.

use crate::{GeometryError, GeometryResult};
use glam::Vec3;
use polymesh_core::profiling::{profile_function, profile_scope};

/// Corners whose doubled area is below this are never clipped.
///
/// The smallest positive subnormal, so any strictly convex corner qualifies
/// regardless of the outline's scale.
pub const SNIP_EPSILON: f32 = f32::from_bits(1);

/// How a triangulation finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriangulationStatus {
    /// Every ear was clipped.
    Complete,
    /// Fewer than three points were supplied.
    Degenerate,
    /// The iteration budget ran out; `remaining` vertices were left over.
    Stalled { remaining: usize },
}

/// Triangle indices produced by [`triangulate`].
#[derive(Debug, Clone, PartialEq)]
pub struct Triangulation {
    /// Indices into the input points, three per triangle.
    pub indices: Vec<u32>,
    /// Completion status.
    pub status: TriangulationStatus,
    point_count: usize,
}

impl Triangulation {
    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Check if every ear was clipped.
    pub fn is_complete(&self) -> bool {
        self.status == TriangulationStatus::Complete
    }

    /// Number of points that were triangulated.
    pub fn point_count(&self) -> usize {
        self.point_count
    }

    /// Iterate over the triangles.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices
            .chunks_exact(3)
            .map(|tri| [tri[0], tri[1], tri[2]])
    }

    /// Turn degenerate or stalled results into errors.
    pub fn into_result(self) -> GeometryResult<Vec<u32>> {
        match self.status {
            TriangulationStatus::Complete => Ok(self.indices),
            TriangulationStatus::Degenerate => Err(GeometryError::DegenerateOutline {
                points: self.point_count,
            }),
            TriangulationStatus::Stalled { remaining } => {
                Err(GeometryError::StalledTriangulation { remaining })
            }
        }
    }
}

/// Triangulate the closed loop `points` by ear clipping.
///
/// Never fails: fewer than three points give an empty list, and running out
/// of iterations on degenerate or self-intersecting input returns the ears
/// found so far.
pub fn triangulate(points: &[Vec3]) -> Triangulation {
    profile_function!();

    let n = points.len();
    if n < 3 {
        return Triangulation {
            indices: Vec::new(),
            status: TriangulationStatus::Degenerate,
            point_count: n,
        };
    }

    let remap: Vec<u32> = if signed_area(points) > 0.0 {
        (0..n as u32).collect()
    } else {
        (0..n as u32).rev().collect()
    };

    let mut ring = ActiveRing::new(n);
    let mut indices = Vec::with_capacity(3 * (n - 2));
    let mut budget = 2 * ring.len;
    let mut cursor = n - 1;
    let mut status = TriangulationStatus::Complete;

    {
        profile_scope!("clip_ears");

        while ring.len > 2 {
            if budget == 0 {
                status = TriangulationStatus::Stalled {
                    remaining: ring.len,
                };
                break;
            }
            budget -= 1;

            let u = cursor;
            let v = ring.next[u];
            let w = ring.next[v];

            if is_ear(points, &remap, &ring, u, v, w) {
                indices.extend_from_slice(&[remap[u], remap[v], remap[w]]);
                ring.remove(v);
                budget = 2 * ring.len;
                cursor = w;
            } else {
                cursor = v;
            }
        }
    }

    if let TriangulationStatus::Stalled { remaining } = status {
        tracing::warn!(
            points = n,
            remaining,
            triangles = indices.len() / 3,
            "Ear clipping stalled; returning partial triangulation"
        );
    }

    indices.reverse();

    Triangulation {
        indices,
        status,
        point_count: n,
    }
}

/// Signed area of the loop on the x/y plane (shoelace formula).
///
/// Positive for counter-clockwise loops.
pub fn signed_area(points: &[Vec3]) -> f32 {
    let n = points.len();
    let mut area = 0.0;
    for q in 0..n {
        let p = if q == 0 { n - 1 } else { q - 1 };
        area += points[p].x * points[q].y - points[q].x * points[p].y;
    }
    area * 0.5
}

/// Unsigned area of a triangle on the x/y plane.
pub fn triangle_area(a: Vec3, b: Vec3, c: Vec3) -> f32 {
    ((b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)).abs() * 0.5
}

/// Whether `p` lies inside or on the boundary of the counter-clockwise
/// triangle `a, b, c`.
pub fn inside_triangle(a: Vec3, b: Vec3, c: Vec3, p: Vec3) -> bool {
    let a_cross_bp = (c.x - b.x) * (p.y - b.y) - (c.y - b.y) * (p.x - b.x);
    let c_cross_ap = (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x);
    let b_cross_cp = (a.x - c.x) * (p.y - c.y) - (a.y - c.y) * (p.x - c.x);

    a_cross_bp >= 0.0 && b_cross_cp >= 0.0 && c_cross_ap >= 0.0
}

/// Corner `u, v, w` is an ear if it is strictly convex and no other active
/// vertex touches it.
fn is_ear(points: &[Vec3], remap: &[u32], ring: &ActiveRing, u: usize, v: usize, w: usize) -> bool {
    let a = points[remap[u] as usize];
    let b = points[remap[v] as usize];
    let c = points[remap[w] as usize];

    let cross = (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x);
    if cross < SNIP_EPSILON {
        return false;
    }

    let mut p = ring.next[w];
    while p != u {
        if inside_triangle(a, b, c, points[remap[p] as usize]) {
            return false;
        }
        p = ring.next[p];
    }
    true
}

/// Doubly linked ring of the vertices still waiting to be clipped.
struct ActiveRing {
    next: Vec<usize>,
    prev: Vec<usize>,
    len: usize,
}

impl ActiveRing {
    fn new(len: usize) -> Self {
        Self {
            next: (0..len).map(|i| (i + 1) % len).collect(),
            prev: (0..len).map(|i| (i + len - 1) % len).collect(),
            len,
        }
    }

    fn remove(&mut self, node: usize) {
        let prev = self.prev[node];
        let next = self.next[node];
        self.next[prev] = next;
        self.prev[next] = prev;
        self.len -= 1;
    }
}
