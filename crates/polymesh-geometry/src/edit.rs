//! Authoring operations on outlines.
//!
//! These mirror what an outline editor offers: splitting and extruding
//! edges, deleting points, cutting an outline in two and picking the point
//! or edge under the cursor. None of them rebuild meshes; callers rebuild
//! once the edit is done.

use crate::{GeometryError, GeometryResult, Outline, merge::nearest_index};
use glam::{Mat4, Vec3};

/// Minimum number of key points an edit may leave behind.
pub const MIN_OUTLINE_POINTS: usize = 3;

/// The closest point on an outline edge to a query position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeHit {
    /// Edge index (edge `i` starts at key point `i`).
    pub edge: usize,
    /// Closest point found on that edge.
    pub point: Vec3,
    /// Distance from the query position.
    pub distance: f32,
}

impl Outline {
    /// Reverse the loop direction.
    ///
    /// Handles and curve flags follow the edge they describe, so the
    /// tessellated shape is unchanged apart from its winding.
    pub fn invert(&mut self) {
        let (key_points, handles, curved) = self.lists_mut();
        key_points.reverse();
        if handles.is_empty() {
            return;
        }
        handles.reverse();
        handles.rotate_left(1);
        curved.reverse();
        curved.rotate_left(1);
    }

    /// Insert `point` on edge `edge`, returning the new key point's index.
    ///
    /// The split edge becomes straight.
    pub fn split_edge(&mut self, edge: usize, point: Vec3) -> GeometryResult<usize> {
        self.check_index(edge)?;
        let index = edge + 1;
        self.insert_point(index, point)?;
        self.set_straight(edge)?;
        Ok(index)
    }

    /// Duplicate both endpoints of edge `edge` so they can be dragged out.
    ///
    /// Returns the indices of the two new key points. The closing edge is
    /// extruded by appending.
    pub fn extrude_edge(&mut self, edge: usize) -> GeometryResult<(usize, usize)> {
        self.check_index(edge)?;
        let len = self.len();
        let next = (edge + 1) % len;
        let point_a = self.key_points()[edge];
        let point_b = self.key_points()[next];

        let first = if next == 0 && edge == len - 1 {
            self.push_point(point_a);
            self.push_point(point_b);
            len
        } else {
            self.insert_point(edge + 1, point_a)?;
            self.insert_point(edge + 2, point_b)?;
            edge + 1
        };

        self.set_straight(edge)?;
        Ok((first, first + 1))
    }

    /// Remove the given key points.
    ///
    /// Refused if fewer than [`MIN_OUTLINE_POINTS`] would remain.
    pub fn remove_points(&mut self, indices: &[usize]) -> GeometryResult<()> {
        let mut indices = indices.to_vec();
        indices.sort_unstable();
        indices.dedup();

        for &index in &indices {
            self.check_index(index)?;
        }

        let remaining = self.len() - indices.len();
        if remaining < MIN_OUTLINE_POINTS {
            return Err(GeometryError::TooFewPoints {
                remaining,
                minimum: MIN_OUTLINE_POINTS,
            });
        }

        for &index in indices.iter().rev() {
            self.remove_point(index)?;
        }
        Ok(())
    }

    /// Cut the outline along the chord between key points `a` and `b`.
    ///
    /// The returned outline holds the key points `a..=b`; `self` keeps the
    /// rest of the loop plus both cut points. The cut edge is straight on both
    /// sides.
    pub fn split_at(&mut self, a: usize, b: usize) -> GeometryResult<Outline> {
        self.check_index(a)?;
        self.check_index(b)?;
        let (a, b) = if a <= b { (a, b) } else { (b, a) };
        let len = self.len();
        if b - a <= 1 || (a == 0 && b == len - 1) {
            return Err(GeometryError::AdjacentSplitPoints { a, b });
        }

        let mut part = Outline::from_parts(
            self.key_points()[a..=b].to_vec(),
            self.handles()[a..=b].to_vec(),
            self.curved()[a..=b].to_vec(),
        )?;
        part.set_curve_detail(self.curve_detail())?;
        let closing = part.len() - 1;
        part.set_straight(closing)?;
        part.normalize_handles();

        let (key_points, handles, curved) = self.lists_mut();
        key_points.drain(a + 1..b);
        handles.drain(a + 1..b);
        curved.drain(a + 1..b);
        self.set_straight(a)?;
        self.normalize_handles();

        Ok(part)
    }

    /// Reset the handle of every straight edge to the middle of its chord.
    pub fn normalize_handles(&mut self) {
        let len = self.len();
        let (key_points, handles, curved) = self.lists_mut();
        for i in 0..len {
            if !curved[i] {
                handles[i] = key_points[i].lerp(key_points[(i + 1) % len], 0.5);
            }
        }
    }

    /// Index of the key point closest to `target` (ties go to the lowest
    /// index).
    pub fn nearest_point(&self, target: Vec3) -> Option<usize> {
        nearest_index(self.key_points(), target)
    }

    /// The closest point on any edge whose chord spans `target`.
    ///
    /// `target` is projected onto each chord; edges it does not project into
    /// are skipped. Curved edges are evaluated at the projected parameter.
    pub fn nearest_edge(&self, target: Vec3) -> Option<EdgeHit> {
        let mut best: Option<EdgeHit> = None;

        for edge in 0..self.len() {
            let Some((from, to)) = self.edge_endpoints(edge) else {
                continue;
            };
            let line = to - from;
            let length = line.length();
            if length <= f32::EPSILON {
                continue;
            }

            let direction = line / length;
            let along = direction.dot(target - from);
            if !(0.0..=length).contains(&along) {
                continue;
            }

            let point = match self.edge_curve(edge) {
                Some(curve) => curve.eval(along / length),
                None => from + direction * along,
            };
            let distance = point.distance(target);
            if best.is_none_or(|hit| distance < hit.distance) {
                best = Some(EdgeHit {
                    edge,
                    point,
                    distance,
                });
            }
        }

        best
    }

    /// Move every key point and handle by `offset`.
    pub fn translate(&mut self, offset: Vec3) {
        self.transform(&Mat4::from_translation(offset));
    }

    /// Apply an affine transform to every key point and handle.
    pub fn transform(&mut self, matrix: &Mat4) {
        let (key_points, handles, _) = self.lists_mut();
        for point in key_points.iter_mut().chain(handles.iter_mut()) {
            *point = matrix.transform_point3(*point);
        }
    }
}

/// Round the planar coordinates of `value` to a grid of `step`.
///
/// Depth is left untouched. A non-positive step disables snapping.
pub fn snap(value: Vec3, step: f32) -> Vec3 {
    if step <= 0.0 {
        return value;
    }
    Vec3::new(
        (value.x / step).round() * step,
        (value.y / step).round() * step,
        value.z,
    )
}
