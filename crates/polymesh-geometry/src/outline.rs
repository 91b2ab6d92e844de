//! Authored outlines and their tessellation into edge points.
//!
//! An outline is a closed loop of key points. Edge `i` runs from key point
//! `i` to key point `i + 1` (wrapping) and is either straight or a quadratic
//! curve bent by its handle. Three parallel lists hold the key points, the
//! handles and the curve flags; every mutation goes through this type so the
//! lists always stay the same length.

use crate::{GeometryError, GeometryResult, QuadraticBezier, curve::segments_for_detail};
use glam::Vec3;
use polymesh_core::profiling::profile_function;

/// Default parameter step used when tessellating curved edges.
pub const DEFAULT_CURVE_DETAIL: f32 = 0.1;

/// Smallest curve detail accepted by [`Outline::set_curve_detail`].
pub const MIN_CURVE_DETAIL: f32 = 0.01;

/// A closed, planar outline made of straight and curved edges.
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    key_points: Vec<Vec3>,
    handles: Vec<Vec3>,
    curved: Vec<bool>,
    curve_detail: f32,
}

impl Default for Outline {
    fn default() -> Self {
        Self::new()
    }
}

impl Outline {
    /// Create an empty outline.
    pub fn new() -> Self {
        Self {
            key_points: Vec::new(),
            handles: Vec::new(),
            curved: Vec::new(),
            curve_detail: DEFAULT_CURVE_DETAIL,
        }
    }

    /// Create an outline of straight edges through `points`.
    ///
    /// Handles start at the middle of each edge.
    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Self {
        let key_points: Vec<Vec3> = points.into_iter().collect();
        let len = key_points.len();
        let mut outline = Self {
            key_points,
            handles: vec![Vec3::ZERO; len],
            curved: vec![false; len],
            curve_detail: DEFAULT_CURVE_DETAIL,
        };
        outline.normalize_handles();
        outline
    }

    /// Create an outline from its three parallel lists.
    pub fn from_parts(
        key_points: Vec<Vec3>,
        handles: Vec<Vec3>,
        curved: Vec<bool>,
    ) -> GeometryResult<Self> {
        let outline = Self {
            key_points,
            handles,
            curved,
            curve_detail: DEFAULT_CURVE_DETAIL,
        };
        outline.validate()?;
        Ok(outline)
    }

    /// Set the curve detail, builder style.
    pub fn with_curve_detail(mut self, curve_detail: f32) -> GeometryResult<Self> {
        self.set_curve_detail(curve_detail)?;
        Ok(self)
    }

    /// Check the parallel-list invariant.
    pub fn validate(&self) -> GeometryResult<()> {
        let key_points = self.key_points.len();
        if self.handles.len() != key_points || self.curved.len() != key_points {
            return Err(GeometryError::MismatchedOutline {
                key_points,
                handles: self.handles.len(),
                curved: self.curved.len(),
            });
        }
        Ok(())
    }

    /// Check that the outline has enough points to be triangulated.
    pub fn ensure_triangulable(&self) -> GeometryResult<()> {
        self.validate()?;
        if self.len() < 3 {
            return Err(GeometryError::DegenerateOutline { points: self.len() });
        }
        Ok(())
    }

    /// Number of key points.
    pub fn len(&self) -> usize {
        self.key_points.len()
    }

    /// Check if the outline has no key points.
    pub fn is_empty(&self) -> bool {
        self.key_points.is_empty()
    }

    /// Key points, in loop order.
    pub fn key_points(&self) -> &[Vec3] {
        &self.key_points
    }

    /// Curve handles, one per edge.
    pub fn handles(&self) -> &[Vec3] {
        &self.handles
    }

    /// Curve flags, one per edge.
    pub fn curved(&self) -> &[bool] {
        &self.curved
    }

    /// Parameter step used for curved edges.
    pub fn curve_detail(&self) -> f32 {
        self.curve_detail
    }

    /// Set the parameter step used for curved edges.
    ///
    /// Values above [`MIN_CURVE_DETAIL`] and up to 1 are accepted as-is;
    /// positive values below the minimum are raised to it.
    pub fn set_curve_detail(&mut self, curve_detail: f32) -> GeometryResult<()> {
        if !(curve_detail > 0.0 && curve_detail <= 1.0) {
            return Err(GeometryError::InvalidCurveDetail(curve_detail));
        }
        self.curve_detail = curve_detail.max(MIN_CURVE_DETAIL);
        Ok(())
    }

    /// Samples emitted for each curved edge.
    pub fn segments_per_curve(&self) -> usize {
        segments_for_detail(self.curve_detail)
    }

    /// Get a key point.
    pub fn point(&self, index: usize) -> GeometryResult<Vec3> {
        self.key_points
            .get(index)
            .copied()
            .ok_or_else(|| self.out_of_range(index))
    }

    /// Move a key point.
    pub fn set_point(&mut self, index: usize, point: Vec3) -> GeometryResult<()> {
        self.check_index(index)?;
        self.key_points[index] = point;
        Ok(())
    }

    /// Bend edge `edge` towards `handle`.
    pub fn set_curve(&mut self, edge: usize, handle: Vec3) -> GeometryResult<()> {
        self.check_index(edge)?;
        self.handles[edge] = handle;
        self.curved[edge] = true;
        Ok(())
    }

    /// Make edge `edge` straight again. The handle is kept.
    pub fn set_straight(&mut self, edge: usize) -> GeometryResult<()> {
        self.check_index(edge)?;
        self.curved[edge] = false;
        Ok(())
    }

    /// Append a straight key point with a zero handle.
    pub fn push_point(&mut self, point: Vec3) {
        self.key_points.push(point);
        self.handles.push(Vec3::ZERO);
        self.curved.push(false);
    }

    /// Insert a straight key point with a zero handle before `index`.
    ///
    /// `index == len()` appends.
    pub fn insert_point(&mut self, index: usize, point: Vec3) -> GeometryResult<()> {
        if index > self.len() {
            return Err(self.out_of_range(index));
        }
        self.key_points.insert(index, point);
        self.handles.insert(index, Vec3::ZERO);
        self.curved.insert(index, false);
        Ok(())
    }

    /// Remove one key point together with its handle and flag.
    pub fn remove_point(&mut self, index: usize) -> GeometryResult<Vec3> {
        self.check_index(index)?;
        self.handles.remove(index);
        self.curved.remove(index);
        Ok(self.key_points.remove(index))
    }

    /// The curve for edge `edge`, or `None` if the edge is straight.
    pub fn edge_curve(&self, edge: usize) -> Option<QuadraticBezier> {
        if !*self.curved.get(edge)? {
            return None;
        }
        let (from, to) = self.edge_endpoints(edge)?;
        Some(QuadraticBezier::from_handle(from, to, self.handles[edge]))
    }

    /// Start and end key points of edge `edge`.
    pub fn edge_endpoints(&self, edge: usize) -> Option<(Vec3, Vec3)> {
        let len = self.len();
        if edge >= len {
            return None;
        }
        Some((self.key_points[edge], self.key_points[(edge + 1) % len]))
    }

    /// Tessellate the outline into a dense closed loop of points.
    ///
    /// Straight edges contribute their start point. Curved edges contribute
    /// `segments_per_curve()` samples at `t = j / segments` for
    /// `j = 0..segments`; the end point belongs to the next edge.
    pub fn edge_points(&self) -> Vec<Vec3> {
        profile_function!();

        let segments = self.segments_per_curve();
        let curved_edges = self.curved.iter().filter(|curved| **curved).count();
        let mut points = Vec::with_capacity(self.len() + curved_edges * (segments - 1));

        for edge in 0..self.len() {
            match self.edge_curve(edge) {
                Some(curve) => {
                    for j in 0..segments {
                        let t = j as f32 / segments as f32;
                        points.push(curve.eval(t));
                    }
                }
                None => points.push(self.key_points[edge]),
            }
        }

        points
    }

    /// Mutable access to the parallel lists for in-crate lockstep edits.
    pub(crate) fn lists_mut(&mut self) -> (&mut Vec<Vec3>, &mut Vec<Vec3>, &mut Vec<bool>) {
        (&mut self.key_points, &mut self.handles, &mut self.curved)
    }

    pub(crate) fn check_index(&self, index: usize) -> GeometryResult<()> {
        if index < self.len() {
            Ok(())
        } else {
            Err(self.out_of_range(index))
        }
    }

    fn out_of_range(&self, index: usize) -> GeometryError {
        GeometryError::IndexOutOfRange {
            index,
            len: self.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Outline {
        Outline::from_points([
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ])
    }

    #[test]
    fn test_straight_outline_edge_points_unchanged() {
        let outline = square();
        assert_eq!(outline.edge_points(), outline.key_points());
    }

    #[test]
    fn test_curved_edge_sample_count() {
        let mut outline = square().with_curve_detail(0.5).unwrap();
        outline.set_curve(0, Vec3::new(0.5, -0.5, 0.0)).unwrap();

        let points = outline.edge_points();
        // Two samples for the curved edge, one for each straight edge.
        assert_eq!(points.len(), 2 + 3);
        assert_eq!(points[0], Vec3::ZERO);
        assert_eq!(points[2], Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_curve_detail_one_emits_start_only() {
        let mut outline = Outline::from_points([
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(1.0, -2.0, 0.0),
        ])
        .with_curve_detail(1.0)
        .unwrap();
        outline.set_curve(0, Vec3::new(1.0, 1.0, 0.0)).unwrap();

        let points = outline.edge_points();
        assert_eq!(points.len(), 3);
        assert_eq!(points[0], Vec3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_from_parts_rejects_mismatched_lists() {
        let result = Outline::from_parts(vec![Vec3::ZERO; 3], vec![Vec3::ZERO; 2], vec![false; 3]);
        assert_eq!(
            result,
            Err(GeometryError::MismatchedOutline {
                key_points: 3,
                handles: 2,
                curved: 3
            })
        );
    }

    #[test]
    fn test_curve_detail_validation() {
        let mut outline = square();
        assert!(outline.set_curve_detail(0.0).is_err());
        assert!(outline.set_curve_detail(1.5).is_err());
        assert!(outline.set_curve_detail(f32::NAN).is_err());
        outline.set_curve_detail(0.001).unwrap();
        assert_eq!(outline.curve_detail(), MIN_CURVE_DETAIL);
    }

    #[test]
    fn test_insert_and_remove_keep_lists_parallel() {
        let mut outline = square();
        outline.insert_point(2, Vec3::new(2.0, 0.5, 0.0)).unwrap();
        outline.set_curve(2, Vec3::new(1.5, 1.5, 0.0)).unwrap();
        assert_eq!(outline.len(), 5);
        assert!(outline.validate().is_ok());

        outline.remove_point(0).unwrap();
        assert_eq!(outline.len(), 4);
        assert_eq!(outline.curved(), &[false, true, false, false]);
        assert!(outline.validate().is_ok());

        assert!(outline.insert_point(9, Vec3::ZERO).is_err());
    }

    #[test]
    fn test_point_lookup() {
        let outline = square();
        assert_eq!(outline.point(2), Ok(Vec3::new(1.0, 1.0, 0.0)));
        assert_eq!(
            outline.point(4),
            Err(GeometryError::IndexOutOfRange { index: 4, len: 4 })
        );
    }

    #[test]
    fn test_ensure_triangulable() {
        let outline = Outline::from_points([Vec3::ZERO, Vec3::X]);
        assert_eq!(
            outline.ensure_triangulable(),
            Err(GeometryError::DegenerateOutline { points: 2 })
        );
        assert!(square().ensure_triangulable().is_ok());
    }
}
