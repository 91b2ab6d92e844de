//! Splicing an arc of one outline into another.
//!
//! All wrap-around index arithmetic lives in [`ArcRange`]. An arc is the
//! inclusive run of indices from `start` to `end`, walking forward and
//! wrapping past the end of the list when `end < start`.

use crate::{GeometryError, GeometryResult, Outline};
use glam::Vec3;

/// An inclusive, possibly wrapping run of indices in a list of `len` items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArcRange {
    start: usize,
    end: usize,
    len: usize,
}

impl ArcRange {
    /// Create an arc, checking both ends against `len`.
    pub fn new(start: usize, end: usize, len: usize) -> GeometryResult<Self> {
        for index in [start, end] {
            if index >= len {
                return Err(GeometryError::IndexOutOfRange { index, len });
            }
        }
        Ok(Self { start, end, len })
    }

    /// First index of the arc.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Last index of the arc.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Length of the list the arc indexes into.
    pub fn list_len(&self) -> usize {
        self.len
    }

    /// Whether the arc runs past the end of the list.
    pub fn wraps(&self) -> bool {
        self.end < self.start
    }

    /// Number of indices covered.
    pub fn count(&self) -> usize {
        if self.wraps() {
            self.len - self.start + self.end + 1
        } else {
            self.end - self.start + 1
        }
    }

    /// Whether `index` is part of the arc.
    pub fn contains(&self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        if self.wraps() {
            index >= self.start || index <= self.end
        } else {
            (self.start..=self.end).contains(&index)
        }
    }

    /// Indices of the arc in walking order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.count()).map(move |k| (self.start + k) % self.len)
    }

    /// Remove the arc's items from `list`, returning where the gap opened.
    ///
    /// A wrapping arc is removed in two passes: the tail first, then the
    /// head, which leaves the gap at the end of what remains.
    pub fn remove_from<T>(&self, list: &mut Vec<T>) -> usize {
        debug_assert_eq!(list.len(), self.len);
        if self.wraps() {
            list.truncate(self.start);
            list.drain(..=self.end);
            self.start - (self.end + 1)
        } else {
            list.drain(self.start..=self.end);
            self.start
        }
    }
}

/// Index of the point closest to `target`; ties go to the lowest index.
pub fn nearest_index(points: &[Vec3], target: Vec3) -> Option<usize> {
    let mut nearest = None;
    let mut nearest_distance = f32::INFINITY;
    for (index, point) in points.iter().enumerate() {
        let distance = point.distance(target);
        if nearest.is_none() || distance < nearest_distance {
            nearest = Some(index);
            nearest_distance = distance;
        }
    }
    nearest
}

/// A resolved splice: which destination arc goes, which source points come in.
#[derive(Debug, Clone, PartialEq)]
pub struct MergePlan {
    destination_arc: ArcRange,
    source_arc: ArcRange,
    points: Vec<Vec3>,
}

impl MergePlan {
    /// Plan replacing `destination[start..=end]` with the source arc whose
    /// ends are nearest to the destination arc's ends.
    pub fn new(
        destination: &Outline,
        source: &Outline,
        start: usize,
        end: usize,
    ) -> GeometryResult<Self> {
        let destination_arc = ArcRange::new(start, end, destination.len())?;
        let degenerate = || GeometryError::DegenerateOutline {
            points: source.len(),
        };
        let source_start = nearest_index(source.key_points(), destination.point(start)?)
            .ok_or_else(degenerate)?;
        let source_end = nearest_index(source.key_points(), destination.point(end)?)
            .ok_or_else(degenerate)?;
        let source_arc = ArcRange::new(source_start, source_end, source.len())?;

        Ok(Self::with_source_arc(destination_arc, source, source_arc))
    }

    /// Plan replacing `destination_arc` with an explicit arc of `source`.
    ///
    /// Source curvature is discarded: every inserted point is straight.
    pub fn with_source_arc(destination_arc: ArcRange, source: &Outline, source_arc: ArcRange) -> Self {
        let points = source_arc
            .iter()
            .filter_map(|index| source.key_points().get(index).copied())
            .collect();
        Self {
            destination_arc,
            source_arc,
            points,
        }
    }

    /// The destination arc that will be removed.
    pub fn destination_arc(&self) -> ArcRange {
        self.destination_arc
    }

    /// The source arc that will be inserted.
    pub fn source_arc(&self) -> ArcRange {
        self.source_arc
    }

    /// Points to insert, in order.
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Destination length once the plan is applied.
    pub fn resulting_len(&self) -> usize {
        self.destination_arc.list_len() - self.destination_arc.count() + self.points.len()
    }

    /// Remove the destination arc from all three lists in lockstep.
    ///
    /// Returns the index the source points are inserted at.
    pub fn open_gap(&self, destination: &mut Outline) -> GeometryResult<usize> {
        destination.validate()?;
        if destination.len() != self.destination_arc.list_len() {
            return Err(GeometryError::IndexOutOfRange {
                index: self.destination_arc.list_len(),
                len: destination.len(),
            });
        }

        let (key_points, handles, curved) = destination.lists_mut();
        let at = self.destination_arc.remove_from(key_points);
        self.destination_arc.remove_from(handles);
        self.destination_arc.remove_from(curved);
        Ok(at)
    }

    /// Splice the source points into `destination` in one go.
    pub fn apply(&self, destination: &mut Outline) -> GeometryResult<()> {
        let at = self.open_gap(destination)?;
        for (offset, point) in self.points.iter().enumerate() {
            destination.insert_point(at + offset, *point)?;
        }
        Ok(())
    }
}
