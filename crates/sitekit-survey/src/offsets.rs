//! Offset geometry generation.
//!
//! Each boundary segment is translated along its unit left-normal by every
//! offset distance the rules resolve for it, producing straight 2-point
//! offset lines. Zero-length parents produce no offsets: they are skipped
//! with a single logged diagnostic and the run continues.

use crate::rules::{resolve_offsets, OffsetKind};
use crate::traversal::BoundaryPath;
use sitekit_core::{left_normal, Point2, SetbackDistances};
use std::fmt;

/// One derived offset line, parallel to its parent segment.
#[derive(Debug, Clone, PartialEq)]
pub struct OffsetLine {
    /// Index of the parent segment within the boundary path.
    pub parent_segment_index: usize,
    /// Signed offset along the parent's left normal; negative is interior.
    pub offset_distance_m: f64,
    /// Parent start translated by the offset.
    pub start: Point2,
    /// Parent end translated by the offset.
    pub end: Point2,
    /// Setback or road line.
    pub kind: OffsetKind,
    /// Drawing label ("Side", "Front Min", "Road", ...).
    pub label: &'static str,
}

/// A segment that produced no offsets.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedSegment {
    /// Index of the segment within the boundary path.
    pub segment_index: usize,
    /// 1-based row number as shown in the boundary table.
    pub row: usize,
}

impl fmt::Display for SkippedSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Skipping zero-length segment {} for offsets.", self.row)
    }
}

/// Offset lines plus the segments that had to be skipped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OffsetRun {
    /// Generated lines, in segment order then resolver order.
    pub lines: Vec<OffsetLine>,
    /// Segments excluded because their direction vector was degenerate.
    pub skipped: Vec<SkippedSegment>,
}

impl OffsetRun {
    /// Lines belonging to one parent segment, in resolver order.
    pub fn lines_for_segment(&self, segment_index: usize) -> impl Iterator<Item = &OffsetLine> {
        self.lines
            .iter()
            .filter(move |line| line.parent_segment_index == segment_index)
    }
}

/// Generate every offset line the rules prescribe for a boundary path.
///
/// Iterates segments in path order; within a segment, lines follow resolver
/// order (for a frontage: front min, front habitable, garage, road). A
/// zero-length segment yields exactly one skip diagnostic and no lines.
pub fn generate_offsets(path: &BoundaryPath, setbacks: &SetbackDistances) -> OffsetRun {
    let mut run = OffsetRun::default();
    for (segment_index, segment) in path.segments.iter().enumerate() {
        let (dx, dy) = segment.direction();
        let Some((nx, ny)) = left_normal(dx, dy) else {
            let skipped = SkippedSegment {
                segment_index,
                row: segment.row(),
            };
            tracing::warn!("{}", skipped);
            run.skipped.push(skipped);
            continue;
        };
        for spec in resolve_offsets(segment.segment_type, setbacks) {
            let start = Point2::new(
                segment.start.x + spec.distance_m * nx,
                segment.start.y + spec.distance_m * ny,
            );
            let end = Point2::new(
                segment.end.x + spec.distance_m * nx,
                segment.end.y + spec.distance_m * ny,
            );
            run.lines.push(OffsetLine {
                parent_segment_index: segment_index,
                offset_distance_m: spec.distance_m,
                start,
                end,
                kind: spec.kind,
                label: spec.label,
            });
        }
    }
    run
}
