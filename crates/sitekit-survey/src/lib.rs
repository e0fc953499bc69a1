//! # SiteKit Survey
//!
//! The geometric traversal and setback-offset engine.
//!
//! Converts ordered bearing/distance boundary records into a connected path
//! of 2-D points, detects closure, and derives the regulatory offset lines
//! (setbacks and road lines) each boundary segment carries:
//! - Bearing parsing (decimal azimuth or degrees/minutes/seconds, 180 flip)
//! - Cursor-style traversal with per-record recoverable failures
//! - Setback rule resolution per segment type and scheme table
//! - Perpendicular offset construction along unit left-normals
//! - Rectangular deep-lot presets that seed a four-sided boundary

pub mod bearing;
pub mod offsets;
pub mod presets;
pub mod rules;
pub mod traversal;

pub use bearing::{normalize_azimuth, parse_azimuth, BearingError};
pub use offsets::{generate_offsets, OffsetLine, OffsetRun, SkippedSegment};
pub use presets::{lot_by_name, lot_catalog, LotPreset};
pub use rules::{resolve_offsets, OffsetKind, OffsetSpec, ROAD_LINE_OFFSET_M};
pub use traversal::{
    build_traversal, BoundaryPath, BoundaryRecord, ParseFailure, ResolvedSegment, SegmentType,
    CLOSURE_TOLERANCE_M,
};
