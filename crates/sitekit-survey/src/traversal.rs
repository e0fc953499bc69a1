//! Boundary traversal builder.
//!
//! Walks an ordered list of boundary records with a cursor starting at the
//! origin, resolving each usable record into a segment. Rows with a missing
//! distance or bearing are skipped (the deliberate incomplete-row policy);
//! rows with an unparsable bearing are recorded as parse failures alongside
//! the successful result. The finished path knows whether it closes and, if
//! not, carries a synthetic closing edge for drawing only.

use crate::bearing::{parse_azimuth, BearingError};
use serde::{Deserialize, Serialize};
use sitekit_core::{Error, LinearUnit, Point2, Result, SurveyError};
use std::fmt;
use std::str::FromStr;

/// Tolerance for the first-start / last-end closure comparison, in meters.
pub const CLOSURE_TOLERANCE_M: f64 = 1e-6;

/// Classification of a surveyed boundary edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SegmentType {
    /// Side boundary.
    Side,
    /// Rear boundary.
    Rear,
    /// Primary street frontage.
    Frontage,
    /// Secondary street frontage (corner lots).
    Secondary,
}

impl Default for SegmentType {
    fn default() -> Self {
        Self::Side
    }
}

impl fmt::Display for SegmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Side => write!(f, "Side"),
            Self::Rear => write!(f, "Rear"),
            Self::Frontage => write!(f, "Frontage"),
            Self::Secondary => write!(f, "Secondary"),
        }
    }
}

impl FromStr for SegmentType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "side" => Ok(Self::Side),
            "rear" => Ok(Self::Rear),
            "frontage" | "front" => Ok(Self::Frontage),
            "secondary" => Ok(Self::Secondary),
            _ => Err(format!("Unknown segment type: {}", s)),
        }
    }
}

/// One surveyed boundary edge as entered in the boundary table.
///
/// A record is usable when `distance > 0` and the bearing is non-empty;
/// anything else is treated as an incomplete row and skipped, not rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundaryRecord {
    /// Edge classification, drives setback resolution.
    pub segment_type: SegmentType,
    /// Distance in the traversal run's linear unit.
    pub distance: f64,
    /// Raw bearing text: decimal azimuth or "D M S".
    pub bearing: String,
    /// Add 180 degrees to the parsed azimuth (reversed sight line).
    pub flip180: bool,
}

impl BoundaryRecord {
    /// Create a record with the flip flag clear.
    pub fn new(segment_type: SegmentType, distance: f64, bearing: impl Into<String>) -> Self {
        Self {
            segment_type,
            distance,
            bearing: bearing.into(),
            flip180: false,
        }
    }

    /// Set the 180 flip flag.
    pub fn with_flip(mut self) -> Self {
        self.flip180 = true;
        self
    }

    fn is_usable(&self) -> bool {
        self.distance > 0.0 && !self.bearing.trim().is_empty()
    }
}

/// A boundary record resolved against the traversal cursor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedSegment {
    /// Edge classification carried over from the record.
    pub segment_type: SegmentType,
    /// Cursor position when this record was consumed.
    pub start: Point2,
    /// `start` displaced by `distance_m` along `azimuth_deg`.
    pub end: Point2,
    /// Distance in meters (after any chain-link conversion).
    pub distance_m: f64,
    /// Post-flip azimuth, normalized to [0, 360).
    pub azimuth_deg: f64,
    /// Index of the source record in the input list.
    pub source_index: usize,
}

impl ResolvedSegment {
    /// 1-based row number as shown in the boundary table.
    pub fn row(&self) -> usize {
        self.source_index + 1
    }

    /// Direction vector from start to end.
    pub fn direction(&self) -> (f64, f64) {
        (self.end.x - self.start.x, self.end.y - self.start.y)
    }

    /// Whether floating rounding collapsed this segment to a point.
    ///
    /// Flagged segments stay in the path but are excluded from offset
    /// generation and drawing.
    pub fn is_zero_length(&self) -> bool {
        self.start.x == self.end.x && self.start.y == self.end.y
    }
}

/// A row whose bearing could not be parsed.
///
/// Collected on the successful path rather than aborting the traversal.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseFailure {
    /// 1-based row number as shown in the boundary table.
    pub row: usize,
    /// The raw bearing text.
    pub raw: String,
    /// What was wrong with it.
    pub reason: BearingError,
}

impl fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Row {}: invalid bearing '{}': {}", self.row, self.raw, self.reason)
    }
}

/// The connected path produced by a traversal run.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryPath {
    /// Resolved segments in input order; each starts where the previous ended.
    pub segments: Vec<ResolvedSegment>,
    /// Whether the last end returned to the first start within tolerance.
    pub is_closed: bool,
    /// Synthetic closing edge (last end to first start), for drawing only.
    /// Never stored as a boundary record.
    pub closing_edge: Option<(Point2, Point2)>,
    /// Rows whose bearings failed to parse.
    pub parse_failures: Vec<ParseFailure>,
}

impl BoundaryPath {
    /// Segments eligible for offsetting and drawing (non-degenerate).
    pub fn drawable_segments(&self) -> impl Iterator<Item = &ResolvedSegment> {
        self.segments.iter().filter(|seg| !seg.is_zero_length())
    }

    /// Length of the synthetic closing edge, if one exists.
    pub fn closing_edge_length(&self) -> Option<f64> {
        self.closing_edge.map(|(from, to)| from.distance_to(&to))
    }
}

/// Build a boundary path from ordered records.
///
/// The cursor starts at the origin; every usable record advances it by its
/// resolved displacement. Distances are converted from `units` uniformly
/// across the run. Fails with `InsufficientGeometry` when no record produces
/// a segment.
pub fn build_traversal(records: &[BoundaryRecord], units: LinearUnit) -> Result<BoundaryPath> {
    let mut segments = Vec::new();
    let mut parse_failures = Vec::new();
    let mut cursor = Point2::origin();

    for (index, record) in records.iter().enumerate() {
        if !record.is_usable() {
            tracing::debug!("Row {} skipped: incomplete boundary record", index + 1);
            continue;
        }
        let azimuth = match parse_azimuth(record.bearing.trim(), record.flip180) {
            Ok(azimuth) => azimuth,
            Err(reason) => {
                tracing::warn!(
                    "Row {} bearing '{}' rejected: {}",
                    index + 1,
                    record.bearing,
                    reason
                );
                parse_failures.push(ParseFailure {
                    row: index + 1,
                    raw: record.bearing.clone(),
                    reason,
                });
                continue;
            }
        };
        let distance_m = units.to_meters(record.distance);
        let end = cursor.displaced_by(azimuth, distance_m);
        segments.push(ResolvedSegment {
            segment_type: record.segment_type,
            start: cursor,
            end,
            distance_m,
            azimuth_deg: azimuth,
            source_index: index,
        });
        cursor = end;
    }

    if segments.is_empty() {
        return Err(Error::from(SurveyError::InsufficientGeometry {
            usable: 0,
            total: records.len(),
        }));
    }

    let first_start = segments[0].start;
    let last_end = segments[segments.len() - 1].end;
    let is_closed = first_start.coincides_with(&last_end, CLOSURE_TOLERANCE_M);
    let closing_edge = if !is_closed && segments.len() > 1 {
        Some((last_end, first_start))
    } else {
        None
    };

    Ok(BoundaryPath {
        segments,
        is_closed,
        closing_edge,
        parse_failures,
    })
}
