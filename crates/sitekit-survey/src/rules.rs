//! Setback rule resolution.
//!
//! Maps a boundary segment type and a scheme's setback table to the offset
//! lines that segment carries. Sign convention is an invariant: setbacks are
//! applied as negative absolute values (interior, shrinking the building
//! envelope) and road lines are always positive (exterior, toward the
//! street), regardless of the sign stored in the table.

use crate::traversal::SegmentType;
use serde::{Deserialize, Serialize};
use sitekit_core::SetbackDistances;

/// Outward offset from frontage and secondary boundaries to the road line,
/// in meters.
pub const ROAD_LINE_OFFSET_M: f64 = 4.25;

/// What an offset line represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OffsetKind {
    /// Regulatory setback, interior-facing.
    Setback,
    /// Road line, exterior-facing.
    RoadLine,
}

/// One resolved offset: a signed distance plus its drawing label.
#[derive(Debug, Clone, PartialEq)]
pub struct OffsetSpec {
    /// Signed offset along the segment's left normal; negative is interior.
    pub distance_m: f64,
    /// Setback or road line.
    pub kind: OffsetKind,
    /// Label used in result logs ("Front Min", "Road", ...).
    pub label: &'static str,
}

impl OffsetSpec {
    fn setback(distance: f64, label: &'static str) -> Self {
        Self {
            distance_m: -distance.abs(),
            kind: OffsetKind::Setback,
            label,
        }
    }

    fn road_line() -> Self {
        Self {
            distance_m: ROAD_LINE_OFFSET_M,
            kind: OffsetKind::RoadLine,
            label: "Road",
        }
    }
}

/// Resolve the offsets a segment of the given type carries.
///
/// Frontage boundaries carry three separate setback lines (minimum,
/// habitable, garage, in that order) plus the road line; secondary
/// frontages carry their single setback plus the road line; side and rear
/// boundaries carry only their like-named setback.
pub fn resolve_offsets(segment_type: SegmentType, setbacks: &SetbackDistances) -> Vec<OffsetSpec> {
    match segment_type {
        SegmentType::Frontage => vec![
            OffsetSpec::setback(setbacks.front_min, "Front Min"),
            OffsetSpec::setback(setbacks.front_hab, "Front Habitable"),
            OffsetSpec::setback(setbacks.garage, "Garage"),
            OffsetSpec::road_line(),
        ],
        SegmentType::Secondary => vec![
            OffsetSpec::setback(setbacks.secondary, "Secondary"),
            OffsetSpec::road_line(),
        ],
        SegmentType::Side => vec![OffsetSpec::setback(setbacks.side, "Side")],
        SegmentType::Rear => vec![OffsetSpec::setback(setbacks.rear, "Rear")],
    }
}
