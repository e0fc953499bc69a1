//! Rectangular lot presets.
//!
//! The deep-lot table: named width x depth rectangles common in estate
//! releases. A preset expands into the clockwise four-record boundary
//! (side, rear, side, frontage) that seeds the traversal table.

use crate::traversal::{BoundaryRecord, SegmentType};
use serde::{Deserialize, Serialize};

/// A named rectangular lot (width across the frontage, depth to the rear).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LotPreset {
    /// Catalog name (e.g. "32m x 10m").
    pub name: String,
    /// Frontage width in meters.
    pub width_m: f64,
    /// Lot depth in meters.
    pub depth_m: f64,
}

impl LotPreset {
    /// Create a new lot preset.
    pub fn new(name: impl Into<String>, width_m: f64, depth_m: f64) -> Self {
        Self {
            name: name.into(),
            width_m,
            depth_m,
        }
    }

    /// Expand into the clockwise boundary table this lot represents:
    /// side (depth, 270), rear (width, 0), side (depth, 90), frontage
    /// (width, 180).
    pub fn boundary_records(&self) -> Vec<BoundaryRecord> {
        vec![
            BoundaryRecord::new(SegmentType::Side, self.depth_m, "270"),
            BoundaryRecord::new(SegmentType::Rear, self.width_m, "0"),
            BoundaryRecord::new(SegmentType::Side, self.depth_m, "90"),
            BoundaryRecord::new(SegmentType::Frontage, self.width_m, "180"),
        ]
    }
}

/// The built-in deep-lot catalog.
pub fn lot_catalog() -> Vec<LotPreset> {
    vec![
        // 32 deep lots
        LotPreset::new("32m x 10m", 10.0, 32.0),
        LotPreset::new("32m x 12.5m", 12.5, 32.0),
        LotPreset::new("32m x 14.0m", 14.0, 32.0),
        LotPreset::new("32m x 14.5m", 14.5, 32.0),
        LotPreset::new("32m x 16.0m", 16.0, 32.0),
        LotPreset::new("32m x 18.0m", 18.0, 32.0),
        // 30 deep lots
        LotPreset::new("30m x 10m", 10.0, 30.0),
        LotPreset::new("30m x 12.5m", 12.5, 30.0),
        LotPreset::new("30m x 14.0m", 14.0, 30.0),
        LotPreset::new("30m x 14.5m", 14.5, 30.0),
        LotPreset::new("30m x 16.0m", 16.0, 30.0),
        LotPreset::new("30m x 18.0m", 18.0, 30.0),
        // 28 deep lots
        LotPreset::new("28m x 4.6m", 4.6, 28.0),
        LotPreset::new("28m x 6.6m", 6.6, 28.0),
        LotPreset::new("28m x 7.6m", 7.6, 28.0),
        LotPreset::new("28m x 7.5m", 7.5, 28.0),
        LotPreset::new("28m x 9.0m", 9.0, 28.0),
        LotPreset::new("28m x 10.0m", 10.0, 28.0),
        LotPreset::new("28m x 12.5m", 12.5, 28.0),
        LotPreset::new("28m x 14.0m", 14.0, 28.0),
        LotPreset::new("28m x 16.0m", 16.0, 28.0),
        LotPreset::new("28m x 18.0m", 18.0, 28.0),
        // 25 deep lots
        LotPreset::new("25m x 4.6m", 4.6, 25.0),
        LotPreset::new("25m x 6.6m", 6.6, 25.0),
        LotPreset::new("25m x 7.6m", 7.6, 25.0),
        LotPreset::new("25m x 7.5m", 7.5, 25.0),
        LotPreset::new("25m x 9.0m", 9.0, 25.0),
        LotPreset::new("25m x 10.0m", 10.0, 25.0),
        LotPreset::new("25m x 12.5m", 12.5, 25.0),
        LotPreset::new("25m x 14.0m", 14.0, 25.0),
        LotPreset::new("25m x 16.0m", 16.0, 25.0),
        LotPreset::new("25m x 18.0m", 18.0, 25.0),
        // 21 deep lots
        LotPreset::new("21m x 7.5m", 7.5, 21.0),
        LotPreset::new("21m x 9.0m", 9.0, 21.0),
    ]
}

/// Look up a lot preset by its catalog name.
pub fn lot_by_name(name: &str) -> Option<LotPreset> {
    lot_catalog().into_iter().find(|preset| preset.name == name)
}
