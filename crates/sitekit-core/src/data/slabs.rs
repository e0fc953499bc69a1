//! Slab thickness presets.
//!
//! Fixed catalog of slab systems used to derive the finished floor level
//! from a bench RL. Thicknesses are overall slab heights in meters.

use serde::{Deserialize, Serialize};

/// A named slab system and its overall thickness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlabPreset {
    /// Catalog name (e.g. "S8/WM8").
    pub name: String,
    /// Overall slab thickness in meters.
    pub thickness_m: f64,
}

impl SlabPreset {
    /// Create a new slab preset.
    pub fn new(name: impl Into<String>, thickness_m: f64) -> Self {
        Self {
            name: name.into(),
            thickness_m,
        }
    }

    /// Thickness in millimetres, for display.
    pub fn thickness_mm(&self) -> f64 {
        self.thickness_m * 1000.0
    }
}

/// The built-in slab catalog.
pub fn slab_catalog() -> Vec<SlabPreset> {
    vec![
        SlabPreset::new("S8/WM8", 0.310),
        SlabPreset::new("S9/WM9", 0.325),
        SlabPreset::new("WH18", 0.385),
        SlabPreset::new("WH19", 0.400),
        SlabPreset::new("WH2-8/9", 0.400),
        SlabPreset::new("E", 0.475),
        SlabPreset::new("460mm", 0.460),
    ]
}

/// Resolve a UI label like "S9/WM9 (325mm)" to its catalog entry.
///
/// Matches the first catalog preset whose name is contained in the label.
pub fn slab_by_label(label: &str) -> Option<SlabPreset> {
    let preset = slab_catalog()
        .into_iter()
        .find(|preset| label.contains(&preset.name));
    if preset.is_none() {
        tracing::warn!("No slab preset matches label '{}'", label);
    }
    preset
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_shape() {
        let catalog = slab_catalog();
        assert_eq!(catalog.len(), 7);
        for preset in &catalog {
            assert!(preset.thickness_m >= 0.310 && preset.thickness_m <= 0.475);
        }
    }

    #[test]
    fn test_label_matching() {
        let preset = slab_by_label("S9/WM9 (325mm)").unwrap();
        assert_eq!(preset.name, "S9/WM9");
        assert_eq!(preset.thickness_m, 0.325);

        assert!(slab_by_label("unknown slab").is_none());
    }

    #[test]
    fn test_thickness_mm() {
        let preset = SlabPreset::new("WH18", 0.385);
        assert_eq!(preset.thickness_mm(), 385.0);
    }
}
