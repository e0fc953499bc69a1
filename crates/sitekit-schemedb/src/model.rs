//! Planning scheme model types.

use serde::{Deserialize, Serialize};
use sitekit_core::SetbackDistances;

/// A reference document attached to a planning scheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeDocument {
    /// Display label, including the document type ("PLAN — Dwelling Code").
    pub label: String,
    /// Link target.
    pub url: String,
    /// Optional one-line description; empty when the source had none.
    pub description: String,
}

impl SchemeDocument {
    /// Create a new document reference.
    pub fn new(
        label: impl Into<String>,
        url: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
            description: description.into(),
        }
    }
}

/// A planning scheme known to the database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlanningScheme {
    /// Built-in preset carrying numeric setback distances.
    NumericPreset {
        /// Preset name ("QDC MP1.1").
        name: String,
        /// The scheme's setback table.
        setbacks: SetbackDistances,
    },
    /// Council scheme sourced from the document reference. No numeric
    /// setbacks; offsets resolve to zero.
    DocumentOnly {
        /// Council section heading from the reference document.
        name: String,
    },
}

impl PlanningScheme {
    /// The scheme's display name.
    pub fn name(&self) -> &str {
        match self {
            Self::NumericPreset { name, .. } => name,
            Self::DocumentOnly { name } => name,
        }
    }

    /// Whether this scheme carries numeric setbacks.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::NumericPreset { .. })
    }

    /// The scheme's setback table; all-zero for document-only schemes.
    pub fn setbacks(&self) -> SetbackDistances {
        match self {
            Self::NumericPreset { setbacks, .. } => *setbacks,
            Self::DocumentOnly { .. } => SetbackDistances::zeroed(),
        }
    }
}

/// The two built-in QDC presets.
pub fn builtin_presets() -> Vec<PlanningScheme> {
    vec![
        PlanningScheme::NumericPreset {
            name: "QDC MP1.1".to_string(),
            setbacks: SetbackDistances {
                front: 6.0,
                side: 1.5,
                rear: 3.0,
                secondary: 2.0,
                front_min: 3.0,
                front_hab: 3.45,
                garage: 3.0,
            },
        },
        PlanningScheme::NumericPreset {
            name: "QDC MP1.2".to_string(),
            setbacks: SetbackDistances {
                front: 6.0,
                side: 1.5,
                rear: 3.0,
                secondary: 2.0,
                front_min: 3.0,
                front_hab: 3.45,
                garage: 6.0,
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_presets() {
        let presets = builtin_presets();
        assert_eq!(presets.len(), 2);
        assert!(presets.iter().all(|scheme| scheme.is_numeric()));

        assert_eq!(presets[0].name(), "QDC MP1.1");
        assert_eq!(presets[0].setbacks().garage, 3.0);
        // MP1.2 pushes the garage back to the full front setback.
        assert_eq!(presets[1].setbacks().garage, 6.0);
        assert_eq!(presets[1].setbacks().front_hab, 3.45);
    }

    #[test]
    fn test_document_only_resolves_zero_setbacks() {
        let scheme = PlanningScheme::DocumentOnly {
            name: "Brisbane City Council (BCC)".to_string(),
        };
        assert!(!scheme.is_numeric());
        assert_eq!(scheme.setbacks(), SetbackDistances::zeroed());
    }
}
