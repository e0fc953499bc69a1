//! Setback distance tables.
//!
//! One table per planning scheme. All distances are non-negative meters;
//! the rule resolver decides signs when turning them into offsets.

use serde::{Deserialize, Serialize};

/// Setback distances prescribed by one planning scheme.
///
/// Schemes without numeric setbacks (document-only council schemes) use the
/// all-zero default; missing values always resolve to 0.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SetbackDistances {
    /// Primary frontage setback.
    pub front: f64,
    /// Side boundary setback.
    pub side: f64,
    /// Rear boundary setback.
    pub rear: f64,
    /// Secondary street frontage setback.
    pub secondary: f64,
    /// Minimum front setback (outermost wall line).
    pub front_min: f64,
    /// Front setback to habitable rooms.
    pub front_hab: f64,
    /// Garage setback.
    pub garage: f64,
}

impl SetbackDistances {
    /// An all-zero table, used for document-only schemes.
    pub fn zeroed() -> Self {
        Self::default()
    }
}
