//! Linear unit handling.
//!
//! Boundary distances are entered either in meters or in legacy chain links
//! (1 chain = 20.1168 m). Conversion is applied uniformly to every record of
//! a traversal run. Reduced levels follow a millimetre rounding policy:
//! every value is rounded to 3 decimal places at each derivation step, not
//! only at display time, so identical inputs reproduce identical outputs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Meters per chain, the legacy survey unit.
pub const METERS_PER_CHAIN: f64 = 20.1168;

/// Unit a boundary distance was entered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinearUnit {
    /// Meters, the native unit of the site plane.
    Meters,
    /// Chain links (1 chain = 20.1168 m).
    ChainLinks,
}

impl Default for LinearUnit {
    fn default() -> Self {
        Self::Meters
    }
}

impl fmt::Display for LinearUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Meters => write!(f, "m"),
            Self::ChainLinks => write!(f, "chains"),
        }
    }
}

impl FromStr for LinearUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "m" | "meter" | "meters" | "metres" => Ok(Self::Meters),
            "chain" | "chains" | "chain_links" | "links" => Ok(Self::ChainLinks),
            _ => Err(format!("Unknown linear unit: {}", s)),
        }
    }
}

impl LinearUnit {
    /// Converts a distance entered in this unit to meters.
    pub fn to_meters(&self, value: f64) -> f64 {
        match self {
            Self::Meters => value,
            Self::ChainLinks => value * METERS_PER_CHAIN,
        }
    }
}

/// Rounds a level or distance to 3 decimal places (millimetres).
pub fn round_to_mm(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Format a level value for display, always 3 decimal places.
pub fn format_level(value_m: f64) -> String {
    format!("{:.3}", value_m)
}
