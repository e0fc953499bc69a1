//! # SiteKit Core
//!
//! Core building blocks shared by the SiteKit workspace:
//! - Flat-plane geometry primitives (points, azimuth displacement, normals)
//! - Linear unit handling (meters, legacy chain links) and level rounding
//! - Built-in data catalogs (slab thickness presets, setback tables)
//! - The layered error taxonomy used across all crates

pub mod data;
pub mod error;
pub mod geometry;
pub mod units;

pub use data::{slab_by_label, slab_catalog, SetbackDistances, SlabPreset};
pub use error::{CadError, Error, LevelsError, Result, SurveyError};
pub use geometry::{left_normal, Point2};
pub use units::{format_level, round_to_mm, LinearUnit, METERS_PER_CHAIN};
