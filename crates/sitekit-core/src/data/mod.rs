//! Built-in data catalogs.
//!
//! This module provides:
//! - Slab thickness presets (waffle pod and raft slab systems)
//! - The setback distance table type shared by the rule resolver and the
//!   planning scheme database

pub mod setbacks;
pub mod slabs;

pub use setbacks::SetbackDistances;
pub use slabs::{slab_by_label, slab_catalog, SlabPreset};
