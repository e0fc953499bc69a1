//! # SiteKit Scheme Database
//!
//! Planning-scheme lookups: the built-in numeric setback presets (QDC MP1.1
//! and MP1.2) and the council schemes sourced from the embedded document
//! reference. Both kinds resolve through one [`PlanningScheme`] type, so
//! callers never branch on which table a name came from. Council schemes
//! carry no numeric setbacks (everything resolves to zero); they exist for
//! the read-only document-link panel.

pub mod database;
pub mod markdown;
pub mod model;

pub use database::SchemeDatabase;
pub use markdown::{parse_scheme_markdown, SCHEME_REFERENCE_MD};
pub use model::{builtin_presets, PlanningScheme, SchemeDocument};
