//! # SiteKit
//!
//! Residential lot planning automation for CAD hosts:
//! - Boundary traversal from surveyed bearing/distance records
//! - Regulatory setback and road-offset line derivation
//! - Bench RL / FFL / cut-fill calculation with site-compatibility checks
//!
//! ## Architecture
//!
//! SiteKit is organized as a workspace with multiple crates:
//!
//! 1. **sitekit-core** - Geometry, units, data catalogs, error taxonomy
//! 2. **sitekit-survey** - Traversal builder and setback-offset engine
//! 3. **sitekit-schemedb** - Planning scheme presets and document references
//! 4. **sitekit-levels** - Bench/FFL calculator and compatibility rules
//! 5. **sitekit-cadlink** - CAD host commands and drawing orchestration
//!
//! The form-based front end and the CAD host itself live outside this
//! workspace; the crates here are the engine it drives.

pub use sitekit_cadlink as cadlink;
pub use sitekit_levels as levels;
pub use sitekit_schemedb as schemedb;
pub use sitekit_survey as survey;

pub use sitekit_core::{
    format_level, left_normal, round_to_mm, slab_by_label, slab_catalog, CadError, Error,
    LevelsError, LinearUnit, Point2, Result, SetbackDistances, SlabPreset, SurveyError,
    METERS_PER_CHAIN,
};

pub use sitekit_survey::{
    build_traversal, generate_offsets, lot_by_name, lot_catalog, normalize_azimuth, parse_azimuth,
    resolve_offsets, BearingError, BoundaryPath, BoundaryRecord, LotPreset, OffsetKind,
    OffsetLine, OffsetRun, OffsetSpec, ParseFailure, ResolvedSegment, SegmentType,
    SkippedSegment, CLOSURE_TOLERANCE_M, ROAD_LINE_OFFSET_M,
};

pub use sitekit_schemedb::{builtin_presets, PlanningScheme, SchemeDatabase, SchemeDocument};

pub use sitekit_levels::{
    check_site_compatibility, compute_site_levels, parse_rl_input, render_check_lines,
    BenchSession, SiteCheckInputs, SiteLevels, SiteWarning, WarningKind,
    NO_REQUIREMENTS_STATUS,
};

pub use sitekit_cadlink::{
    draw_boundary_plan, CadHost, CommandAck, Coordinate, DrawReport, NoOpCadHost, PolylineData,
    RecordingCadHost,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
