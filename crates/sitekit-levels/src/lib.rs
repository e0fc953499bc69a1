//! # SiteKit Levels
//!
//! The site-level calculation engine and the site-compatibility checker:
//! - Reduced-level input parsing (`+`/`,` separated, millimetre rounding)
//! - Bench RL, FFL, cut/fill extremes, and fixed external-area levels
//! - The ordered rule engine producing road and neighbour advisories
//! - A two-step session that gates site checks on a completed calculation
//!
//! Every derived value is rounded to 3 decimal places at each step, so a
//! recalculation with identical inputs reproduces identical output.

pub mod calculator;
pub mod compat;
pub mod session;

pub use calculator::{
    compute_site_levels, parse_rl_input, SiteLevels, EXT_DECK_DROP_M, EXT_TILE_DROP_M,
    SERVICE_PAD_DROP_M,
};
pub use compat::{
    check_site_compatibility, render_check_lines, SiteCheckInputs, SiteWarning, WarningKind,
    DRIVEWAY_PROFILE_BAND_M, NO_REQUIREMENTS_STATUS, RETAIN_UNDER_FENCE_MAX_M, TIGHT_SITE_CMA_M,
};
pub use session::BenchSession;
