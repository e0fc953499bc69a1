//! Site compatibility rule engine.
//!
//! Evaluates road and neighbour RLs against a completed level calculation
//! through an ordered set of threshold rules. Warning order is a contract:
//! stormwater, driveway profile, high-side neighbour, low-side neighbour.
//!
//! The stormwater rule compares both roads strictly above FFL while the
//! driveway rule uses an inclusive 0.6 m band; the operator asymmetry is
//! kept as-is (regulatory nuance, not unified).

use crate::calculator::SiteLevels;
use serde::{Deserialize, Serialize};
use sitekit_core::round_to_mm;
use std::fmt;

/// Inclusive band around FFL within which a driveway profile is required.
pub const DRIVEWAY_PROFILE_BAND_M: f64 = 0.6;
/// Neighbour difference up to which retaining under the fence suffices.
pub const RETAIN_UNDER_FENCE_MAX_M: f64 = 0.4;
/// Neighbour difference beyond which a tight site forces CMA retaining.
pub const TIGHT_SITE_CMA_M: f64 = 0.6;

/// Status line reported when no rule fires.
pub const NO_REQUIREMENTS_STATUS: &str = "No special site requirements detected.";

/// Road and neighbour readings for the compatibility check.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SiteCheckInputs {
    /// RL of the road at its high point.
    pub road_high_rl: f64,
    /// RL of the road at its low point.
    pub road_low_rl: f64,
    /// First neighbour's bench RL.
    pub neighbour1_rl: f64,
    /// Dwelling sits on the boundary shared with neighbour 1.
    pub zero_boundary1: bool,
    /// Second neighbour's bench RL.
    pub neighbour2_rl: f64,
    /// Dwelling sits on the boundary shared with neighbour 2.
    pub zero_boundary2: bool,
}

/// Which rule produced a warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningKind {
    /// Both road RLs above FFL.
    Stormwater,
    /// A road RL within the driveway band of FFL.
    DrivewayProfile,
    /// High-side neighbour retaining advisory.
    HighSideRetaining,
    /// Low-side neighbour retaining advisory.
    LowSideRetaining,
}

/// One advisory produced by the rule engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteWarning {
    /// The rule that fired.
    pub kind: WarningKind,
    /// Advisory text.
    pub message: String,
}

impl fmt::Display for SiteWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Evaluate the compatibility rules against a completed calculation.
///
/// Returns warnings in contract order; an empty result means no rule fired
/// (callers render [`NO_REQUIREMENTS_STATUS`] instead of an empty list).
pub fn check_site_compatibility(
    levels: &SiteLevels,
    inputs: &SiteCheckInputs,
) -> Vec<SiteWarning> {
    let bench_rl = levels.bench_rl;
    let ffl_rl = levels.ffl_rl;

    let road_high = round_to_mm(inputs.road_high_rl);
    let road_low = round_to_mm(inputs.road_low_rl);
    let neigh1 = round_to_mm(inputs.neighbour1_rl);
    let neigh2 = round_to_mm(inputs.neighbour2_rl);

    // Sort the neighbours by value; on a tie the first operand wins.
    let (neigh_high, zero_high, neigh_low, zero_low) = if neigh1 >= neigh2 {
        (neigh1, inputs.zero_boundary1, neigh2, inputs.zero_boundary2)
    } else {
        (neigh2, inputs.zero_boundary2, neigh1, inputs.zero_boundary1)
    };
    let diff_high = (neigh_high - bench_rl).abs();
    let diff_low = (neigh_low - bench_rl).abs();

    let mut warnings = Vec::new();

    if road_high > ffl_rl && road_low > ffl_rl {
        warnings.push(SiteWarning {
            kind: WarningKind::Stormwater,
            message: "Both road high and low RLs are higher than FFL RL. Special stormwater \
                      requirements may be required (e.g., Strip Wastes, Charged Lines, Rubble \
                      Pits, Sump Pits)."
                .to_string(),
        });
    }

    if (road_high - ffl_rl).abs() <= DRIVEWAY_PROFILE_BAND_M
        || (road_low - ffl_rl).abs() <= DRIVEWAY_PROFILE_BAND_M
    {
        warnings.push(SiteWarning {
            kind: WarningKind::DrivewayProfile,
            message: "Driveway is within \u{b1}600mm of FFL RL. A driveway profile needs to be \
                      provided."
                .to_string(),
        });
    }

    if let Some(message) = neighbour_advisory("Higher", "high", diff_high, zero_high) {
        warnings.push(SiteWarning {
            kind: WarningKind::HighSideRetaining,
            message,
        });
    }
    if let Some(message) = neighbour_advisory("Lower", "low", diff_low, zero_low) {
        warnings.push(SiteWarning {
            kind: WarningKind::LowSideRetaining,
            message,
        });
    }

    if warnings.is_empty() {
        tracing::debug!("Site checks passed with no special requirements");
    }
    warnings
}

/// Retaining advisory for one neighbour side. A difference of exactly zero
/// produces nothing.
fn neighbour_advisory(side: &str, side_word: &str, diff: f64, zero_boundary: bool) -> Option<String> {
    if diff > 0.0 && diff <= RETAIN_UNDER_FENCE_MAX_M {
        let mut msg = format!(
            "{} neighbour bench height is 0-400mm different. Recommend retaining under fence \
             by owner after handover.",
            side
        );
        if zero_boundary {
            msg.push_str(
                " Dwelling is on zero boundary: additional garage treatments required \
                 (piering, drop edge beams, concrete retaining, drainage).",
            );
        }
        return Some(msg);
    }
    if diff > RETAIN_UNDER_FENCE_MAX_M {
        let mut msg = format!(
            "{} neighbour bench height is >400mm different. Recommend concrete retaining by \
             CMA during build.",
            side
        );
        if diff > TIGHT_SITE_CMA_M {
            msg.push_str(" On a tight site, CMA is required to do concrete retaining.");
            if zero_boundary {
                msg.push_str(&format!(
                    " Where garage is on zero {} side, block-up will be required.",
                    side_word
                ));
            }
        }
        return Some(msg);
    }
    None
}

/// Render the final check output: the warnings in order, or the single
/// no-requirements status when none fired.
pub fn render_check_lines(warnings: &[SiteWarning]) -> Vec<String> {
    if warnings.is_empty() {
        return vec![NO_REQUIREMENTS_STATUS.to_string()];
    }
    warnings
        .iter()
        .map(|warning| format!("- {}", warning.message))
        .collect()
}
