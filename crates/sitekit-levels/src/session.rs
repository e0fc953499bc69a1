//! Two-step bench workflow.
//!
//! The original tool gates site checks on a completed main calculation; the
//! session models that: `calculate` must succeed before `site_checks` will
//! run, and any failed recalculation invalidates the stored result.

use crate::calculator::{compute_site_levels, parse_rl_input, SiteLevels};
use crate::compat::{check_site_compatibility, render_check_lines, SiteCheckInputs};
use sitekit_core::{LevelsError, Result, SlabPreset};

/// Bench/FFL workflow state: a calculation result, once one has succeeded.
#[derive(Debug, Default)]
pub struct BenchSession {
    levels: Option<SiteLevels>,
}

impl BenchSession {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the RL input and run the main calculation, storing the result
    /// for later site checks. A failure leaves the session with no result.
    pub fn calculate(
        &mut self,
        rl_input: &str,
        slab: &SlabPreset,
        min_ffl_rl: f64,
    ) -> Result<&SiteLevels> {
        self.levels = None;
        let rls = parse_rl_input(rl_input)?;
        let levels = compute_site_levels(&rls, slab, min_ffl_rl)?;
        Ok(self.levels.insert(levels))
    }

    /// The stored calculation, if one has succeeded.
    pub fn levels(&self) -> Option<&SiteLevels> {
        self.levels.as_ref()
    }

    /// Run the site compatibility checks against the stored calculation.
    ///
    /// Fails with `PrerequisiteMissing` when `calculate` has not succeeded.
    pub fn site_checks(&self, inputs: &SiteCheckInputs) -> Result<Vec<String>> {
        let levels = self
            .levels
            .as_ref()
            .ok_or(LevelsError::PrerequisiteMissing)?;
        let warnings = check_site_compatibility(levels, inputs);
        Ok(render_check_lines(&warnings))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compat::NO_REQUIREMENTS_STATUS;

    fn s8_slab() -> SlabPreset {
        SlabPreset::new("S8/WM8", 0.310)
    }

    #[test]
    fn test_checks_before_calculation_fail() {
        let session = BenchSession::new();
        let err = session.site_checks(&SiteCheckInputs::default()).unwrap_err();
        assert!(err.is_prerequisite_missing());
    }

    #[test]
    fn test_calculate_then_check() {
        let mut session = BenchSession::new();
        let levels = session.calculate("10.0+10.2+10.4", &s8_slab(), 0.0).unwrap();
        assert_eq!(levels.ffl_rl, 10.510);

        let inputs = SiteCheckInputs {
            road_high_rl: 8.0,
            road_low_rl: 7.5,
            neighbour1_rl: 10.2,
            neighbour2_rl: 10.2,
            ..Default::default()
        };
        let lines = session.site_checks(&inputs).unwrap();
        assert_eq!(lines, vec![NO_REQUIREMENTS_STATUS.to_string()]);
    }

    #[test]
    fn test_failed_recalculation_clears_state() {
        let mut session = BenchSession::new();
        session.calculate("10.0+10.2", &s8_slab(), 0.0).unwrap();
        assert!(session.levels().is_some());

        assert!(session.calculate("not numbers", &s8_slab(), 0.0).is_err());
        assert!(session.levels().is_none());
        let err = session.site_checks(&SiteCheckInputs::default()).unwrap_err();
        assert!(err.is_prerequisite_missing());
    }
}
