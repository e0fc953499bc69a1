//! Site level calculation.
//!
//! Reduces a set of surveyed RLs to a bench RL (arithmetic mean) and
//! derives the finished floor level, cut/fill extremes, flood-floor fill,
//! and the fixed external-area levels from a slab preset. All values are
//! rounded to millimetres at each step.

use serde::{Deserialize, Serialize};
use sitekit_core::{format_level, round_to_mm, LevelsError, Result, SlabPreset};

/// Drop from bench RL to external tiled areas, in meters.
pub const EXT_TILE_DROP_M: f64 = 0.07;
/// Drop from bench RL to external decked areas, in meters.
pub const EXT_DECK_DROP_M: f64 = 0.09;
/// Drop from FFL to the service pad, in meters.
pub const SERVICE_PAD_DROP_M: f64 = 0.12;

/// Parse a reduced-level input string.
///
/// Values are separated by `+` or `,`; spaces are ignored and each value is
/// rounded to millimetres on entry. Any non-numeric value rejects the whole
/// input (`NoValidLevels`), as does an empty one.
pub fn parse_rl_input(input: &str) -> Result<Vec<f64>> {
    let cleaned = input.replace(' ', "");
    let mut rls = Vec::new();
    for token in cleaned.split(['+', ',']) {
        if token.is_empty() {
            continue;
        }
        match token.parse::<f64>() {
            Ok(value) => rls.push(round_to_mm(value)),
            Err(_) => {
                return Err(LevelsError::NoValidLevels {
                    reason: format!("'{}' is not a number", token),
                }
                .into())
            }
        }
    }
    if rls.is_empty() {
        return Err(LevelsError::NoValidLevels {
            reason: "no reduced levels supplied".to_string(),
        }
        .into());
    }
    Ok(rls)
}

/// The derived site levels. Produced by [`compute_site_levels`]; never
/// constructed piecemeal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteLevels {
    /// Input RLs, rounded and sorted ascending.
    pub inputs: Vec<f64>,
    /// Arithmetic mean of the inputs: the nominal pad level.
    pub bench_rl: f64,
    /// Highest input RL.
    pub highest_rl: f64,
    /// Lowest input RL.
    pub lowest_rl: f64,
    /// Highest RL minus bench: the deepest cut.
    pub cut_max: f64,
    /// Lowest RL minus bench: the deepest fill (negative).
    pub fill_max: f64,
    /// Slab preset used to derive the FFL.
    pub slab: SlabPreset,
    /// Bench RL plus slab thickness: top of slab.
    pub ffl_rl: f64,
    /// External flood-height floor supplied by the caller.
    pub min_ffl_rl: f64,
    /// Fill required to lift the FFL to the flood floor, never negative.
    pub fill_to_min_ffl: f64,
    /// External tiled area level.
    pub ext_tile_rl: f64,
    /// External decked area level.
    pub ext_deck_rl: f64,
    /// Service pad level.
    pub service_pad_rl: f64,
}

/// Reduce a set of RLs against a slab preset.
///
/// Pure and idempotent: the same inputs always produce bit-identical
/// output. Fails with `NoValidLevels` when the set is empty or contains a
/// non-finite value.
pub fn compute_site_levels(
    rls: &[f64],
    slab: &SlabPreset,
    min_ffl_rl: f64,
) -> Result<SiteLevels> {
    if rls.is_empty() {
        return Err(LevelsError::NoValidLevels {
            reason: "no reduced levels supplied".to_string(),
        }
        .into());
    }
    if rls.iter().any(|rl| !rl.is_finite()) {
        return Err(LevelsError::NoValidLevels {
            reason: "reduced levels must be finite".to_string(),
        }
        .into());
    }

    let mut inputs: Vec<f64> = rls.iter().copied().map(round_to_mm).collect();
    inputs.sort_by(f64::total_cmp);

    let bench_rl = round_to_mm(inputs.iter().sum::<f64>() / inputs.len() as f64);
    let highest_rl = inputs[inputs.len() - 1];
    let lowest_rl = inputs[0];
    let cut_max = round_to_mm(highest_rl - bench_rl);
    let fill_max = round_to_mm(lowest_rl - bench_rl);

    let ffl_rl = round_to_mm(bench_rl + slab.thickness_m);
    let min_ffl_rl = round_to_mm(min_ffl_rl);
    let fill_to_min_ffl = round_to_mm((min_ffl_rl - ffl_rl).max(0.0));

    let ext_tile_rl = round_to_mm(bench_rl - EXT_TILE_DROP_M);
    let ext_deck_rl = round_to_mm(bench_rl - EXT_DECK_DROP_M);
    let service_pad_rl = round_to_mm(ffl_rl - SERVICE_PAD_DROP_M);

    tracing::debug!(
        "Site levels: bench {} FFL {} ({})",
        format_level(bench_rl),
        format_level(ffl_rl),
        slab.name
    );

    Ok(SiteLevels {
        inputs,
        bench_rl,
        highest_rl,
        lowest_rl,
        cut_max,
        fill_max,
        slab: slab.clone(),
        ffl_rl,
        min_ffl_rl,
        fill_to_min_ffl,
        ext_tile_rl,
        ext_deck_rl,
        service_pad_rl,
    })
}

impl SiteLevels {
    /// Render the formatted results report shown in the results pane.
    pub fn report(&self) -> String {
        let mut out = String::new();
        out.push_str("==== INPUT RLs ====\n");
        let rendered: Vec<String> = self.inputs.iter().map(|rl| format_level(*rl)).collect();
        out.push_str(&format!("  {}\n\n", rendered.join(", ")));

        out.push_str("==== CALCULATED LEVELS ====\n");
        out.push_str(&format!(
            "  Average RL (Bench RL):      {} m\n",
            format_level(self.bench_rl)
        ));
        out.push_str(&format!(
            "  FFL RL (Top of Slab):       {} m\n",
            format_level(self.ffl_rl)
        ));
        out.push_str(&format!(
            "  Slab Thickness:             {} ({:.0} mm)\n",
            self.slab.name,
            self.slab.thickness_mm()
        ));
        if self.min_ffl_rl > 0.0 {
            out.push_str(&format!(
                "  Minimum FFL RL (Flood):     {} m\n",
                format_level(self.min_ffl_rl)
            ));
        }
        out.push_str(&format!(
            "  Fill needed to min FFL RL:  {} m\n\n",
            format_level(self.fill_to_min_ffl)
        ));

        out.push_str("==== SITE CUT/FILL ====\n");
        out.push_str(&format!(
            "  CUT MAX (Highest RL - Bench): {:+.3} m\n",
            self.cut_max
        ));
        out.push_str(&format!(
            "  FILL MAX (Lowest RL - Bench): {:+.3} m\n\n",
            self.fill_max
        ));

        out.push_str("==== EXTERNAL LEVELS ====\n");
        out.push_str(&format!(
            "  External Area RL (Tile):    {} m\n",
            format_level(self.ext_tile_rl)
        ));
        out.push_str(&format!(
            "  External Area RL (Deck):    {} m\n",
            format_level(self.ext_deck_rl)
        ));
        out.push_str(&format!(
            "  Service Pad RL:             {} m\n",
            format_level(self.service_pad_rl)
        ));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitekit_core::slab_by_label;

    fn s8_slab() -> SlabPreset {
        SlabPreset::new("S8/WM8", 0.310)
    }

    #[test]
    fn test_parse_plus_and_comma_separated() {
        let rls = parse_rl_input("10.0 + 10.2, 10.4").unwrap();
        assert_eq!(rls, vec![10.0, 10.2, 10.4]);
    }

    #[test]
    fn test_parse_rounds_on_entry() {
        let rls = parse_rl_input("10.5126").unwrap();
        assert_eq!(rls, vec![10.513]);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = parse_rl_input("10.0+abc").unwrap_err();
        assert!(err.is_no_valid_levels());

        let err = parse_rl_input("").unwrap_err();
        assert!(err.is_no_valid_levels());

        let err = parse_rl_input("+,+").unwrap_err();
        assert!(err.is_no_valid_levels());
    }

    #[test]
    fn test_worked_example() {
        let levels = compute_site_levels(&[10.0, 10.2, 10.4], &s8_slab(), 0.0).unwrap();
        assert_eq!(levels.bench_rl, 10.200);
        assert_eq!(levels.ffl_rl, 10.510);
        assert_eq!(levels.cut_max, 0.200);
        assert_eq!(levels.fill_max, -0.200);
        assert_eq!(levels.highest_rl, 10.4);
        assert_eq!(levels.lowest_rl, 10.0);
    }

    #[test]
    fn test_external_levels_and_flood_fill() {
        let levels = compute_site_levels(&[10.0, 10.2, 10.4], &s8_slab(), 10.8).unwrap();
        assert_eq!(levels.ext_tile_rl, 10.130);
        assert_eq!(levels.ext_deck_rl, 10.110);
        assert_eq!(levels.service_pad_rl, 10.390);
        // FFL 10.510 sits 0.290 below the flood floor.
        assert_eq!(levels.fill_to_min_ffl, 0.290);
    }

    #[test]
    fn test_flood_fill_never_negative() {
        let levels = compute_site_levels(&[10.0], &s8_slab(), 5.0).unwrap();
        assert_eq!(levels.fill_to_min_ffl, 0.0);
    }

    #[test]
    fn test_empty_input_fails() {
        let err = compute_site_levels(&[], &s8_slab(), 0.0).unwrap_err();
        assert!(err.is_no_valid_levels());
    }

    #[test]
    fn test_non_finite_input_fails() {
        let err = compute_site_levels(&[10.0, f64::NAN], &s8_slab(), 0.0).unwrap_err();
        assert!(err.is_no_valid_levels());
    }

    #[test]
    fn test_inputs_sorted_in_output() {
        let levels = compute_site_levels(&[10.4, 10.0, 10.2], &s8_slab(), 0.0).unwrap();
        assert_eq!(levels.inputs, vec![10.0, 10.2, 10.4]);
    }

    #[test]
    fn test_report_sections() {
        let slab = slab_by_label("S9/WM9 (325mm)").unwrap();
        let levels = compute_site_levels(&[10.0, 10.2, 10.4], &slab, 10.8).unwrap();
        let report = levels.report();
        assert!(report.contains("==== INPUT RLs ===="));
        assert!(report.contains("Average RL (Bench RL):      10.200 m"));
        assert!(report.contains("FFL RL (Top of Slab):       10.525 m"));
        assert!(report.contains("S9/WM9 (325 mm)"));
        assert!(report.contains("Minimum FFL RL (Flood):     10.800 m"));
        assert!(report.contains("CUT MAX (Highest RL - Bench): +0.200 m"));
        assert!(report.contains("FILL MAX (Lowest RL - Bench): -0.200 m"));
    }
}
