//! Integration tests for the bench/site-check workflow

use sitekit_core::slab_by_label;
use sitekit_levels::{BenchSession, SiteCheckInputs, NO_REQUIREMENTS_STATUS};

#[test]
fn test_full_bench_workflow() {
    let slab = slab_by_label("S8/WM8 (310mm)").unwrap();
    let mut session = BenchSession::new();

    let levels = session
        .calculate("10.0 + 10.2, 10.4", &slab, 10.6)
        .unwrap();
    assert_eq!(levels.bench_rl, 10.200);
    assert_eq!(levels.ffl_rl, 10.510);
    assert_eq!(levels.fill_to_min_ffl, 0.090);

    let report = levels.report();
    assert!(report.contains("==== SITE CUT/FILL ===="));
    assert!(report.contains("Minimum FFL RL (Flood):     10.600 m"));

    // Both roads above FFL and the low road inside the driveway band, plus
    // a high-side neighbour needing retaining: three advisories, in order.
    let inputs = SiteCheckInputs {
        road_high_rl: 11.2,
        road_low_rl: 11.0,
        neighbour1_rl: 10.2,
        zero_boundary1: false,
        neighbour2_rl: 10.5,
        zero_boundary2: false,
    };
    let lines = session.site_checks(&inputs).unwrap();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("stormwater"));
    assert!(lines[1].contains("driveway profile"));
    assert!(lines[2].contains("retaining under fence"));
}

#[test]
fn test_quiet_site_reports_status_line() {
    let slab = slab_by_label("WH18 (385mm)").unwrap();
    let mut session = BenchSession::new();
    session.calculate("25.1+25.1+25.1", &slab, 0.0).unwrap();

    let inputs = SiteCheckInputs {
        road_high_rl: 24.0,
        road_low_rl: 23.5,
        neighbour1_rl: 25.1,
        neighbour2_rl: 25.1,
        ..Default::default()
    };
    let lines = session.site_checks(&inputs).unwrap();
    assert_eq!(lines, vec![NO_REQUIREMENTS_STATUS.to_string()]);
}

#[test]
fn test_checks_refused_until_calculation_succeeds() {
    let slab = slab_by_label("S8/WM8 (310mm)").unwrap();
    let mut session = BenchSession::new();

    assert!(session
        .site_checks(&SiteCheckInputs::default())
        .unwrap_err()
        .is_prerequisite_missing());

    assert!(session.calculate("ten", &slab, 0.0).is_err());
    assert!(session
        .site_checks(&SiteCheckInputs::default())
        .unwrap_err()
        .is_prerequisite_missing());

    session.calculate("10.0", &slab, 0.0).unwrap();
    assert!(session.site_checks(&SiteCheckInputs::default()).is_ok());
}
