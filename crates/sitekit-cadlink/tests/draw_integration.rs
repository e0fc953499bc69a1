//! Integration tests for the drawing orchestrator

use sitekit_cadlink::{draw_boundary_plan, RecordingCadHost};
use sitekit_core::{LinearUnit, SetbackDistances};
use sitekit_survey::{build_traversal, lot_by_name, BoundaryRecord, SegmentType};

fn qdc_mp11() -> SetbackDistances {
    SetbackDistances {
        front: 6.0,
        side: 1.5,
        rear: 3.0,
        secondary: 2.0,
        front_min: 3.0,
        front_hab: 3.45,
        garage: 3.0,
    }
}

#[test]
fn test_preset_lot_draw_order() {
    let preset = lot_by_name("30m x 12.5m").unwrap();
    let path = build_traversal(&preset.boundary_records(), LinearUnit::Meters).unwrap();
    assert!(path.is_closed);

    let mut host = RecordingCadHost::new();
    let report = draw_boundary_plan(&mut host, &path, &qdc_mp11());
    assert!(!report.had_failures());

    // 4 boundary edges, no closing edge, then 1 + 1 + 1 + 4 offsets.
    assert_eq!(host.calls_issued(), 11);
    assert_eq!(report.polylines_created, 11);

    // Every call is a single two-coordinate polyline.
    for call in &host.polyline_calls {
        assert_eq!(call.len(), 1);
        assert_eq!(call[0].coordinates.len(), 2);
    }

    // Boundary edges go out first, in input order.
    assert_eq!(host.polyline_calls[0][0].coordinates[0].x, 0.0);
    assert_eq!(host.polyline_calls[0][0].coordinates[0].y, 0.0);

    // Frontage offsets close the run in resolver order.
    let frontage_lines: Vec<&String> = report
        .lines
        .iter()
        .filter(|line| line.contains("(segment 4)"))
        .collect();
    assert_eq!(frontage_lines.len(), 5);
    assert!(frontage_lines[0].contains("Front Min setback line"));
    assert!(frontage_lines[1].contains("Front Habitable setback line"));
    assert!(frontage_lines[2].contains("Garage setback line"));
    assert!(frontage_lines[3].contains("Road line at 4.25m outward"));
    assert!(frontage_lines[4].contains("Text label not created"));
}

#[test]
fn test_open_path_draws_closing_edge_between_edges_and_offsets() {
    let records = vec![
        BoundaryRecord::new(SegmentType::Side, 30.0, "270"),
        BoundaryRecord::new(SegmentType::Rear, 12.5, "0"),
        BoundaryRecord::new(SegmentType::Side, 30.0, "90"),
        BoundaryRecord::new(SegmentType::Frontage, 11.5, "180"),
    ];
    let path = build_traversal(&records, LinearUnit::Meters).unwrap();
    assert!(!path.is_closed);

    let mut host = RecordingCadHost::new();
    let report = draw_boundary_plan(&mut host, &path, &qdc_mp11());

    // 4 edges + closing edge + 7 offsets.
    assert_eq!(host.calls_issued(), 12);
    let closing_index = report
        .lines
        .iter()
        .position(|line| line.starts_with("Closing edge created"))
        .unwrap();
    let last_boundary_index = report
        .lines
        .iter()
        .position(|line| line.starts_with("Boundary segment 4"))
        .unwrap();
    let first_offset_index = report
        .lines
        .iter()
        .position(|line| line.contains("setback line"))
        .unwrap();
    assert!(last_boundary_index < closing_index);
    assert!(closing_index < first_offset_index);

    // The closing edge spans the missing meter of frontage.
    let closing_call = &host.polyline_calls[4][0];
    let dx = closing_call.coordinates[1].x - closing_call.coordinates[0].x;
    let dy = closing_call.coordinates[1].y - closing_call.coordinates[0].y;
    assert!((dx.hypot(dy) - 1.0).abs() < 1e-9);
}

#[test]
fn test_zero_length_segment_skipped_in_both_passes() {
    let records = vec![
        BoundaryRecord::new(SegmentType::Rear, 100.0, "0"),
        BoundaryRecord::new(SegmentType::Side, 1e-15, "0"),
    ];
    let path = build_traversal(&records, LinearUnit::Meters).unwrap();

    let mut host = RecordingCadHost::new();
    let report = draw_boundary_plan(&mut host, &path, &qdc_mp11());

    // Only the healthy rear edge and its setback are drawn.
    assert_eq!(host.calls_issued(), 3);
    assert!(report
        .lines
        .iter()
        .any(|line| line == "Skipping zero-length segment 2."));
    let offset_skips = report
        .lines
        .iter()
        .filter(|line| line.contains("for offsets"))
        .count();
    assert_eq!(offset_skips, 1);
}

#[test]
fn test_parse_failures_surface_in_report() {
    let records = vec![
        BoundaryRecord::new(SegmentType::Side, 10.0, "bad bearing"),
        BoundaryRecord::new(SegmentType::Rear, 10.0, "0"),
    ];
    let path = build_traversal(&records, LinearUnit::Meters).unwrap();
    let mut host = RecordingCadHost::new();
    let report = draw_boundary_plan(&mut host, &path, &qdc_mp11());
    assert!(report.lines[0].contains("Row 1"));
    assert!(report.lines[0].contains("bad bearing"));
    assert_eq!(host.calls_issued(), 2);
}
